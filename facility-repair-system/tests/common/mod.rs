#![allow(dead_code)]

use std::collections::HashSet;

use domain_repair::model::entity::{Building, Category, Floor, Technician};
use domain_repair::model::vo::{NewTicket, Role};
use domain_repair::service::CapabilityService as _;
use facility_repair_system::{telemetry, ServiceProvider, TelemetryConfig};
use uuid::Uuid;

/// A provider over a freshly seeded catalog: one building with one floor,
/// one category, and one requester / supervisor / technician each. The
/// technician starts unqualified.
pub struct TestEnv {
    pub provider: ServiceProvider,
    pub building: Uuid,
    pub floor: Uuid,
    pub category: Uuid,
    pub submitter: Uuid,
    pub supervisor: Uuid,
    pub technician: Uuid,
}

impl TestEnv {
    pub fn new() -> Self {
        let _ = telemetry::initialize_telemetry(&TelemetryConfig::default());

        let provider = ServiceProvider::new();
        let repo = provider.repo();

        let building = Uuid::new_v4();
        repo.put_building(Building { id: building, name: "Building A".into() });
        let floor = Uuid::new_v4();
        repo.put_floor(Floor { id: floor, building_id: building, name: "Floor 1".into() });
        let category = Uuid::new_v4();
        repo.put_category(Category { id: category, name: "HVAC".into(), description: None });

        let submitter = Uuid::new_v4();
        repo.set_roles(submitter, HashSet::from([Role::Requester]));
        let supervisor = Uuid::new_v4();
        repo.set_roles(supervisor, HashSet::from([Role::Supervisor]));
        let technician = Uuid::new_v4();
        repo.put_technician(Technician { id: technician, name: "Taylor".into(), phone: None });
        repo.set_roles(technician, HashSet::from([Role::Technician]));

        Self { provider, building, floor, category, submitter, supervisor, technician }
    }

    pub fn content(&self) -> NewTicket {
        NewTicket {
            building_id: self.building,
            floor_id: self.floor,
            category_id: self.category,
            description: "no airflow on floor 1".into(),
        }
    }

    /// Qualify the default technician for the default floor and category.
    pub async fn qualify_technician(&self) {
        self.provider
            .capability()
            .replace_area_capabilities(self.technician, vec![self.floor])
            .await
            .unwrap();
        self.provider
            .capability()
            .replace_category_capabilities(self.technician, vec![self.category])
            .await
            .unwrap();
    }

    /// Seed another qualified technician.
    pub async fn extra_technician(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.provider.repo().put_technician(Technician {
            id,
            name: name.into(),
            phone: None,
        });
        self.provider.repo().set_roles(id, HashSet::from([Role::Technician]));
        self.provider
            .capability()
            .replace_area_capabilities(id, vec![self.floor])
            .await
            .unwrap();
        self.provider
            .capability()
            .replace_category_capabilities(id, vec![self.category])
            .await
            .unwrap();
        id
    }
}

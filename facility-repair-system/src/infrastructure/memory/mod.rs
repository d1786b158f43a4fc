mod capability;
mod rating;
mod reference;
mod ticket;

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::{DashMap, DashSet};
use domain_repair::model::entity::{Building, Category, Floor, Rating, Technician, Ticket};
use domain_repair::model::vo::Role;
use uuid::Uuid;

/// In-memory arena of records backing every repository trait. Tables are
/// concurrent maps keyed by id; a ticket row carries the optimistic-lock
/// version, bumped on every committed update.
#[derive(Default)]
pub(crate) struct MemStore {
    pub(crate) tickets: DashMap<Uuid, Ticket>,
    pub(crate) buildings: DashMap<Uuid, Building>,
    pub(crate) floors: DashMap<Uuid, Floor>,
    pub(crate) categories: DashMap<Uuid, Category>,
    pub(crate) technicians: DashMap<Uuid, Technician>,
    /// (technician, floor) pairs.
    pub(crate) area_capabilities: DashSet<(Uuid, Uuid)>,
    /// (technician, category) pairs.
    pub(crate) category_capabilities: DashSet<(Uuid, Uuid)>,
    pub(crate) ratings: DashMap<Uuid, Rating>,
    /// Uniqueness guard: ticket id to its single rating id.
    pub(crate) rating_by_ticket: DashMap<Uuid, Uuid>,
    pub(crate) roles: DashMap<Uuid, HashSet<Role>>,
}

/// Handle implementing every repository trait against one shared store.
/// Clones share the same tables.
#[derive(Clone, Default)]
pub struct MemRepo {
    pub(crate) store: Arc<MemStore>,
}

/// Catalog and identity administration sits outside the core's contracts;
/// these seams exist for wiring the surrounding system and for tests.
impl MemRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_building(&self, building: Building) {
        self.store.buildings.insert(building.id, building);
    }

    pub fn put_floor(&self, floor: Floor) {
        self.store.floors.insert(floor.id, floor);
    }

    /// Remove a floor together with every capability pair naming it.
    pub fn remove_floor(&self, floor_id: Uuid) {
        self.store.floors.remove(&floor_id);
        self.store.area_capabilities.retain(|(_, floor)| *floor != floor_id);
    }

    pub fn put_category(&self, category: Category) {
        self.store.categories.insert(category.id, category);
    }

    /// Remove a category together with every capability pair naming it.
    pub fn remove_category(&self, category_id: Uuid) {
        self.store.categories.remove(&category_id);
        self.store.category_capabilities.retain(|(_, category)| *category != category_id);
    }

    pub fn put_technician(&self, technician: Technician) {
        self.store.technicians.insert(technician.id, technician);
    }

    pub fn set_roles(&self, user_id: Uuid, roles: HashSet<Role>) {
        self.store.roles.insert(user_id, roles);
    }
}

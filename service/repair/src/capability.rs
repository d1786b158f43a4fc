use std::sync::Arc;

use async_trait::async_trait;
use domain_repair::{
    exception::{RepairException, RepairResult},
    model::entity::{Category, Floor, Technician},
    repository::{CapabilityRepo, ReadOnlyRepository},
    service::CapabilityService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct CapabilityServiceImpl {
    capability_repo: Arc<dyn CapabilityRepo>,
    technician_repo: Arc<dyn ReadOnlyRepository<Technician>>,
    floor_repo: Arc<dyn ReadOnlyRepository<Floor>>,
    category_repo: Arc<dyn ReadOnlyRepository<Category>>,
}

#[async_trait]
impl CapabilityService for CapabilityServiceImpl {
    async fn replace_area_capabilities(
        &self,
        technician_id: Uuid,
        floor_ids: Vec<Uuid>,
    ) -> RepairResult<()> {
        self.known_technician(technician_id).await?;
        for floor_id in &floor_ids {
            self.floor_repo
                .get_by_id(*floor_id)
                .await?
                .ok_or(RepairException::FloorNotFound { id: *floor_id })?;
        }
        self.capability_repo.replace_areas(technician_id, &floor_ids).await?;
        tracing::info!(
            technician = %technician_id,
            floors = floor_ids.len(),
            "area capabilities replaced"
        );
        Ok(())
    }

    async fn revoke_area_capability(
        &self,
        technician_id: Uuid,
        floor_id: Uuid,
    ) -> RepairResult<()> {
        self.capability_repo.revoke_area(technician_id, floor_id).await?;
        Ok(())
    }

    async fn area_capabilities(&self, technician_id: Uuid) -> RepairResult<Vec<Floor>> {
        self.known_technician(technician_id).await?;
        let ids = self.capability_repo.areas_of(technician_id).await?;
        let mut floors = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(floor) = self.floor_repo.get_by_id(id).await? {
                floors.push(floor);
            }
        }
        Ok(floors)
    }

    async fn technicians_for_floor(&self, floor_id: Uuid) -> RepairResult<Vec<Technician>> {
        self.floor_repo
            .get_by_id(floor_id)
            .await?
            .ok_or(RepairException::FloorNotFound { id: floor_id })?;
        let ids = self.capability_repo.technicians_for_floor(floor_id).await?;
        self.resolve_technicians(ids).await
    }

    async fn replace_category_capabilities(
        &self,
        technician_id: Uuid,
        category_ids: Vec<Uuid>,
    ) -> RepairResult<()> {
        self.known_technician(technician_id).await?;
        for category_id in &category_ids {
            self.category_repo
                .get_by_id(*category_id)
                .await?
                .ok_or(RepairException::CategoryNotFound { id: *category_id })?;
        }
        self.capability_repo.replace_categories(technician_id, &category_ids).await?;
        tracing::info!(
            technician = %technician_id,
            categories = category_ids.len(),
            "category capabilities replaced"
        );
        Ok(())
    }

    async fn revoke_category_capability(
        &self,
        technician_id: Uuid,
        category_id: Uuid,
    ) -> RepairResult<()> {
        self.capability_repo.revoke_category(technician_id, category_id).await?;
        Ok(())
    }

    async fn category_capabilities(&self, technician_id: Uuid) -> RepairResult<Vec<Category>> {
        self.known_technician(technician_id).await?;
        let ids = self.capability_repo.categories_of(technician_id).await?;
        let mut categories = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(category) = self.category_repo.get_by_id(id).await? {
                categories.push(category);
            }
        }
        Ok(categories)
    }

    async fn technicians_for_category(&self, category_id: Uuid) -> RepairResult<Vec<Technician>> {
        self.category_repo
            .get_by_id(category_id)
            .await?
            .ok_or(RepairException::CategoryNotFound { id: category_id })?;
        let ids = self.capability_repo.technicians_for_category(category_id).await?;
        self.resolve_technicians(ids).await
    }
}

impl CapabilityServiceImpl {
    async fn known_technician(&self, technician_id: Uuid) -> RepairResult<()> {
        self.technician_repo
            .get_by_id(technician_id)
            .await?
            .ok_or(RepairException::TechnicianNotFound { id: technician_id })?;
        Ok(())
    }

    async fn resolve_technicians(&self, ids: Vec<Uuid>) -> RepairResult<Vec<Technician>> {
        let mut technicians = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(technician) = self.technician_repo.get_by_id(id).await? {
                technicians.push(technician);
            }
        }
        Ok(technicians)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::RepairResult;
use crate::model::entity::{Category, Floor, Technician};

/// Administration of the capability registry.
#[async_trait]
pub trait CapabilityService: Send + Sync {
    /// Replace a technician's floor set wholesale.
    async fn replace_area_capabilities(
        &self,
        technician_id: Uuid,
        floor_ids: Vec<Uuid>,
    ) -> RepairResult<()>;

    async fn revoke_area_capability(&self, technician_id: Uuid, floor_id: Uuid)
        -> RepairResult<()>;

    async fn area_capabilities(&self, technician_id: Uuid) -> RepairResult<Vec<Floor>>;

    async fn technicians_for_floor(&self, floor_id: Uuid) -> RepairResult<Vec<Technician>>;

    /// Replace a technician's category set wholesale.
    async fn replace_category_capabilities(
        &self,
        technician_id: Uuid,
        category_ids: Vec<Uuid>,
    ) -> RepairResult<()>;

    async fn revoke_category_capability(
        &self,
        technician_id: Uuid,
        category_id: Uuid,
    ) -> RepairResult<()>;

    async fn category_capabilities(&self, technician_id: Uuid) -> RepairResult<Vec<Category>>;

    async fn technicians_for_category(&self, category_id: Uuid) -> RepairResult<Vec<Technician>>;
}

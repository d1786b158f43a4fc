use async_trait::async_trait;
use uuid::Uuid;

/// The capability registry: which technician covers which floors and which
/// problem categories. Two many-to-many relations with per-pair uniqueness;
/// grants are idempotent.
#[async_trait]
pub trait CapabilityRepo: Send + Sync {
    async fn grant_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<()>;

    async fn revoke_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<()>;

    /// Replace a technician's whole floor set.
    async fn replace_areas(&self, technician_id: Uuid, floor_ids: &[Uuid]) -> anyhow::Result<()>;

    async fn areas_of(&self, technician_id: Uuid) -> anyhow::Result<Vec<Uuid>>;

    async fn technicians_for_floor(&self, floor_id: Uuid) -> anyhow::Result<Vec<Uuid>>;

    async fn has_area(&self, technician_id: Uuid, floor_id: Uuid) -> anyhow::Result<bool>;

    async fn grant_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<()>;

    async fn revoke_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<()>;

    /// Replace a technician's whole category set.
    async fn replace_categories(
        &self,
        technician_id: Uuid,
        category_ids: &[Uuid],
    ) -> anyhow::Result<()>;

    async fn categories_of(&self, technician_id: Uuid) -> anyhow::Result<Vec<Uuid>>;

    async fn technicians_for_category(&self, category_id: Uuid) -> anyhow::Result<Vec<Uuid>>;

    async fn has_category(&self, technician_id: Uuid, category_id: Uuid) -> anyhow::Result<bool>;

    /// Technicians holding BOTH the floor capability and the category
    /// capability: the eligible set auto-assignment draws from.
    async fn eligible_technicians(
        &self,
        floor_id: Uuid,
        category_id: Uuid,
    ) -> anyhow::Result<Vec<Uuid>>;

    /// Cascade removal of every pair mentioning the technician.
    async fn remove_technician(&self, technician_id: Uuid) -> anyhow::Result<()>;
}

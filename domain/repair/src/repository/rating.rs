use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Rating;

#[async_trait]
pub trait RatingRepo: Send + Sync {
    /// Insert the one-and-only rating for a ticket. A second insert for the
    /// same ticket surfaces `RepairException::DuplicateRating`.
    async fn insert(&self, rating: &Rating) -> anyhow::Result<Uuid>;

    async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Option<Rating>>;

    /// All ratings earned by a technician, newest first.
    async fn get_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Rating>>;
}

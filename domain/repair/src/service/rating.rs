use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::RepairResult;
use crate::model::entity::Rating;
use crate::model::vo::RatingStats;

/// Read side over ratings. Rating creation happens inside the close
/// transition, never here.
#[async_trait]
pub trait RatingService: Send + Sync {
    async fn get_by_ticket(&self, ticket_id: Uuid) -> RepairResult<Rating>;

    async fn technician_ratings(&self, technician_id: Uuid) -> RepairResult<Vec<Rating>>;

    /// Count, mean score and 1-5 histogram over a technician's ratings.
    async fn technician_stats(&self, technician_id: Uuid) -> RepairResult<RatingStats>;
}

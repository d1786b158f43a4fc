use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::RepairResult;
use crate::model::entity::ticket::TicketStatus;
use crate::model::vo::{TicketStats, TicketView};

/// Read side over tickets: snapshots with derived predicates, listings and
/// per-status counts. Never mutates.
#[async_trait]
pub trait TicketQueryService: Send + Sync {
    async fn get(&self, ticket_id: Uuid) -> RepairResult<TicketView>;

    async fn tickets_of_submitter(
        &self,
        submitter_id: Uuid,
        status: Option<TicketStatus>,
    ) -> RepairResult<Vec<TicketView>>;

    async fn tickets_of_technician(
        &self,
        technician_id: Uuid,
        status: Option<TicketStatus>,
    ) -> RepairResult<Vec<TicketView>>;

    /// Submitted tickets waiting for manual assignment.
    async fn unassigned_tickets(&self) -> RepairResult<Vec<TicketView>>;

    async fn status_stats(&self) -> RepairResult<TicketStats>;
}

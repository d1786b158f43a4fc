use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::ticket::{DbTicket, TicketStatus};
use crate::model::entity::Ticket;
use crate::repository::DBRepository;

#[async_trait]
pub trait TicketRepo: DBRepository<Ticket> + Send + Sync {
    /// Commit a change set iff the stored row is still at
    /// `changes.expect_version`; bumps the version and returns the updated
    /// snapshot. A concurrent writer having moved the row past the expected
    /// version surfaces `RepairException::StaleTicket`.
    async fn update_with_lock(&self, changes: DbTicket) -> anyhow::Result<Ticket>;

    /// Tickets created by a user, newest first, optionally status-filtered.
    async fn get_by_submitter(
        &self,
        submitter_id: Uuid,
        status: Option<TicketStatus>,
    ) -> anyhow::Result<Vec<Ticket>>;

    /// Tickets assigned to a technician, newest first, optionally
    /// status-filtered.
    async fn get_by_technician(
        &self,
        technician_id: Uuid,
        status: Option<TicketStatus>,
    ) -> anyhow::Result<Vec<Ticket>>;

    /// Submitted tickets nobody has been assigned to yet.
    async fn get_unassigned(&self) -> anyhow::Result<Vec<Ticket>>;

    async fn count_by_status(&self, status: TicketStatus) -> anyhow::Result<u64>;
}

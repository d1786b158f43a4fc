use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::RepairResult;
use crate::model::entity::Ticket;
use crate::model::vo::NewTicket;

/// The lifecycle controller. Every status change passes through here; a
/// request that the transition table does not admit fails, it never no-ops.
#[async_trait]
pub trait TicketLifecycleService: Send + Sync {
    /// Create a ticket in `Draft` for later editing.
    async fn save_draft(&self, actor: Uuid, content: NewTicket) -> RepairResult<Ticket>;

    /// Rewrite a draft's content. Submitter only.
    async fn update_draft(
        &self,
        actor: Uuid,
        ticket_id: Uuid,
        content: NewTicket,
    ) -> RepairResult<Ticket>;

    /// Physically delete a draft. Submitter only; the single hard delete the
    /// system permits.
    async fn delete_draft(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<()>;

    /// Create a ticket directly in `Submitted`, then attempt auto-assignment.
    /// An assignment failure leaves the ticket `Submitted` for manual
    /// assignment and is not an error of the submission itself.
    async fn submit(&self, actor: Uuid, content: NewTicket) -> RepairResult<Ticket>;

    /// Submit an existing draft, then attempt auto-assignment as in
    /// [`submit`](Self::submit).
    async fn submit_draft(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<Ticket>;

    /// The assigned technician starts working. `Pending → InProgress`, stamps
    /// the accepted time on first entry.
    async fn accept(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<Ticket>;

    /// The assigned technician finishes, recording resolution notes.
    /// `InProgress → Completed`, stamps the finished time on first entry.
    async fn complete(
        &self,
        actor: Uuid,
        ticket_id: Uuid,
        resolution: String,
    ) -> RepairResult<Ticket>;

    /// The submitter confirms the repair. `Completed → Closed`, atomically
    /// recording the one-and-only rating for the ticket.
    async fn close_with_rating(
        &self,
        actor: Uuid,
        ticket_id: Uuid,
        score: i32,
        comment: Option<String>,
    ) -> RepairResult<Ticket>;

    /// Self-service withdrawal by the submitter, only while no work has
    /// started (`Draft` or `Pending`).
    async fn cancel(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<Ticket>;

    /// Supervisor withdrawal of any not-yet-completed ticket, bypassing the
    /// self-service restriction.
    async fn force_cancel(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<Ticket>;
}

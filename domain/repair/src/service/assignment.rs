use async_trait::async_trait;
use uuid::Uuid;

use crate::exception::RepairResult;
use crate::model::entity::{Technician, Ticket};

/// Binds qualified technicians to tickets.
#[async_trait]
pub trait AssignmentService: Send + Sync {
    /// Manual path: a supervisor nominates a technician. The nominee must
    /// hold both the ticket's floor capability and its category capability.
    async fn assign(
        &self,
        actor: Uuid,
        ticket_id: Uuid,
        technician_id: Uuid,
    ) -> RepairResult<Ticket>;

    /// Automatic path: pick uniformly at random among the technicians holding
    /// both capabilities. `actor` is `None` when the system invokes it right
    /// after submission. An empty eligible set fails and leaves the ticket
    /// untouched.
    async fn auto_assign(&self, actor: Option<Uuid>, ticket_id: Uuid) -> RepairResult<Ticket>;

    /// Technicians qualified for a (floor, category) pair, for the manual
    /// assignment picker.
    async fn eligible_technicians(
        &self,
        floor_id: Uuid,
        category_id: Uuid,
    ) -> RepairResult<Vec<Technician>>;
}

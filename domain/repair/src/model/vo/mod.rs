pub mod transition;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::Ticket;
use crate::model::entity::ticket::TicketStatus;

/// Roles the external identity provider can resolve for a caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Role {
    /// Regular user reporting problems.
    Requester,
    /// Repair technician.
    Technician,
    /// Supervisor: assigns technicians and may force-cancel tickets.
    Supervisor,
}

/// Content of a new ticket, as supplied by the submitter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub building_id: Uuid,
    pub floor_id: Uuid,
    pub category_id: Uuid,
    pub description: String,
}

/// Ticket snapshot plus the derived predicates consumers render as buttons.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub can_assign: bool,
    pub can_accept: bool,
    pub can_complete: bool,
    pub can_cancel: bool,
}

impl From<Ticket> for TicketView {
    fn from(ticket: Ticket) -> Self {
        Self {
            can_assign: ticket.status.can_assign(),
            can_accept: ticket.status.can_accept(),
            can_complete: ticket.status.can_complete(),
            can_cancel: ticket.status.can_cancel(),
            ticket,
        }
    }
}

/// Per-status ticket counts for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketStats {
    pub total: u64,
    pub draft: u64,
    pub submitted: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub closed: u64,
    pub cancelled: u64,
}

impl TicketStats {
    pub fn count_of(&self, status: TicketStatus) -> u64 {
        match status {
            TicketStatus::Draft => self.draft,
            TicketStatus::Submitted => self.submitted,
            TicketStatus::Pending => self.pending,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Completed => self.completed,
            TicketStatus::Closed => self.closed,
            TicketStatus::Cancelled => self.cancelled,
        }
    }
}

/// Aggregates over one technician's ratings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingStats {
    pub total: u64,
    /// Mean score rounded to two decimals; 0 when the technician is unrated.
    pub average: f64,
    /// Counts per score, `histogram[0]` holding score 1.
    pub histogram: [u64; 5],
}

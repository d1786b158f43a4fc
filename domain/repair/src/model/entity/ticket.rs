use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::transition::{self, TicketEvent};
use crate::repository::DbField;

/// # Repair ticket
/// A single repair request and its lifecycle state. All status changes go
/// through the lifecycle service; nothing mutates a ticket in place.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// id
    pub id: Uuid,
    /// User who reported the problem.
    pub submitter_id: Uuid,
    /// Building where the problem occurred.
    pub building_id: Uuid,
    /// Floor within that building.
    pub floor_id: Uuid,
    /// Problem classification.
    pub category_id: Uuid,
    /// Technician bound to the ticket, once assigned.
    pub technician_id: Option<Uuid>,
    /// Supervisor who assigned the technician or force-cancelled the ticket.
    pub supervisor_id: Option<Uuid>,
    /// Free-text problem description.
    pub description: String,
    /// Resolution notes, written by the technician on completion.
    pub resolution: Option<String>,
    /// Lifecycle status.
    pub status: TicketStatus,
    /// Creation time.
    pub created_time: DateTime<Utc>,
    /// Stamped at most once, on the first transition into `InProgress`.
    pub accepted_time: Option<DateTime<Utc>>,
    /// Stamped at most once, on the first transition into `Completed` or
    /// `Closed`.
    pub finished_time: Option<DateTime<Utc>>,
    /// Optimistic-lock counter, maintained by the store.
    pub version: u64,
}

/// # Ticket status
/// The discriminant values are the stable codes consumers see; `Cancelled`
/// keeps its historical negative code.
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, Hash,
    PartialEq, Eq,
)]
pub enum TicketStatus {
    /// # Cancelled
    /// Withdrawn by the submitter or force-cancelled by a supervisor. Terminal.
    Cancelled = -1,
    /// # Draft
    /// Being edited by the submitter, not yet submitted.
    #[default]
    Draft = 0,
    /// # Submitted
    /// Submitted, waiting for a technician to be assigned.
    Submitted = 1,
    /// # Pending
    /// A technician is assigned and has not accepted yet.
    Pending = 2,
    /// # In progress
    /// The assigned technician accepted and is working on the repair.
    InProgress = 3,
    /// # Completed
    /// Repair finished, waiting for the submitter to confirm and rate.
    Completed = 4,
    /// # Closed
    /// Confirmed and rated by the submitter. Terminal.
    Closed = 5,
}

impl TicketStatus {
    /// A technician can be assigned or reassigned.
    pub fn can_assign(&self) -> bool {
        transition::admissible(*self, TicketEvent::Assign).is_some()
    }

    /// The assigned technician can accept the ticket.
    pub fn can_accept(&self) -> bool {
        transition::admissible(*self, TicketEvent::Accept).is_some()
    }

    /// The assigned technician can complete the ticket.
    pub fn can_complete(&self) -> bool {
        transition::admissible(*self, TicketEvent::Complete).is_some()
    }

    /// The submitter can withdraw the ticket themselves (no work started yet).
    pub fn can_cancel(&self) -> bool {
        transition::admissible(*self, TicketEvent::Cancel).is_some()
    }

    /// No further transitions are permitted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }
}

/// Column-level change set for [`Ticket`], committed through
/// `TicketRepo::update_with_lock`. Only `Set` columns are written.
#[derive(Debug, Clone, Default)]
pub struct DbTicket {
    pub id: Uuid,
    /// Version the caller read; the commit is refused if the stored row has
    /// moved past it.
    pub expect_version: u64,
    pub status: DbField<TicketStatus>,
    pub building_id: DbField<Uuid>,
    pub floor_id: DbField<Uuid>,
    pub category_id: DbField<Uuid>,
    pub technician_id: DbField<Option<Uuid>>,
    pub supervisor_id: DbField<Option<Uuid>>,
    pub description: DbField<String>,
    pub resolution: DbField<Option<String>>,
    pub accepted_time: DbField<Option<DateTime<Utc>>>,
    pub finished_time: DbField<Option<DateTime<Utc>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_are_stable() {
        use num_traits::ToPrimitive;

        assert_eq!(TicketStatus::Cancelled.to_i32(), Some(-1));
        assert_eq!(TicketStatus::Draft.to_i32(), Some(0));
        assert_eq!(TicketStatus::Submitted.to_i32(), Some(1));
        assert_eq!(TicketStatus::Pending.to_i32(), Some(2));
        assert_eq!(TicketStatus::InProgress.to_i32(), Some(3));
        assert_eq!(TicketStatus::Completed.to_i32(), Some(4));
        assert_eq!(TicketStatus::Closed.to_i32(), Some(5));
    }

    #[test]
    fn predicates_follow_the_table() {
        assert!(TicketStatus::Submitted.can_assign());
        assert!(TicketStatus::Pending.can_assign());
        assert!(!TicketStatus::InProgress.can_assign());

        assert!(TicketStatus::Pending.can_accept());
        assert!(!TicketStatus::Submitted.can_accept());

        assert!(TicketStatus::InProgress.can_complete());
        assert!(!TicketStatus::Completed.can_complete());

        assert!(TicketStatus::Draft.can_cancel());
        assert!(TicketStatus::Pending.can_cancel());
        assert!(!TicketStatus::Submitted.can_cancel());
        assert!(!TicketStatus::InProgress.can_cancel());

        assert!(TicketStatus::Closed.is_terminal());
        assert!(TicketStatus::Cancelled.is_terminal());
        assert!(!TicketStatus::Completed.is_terminal());
    }
}

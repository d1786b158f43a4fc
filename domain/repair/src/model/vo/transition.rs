//! The lifecycle state machine as an explicit transition table. Every status
//! change is validated against this table; anything not listed is rejected.

use serde::{Deserialize, Serialize};

use crate::model::entity::ticket::TicketStatus;

/// A requested lifecycle operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum TicketEvent {
    /// Submitter turns a draft into a submitted ticket.
    Submit,
    /// A technician is bound to the ticket (manual or automatic path).
    Assign,
    /// The assigned technician starts working.
    Accept,
    /// The assigned technician finishes the repair.
    Complete,
    /// The submitter confirms the repair and rates it.
    Close,
    /// Self-service withdrawal by the submitter.
    Cancel,
    /// Supervisor withdrawal, allowed even after work started.
    ForceCancel,
}

impl TicketEvent {
    /// Status the event drives a ticket into, independent of the source.
    pub fn target(self) -> TicketStatus {
        match self {
            Self::Submit => TicketStatus::Submitted,
            Self::Assign => TicketStatus::Pending,
            Self::Accept => TicketStatus::InProgress,
            Self::Complete => TicketStatus::Completed,
            Self::Close => TicketStatus::Closed,
            Self::Cancel | Self::ForceCancel => TicketStatus::Cancelled,
        }
    }
}

/// Who may fire an event, relative to the ticket it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRule {
    /// Caller must be the ticket's submitter.
    Submitter,
    /// Caller must be the technician currently assigned to the ticket.
    AssignedTechnician,
    /// Caller must hold the supervisor role.
    Supervisor,
    /// A supervisor, or the system itself right after submission.
    SupervisorOrSystem,
}

/// One row of the transition table.
#[derive(Debug)]
pub struct TransitionRule {
    pub event: TicketEvent,
    /// Statuses the event may fire from.
    pub sources: &'static [TicketStatus],
    pub target: TicketStatus,
    pub actor: ActorRule,
}

use TicketStatus::{Cancelled, Closed, Completed, Draft, InProgress, Pending, Submitted};

/// The complete state machine.
pub const TRANSITION_TABLE: &[TransitionRule] = &[
    TransitionRule {
        event: TicketEvent::Submit,
        sources: &[Draft],
        target: Submitted,
        actor: ActorRule::Submitter,
    },
    TransitionRule {
        event: TicketEvent::Assign,
        sources: &[Submitted, Pending],
        target: Pending,
        actor: ActorRule::SupervisorOrSystem,
    },
    TransitionRule {
        event: TicketEvent::Accept,
        sources: &[Pending],
        target: InProgress,
        actor: ActorRule::AssignedTechnician,
    },
    TransitionRule {
        event: TicketEvent::Complete,
        sources: &[InProgress],
        target: Completed,
        actor: ActorRule::AssignedTechnician,
    },
    TransitionRule {
        event: TicketEvent::Close,
        sources: &[Completed],
        target: Closed,
        actor: ActorRule::Submitter,
    },
    TransitionRule {
        event: TicketEvent::Cancel,
        sources: &[Draft, Pending],
        target: Cancelled,
        actor: ActorRule::Submitter,
    },
    TransitionRule {
        event: TicketEvent::ForceCancel,
        sources: &[Draft, Submitted, Pending, InProgress],
        target: Cancelled,
        actor: ActorRule::Supervisor,
    },
];

/// The rule admitting `event` from `from`, if that transition is legal.
pub fn admissible(from: TicketStatus, event: TicketEvent) -> Option<&'static TransitionRule> {
    TRANSITION_TABLE.iter().find(|rule| rule.event == event && rule.sources.contains(&from))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [TicketStatus; 7] =
        [Cancelled, Draft, Submitted, Pending, InProgress, Completed, Closed];

    const ALL_EVENTS: [TicketEvent; 7] = [
        TicketEvent::Submit,
        TicketEvent::Assign,
        TicketEvent::Accept,
        TicketEvent::Complete,
        TicketEvent::Close,
        TicketEvent::Cancel,
        TicketEvent::ForceCancel,
    ];

    /// The pairs the machine admits, and nothing else.
    fn expected(from: TicketStatus, event: TicketEvent) -> bool {
        matches!(
            (from, event),
            (Draft, TicketEvent::Submit)
                | (Submitted, TicketEvent::Assign)
                | (Pending, TicketEvent::Assign)
                | (Pending, TicketEvent::Accept)
                | (InProgress, TicketEvent::Complete)
                | (Completed, TicketEvent::Close)
                | (Draft, TicketEvent::Cancel)
                | (Pending, TicketEvent::Cancel)
                | (Draft, TicketEvent::ForceCancel)
                | (Submitted, TicketEvent::ForceCancel)
                | (Pending, TicketEvent::ForceCancel)
                | (InProgress, TicketEvent::ForceCancel)
        )
    }

    #[test]
    fn table_admits_exactly_the_expected_pairs() {
        for from in ALL_STATUSES {
            for event in ALL_EVENTS {
                assert_eq!(
                    admissible(from, event).is_some(),
                    expected(from, event),
                    "({from:?}, {event:?})"
                );
            }
        }
    }

    #[test]
    fn terminal_statuses_admit_nothing() {
        for from in [Closed, Cancelled] {
            for event in ALL_EVENTS {
                assert!(admissible(from, event).is_none(), "({from:?}, {event:?})");
            }
        }
    }

    #[test]
    fn table_targets_agree_with_event_targets() {
        for rule in TRANSITION_TABLE {
            assert_eq!(rule.target, rule.event.target());
        }
    }

    #[test]
    fn completed_cannot_be_force_cancelled() {
        assert!(admissible(Completed, TicketEvent::ForceCancel).is_none());
    }
}

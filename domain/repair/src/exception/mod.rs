use thiserror::Error;
use uuid::Uuid;

use crate::model::entity::ticket::TicketStatus;

pub type RepairResult<T> = Result<T, RepairException>;

#[derive(Error, Debug)]
pub enum RepairException {
    #[error("There is no ticket with id: {id}.")]
    TicketNotFound { id: Uuid },

    #[error("There is no building with id: {id}.")]
    BuildingNotFound { id: Uuid },

    #[error("There is no floor with id: {id}.")]
    FloorNotFound { id: Uuid },

    #[error("There is no category with id: {id}.")]
    CategoryNotFound { id: Uuid },

    #[error("There is no technician with id: {id}.")]
    TechnicianNotFound { id: Uuid },

    #[error("There is no user with id: {id}.")]
    UserNotFound { id: Uuid },

    #[error("Ticket {ticket_id} has no rating.")]
    RatingNotFound { ticket_id: Uuid },

    #[error("Ticket {ticket_id} cannot move from {from:?} to {requested:?}.")]
    InvalidTransition {
        ticket_id: Uuid,
        from: TicketStatus,
        requested: TicketStatus,
    },

    #[error("Ticket {ticket_id} is not a draft, its status is {status:?}.")]
    TicketNotDraft { ticket_id: Uuid, status: TicketStatus },

    #[error("Floor {floor_id} is not part of building {building_id}.")]
    FloorOutsideBuilding { floor_id: Uuid, building_id: Uuid },

    #[error("The problem description must not be empty.")]
    EmptyDescription,

    #[error("Rating score must be within 1 to 5, got {score}.")]
    ScoreOutOfRange { score: i32 },

    #[error("Rating comment must be at most {max} characters, got {len}.")]
    CommentTooLong { len: usize, max: usize },

    #[error("Only the submitter of ticket {ticket_id} may perform this operation.")]
    NotTicketSubmitter { ticket_id: Uuid, user_id: Uuid },

    #[error("Ticket {ticket_id} is not assigned to technician {technician_id}.")]
    NotAssignedTechnician { ticket_id: Uuid, technician_id: Uuid },

    #[error("User {user_id} does not hold the supervisor role.")]
    SupervisorRequired { user_id: Uuid },

    #[error("Technician {technician_id} does not cover floor {floor_id}.")]
    MissingAreaCapability { technician_id: Uuid, floor_id: Uuid },

    #[error("Technician {technician_id} is not qualified for category {category_id}.")]
    MissingCategoryCapability { technician_id: Uuid, category_id: Uuid },

    #[error(
        "No technician is qualified for both the area and the category of ticket {ticket_id}."
    )]
    NoEligibleTechnician { ticket_id: Uuid },

    #[error("Ticket {ticket_id} already has a rating.")]
    DuplicateRating { ticket_id: Uuid },

    #[error("Ticket {ticket_id} was changed concurrently, expected version {expect}.")]
    StaleTicket { ticket_id: Uuid, expect: u64 },

    #[error("Repair internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl RepairException {
    /// HTTP-equivalent class of the failure, for transport adapters.
    pub fn code(&self) -> u16 {
        use RepairException::*;

        match self {
            TicketNotFound { .. }
            | BuildingNotFound { .. }
            | FloorNotFound { .. }
            | CategoryNotFound { .. }
            | TechnicianNotFound { .. }
            | UserNotFound { .. }
            | RatingNotFound { .. } => 404,
            InvalidTransition { .. }
            | TicketNotDraft { .. }
            | FloorOutsideBuilding { .. }
            | EmptyDescription
            | ScoreOutOfRange { .. }
            | CommentTooLong { .. }
            | MissingAreaCapability { .. }
            | MissingCategoryCapability { .. }
            | NoEligibleTechnician { .. } => 400,
            NotTicketSubmitter { .. } | NotAssignedTechnician { .. } | SupervisorRequired { .. } => {
                403
            }
            DuplicateRating { .. } | StaleTicket { .. } => 409,
            InternalError { .. } => 500,
        }
    }
}

/// Recover a typed exception the repository layer surfaced through `anyhow`;
/// anything else is an internal error.
impl From<anyhow::Error> for RepairException {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<RepairException>() {
            Ok(e) => e,
            Err(source) => RepairException::InternalError { source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_exceptions_survive_the_anyhow_boundary() {
        let id = Uuid::new_v4();
        let e = anyhow::Error::new(RepairException::TicketNotFound { id });
        match RepairException::from(e) {
            RepairException::TicketNotFound { id: got } => assert_eq!(got, id),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn failure_classes() {
        let id = Uuid::new_v4();
        assert_eq!(RepairException::TicketNotFound { id }.code(), 404);
        assert_eq!(RepairException::SupervisorRequired { user_id: id }.code(), 403);
        assert_eq!(RepairException::DuplicateRating { ticket_id: id }.code(), 409);
        assert_eq!(RepairException::NoEligibleTechnician { ticket_id: id }.code(), 400);
    }
}

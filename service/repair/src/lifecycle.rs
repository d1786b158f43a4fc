use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_repair::{
    exception::{RepairException, RepairResult},
    model::{
        entity::{
            ticket::{DbTicket, TicketStatus},
            Building, Category, Floor, Rating, Ticket,
        },
        vo::{
            transition::{self, ActorRule, TicketEvent, TransitionRule},
            NewTicket, Role,
        },
    },
    repository::{DbField, RatingRepo, ReadOnlyRepository, TicketRepo},
    service::{AssignmentService, IdentityService, TicketLifecycleService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

const MAX_COMMENT_CHARS: usize = 500;

#[derive(TypedBuilder)]
pub struct TicketLifecycleServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    rating_repo: Arc<dyn RatingRepo>,
    building_repo: Arc<dyn ReadOnlyRepository<Building>>,
    floor_repo: Arc<dyn ReadOnlyRepository<Floor>>,
    category_repo: Arc<dyn ReadOnlyRepository<Category>>,
    identity: Arc<dyn IdentityService>,
    assignment: Arc<dyn AssignmentService>,
}

#[async_trait]
impl TicketLifecycleService for TicketLifecycleServiceImpl {
    async fn save_draft(&self, actor: Uuid, content: NewTicket) -> RepairResult<Ticket> {
        self.known_user(actor).await?;
        self.validate_content(&content).await?;

        let ticket = Self::new_ticket(actor, content, TicketStatus::Draft);
        self.ticket_repo.insert(&ticket).await?;

        tracing::info!(ticket_id = %ticket.id, submitter = %actor, "draft saved");
        Ok(ticket)
    }

    async fn update_draft(
        &self,
        actor: Uuid,
        ticket_id: Uuid,
        content: NewTicket,
    ) -> RepairResult<Ticket> {
        let ticket = self.get_ticket(ticket_id).await?;
        Self::check_submitter(&ticket, actor)?;
        Self::check_draft(&ticket)?;
        self.validate_content(&content).await?;

        let updated = self
            .ticket_repo
            .update_with_lock(DbTicket {
                id: ticket.id,
                expect_version: ticket.version,
                building_id: DbField::Set(content.building_id),
                floor_id: DbField::Set(content.floor_id),
                category_id: DbField::Set(content.category_id),
                description: DbField::Set(content.description),
                ..Default::default()
            })
            .await?;

        tracing::info!(ticket_id = %ticket_id, "draft updated");
        Ok(updated)
    }

    async fn delete_draft(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<()> {
        let ticket = self.get_ticket(ticket_id).await?;
        Self::check_submitter(&ticket, actor)?;
        Self::check_draft(&ticket)?;

        self.ticket_repo.delete_by_id(ticket_id).await?;

        tracing::info!(ticket_id = %ticket_id, "draft deleted");
        Ok(())
    }

    async fn submit(&self, actor: Uuid, content: NewTicket) -> RepairResult<Ticket> {
        self.known_user(actor).await?;
        self.validate_content(&content).await?;

        let ticket = Self::new_ticket(actor, content, TicketStatus::Submitted);
        self.ticket_repo.insert(&ticket).await?;
        tracing::info!(ticket_id = %ticket.id, submitter = %actor, "ticket submitted");

        Ok(self.try_auto_assign(ticket).await)
    }

    async fn submit_draft(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<Ticket> {
        let ticket = self.get_ticket(ticket_id).await?;
        let rule = Self::check_transition(&ticket, TicketEvent::Submit)?;
        self.check_actor(&ticket, rule, actor).await?;

        let updated = self
            .ticket_repo
            .update_with_lock(DbTicket {
                id: ticket.id,
                expect_version: ticket.version,
                status: DbField::Set(rule.target),
                ..Default::default()
            })
            .await?;
        tracing::info!(ticket_id = %ticket_id, submitter = %actor, "draft submitted");

        Ok(self.try_auto_assign(updated).await)
    }

    async fn accept(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<Ticket> {
        let ticket = self.get_ticket(ticket_id).await?;
        let rule = Self::check_transition(&ticket, TicketEvent::Accept)?;
        self.check_actor(&ticket, rule, actor).await?;

        let updated = self
            .ticket_repo
            .update_with_lock(DbTicket {
                id: ticket.id,
                expect_version: ticket.version,
                status: DbField::Set(rule.target),
                accepted_time: match ticket.accepted_time {
                    None => DbField::Set(Some(Utc::now())),
                    Some(_) => DbField::NotSet,
                },
                ..Default::default()
            })
            .await?;

        tracing::info!(ticket_id = %ticket_id, technician = %actor, "ticket accepted");
        Ok(updated)
    }

    async fn complete(
        &self,
        actor: Uuid,
        ticket_id: Uuid,
        resolution: String,
    ) -> RepairResult<Ticket> {
        let ticket = self.get_ticket(ticket_id).await?;
        let rule = Self::check_transition(&ticket, TicketEvent::Complete)?;
        self.check_actor(&ticket, rule, actor).await?;

        let updated = self
            .ticket_repo
            .update_with_lock(DbTicket {
                id: ticket.id,
                expect_version: ticket.version,
                status: DbField::Set(rule.target),
                resolution: DbField::Set(Some(resolution)),
                finished_time: match ticket.finished_time {
                    None => DbField::Set(Some(Utc::now())),
                    Some(_) => DbField::NotSet,
                },
                ..Default::default()
            })
            .await?;

        tracing::info!(ticket_id = %ticket_id, technician = %actor, "ticket completed");
        Ok(updated)
    }

    async fn close_with_rating(
        &self,
        actor: Uuid,
        ticket_id: Uuid,
        score: i32,
        comment: Option<String>,
    ) -> RepairResult<Ticket> {
        if !(1..=5).contains(&score) {
            return Err(RepairException::ScoreOutOfRange { score });
        }
        if let Some(comment) = &comment {
            let len = comment.chars().count();
            if len > MAX_COMMENT_CHARS {
                return Err(RepairException::CommentTooLong { len, max: MAX_COMMENT_CHARS });
            }
        }

        let ticket = self.get_ticket(ticket_id).await?;
        let rule = Self::check_transition(&ticket, TicketEvent::Close)?;
        self.check_actor(&ticket, rule, actor).await?;

        let technician_id = ticket.technician_id.ok_or_else(|| {
            RepairException::InternalError {
                source: anyhow::anyhow!("completed ticket {ticket_id} has no technician"),
            }
        })?;

        // Win the transition first; the unique constraint on the rating's
        // ticket reference guards the remaining race window.
        let updated = self
            .ticket_repo
            .update_with_lock(DbTicket {
                id: ticket.id,
                expect_version: ticket.version,
                status: DbField::Set(rule.target),
                finished_time: match ticket.finished_time {
                    None => DbField::Set(Some(Utc::now())),
                    Some(_) => DbField::NotSet,
                },
                ..Default::default()
            })
            .await?;

        let rating = Rating {
            id: Uuid::new_v4(),
            ticket_id,
            technician_id,
            score,
            comment,
            created_time: Utc::now(),
        };
        self.rating_repo.insert(&rating).await?;

        tracing::info!(ticket_id = %ticket_id, submitter = %actor, score, "ticket closed and rated");
        Ok(updated)
    }

    async fn cancel(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<Ticket> {
        let ticket = self.get_ticket(ticket_id).await?;
        let rule = Self::check_transition(&ticket, TicketEvent::Cancel)?;
        self.check_actor(&ticket, rule, actor).await?;

        let updated = self
            .ticket_repo
            .update_with_lock(DbTicket {
                id: ticket.id,
                expect_version: ticket.version,
                status: DbField::Set(rule.target),
                ..Default::default()
            })
            .await?;

        tracing::info!(ticket_id = %ticket_id, submitter = %actor, "ticket cancelled");
        Ok(updated)
    }

    async fn force_cancel(&self, actor: Uuid, ticket_id: Uuid) -> RepairResult<Ticket> {
        let ticket = self.get_ticket(ticket_id).await?;
        let rule = Self::check_transition(&ticket, TicketEvent::ForceCancel)?;
        self.check_actor(&ticket, rule, actor).await?;

        let updated = self
            .ticket_repo
            .update_with_lock(DbTicket {
                id: ticket.id,
                expect_version: ticket.version,
                status: DbField::Set(rule.target),
                supervisor_id: DbField::Set(Some(actor)),
                ..Default::default()
            })
            .await?;

        tracing::info!(ticket_id = %ticket_id, supervisor = %actor, "ticket force-cancelled");
        Ok(updated)
    }
}

impl TicketLifecycleServiceImpl {
    fn new_ticket(submitter: Uuid, content: NewTicket, status: TicketStatus) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            submitter_id: submitter,
            building_id: content.building_id,
            floor_id: content.floor_id,
            category_id: content.category_id,
            description: content.description,
            status,
            created_time: Utc::now(),
            ..Default::default()
        }
    }

    /// The ticket content must reference existing catalog entries and the
    /// floor must belong to the named building.
    async fn validate_content(&self, content: &NewTicket) -> RepairResult<()> {
        if content.description.trim().is_empty() {
            return Err(RepairException::EmptyDescription);
        }
        let building = self
            .building_repo
            .get_by_id(content.building_id)
            .await?
            .ok_or(RepairException::BuildingNotFound { id: content.building_id })?;
        let floor = self
            .floor_repo
            .get_by_id(content.floor_id)
            .await?
            .ok_or(RepairException::FloorNotFound { id: content.floor_id })?;
        if floor.building_id != building.id {
            return Err(RepairException::FloorOutsideBuilding {
                floor_id: floor.id,
                building_id: building.id,
            });
        }
        self.category_repo
            .get_by_id(content.category_id)
            .await?
            .ok_or(RepairException::CategoryNotFound { id: content.category_id })?;
        Ok(())
    }

    async fn known_user(&self, actor: Uuid) -> RepairResult<()> {
        if self.identity.roles_of(actor).await?.is_empty() {
            return Err(RepairException::UserNotFound { id: actor });
        }
        Ok(())
    }

    async fn get_ticket(&self, id: Uuid) -> RepairResult<Ticket> {
        Ok(self
            .ticket_repo
            .get_by_id(id)
            .await?
            .ok_or(RepairException::TicketNotFound { id })?)
    }

    fn check_transition(
        ticket: &Ticket,
        event: TicketEvent,
    ) -> RepairResult<&'static TransitionRule> {
        transition::admissible(ticket.status, event).ok_or(RepairException::InvalidTransition {
            ticket_id: ticket.id,
            from: ticket.status,
            requested: event.target(),
        })
    }

    async fn check_actor(
        &self,
        ticket: &Ticket,
        rule: &TransitionRule,
        actor: Uuid,
    ) -> RepairResult<()> {
        match rule.actor {
            ActorRule::Submitter => Self::check_submitter(ticket, actor),
            ActorRule::AssignedTechnician => {
                if ticket.technician_id != Some(actor) {
                    return Err(RepairException::NotAssignedTechnician {
                        ticket_id: ticket.id,
                        technician_id: actor,
                    });
                }
                Ok(())
            }
            ActorRule::Supervisor | ActorRule::SupervisorOrSystem => {
                if !self.identity.roles_of(actor).await?.contains(&Role::Supervisor) {
                    return Err(RepairException::SupervisorRequired { user_id: actor });
                }
                Ok(())
            }
        }
    }

    fn check_submitter(ticket: &Ticket, actor: Uuid) -> RepairResult<()> {
        if ticket.submitter_id != actor {
            return Err(RepairException::NotTicketSubmitter {
                ticket_id: ticket.id,
                user_id: actor,
            });
        }
        Ok(())
    }

    fn check_draft(ticket: &Ticket) -> RepairResult<()> {
        if ticket.status != TicketStatus::Draft {
            return Err(RepairException::TicketNotDraft {
                ticket_id: ticket.id,
                status: ticket.status,
            });
        }
        Ok(())
    }

    /// Assignment right after submission is best-effort: an empty eligible
    /// set leaves the ticket `Submitted` for manual assignment.
    async fn try_auto_assign(&self, ticket: Ticket) -> Ticket {
        match self.assignment.auto_assign(None, ticket.id).await {
            Ok(updated) => updated,
            Err(e) => {
                tracing::warn!(
                    ticket_id = %ticket.id,
                    error = %e,
                    "auto-assignment failed, awaiting manual assignment"
                );
                ticket
            }
        }
    }
}

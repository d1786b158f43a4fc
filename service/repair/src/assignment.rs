use std::sync::Arc;

use async_trait::async_trait;
use domain_repair::{
    exception::{RepairException, RepairResult},
    model::{
        entity::{
            ticket::{DbTicket, TicketStatus},
            Technician, Ticket,
        },
        vo::{
            transition::{self, TicketEvent},
            Role,
        },
    },
    repository::{CapabilityRepo, DbField, ReadOnlyRepository, TicketRepo},
    service::{AssignmentService, IdentityService},
};
use rand::{thread_rng, Rng};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct AssignmentServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    capability_repo: Arc<dyn CapabilityRepo>,
    technician_repo: Arc<dyn ReadOnlyRepository<Technician>>,
    identity: Arc<dyn IdentityService>,
}

#[async_trait]
impl AssignmentService for AssignmentServiceImpl {
    async fn assign(
        &self,
        actor: Uuid,
        ticket_id: Uuid,
        technician_id: Uuid,
    ) -> RepairResult<Ticket> {
        self.check_supervisor(actor).await?;
        let ticket = self.assignable_ticket(ticket_id).await?;

        self.technician_repo
            .get_by_id(technician_id)
            .await?
            .ok_or(RepairException::TechnicianNotFound { id: technician_id })?;

        // The nominee must be qualified on both axes; no silent fallback.
        if !self.capability_repo.has_area(technician_id, ticket.floor_id).await? {
            return Err(RepairException::MissingAreaCapability {
                technician_id,
                floor_id: ticket.floor_id,
            });
        }
        if !self.capability_repo.has_category(technician_id, ticket.category_id).await? {
            return Err(RepairException::MissingCategoryCapability {
                technician_id,
                category_id: ticket.category_id,
            });
        }

        let updated = self.bind(&ticket, technician_id, Some(actor)).await?;
        tracing::info!(
            ticket_id = %ticket_id,
            technician = %technician_id,
            supervisor = %actor,
            "technician assigned"
        );
        Ok(updated)
    }

    async fn auto_assign(&self, actor: Option<Uuid>, ticket_id: Uuid) -> RepairResult<Ticket> {
        if let Some(actor) = actor {
            self.check_supervisor(actor).await?;
        }
        let ticket = self.assignable_ticket(ticket_id).await?;

        let eligible = self
            .capability_repo
            .eligible_technicians(ticket.floor_id, ticket.category_id)
            .await?;
        if eligible.is_empty() {
            return Err(RepairException::NoEligibleTechnician { ticket_id });
        }

        // Uniform pick over the intersection; selection carries no load or
        // rating weighting.
        let picked = eligible[thread_rng().gen_range(0..eligible.len())];
        self.technician_repo
            .get_by_id(picked)
            .await?
            .ok_or(RepairException::TechnicianNotFound { id: picked })?;

        let updated = self.bind(&ticket, picked, actor).await?;
        match actor {
            Some(supervisor) => tracing::info!(
                ticket_id = %ticket_id,
                technician = %picked,
                supervisor = %supervisor,
                "technician auto-assigned"
            ),
            None => tracing::info!(
                ticket_id = %ticket_id,
                technician = %picked,
                "technician auto-assigned on submission"
            ),
        }
        Ok(updated)
    }

    async fn eligible_technicians(
        &self,
        floor_id: Uuid,
        category_id: Uuid,
    ) -> RepairResult<Vec<Technician>> {
        let ids = self.capability_repo.eligible_technicians(floor_id, category_id).await?;
        let mut technicians = Vec::with_capacity(ids.len());
        for id in ids {
            // Registry pairs may outlive the technician record; skip strays.
            if let Some(technician) = self.technician_repo.get_by_id(id).await? {
                technicians.push(technician);
            }
        }
        Ok(technicians)
    }
}

impl AssignmentServiceImpl {
    async fn check_supervisor(&self, actor: Uuid) -> RepairResult<()> {
        if !self.identity.roles_of(actor).await?.contains(&Role::Supervisor) {
            return Err(RepairException::SupervisorRequired { user_id: actor });
        }
        Ok(())
    }

    async fn assignable_ticket(&self, ticket_id: Uuid) -> RepairResult<Ticket> {
        let ticket = self
            .ticket_repo
            .get_by_id(ticket_id)
            .await?
            .ok_or(RepairException::TicketNotFound { id: ticket_id })?;
        if transition::admissible(ticket.status, TicketEvent::Assign).is_none() {
            return Err(RepairException::InvalidTransition {
                ticket_id,
                from: ticket.status,
                requested: TicketEvent::Assign.target(),
            });
        }
        Ok(ticket)
    }

    async fn bind(
        &self,
        ticket: &Ticket,
        technician_id: Uuid,
        supervisor_id: Option<Uuid>,
    ) -> RepairResult<Ticket> {
        Ok(self
            .ticket_repo
            .update_with_lock(DbTicket {
                id: ticket.id,
                expect_version: ticket.version,
                status: DbField::Set(TicketStatus::Pending),
                technician_id: DbField::Set(Some(technician_id)),
                supervisor_id: match supervisor_id {
                    Some(id) => DbField::Set(Some(id)),
                    None => DbField::NotSet,
                },
                ..Default::default()
            })
            .await?)
    }
}

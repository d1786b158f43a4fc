use std::sync::Arc;

use async_trait::async_trait;
use domain_repair::{
    exception::{RepairException, RepairResult},
    model::{
        entity::ticket::TicketStatus,
        vo::{TicketStats, TicketView},
    },
    repository::TicketRepo,
    service::TicketQueryService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct TicketQueryServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
}

#[async_trait]
impl TicketQueryService for TicketQueryServiceImpl {
    async fn get(&self, ticket_id: Uuid) -> RepairResult<TicketView> {
        let ticket = self
            .ticket_repo
            .get_by_id(ticket_id)
            .await?
            .ok_or(RepairException::TicketNotFound { id: ticket_id })?;
        Ok(ticket.into())
    }

    async fn tickets_of_submitter(
        &self,
        submitter_id: Uuid,
        status: Option<TicketStatus>,
    ) -> RepairResult<Vec<TicketView>> {
        let tickets = self.ticket_repo.get_by_submitter(submitter_id, status).await?;
        Ok(tickets.into_iter().map(Into::into).collect())
    }

    async fn tickets_of_technician(
        &self,
        technician_id: Uuid,
        status: Option<TicketStatus>,
    ) -> RepairResult<Vec<TicketView>> {
        let tickets = self.ticket_repo.get_by_technician(technician_id, status).await?;
        Ok(tickets.into_iter().map(Into::into).collect())
    }

    async fn unassigned_tickets(&self) -> RepairResult<Vec<TicketView>> {
        let tickets = self.ticket_repo.get_unassigned().await?;
        Ok(tickets.into_iter().map(Into::into).collect())
    }

    async fn status_stats(&self) -> RepairResult<TicketStats> {
        let draft = self.ticket_repo.count_by_status(TicketStatus::Draft).await?;
        let submitted = self.ticket_repo.count_by_status(TicketStatus::Submitted).await?;
        let pending = self.ticket_repo.count_by_status(TicketStatus::Pending).await?;
        let in_progress = self.ticket_repo.count_by_status(TicketStatus::InProgress).await?;
        let completed = self.ticket_repo.count_by_status(TicketStatus::Completed).await?;
        let closed = self.ticket_repo.count_by_status(TicketStatus::Closed).await?;
        let cancelled = self.ticket_repo.count_by_status(TicketStatus::Cancelled).await?;

        Ok(TicketStats {
            total: draft + submitted + pending + in_progress + completed + closed + cancelled,
            draft,
            submitted,
            pending,
            in_progress,
            completed,
            closed,
            cancelled,
        })
    }
}

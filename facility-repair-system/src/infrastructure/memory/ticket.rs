use async_trait::async_trait;
use domain_repair::exception::RepairException;
use domain_repair::model::entity::ticket::{DbTicket, TicketStatus};
use domain_repair::model::entity::Ticket;
use domain_repair::repository::{MutableRepository, ReadOnlyRepository, TicketRepo};
use uuid::Uuid;

use super::MemRepo;

#[async_trait]
impl ReadOnlyRepository<Ticket> for MemRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Ticket>> {
        Ok(self.store.tickets.get(&id).map(|row| row.clone()))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Ticket>> {
        Ok(self.store.tickets.iter().map(|row| row.clone()).collect())
    }
}

#[async_trait]
impl MutableRepository<Ticket> for MemRepo {
    async fn insert(&self, entity: &Ticket) -> anyhow::Result<Uuid> {
        self.store.tickets.insert(entity.id, entity.clone());
        Ok(entity.id)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<()> {
        self.store.tickets.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl TicketRepo for MemRepo {
    async fn update_with_lock(&self, changes: DbTicket) -> anyhow::Result<Ticket> {
        // The entry guard serializes racing writers on the same row; the
        // version check turns the loser into a clean failure.
        let mut entry = self
            .store
            .tickets
            .get_mut(&changes.id)
            .ok_or(RepairException::TicketNotFound { id: changes.id })?;
        let row = entry.value_mut();
        if row.version != changes.expect_version {
            return Err(RepairException::StaleTicket {
                ticket_id: changes.id,
                expect: changes.expect_version,
            }
            .into());
        }
        changes.status.apply(&mut row.status);
        changes.building_id.apply(&mut row.building_id);
        changes.floor_id.apply(&mut row.floor_id);
        changes.category_id.apply(&mut row.category_id);
        changes.technician_id.apply(&mut row.technician_id);
        changes.supervisor_id.apply(&mut row.supervisor_id);
        changes.description.apply(&mut row.description);
        changes.resolution.apply(&mut row.resolution);
        changes.accepted_time.apply(&mut row.accepted_time);
        changes.finished_time.apply(&mut row.finished_time);
        row.version += 1;
        Ok(row.clone())
    }

    async fn get_by_submitter(
        &self,
        submitter_id: Uuid,
        status: Option<TicketStatus>,
    ) -> anyhow::Result<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self
            .store
            .tickets
            .iter()
            .filter(|row| {
                row.submitter_id == submitter_id && status.map_or(true, |s| row.status == s)
            })
            .map(|row| row.clone())
            .collect();
        tickets.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        Ok(tickets)
    }

    async fn get_by_technician(
        &self,
        technician_id: Uuid,
        status: Option<TicketStatus>,
    ) -> anyhow::Result<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self
            .store
            .tickets
            .iter()
            .filter(|row| {
                row.technician_id == Some(technician_id)
                    && status.map_or(true, |s| row.status == s)
            })
            .map(|row| row.clone())
            .collect();
        tickets.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        Ok(tickets)
    }

    async fn get_unassigned(&self) -> anyhow::Result<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self
            .store
            .tickets
            .iter()
            .filter(|row| row.status == TicketStatus::Submitted && row.technician_id.is_none())
            .map(|row| row.clone())
            .collect();
        tickets.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        Ok(tickets)
    }

    async fn count_by_status(&self, status: TicketStatus) -> anyhow::Result<u64> {
        Ok(self.store.tickets.iter().filter(|row| row.status == status).count() as u64)
    }
}

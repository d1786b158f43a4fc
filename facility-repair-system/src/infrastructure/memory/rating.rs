use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use domain_repair::exception::RepairException;
use domain_repair::model::entity::Rating;
use domain_repair::repository::RatingRepo;
use uuid::Uuid;

use super::MemRepo;

#[async_trait]
impl RatingRepo for MemRepo {
    async fn insert(&self, rating: &Rating) -> anyhow::Result<Uuid> {
        // The entry claims the per-ticket slot atomically, so two racing
        // closers cannot both insert.
        match self.store.rating_by_ticket.entry(rating.ticket_id) {
            Entry::Occupied(_) => {
                Err(RepairException::DuplicateRating { ticket_id: rating.ticket_id }.into())
            }
            Entry::Vacant(slot) => {
                slot.insert(rating.id);
                self.store.ratings.insert(rating.id, rating.clone());
                Ok(rating.id)
            }
        }
    }

    async fn get_by_ticket_id(&self, ticket_id: Uuid) -> anyhow::Result<Option<Rating>> {
        let Some(rating_id) = self.store.rating_by_ticket.get(&ticket_id).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.store.ratings.get(&rating_id).map(|rating| rating.clone()))
    }

    async fn get_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Rating>> {
        let mut ratings: Vec<Rating> = self
            .store
            .ratings
            .iter()
            .filter(|rating| rating.technician_id == technician_id)
            .map(|rating| rating.clone())
            .collect();
        ratings.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        Ok(ratings)
    }
}

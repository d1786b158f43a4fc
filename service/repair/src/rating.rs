use std::sync::Arc;

use async_trait::async_trait;
use domain_repair::{
    exception::{RepairException, RepairResult},
    model::{entity::Rating, entity::Technician, vo::RatingStats},
    repository::{RatingRepo, ReadOnlyRepository},
    service::RatingService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct RatingServiceImpl {
    rating_repo: Arc<dyn RatingRepo>,
    technician_repo: Arc<dyn ReadOnlyRepository<Technician>>,
}

#[async_trait]
impl RatingService for RatingServiceImpl {
    async fn get_by_ticket(&self, ticket_id: Uuid) -> RepairResult<Rating> {
        Ok(self
            .rating_repo
            .get_by_ticket_id(ticket_id)
            .await?
            .ok_or(RepairException::RatingNotFound { ticket_id })?)
    }

    async fn technician_ratings(&self, technician_id: Uuid) -> RepairResult<Vec<Rating>> {
        self.known_technician(technician_id).await?;
        Ok(self.rating_repo.get_by_technician(technician_id).await?)
    }

    async fn technician_stats(&self, technician_id: Uuid) -> RepairResult<RatingStats> {
        self.known_technician(technician_id).await?;
        let ratings = self.rating_repo.get_by_technician(technician_id).await?;

        let mut histogram = [0u64; 5];
        let mut sum = 0i64;
        for rating in &ratings {
            sum += i64::from(rating.score);
            if let Some(bucket) = histogram.get_mut((rating.score - 1) as usize) {
                *bucket += 1;
            }
        }
        let total = ratings.len() as u64;
        let average = if total == 0 {
            0.0
        } else {
            (sum as f64 / total as f64 * 100.0).round() / 100.0
        };

        Ok(RatingStats { total, average, histogram })
    }
}

impl RatingServiceImpl {
    async fn known_technician(&self, technician_id: Uuid) -> RepairResult<()> {
        self.technician_repo
            .get_by_id(technician_id)
            .await?
            .ok_or(RepairException::TechnicianNotFound { id: technician_id })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain_repair::mock::{MockRatingRepo, MockTechnicianRepo};

    fn rating(technician_id: Uuid, score: i32) -> Rating {
        Rating {
            id: Uuid::new_v4(),
            ticket_id: Uuid::new_v4(),
            technician_id,
            score,
            comment: None,
            created_time: Utc::now(),
        }
    }

    fn service(rating_repo: MockRatingRepo, technician_repo: MockTechnicianRepo) -> RatingServiceImpl {
        RatingServiceImpl::builder()
            .rating_repo(Arc::new(rating_repo))
            .technician_repo(Arc::new(technician_repo))
            .build()
    }

    #[tokio::test]
    async fn stats_aggregate_count_average_and_histogram() {
        let technician = Uuid::new_v4();

        let mut technician_repo = MockTechnicianRepo::new();
        technician_repo.expect_get_by_id().returning(|id| {
            Ok(Some(Technician { id, name: "T".into(), phone: None }))
        });
        let mut rating_repo = MockRatingRepo::new();
        rating_repo.expect_get_by_technician().returning(move |_| {
            Ok(vec![
                rating(technician, 5),
                rating(technician, 4),
                rating(technician, 4),
            ])
        });

        let stats = service(rating_repo, technician_repo)
            .technician_stats(technician)
            .await
            .unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average, 4.33);
        assert_eq!(stats.histogram, [0, 0, 0, 2, 1]);
    }

    #[tokio::test]
    async fn unrated_technicians_average_to_zero() {
        let mut technician_repo = MockTechnicianRepo::new();
        technician_repo.expect_get_by_id().returning(|id| {
            Ok(Some(Technician { id, name: "T".into(), phone: None }))
        });
        let mut rating_repo = MockRatingRepo::new();
        rating_repo.expect_get_by_technician().returning(|_| Ok(vec![]));

        let stats = service(rating_repo, technician_repo)
            .technician_stats(Uuid::new_v4())
            .await
            .unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.histogram, [0; 5]);
    }

    #[tokio::test]
    async fn missing_rating_maps_to_not_found() {
        let mut rating_repo = MockRatingRepo::new();
        rating_repo.expect_get_by_ticket_id().returning(|_| Ok(None));

        let err = service(rating_repo, MockTechnicianRepo::new())
            .get_by_ticket(Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, RepairException::RatingNotFound { .. }));
    }
}

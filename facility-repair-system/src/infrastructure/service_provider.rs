use std::sync::Arc;

use domain_repair::service::{
    AssignmentService, CapabilityService, IdentityService, RatingService, TicketLifecycleService,
    TicketQueryService,
};
use service_repair::{
    AssignmentServiceImpl, CapabilityServiceImpl, RatingServiceImpl, TicketLifecycleServiceImpl,
    TicketQueryServiceImpl,
};

use super::memory::MemRepo;

/// Composition root: one shared in-memory store wired into the whole service
/// stack.
pub struct ServiceProvider {
    repo: MemRepo,
    lifecycle: Arc<dyn TicketLifecycleService>,
    assignment: Arc<dyn AssignmentService>,
    capability: Arc<dyn CapabilityService>,
    rating: Arc<dyn RatingService>,
    query: Arc<dyn TicketQueryService>,
}

impl ServiceProvider {
    pub fn new() -> Self {
        let repo = MemRepo::new();
        let shared = Arc::new(repo.clone());

        let assignment: Arc<dyn AssignmentService> = Arc::new(
            AssignmentServiceImpl::builder()
                .ticket_repo(shared.clone())
                .capability_repo(shared.clone())
                .technician_repo(shared.clone())
                .identity(shared.clone())
                .build(),
        );
        let lifecycle: Arc<dyn TicketLifecycleService> = Arc::new(
            TicketLifecycleServiceImpl::builder()
                .ticket_repo(shared.clone())
                .rating_repo(shared.clone())
                .building_repo(shared.clone())
                .floor_repo(shared.clone())
                .category_repo(shared.clone())
                .identity(shared.clone())
                .assignment(assignment.clone())
                .build(),
        );
        let capability: Arc<dyn CapabilityService> = Arc::new(
            CapabilityServiceImpl::builder()
                .capability_repo(shared.clone())
                .technician_repo(shared.clone())
                .floor_repo(shared.clone())
                .category_repo(shared.clone())
                .build(),
        );
        let rating: Arc<dyn RatingService> = Arc::new(
            RatingServiceImpl::builder()
                .rating_repo(shared.clone())
                .technician_repo(shared.clone())
                .build(),
        );
        let query: Arc<dyn TicketQueryService> =
            Arc::new(TicketQueryServiceImpl::builder().ticket_repo(shared).build());

        tracing::debug!("service stack wired over the in-memory store");
        Self { repo, lifecycle, assignment, capability, rating, query }
    }

    /// The backing store handle, for catalog seeding and administration.
    pub fn repo(&self) -> &MemRepo {
        &self.repo
    }

    /// The store as the identity port, for role administration.
    pub fn identity(&self) -> Arc<dyn IdentityService> {
        Arc::new(self.repo.clone())
    }

    pub fn lifecycle(&self) -> Arc<dyn TicketLifecycleService> {
        self.lifecycle.clone()
    }

    pub fn assignment(&self) -> Arc<dyn AssignmentService> {
        self.assignment.clone()
    }

    pub fn capability(&self) -> Arc<dyn CapabilityService> {
        self.capability.clone()
    }

    pub fn rating(&self) -> Arc<dyn RatingService> {
        self.rating.clone()
    }

    pub fn query(&self) -> Arc<dyn TicketQueryService> {
        self.query.clone()
    }
}

impl Default for ServiceProvider {
    fn default() -> Self {
        Self::new()
    }
}

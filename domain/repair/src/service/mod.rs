mod assignment;
mod capability;
mod identity;
mod lifecycle;
mod query;
mod rating;

#[rustfmt::skip]
pub use {
    assignment::AssignmentService,
    capability::CapabilityService,
    identity::IdentityService,
    lifecycle::TicketLifecycleService,
    query::TicketQueryService,
    rating::RatingService,
};

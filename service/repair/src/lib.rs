mod assignment;
mod capability;
mod lifecycle;
mod query;
mod rating;

#[rustfmt::skip]
pub use {
    assignment::AssignmentServiceImpl,
    capability::CapabilityServiceImpl,
    lifecycle::TicketLifecycleServiceImpl,
    query::TicketQueryServiceImpl,
    rating::RatingServiceImpl,
};

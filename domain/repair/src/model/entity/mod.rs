pub mod area;
pub mod capability;
pub mod category;
pub mod rating;
pub mod technician;
pub mod ticket;

#[rustfmt::skip]
pub use {
    area::{Building, Floor},
    capability::{AreaCapability, CategoryCapability},
    category::Category,
    rating::Rating,
    technician::Technician,
    ticket::Ticket,
};

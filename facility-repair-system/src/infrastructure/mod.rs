pub mod memory;
mod service_provider;

#[rustfmt::skip]
pub use {
    memory::MemRepo,
    service_provider::ServiceProvider,
};

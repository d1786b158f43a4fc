//! Composition root of the facility repair system: the in-memory record
//! store, configuration, telemetry, and the wired service stack.

pub mod config;
pub mod infrastructure;
pub mod telemetry;

#[rustfmt::skip]
pub use {
    self::config::{build_config, RepairConfig, TelemetryConfig},
    self::infrastructure::{MemRepo, ServiceProvider},
};

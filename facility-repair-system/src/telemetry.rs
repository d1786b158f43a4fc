use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::TelemetryConfig;

/// Install the console subscriber described by the config. Call once per
/// process; a later call fails because the global subscriber is already set.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let default_directive: Directive = config
        .level
        .parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into());
    let filter = EnvFilter::builder().with_default_directive(default_directive).from_env_lossy();
    let console = tracing_subscriber::fmt::layer()
        .with_file(config.enable_debug_logging)
        .with_line_number(config.enable_debug_logging)
        .with_thread_ids(config.enable_debug_logging)
        .with_target(config.enable_debug_logging);
    Registry::default().with(filter).with(console).try_init()?;
    Ok(())
}

use serde::Deserialize;

/// Top-level configuration, layered from `config.yaml` (optional) and
/// `REPAIR__`-prefixed environment variables.
#[derive(Default, Deserialize, Clone, Debug)]
pub struct RepairConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetryConfig {
    #[serde(default = "TelemetryConfig::default_enable")]
    pub enable: bool,
    /// Default level directive, overridable through `RUST_LOG`.
    #[serde(default = "TelemetryConfig::default_level")]
    pub level: String,
    /// Include file, line and thread details in log lines.
    #[serde(default)]
    pub enable_debug_logging: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: Self::default_enable(),
            level: Self::default_level(),
            enable_debug_logging: false,
        }
    }
}

impl TelemetryConfig {
    fn default_enable() -> bool {
        true
    }

    fn default_level() -> String {
        "info".to_string()
    }
}

pub fn build_config() -> anyhow::Result<RepairConfig> {
    let config = config::Config::builder()
        .add_source(
            config::File::with_name("config")
                .required(false)
                .format(config::FileFormat::Yaml),
        )
        .add_source(
            config::Environment::with_prefix("REPAIR").separator("__").try_parsing(true),
        )
        .build()?;
    Ok(config.try_deserialize()?)
}

//! Configuration data structures for Tidings.
//!
//! These structs are populated by deserializing `config.toml`. Fields not
//! present in the file fall back to the values in [`super::defaults`],
//! and unknown fields are rejected via `#[serde(deny_unknown_fields)]`.

use super::defaults;
use serde::Deserialize;
use std::time::Duration;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use tidings_core::config::LoggingConfig;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// The console log format. Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Deadlines for the notification engine's outward calls.
///
/// Store operations that exceed `op_timeout_secs` are reported as a
/// storage failure; device deliveries that exceed `delivery_timeout_secs`
/// are logged and dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Deadline, in seconds, for a single persistence operation.
    #[serde(default = "defaults::default_op_timeout_secs")]
    pub op_timeout_secs: u64,
    /// Deadline, in seconds, for a single device-level delivery attempt.
    #[serde(default = "defaults::default_delivery_timeout_secs")]
    pub delivery_timeout_secs: u64,
}

impl EngineConfig {
    /// The persistence-operation deadline as a [`Duration`].
    pub fn op_timeout(&self) -> Duration {
        Duration::from_secs(self.op_timeout_secs)
    }

    /// The delivery deadline as a [`Duration`].
    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery_timeout_secs)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        defaults::default_engine_config()
    }
}

/// The root configuration structure for the Tidings workspace.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Logging subsystem settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Notification engine deadlines.
    #[serde(default)]
    pub engine: EngineConfig,
}

//! Default configuration values for Tidings.
//!
//! These functions back the `serde` `default` attributes in the
//! configuration structures, providing sensible values when a setting is
//! absent from `config.toml`.

use crate::config::{EngineConfig, LoggingConfig};

/// Returns the default `LoggingConfig`.
///
/// Used by `CoreConfig` if the `logging` section is missing.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default `EngineConfig`.
///
/// Used by `CoreConfig` if the `engine` section is missing.
pub(super) fn default_engine_config() -> EngineConfig {
    EngineConfig {
        op_timeout_secs: default_op_timeout_secs(),
        delivery_timeout_secs: default_delivery_timeout_secs(),
    }
}

/// Returns the default persistence-operation deadline (10 seconds).
pub(super) fn default_op_timeout_secs() -> u64 {
    10
}

/// Returns the default delivery deadline (5 seconds).
pub(super) fn default_delivery_timeout_secs() -> u64 {
    5
}

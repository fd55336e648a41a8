//! Logging setup for Tidings.
//!
//! Built on the `tracing` ecosystem. Console output only; the format
//! (text or JSON) and level come from [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::CoreError;

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests, early startup before configuration is loaded, or
/// as a fallback if detailed logging initialization fails. Filters on the
/// `RUST_LOG` environment variable, defaulting to "info". Errors (e.g. a
/// global logger already being set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Initializes the global logger from a validated [`LoggingConfig`].
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
///
/// # Errors
///
/// Returns [`CoreError::LoggingInitialization`] if a global subscriber is
/// already installed or the configured format is unknown.
pub fn initialize_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(atty::is(atty::Stream::Stdout));

    let result = match config.format.as_str() {
        "text" => builder.try_init(),
        "json" => builder.json().try_init(),
        other => {
            return Err(CoreError::LoggingInitialization(format!(
                "unknown log format '{}'",
                other
            )))
        }
    };

    result.map_err(|e| CoreError::LoggingInitialization(e.to_string()))
}

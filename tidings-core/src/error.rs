//! Error handling for the Tidings core layer.
//!
//! This module defines the error types shared across the workspace using
//! the `thiserror` crate. The main error type is [`CoreError`], which
//! encapsulates more specific errors like [`ConfigError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the Tidings infrastructure layer.
///
/// Used as the common error type of `tidings-core`, usually by wrapping
/// a more specific error.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during the initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// Filesystem errors that are not covered by a more specific variant.
    /// Includes a message, the path involved, and the source I/O error.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// General I/O errors not covered by other variants.
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),

    /// Errors due to invalid input provided to a function.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// Catch-all for unexpected internal errors within the core library.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed as TOML.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A cached profile document could not be parsed as JSON.
    #[error("Failed to parse profile document: {0}")]
    ProfileParseError(#[from] serde_json::Error),

    /// The configuration parsed but contained invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A configuration file was not found at any of the expected locations.
    #[error("Configuration file not found at expected locations: {locations:?}")]
    NotFound { locations: Vec<PathBuf> },

    /// A required base directory (e.g. the XDG config home) could not be
    /// determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::ValidationError("bad level".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration validation failed: bad level"
        );
    }

    #[test]
    fn config_error_wraps_into_core_error() {
        let err = CoreError::from(ConfigError::NotFound {
            locations: vec![PathBuf::from("/etc/tidings/config.toml")],
        });
        assert!(matches!(err, CoreError::Config(ConfigError::NotFound { .. })));
        assert!(err.to_string().starts_with("Configuration Error:"));
    }

    #[test]
    fn io_error_wraps_into_core_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = CoreError::from(io_err);
        assert!(matches!(err, CoreError::Io(_)));
    }
}

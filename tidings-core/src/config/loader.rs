//! Configuration loading for Tidings.
//!
//! Provides the [`ConfigLoader`] struct, responsible for locating,
//! parsing, and validating the [`CoreConfig`]. A missing configuration
//! file is not an error: the defaults are used, matching the behavior of
//! the rest of the workspace at first start.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "Tidings";
const APPLICATION: &str = "tidings";

const CONFIG_FILE_NAME: &str = "config.toml";

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: &[&str] = &["text", "json"];

/// `ConfigLoader` provides static methods to load and validate [`CoreConfig`].
///
/// An empty struct used as a namespace; the entry points are [`load`](Self::load)
/// and [`load_from_path`](Self::load_from_path).
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from the application config
    /// directory (`<config dir>/config.toml`).
    ///
    /// A missing file yields the default configuration; read, parse, and
    /// validation failures are surfaced as [`CoreError::Config`].
    pub fn load() -> Result<CoreConfig, CoreError> {
        let config_path = Self::app_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Loads and validates the configuration from an explicit path.
    ///
    /// The caller-supplied-path variant of [`load`](Self::load); used by
    /// tests and embedders that manage their own directories.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let config = match fs::read_to_string(path) {
            Ok(content) => toml::from_str::<CoreConfig>(&content)
                .map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "Configuration file {:?} not found, using defaults.",
                    path
                );
                CoreConfig::default()
            }
            Err(e) => {
                return Err(CoreError::Config(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }))
            }
        };

        Self::validate_config(config)
    }

    /// Resolves the platform-specific path of `config.toml`.
    fn app_config_path() -> Result<PathBuf, CoreError> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                CoreError::Config(ConfigError::DirectoryUnavailable {
                    dir_type: "application config".to_string(),
                })
            })
    }

    /// Normalizes and checks a parsed configuration.
    ///
    /// Log level and format are lowercased and checked against the known
    /// sets; engine deadlines must be non-zero.
    fn validate_config(mut config: CoreConfig) -> Result<CoreConfig, CoreError> {
        config.logging.level = config.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "invalid log level '{}'",
                config.logging.level
            ))));
        }

        config.logging.format = config.logging.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "invalid log format '{}'",
                config.logging.format
            ))));
        }

        if config.engine.op_timeout_secs == 0 {
            return Err(CoreError::Config(ConfigError::ValidationError(
                "engine.op_timeout_secs must be greater than zero".to_string(),
            )));
        }
        if config.engine.delivery_timeout_secs == 0 {
            return Err(CoreError::Config(ConfigError::ValidationError(
                "engine.delivery_timeout_secs must be greater than zero".to_string(),
            )));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config =
            ConfigLoader::load_from_path(Path::new("/nonexistent/tidings/config.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.engine.op_timeout_secs, 10);
    }

    #[test]
    fn valid_file_is_loaded_and_normalized() {
        let file = write_config(
            r#"
            [logging]
            level = "DEBUG"
            format = "JSON"

            [engine]
            op_timeout_secs = 30
            "#,
        );
        let config = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.engine.op_timeout_secs, 30);
        assert_eq!(config.engine.delivery_timeout_secs, 5);
    }

    #[test]
    fn invalid_level_fails_validation() {
        let file = write_config(
            r#"
            [logging]
            level = "verbose"
            "#,
        );
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Config(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn zero_deadline_fails_validation() {
        let file = write_config(
            r#"
            [engine]
            op_timeout_secs = 0
            "#,
        );
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Config(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("logging = not-a-table");
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Config(ConfigError::ParseError(_))
        ));
    }
}

//! Configuration management for Tidings.
//!
//! Defines how configuration is structured, loaded, validated, and
//! accessed.
//!
//! - [`types`]: the configuration struct definitions ([`CoreConfig`],
//!   [`LoggingConfig`], [`EngineConfig`]); the schema of `config.toml`.
//! - [`defaults`]: default values used when the configuration file is
//!   missing or incomplete.
//! - [`loader`]: the [`ConfigLoader`] that locates, parses, and
//!   validates `config.toml`.
//! - [`user`]: the [`UserProfile`] reader for the locally cached user
//!   identity document.
//!
//! ## Loading process
//!
//! 1. [`ConfigLoader::load`] resolves the application configuration
//!    directory and looks for `config.toml`.
//! 2. A missing file yields the default [`CoreConfig`]; a present file is
//!    parsed as TOML.
//! 3. The result is validated (log level/format normalization, non-zero
//!    deadlines) before being handed to the caller.

pub mod defaults;
pub mod loader;
pub mod types;
pub mod user;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, EngineConfig, LoggingConfig};
pub use user::UserProfile;

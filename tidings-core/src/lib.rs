//! # Tidings Core Library (`tidings-core`)
//!
//! `tidings-core` is the infrastructure layer of the Tidings reminder
//! engine. It provides the pieces every other crate in the workspace
//! leans on:
//!
//! - **Error Handling**: a unified error system through the [`CoreError`]
//!   enum and the more specific [`ConfigError`].
//! - **Configuration Management**: TOML-based configuration loading with
//!   default fallbacks and validation via [`ConfigLoader`] and
//!   [`CoreConfig`], plus the cached [`UserProfile`] reader that supplies
//!   the already-resolved user identity.
//! - **Logging**: a logging framework built on top of the `tracing`
//!   crate, configurable for text or JSON console output.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tidings_core::config::ConfigLoader;
//! use tidings_core::logging::initialize_logging;
//!
//! fn main() -> Result<(), tidings_core::CoreError> {
//!     let config = ConfigLoader::load()?;
//!     initialize_logging(&config.logging)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigLoader, CoreConfig, EngineConfig, LoggingConfig, UserProfile};
pub use error::{ConfigError, CoreError};

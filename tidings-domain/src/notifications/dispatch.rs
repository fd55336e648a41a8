//! Device-level delivery.
//!
//! One [`DispatchBackend`] per target platform, registered once at
//! startup in a [`NotificationDispatcher`]; selecting the backend is a
//! pure lookup, never a conditional chain in business logic. Delivery is
//! best-effort: every failure mode is caught and logged inside
//! [`NotificationDispatcher::push`], because a notification's logical
//! existence is independent of whether the OS alert rendered.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::errors::DispatchError;

const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Identifier of a delivery target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn detect() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }
}

/// A platform-specific "push an alert to the OS notification surface"
/// capability.
///
/// Implementations wrap the concrete OS API (a mobile notification
/// channel, a desktop toast); those bindings live outside this crate.
#[async_trait]
pub trait DispatchBackend: Send + Sync {
    async fn push(&self, title: &str, message: &str) -> Result<(), DispatchError>;
}

/// Backend that only logs the alert.
///
/// The default registration when no OS backend has been injected, and a
/// reasonable choice for headless deployments.
#[derive(Default)]
pub struct LogBackend;

#[async_trait]
impl DispatchBackend for LogBackend {
    async fn push(&self, title: &str, message: &str) -> Result<(), DispatchError> {
        info!("Device notification: {} - {}", title, message);
        Ok(())
    }
}

/// Builder for [`NotificationDispatcher`]; backends are registered here
/// and the set is frozen at [`build`](Self::build).
#[derive(Default)]
pub struct DispatcherBuilder {
    backends: HashMap<Platform, Arc<dyn DispatchBackend>>,
    delivery_timeout: Option<Duration>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers (or replaces) the backend for a platform.
    pub fn register(mut self, platform: Platform, backend: Arc<dyn DispatchBackend>) -> Self {
        self.backends.insert(platform, backend);
        self
    }

    /// Overrides the per-delivery deadline (default 5 seconds).
    pub fn delivery_timeout(mut self, timeout: Duration) -> Self {
        self.delivery_timeout = Some(timeout);
        self
    }

    /// Applies the configured delivery deadline.
    pub fn with_engine_config(self, config: &tidings_core::config::EngineConfig) -> Self {
        let timeout = config.delivery_timeout();
        self.delivery_timeout(timeout)
    }

    /// Freezes the registry, selecting `platform` as the active target.
    pub fn build(self, platform: Platform) -> NotificationDispatcher {
        NotificationDispatcher {
            backends: self.backends,
            platform,
            delivery_timeout: self.delivery_timeout.unwrap_or(DEFAULT_DELIVERY_TIMEOUT),
        }
    }
}

/// Polymorphic delivery capability over the registered backends.
pub struct NotificationDispatcher {
    backends: HashMap<Platform, Arc<dyn DispatchBackend>>,
    platform: Platform,
    delivery_timeout: Duration,
}

impl NotificationDispatcher {
    /// A dispatcher with only the [`LogBackend`] for the detected
    /// platform.
    pub fn logging_only() -> Self {
        let platform = Platform::detect();
        DispatcherBuilder::new()
            .register(platform, Arc::new(LogBackend))
            .build(platform)
    }

    /// The active delivery target.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Delivers a best-effort device alert.
    ///
    /// Always returns: backend errors, a missing backend, and deadline
    /// expiry are logged at `warn!` and swallowed.
    pub async fn push(&self, title: &str, message: &str) {
        match self.try_push(title, message).await {
            Ok(()) => debug!("Device notification delivered: {}", title),
            Err(error) => warn!("Device notification delivery failed: {}", error),
        }
    }

    async fn try_push(&self, title: &str, message: &str) -> Result<(), DispatchError> {
        let backend = self
            .backends
            .get(&self.platform)
            .ok_or(DispatchError::NoBackend(self.platform))?;
        tokio::time::timeout(self.delivery_timeout, backend.push(title, message))
            .await
            .map_err(|_| DispatchError::Timeout)?
    }
}

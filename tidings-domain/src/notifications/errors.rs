//! Error taxonomy of the notification engine.
//!
//! Two families with different propagation rules:
//!
//! - [`NotificationError`] travels upward: a storage failure means the
//!   in-memory and durable views may disagree, so the immediate caller
//!   must see it.
//! - [`DispatchError`] never leaves the dispatcher: device delivery is
//!   best-effort, failures are logged and swallowed at that boundary.
//!
//! A dismiss or delete that finds no matching record is not an error at
//! all; those paths report idempotent success.

use thiserror::Error;

use super::dispatch::Platform;

/// Errors surfaced by the timeline and the store.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The persistence collaborator could not complete an operation, or
    /// exceeded its deadline. The caller must not assume the notification
    /// exists anywhere after receiving this from `record`.
    #[error("Notification storage unavailable during '{operation}': {message}")]
    StorageUnavailable { operation: String, message: String },

    /// Invalid data for a notification field.
    #[error("Invalid data for notification field '{field}': {reason}")]
    InvalidData { field: String, reason: String },

    /// Catch-all for unexpected internal errors.
    #[error("Internal notification error: {0}")]
    Internal(String),
}

impl NotificationError {
    /// Shorthand for a [`StorageUnavailable`](Self::StorageUnavailable)
    /// with the given operation name.
    pub fn storage_unavailable(operation: &str, message: impl Into<String>) -> Self {
        NotificationError::StorageUnavailable {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

/// Errors raised by delivery backends.
///
/// Caught and logged inside [`NotificationDispatcher::push`]
/// (`super::dispatch`); never propagated past it.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The backend failed to hand the alert to the OS notification
    /// surface (permission denial, missing service, transient OS error).
    #[error("Delivery backend failed: {0}")]
    Backend(String),

    /// No backend is registered for the active platform.
    #[error("No delivery backend registered for platform {0:?}")]
    NoBackend(Platform),

    /// The backend did not answer within the delivery deadline.
    #[error("Delivery attempt exceeded its deadline")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_unavailable_names_the_operation() {
        let err = NotificationError::storage_unavailable("add", "connection refused");
        assert_eq!(
            err.to_string(),
            "Notification storage unavailable during 'add': connection refused"
        );
    }

    #[test]
    fn dispatch_error_display() {
        let err = DispatchError::NoBackend(Platform::Windows);
        assert!(err.to_string().contains("Windows"));
    }
}

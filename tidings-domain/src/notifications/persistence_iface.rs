//! Durable store contract for notification rows.

use async_trait::async_trait;
use uuid::Uuid;

use super::errors::NotificationError;
use super::types::Notification;
use crate::shared_types::UserId;

/// CRUD over durable notification rows, scoped by user identity.
///
/// The store enforces no uniqueness and no ordering; both are the
/// timeline's concern. Any unavailability of the underlying storage must
/// surface as [`NotificationError::StorageUnavailable`] — callers perform
/// no automatic retries.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Appends a new durable row. Duplicate contents are permitted at
    /// this layer.
    async fn add(&self, notification: &Notification) -> Result<(), NotificationError>;

    /// Returns all rows for a user, in no guaranteed order.
    async fn list(&self, user_id: &UserId) -> Result<Vec<Notification>, NotificationError>;

    /// Removes the row with the given id for the given user.
    ///
    /// Returns `Ok(false)` when no such row exists; absence is a soft
    /// condition, not an error.
    async fn delete(&self, user_id: &UserId, id: Uuid) -> Result<bool, NotificationError>;
}

//! Store implementations.
//!
//! [`InMemoryNotificationStore`] backs tests and embedders that bring
//! their own durability; [`FsNotificationStore`] persists all rows in a
//! single TOML document, read-modify-written per operation. A hosted
//! tabular store would implement [`NotificationStore`] the same way and
//! is deliberately not part of this crate.

use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::errors::NotificationError;
use super::persistence_iface::NotificationStore;
use super::types::Notification;
use crate::shared_types::UserId;

/// Volatile store over a `RwLock<Vec<_>>`.
#[derive(Default)]
pub struct InMemoryNotificationStore {
    rows: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn add(&self, notification: &Notification) -> Result<(), NotificationError> {
        let mut rows = self.rows.write().map_err(|e| {
            NotificationError::Internal(format!("Failed to acquire write lock for rows: {}", e))
        })?;
        rows.push(notification.clone());
        Ok(())
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<Notification>, NotificationError> {
        let rows = self.rows.read().map_err(|e| {
            NotificationError::Internal(format!("Failed to acquire read lock for rows: {}", e))
        })?;
        Ok(rows
            .iter()
            .filter(|n| &n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: &UserId, id: Uuid) -> Result<bool, NotificationError> {
        let mut rows = self.rows.write().map_err(|e| {
            NotificationError::Internal(format!("Failed to acquire write lock for rows: {}", e))
        })?;
        match rows
            .iter()
            .position(|n| &n.user_id == user_id && n.id == id)
        {
            Some(index) => {
                rows.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// On-disk serialization wrapper; TOML wants a table at the top level.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    rows: Vec<Notification>,
}

/// Whole-file TOML store.
///
/// Every operation reads the document, mutates it, and writes it back
/// under an internal mutex, so concurrent operations from one process
/// never interleave their read-modify-write cycles. A missing file is an
/// empty store, not an error.
pub struct FsNotificationStore {
    path: PathBuf,
    io_lock: tokio::sync::Mutex<()>,
}

impl FsNotificationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: tokio::sync::Mutex::new(()),
        }
    }

    async fn read_document(&self) -> Result<StoreDocument, NotificationError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                NotificationError::storage_unavailable(
                    "read",
                    format!("store document {:?} is corrupt: {}", self.path, e),
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Store document {:?} not found; treating as empty.", self.path);
                Ok(StoreDocument::default())
            }
            Err(e) => Err(NotificationError::storage_unavailable(
                "read",
                format!("failed to read {:?}: {}", self.path, e),
            )),
        }
    }

    async fn write_document(&self, document: &StoreDocument) -> Result<(), NotificationError> {
        let content = toml::to_string_pretty(document).map_err(|e| {
            NotificationError::storage_unavailable("write", format!("serialization failed: {}", e))
        })?;
        tokio::fs::write(&self.path, content).await.map_err(|e| {
            NotificationError::storage_unavailable(
                "write",
                format!("failed to write {:?}: {}", self.path, e),
            )
        })
    }
}

#[async_trait]
impl NotificationStore for FsNotificationStore {
    async fn add(&self, notification: &Notification) -> Result<(), NotificationError> {
        let _guard = self.io_lock.lock().await;
        let mut document = self.read_document().await?;
        document.rows.push(notification.clone());
        self.write_document(&document).await?;
        debug!(
            "Persisted notification {} for user {}.",
            notification.id, notification.user_id
        );
        Ok(())
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<Notification>, NotificationError> {
        let _guard = self.io_lock.lock().await;
        let document = self.read_document().await?;
        Ok(document
            .rows
            .into_iter()
            .filter(|n| &n.user_id == user_id)
            .collect())
    }

    async fn delete(&self, user_id: &UserId, id: Uuid) -> Result<bool, NotificationError> {
        let _guard = self.io_lock.lock().await;
        let mut document = self.read_document().await?;
        let Some(index) = document
            .rows
            .iter()
            .position(|n| &n.user_id == user_id && n.id == id)
        else {
            debug!("No row ({}, {}) to delete; treating as done.", user_id, id);
            return Ok(false);
        };
        document.rows.remove(index);
        self.write_document(&document).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn notification(user: &str, message: &str) -> Notification {
        Notification::new(UserId::new(user), "Reminder", message)
    }

    #[tokio::test]
    async fn in_memory_store_scopes_rows_by_user() {
        let store = InMemoryNotificationStore::new();
        store.add(&notification("alice", "a1")).await.unwrap();
        store.add(&notification("bob", "b1")).await.unwrap();
        store.add(&notification("alice", "a2")).await.unwrap();

        let rows = store.list(&UserId::new("alice")).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|n| n.user_id == UserId::new("alice")));
    }

    #[tokio::test]
    async fn in_memory_store_permits_duplicate_contents() {
        let store = InMemoryNotificationStore::new();
        store.add(&notification("alice", "same")).await.unwrap();
        store.add(&notification("alice", "same")).await.unwrap();
        assert_eq!(store.list(&UserId::new("alice")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn in_memory_delete_reports_no_match_as_false() {
        let store = InMemoryNotificationStore::new();
        let n = notification("alice", "a1");
        store.add(&n).await.unwrap();

        assert!(store.delete(&UserId::new("alice"), n.id).await.unwrap());
        assert!(!store.delete(&UserId::new("alice"), n.id).await.unwrap());
    }

    #[tokio::test]
    async fn in_memory_delete_requires_matching_user() {
        let store = InMemoryNotificationStore::new();
        let n = notification("alice", "a1");
        store.add(&n).await.unwrap();

        assert!(!store.delete(&UserId::new("bob"), n.id).await.unwrap());
        assert_eq!(store.list(&UserId::new("alice")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn fs_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsNotificationStore::new(dir.path().join("notifications.toml"));
        assert!(store.list(&UserId::new("alice")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fs_store_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notifications.toml");
        let n = notification("alice", "durable");

        {
            let store = FsNotificationStore::new(&path);
            store.add(&n).await.unwrap();
        }

        let reopened = FsNotificationStore::new(&path);
        let rows = reopened.list(&UserId::new("alice")).await.unwrap();
        assert_eq!(rows, vec![n]);
    }

    #[tokio::test]
    async fn fs_store_delete_removes_the_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsNotificationStore::new(dir.path().join("notifications.toml"));
        let keep = notification("alice", "keep");
        let gone = notification("alice", "gone");
        store.add(&keep).await.unwrap();
        store.add(&gone).await.unwrap();

        assert!(store.delete(&UserId::new("alice"), gone.id).await.unwrap());
        let rows = store.list(&UserId::new("alice")).await.unwrap();
        assert_eq!(rows, vec![keep]);
    }

    #[tokio::test]
    async fn fs_store_corrupt_document_is_storage_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notifications.toml");
        tokio::fs::write(&path, "rows = 5").await.unwrap();

        let store = FsNotificationStore::new(&path);
        let err = store.list(&UserId::new("alice")).await.unwrap_err();
        assert!(matches!(
            err,
            NotificationError::StorageUnavailable { .. }
        ));
    }
}

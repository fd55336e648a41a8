//! The per-user notification timeline.
//!
//! An in-memory, time-ordered view kept synchronized with the durable
//! store: after any successful `record` or `dismiss`, the view and the
//! store hold exactly the same set of rows for the user. The store is
//! the source of truth; the timeline is the read-optimized shadow the
//! rest of the engine and the presentation layer work against.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};
use uuid::Uuid;

use super::dispatch::NotificationDispatcher;
use super::errors::NotificationError;
use super::events::TimelineEvent;
use super::persistence_iface::NotificationStore;
use super::types::{LoadOutcome, Notification};
use crate::shared_types::UserId;

const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_EVENT_CAPACITY: usize = 32;

/// Time-ordered, per-user view over persisted notifications.
///
/// Owned by the session that created it; one instance per user. All
/// mutations go through [`record`](Self::record) /
/// [`dismiss`](Self::dismiss), which hold the write lock across the
/// store call, so mutations for this user are serialized even when the
/// store itself guarantees no per-row atomicity.
pub struct NotificationTimeline {
    user_id: UserId,
    entries: RwLock<Vec<Notification>>,
    store: Arc<dyn NotificationStore>,
    dispatcher: Arc<NotificationDispatcher>,
    event_publisher: broadcast::Sender<TimelineEvent>,
    op_timeout: Duration,
}

impl NotificationTimeline {
    /// Creates an empty timeline; call [`load`](Self::load) to rebuild
    /// it from the store.
    pub fn new(
        user_id: UserId,
        store: Arc<dyn NotificationStore>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        let (event_publisher, _) = broadcast::channel(DEFAULT_EVENT_CAPACITY);
        Self {
            user_id,
            entries: RwLock::new(Vec::new()),
            store,
            dispatcher,
            event_publisher,
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    /// Overrides the per-operation store deadline (default 10 seconds).
    pub fn with_op_timeout(mut self, timeout: Duration) -> Self {
        self.op_timeout = timeout;
        self
    }

    /// Applies the configured store deadline.
    pub fn with_engine_config(self, config: &tidings_core::config::EngineConfig) -> Self {
        let timeout = config.op_timeout();
        self.with_op_timeout(timeout)
    }

    /// The owning user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Subscribes to timeline events.
    pub fn subscribe(&self) -> broadcast::Receiver<TimelineEvent> {
        self.event_publisher.subscribe()
    }

    /// Rebuilds the in-memory view from the store.
    ///
    /// An empty store is the [`LoadOutcome::Empty`] signal, not an
    /// error; the presentation layer renders a placeholder for it.
    pub async fn load(&self) -> Result<LoadOutcome, NotificationError> {
        let rows = self.bounded("list", self.store.list(&self.user_id)).await?;
        let count = rows.len();

        let mut entries = self.entries.write().await;
        *entries = rows;
        drop(entries);

        self.publish_event(TimelineEvent::Loaded { count });
        if count == 0 {
            debug!("Timeline for user {} loaded empty.", self.user_id);
            Ok(LoadOutcome::Empty)
        } else {
            debug!("Timeline for user {} loaded {} rows.", self.user_id, count);
            Ok(LoadOutcome::Loaded(count))
        }
    }

    /// Records a new notification: appends it to the view, persists it,
    /// then hands the alert to the device dispatcher.
    ///
    /// The durable write must succeed before delivery is attempted; if
    /// it fails, the in-memory append is rolled back, no alert is
    /// pushed, and the error is surfaced. A failed device push never
    /// rolls back the already-durable record.
    pub async fn record(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Uuid, NotificationError> {
        let notification = Notification::new(self.user_id.clone(), title, message);
        let id = notification.id;

        let mut entries = self.entries.write().await;
        entries.push(notification.clone());

        if let Err(e) = self.bounded("add", self.store.add(&notification)).await {
            entries.pop();
            return Err(e);
        }
        drop(entries);

        self.publish_event(TimelineEvent::Recorded {
            notification: notification.clone(),
        });
        self.dispatcher
            .push(&notification.title, &notification.message)
            .await;
        Ok(id)
    }

    /// Dismisses a notification by id.
    ///
    /// Idempotent: an id not present in the timeline is success. The
    /// entry is removed from memory optimistically; if the durable
    /// delete fails it is restored at its original position and the
    /// error surfaced, leaving no divergence window.
    pub async fn dismiss(&self, id: Uuid) -> Result<(), NotificationError> {
        let mut entries = self.entries.write().await;
        let Some(index) = entries.iter().position(|n| n.id == id) else {
            debug!("Dismiss of unknown notification {}; nothing to do.", id);
            return Ok(());
        };
        let removed = entries.remove(index);

        match self.bounded("delete", self.store.delete(&self.user_id, id)).await {
            Ok(matched) => {
                if !matched {
                    // Store had no row for an entry we held; the views
                    // had already converged on deletion.
                    warn!("Store held no row for dismissed notification {}.", id);
                }
                drop(entries);
                self.publish_event(TimelineEvent::Dismissed { id });
                Ok(())
            }
            Err(e) => {
                entries.insert(index, removed);
                Err(e)
            }
        }
    }

    /// Dismisses the newest notification whose message equals `message`.
    ///
    /// Convenience for presentation layers that only hold the rendered
    /// text. No match is success.
    pub async fn dismiss_by_message(&self, message: &str) -> Result<(), NotificationError> {
        let id = {
            let entries = self.entries.read().await;
            entries
                .iter()
                .filter(|n| n.message == message)
                .max_by_key(|n| n.timestamp)
                .map(|n| n.id)
        };
        match id {
            Some(id) => self.dismiss(id).await,
            None => Ok(()),
        }
    }

    /// The current notifications, newest first.
    ///
    /// The sort is stable; entries with equal timestamps keep their
    /// insertion order.
    pub async fn ordered_view(&self) -> Vec<Notification> {
        let entries = self.entries.read().await;
        let mut view: Vec<Notification> = entries.clone();
        view.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        view
    }

    /// Number of notifications currently in the view.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the view holds no notifications.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Bounds a store future by the operation deadline; elapsing is a
    /// storage failure, never a silent hang.
    async fn bounded<T>(
        &self,
        operation: &str,
        fut: impl std::future::Future<Output = Result<T, NotificationError>>,
    ) -> Result<T, NotificationError> {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(NotificationError::storage_unavailable(
                operation,
                format!("operation exceeded the {:?} deadline", self.op_timeout),
            )),
        }
    }

    fn publish_event(&self, event: TimelineEvent) {
        // Send only fails when nobody is subscribed.
        if self.event_publisher.send(event).is_err() {
            debug!("Timeline event dropped; no subscribers.");
        }
    }
}

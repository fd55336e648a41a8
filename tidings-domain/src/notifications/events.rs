//! Broadcast events emitted by the timeline.
//!
//! The presentation layer subscribes to these to refresh its rendering
//! without polling; missing a message (lagged receiver) is harmless since
//! `ordered_view` always reflects the current state.

use uuid::Uuid;

use super::types::Notification;

/// Something observable happened to a user's timeline.
#[derive(Debug, Clone)]
pub enum TimelineEvent {
    /// A notification was recorded and durably persisted.
    Recorded { notification: Notification },
    /// A notification was dismissed and durably deleted.
    Dismissed { id: Uuid },
    /// The timeline was rebuilt from the store.
    Loaded { count: usize },
}

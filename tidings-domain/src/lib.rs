//! Domain layer of the Tidings reminder engine.
//!
//! This crate contains the scheduling and delivery core: given an
//! appointment instant it computes future reminder moments, persists
//! notification records so they survive restarts, and at each due moment
//! hands a rendered alert to a platform delivery backend while keeping
//! the per-user notification timeline consistent with the durable store.
//!
//! The presentation layer, the concrete row store, and the OS-level
//! notification APIs are collaborators behind interfaces
//! ([`NotificationStore`], [`DispatchBackend`]); nothing in this crate
//! renders widgets or talks to an operating system directly.

// Re-export the infrastructure layer.
pub use tidings_core;

pub mod notifications;
pub mod shared_types;

pub use notifications::{
    DispatchBackend, DispatchError, DispatcherBuilder, LoadOutcome, LogBackend, Notification,
    NotificationDispatcher, NotificationError, NotificationStore, NotificationTimeline, Platform,
    ReminderRequest, ReminderScheduler, ReminderSlot, TimelineEvent,
};
pub use shared_types::UserId;

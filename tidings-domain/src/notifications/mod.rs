//! Core notification logic, types, and services.
//!
//! Module layout, one concern per file:
//!
//! - [`types`]: the [`Notification`] entity, reminder requests and slots.
//! - [`errors`]: the error taxonomy ([`NotificationError`], [`DispatchError`]).
//! - [`events`]: broadcast payloads emitted by the timeline.
//! - [`persistence_iface`]: the durable row-store contract.
//! - [`persistence`]: in-memory and whole-file TOML store implementations.
//! - [`timeline`]: the per-user, time-ordered in-memory view.
//! - [`scheduler`]: appointment-relative reminder timers.
//! - [`dispatch`]: platform-keyed device delivery.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod persistence;
pub mod persistence_iface;
pub mod scheduler;
pub mod timeline;
pub mod types;

pub use dispatch::{
    DispatchBackend, DispatcherBuilder, LogBackend, NotificationDispatcher, Platform,
};
pub use errors::{DispatchError, NotificationError};
pub use events::TimelineEvent;
pub use persistence::{FsNotificationStore, InMemoryNotificationStore};
pub use persistence_iface::NotificationStore;
pub use scheduler::ReminderScheduler;
pub use timeline::NotificationTimeline;
pub use types::{LoadOutcome, Notification, ReminderRequest, ReminderSlot, REMINDER_TITLE};

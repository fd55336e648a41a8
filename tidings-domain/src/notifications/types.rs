//! Entity and value types of the notification engine.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared_types::UserId;

/// Title used for every scheduled reminder notification.
pub const REMINDER_TITLE: &str = "Reminder";

/// A single notification shown to one user.
///
/// The `id` is generated at creation and is the identity key for lookup
/// and deletion; `message` is display-only data. Two notifications with
/// identical text remain distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    /// Creation instant; ordering key of the timeline.
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification with a fresh id, timestamped now.
    pub fn new(user_id: UserId, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One appointment to be reminded about.
///
/// Ephemeral: consumed by the scheduler, never persisted. If the process
/// exits before a due-time fires, the reminder is lost unless the caller
/// re-issues the request. The `id` exists so a rescheduled or cancelled
/// appointment can cancel its pending timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderRequest {
    pub id: Uuid,
    pub appointment_time: DateTime<Utc>,
}

impl ReminderRequest {
    /// Creates a request with a fresh cancellation id.
    pub fn new(appointment_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            appointment_time,
        }
    }
}

/// The reminder moments derived from an appointment instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderSlot {
    /// 24 hours ahead of the appointment.
    DayBefore,
    /// 2 hours ahead of the appointment.
    TwoHoursBefore,
}

impl ReminderSlot {
    /// All slots, in firing order.
    pub const ALL: [ReminderSlot; 2] = [ReminderSlot::DayBefore, ReminderSlot::TwoHoursBefore];

    /// How far ahead of the appointment this slot fires.
    pub fn lead_time(&self) -> Duration {
        match self {
            ReminderSlot::DayBefore => Duration::hours(24),
            ReminderSlot::TwoHoursBefore => Duration::hours(2),
        }
    }

    /// The due instant of this slot for the given appointment.
    pub fn due_time(&self, appointment_time: DateTime<Utc>) -> DateTime<Utc> {
        appointment_time - self.lead_time()
    }

    /// The rendered reminder body for the given appointment.
    pub fn message(&self, appointment_time: DateTime<Utc>) -> String {
        let formatted = appointment_time.format("%Y-%m-%d %H:%M");
        match self {
            ReminderSlot::DayBefore => {
                format!("Your appointment is tomorrow at {}", formatted)
            }
            ReminderSlot::TwoHoursBefore => {
                format!("Your appointment is in 2 hours at {}", formatted)
            }
        }
    }
}

/// Result of rebuilding a timeline from the store.
///
/// `Empty` is a signal, not an error: the presentation layer renders a
/// placeholder instead of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store held no rows for this user.
    Empty,
    /// The timeline now holds this many notifications.
    Loaded(usize),
}

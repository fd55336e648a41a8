//! Appointment-relative reminder timers.
//!
//! One [`ReminderRequest`] yields zero, one, or two single-shot timers
//! (24 hours and 2 hours ahead of the appointment); only candidates
//! strictly in the future at scheduling time are armed. Timers live on
//! the tokio runtime and do not survive the process: a restart loses
//! pending reminders unless the caller re-issues the request.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use super::timeline::NotificationTimeline;
use super::types::{ReminderRequest, ReminderSlot, REMINDER_TITLE};

/// Turns appointment instants into future reminder deliveries on a
/// user's timeline.
pub struct ReminderScheduler {
    timeline: Arc<NotificationTimeline>,
    pending: Mutex<HashMap<Uuid, Vec<JoinHandle<()>>>>,
}

impl ReminderScheduler {
    pub fn new(timeline: Arc<NotificationTimeline>) -> Self {
        Self {
            timeline,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Arms a timer for every due-time of `request` that is strictly in
    /// the future; past or present candidates are skipped silently.
    ///
    /// Each timer, on firing, records a "Reminder" notification with the
    /// slot's templated message. A record failure at firing time is
    /// logged and dropped — there is no caller left to notify.
    ///
    /// Returns the slots that were armed.
    pub async fn schedule(&self, request: &ReminderRequest) -> Vec<ReminderSlot> {
        let now = Utc::now();
        let mut armed = Vec::new();
        let mut handles = Vec::new();

        for slot in ReminderSlot::ALL {
            let due = slot.due_time(request.appointment_time);
            if due <= now {
                debug!(
                    "Skipping {:?} for request {}; due time {} is not in the future.",
                    slot, request.id, due
                );
                continue;
            }
            // Non-negative by the check above.
            let delay = (due - now).to_std().unwrap_or_default();
            let timeline = Arc::clone(&self.timeline);
            let message = slot.message(request.appointment_time);
            let request_id = request.id;

            handles.push(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if let Err(e) = timeline.record(REMINDER_TITLE, &message).await {
                    warn!("Reminder for request {} was not recorded: {}", request_id, e);
                }
            }));
            armed.push(slot);
        }

        if !handles.is_empty() {
            self.pending
                .lock()
                .await
                .entry(request.id)
                .or_default()
                .extend(handles);
        }
        armed
    }

    /// Cancels all still-pending timers of a request.
    ///
    /// Cancelling after a timer has fired, or for an unknown request id,
    /// is a no-op. Returns how many pending timers were aborted.
    pub async fn cancel(&self, request_id: Uuid) -> usize {
        let Some(handles) = self.pending.lock().await.remove(&request_id) else {
            return 0;
        };
        let mut aborted = 0;
        for handle in handles {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        debug!("Cancelled {} pending timers for request {}.", aborted, request_id);
        aborted
    }

    /// Number of requests with timers still tracked (fired-but-not-yet
    /// cancelled requests count until swept).
    pub async fn tracked_requests(&self) -> usize {
        self.pending.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::dispatch::NotificationDispatcher;
    use crate::notifications::persistence::InMemoryNotificationStore;
    use crate::shared_types::UserId;
    use chrono::Duration as ChronoDuration;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn test_timeline() -> Arc<NotificationTimeline> {
        Arc::new(NotificationTimeline::new(
            UserId::new("alice"),
            Arc::new(InMemoryNotificationStore::new()),
            Arc::new(NotificationDispatcher::logging_only()),
        ))
    }

    #[tokio::test]
    async fn appointment_in_thirty_minutes_arms_nothing() {
        let scheduler = ReminderScheduler::new(test_timeline());
        let request = ReminderRequest::new(Utc::now() + ChronoDuration::minutes(30));
        assert_eq!(scheduler.schedule(&request).await, vec![]);
        assert_eq!(scheduler.tracked_requests().await, 0);
    }

    #[tokio::test]
    async fn appointment_in_three_hours_arms_only_the_two_hour_slot() {
        let scheduler = ReminderScheduler::new(test_timeline());
        let request = ReminderRequest::new(Utc::now() + ChronoDuration::hours(3));
        assert_eq!(
            scheduler.schedule(&request).await,
            vec![ReminderSlot::TwoHoursBefore]
        );
    }

    #[tokio::test]
    async fn appointment_in_two_days_arms_both_slots() {
        let scheduler = ReminderScheduler::new(test_timeline());
        let request = ReminderRequest::new(Utc::now() + ChronoDuration::days(2));
        assert_eq!(
            scheduler.schedule(&request).await,
            vec![ReminderSlot::DayBefore, ReminderSlot::TwoHoursBefore]
        );
    }

    #[tokio::test]
    async fn past_appointment_arms_nothing() {
        let scheduler = ReminderScheduler::new(test_timeline());
        let request = ReminderRequest::new(Utc::now() - ChronoDuration::hours(1));
        assert!(scheduler.schedule(&request).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn firing_records_the_templated_reminder() {
        let timeline = test_timeline();
        let scheduler = ReminderScheduler::new(timeline.clone());
        let appointment = Utc::now() + ChronoDuration::hours(3);
        let request = ReminderRequest::new(appointment);

        scheduler.schedule(&request).await;
        assert!(timeline.is_empty().await);

        // Cross the one-hour mark to the "2 hours before" due time.
        tokio::time::advance(Duration::from_secs(3601)).await;
        tokio::task::yield_now().await;

        let view = timeline.ordered_view().await;
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, REMINDER_TITLE);
        assert_eq!(
            view[0].message,
            ReminderSlot::TwoHoursBefore.message(appointment)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn both_slots_fire_for_a_far_appointment() {
        let timeline = test_timeline();
        let scheduler = ReminderScheduler::new(timeline.clone());
        let request = ReminderRequest::new(Utc::now() + ChronoDuration::days(2));

        scheduler.schedule(&request).await;

        tokio::time::advance(Duration::from_secs(60 * 60 * 24 + 5)).await;
        tokio::task::yield_now().await;
        assert_eq!(timeline.len().await, 1);

        tokio::time::advance(Duration::from_secs(60 * 60 * 22 + 5)).await;
        tokio::task::yield_now().await;
        assert_eq!(timeline.len().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_aborts_pending_timers() {
        let timeline = test_timeline();
        let scheduler = ReminderScheduler::new(timeline.clone());
        let request = ReminderRequest::new(Utc::now() + ChronoDuration::days(2));

        scheduler.schedule(&request).await;
        assert_eq!(scheduler.cancel(request.id).await, 2);

        tokio::time::advance(Duration::from_secs(60 * 60 * 48)).await;
        tokio::task::yield_now().await;
        assert!(timeline.is_empty().await);
    }

    #[tokio::test]
    async fn cancel_of_unknown_request_is_a_no_op() {
        let scheduler = ReminderScheduler::new(test_timeline());
        assert_eq!(scheduler.cancel(Uuid::new_v4()).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_firing_aborts_nothing() {
        let timeline = test_timeline();
        let scheduler = ReminderScheduler::new(timeline.clone());
        let request = ReminderRequest::new(Utc::now() + ChronoDuration::hours(3));

        scheduler.schedule(&request).await;
        tokio::time::advance(Duration::from_secs(3601)).await;
        tokio::task::yield_now().await;
        assert_eq!(timeline.len().await, 1);

        assert_eq!(scheduler.cancel(request.id).await, 0);
        assert_eq!(timeline.len().await, 1);
    }
}

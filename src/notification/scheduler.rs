use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use tracing::info;

use crate::calendar::format::parse_date_time;
use crate::event::model::Event;

/// A reminder shown to the user for one event.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Notification {
    /// Id of the event the reminder is for.
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TickOutcome {
    pub notified: usize,
}

/// Owns the reminders raised this session and the ids already announced.
///
/// Each event is announced at most once per scheduler; dismissing a
/// notification does not make its event eligible again.
#[derive(Debug, Default)]
pub struct NotificationScheduler {
    notified_event_ids: HashSet<String>,
    active_notifications: Vec<Notification>,
}

impl NotificationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, events: &[Event], now: NaiveDateTime) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        let upcoming = check_upcoming(events, now, &self.notified_event_ids);
        for event in upcoming {
            let message = format_notification_message(event);
            info!(event_id = %event.id, minutes = event.notification_time, "notification_raised");
            self.active_notifications.push(Notification {
                id: event.id.clone(),
                message,
            });
            self.notified_event_ids.insert(event.id.clone());
            outcome.notified += 1;
        }
        outcome
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.active_notifications
    }

    pub fn notified_event_ids(&self) -> &HashSet<String> {
        &self.notified_event_ids
    }

    pub fn is_notified(&self, event_id: &str) -> bool {
        self.notified_event_ids.contains(event_id)
    }

    pub fn len(&self) -> usize {
        self.active_notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_notifications.is_empty()
    }

    /// Dismisses the notification at `index`. Later entries shift down by one;
    /// an out-of-range index leaves the list untouched.
    pub fn remove_notification(&mut self, index: usize) -> Option<Notification> {
        if index >= self.active_notifications.len() {
            return None;
        }
        Some(self.active_notifications.remove(index))
    }
}

/// Events whose reminder window contains `now` and that were not announced yet.
///
/// The window is `(start - notificationTime, start]` seen from the event: an
/// event starting exactly at `now` or earlier is never upcoming. Events whose
/// start cannot be parsed are skipped.
pub fn check_upcoming<'a>(
    events: &'a [Event],
    now: NaiveDateTime,
    notified_event_ids: &HashSet<String>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            let Some(start) = parse_date_time(&event.date, &event.start_time) else {
                return false;
            };
            let remaining = start - now;
            let lead = Duration::minutes(i64::from(event.notification_time));
            remaining > Duration::zero() && remaining <= lead
        })
        .filter(|event| !notified_event_ids.contains(&event.id))
        .collect()
}

pub fn format_notification_message(event: &Event) -> String {
    format!(
        "{}분 후 {} 일정이 시작됩니다.",
        event.notification_time, event.title
    )
}

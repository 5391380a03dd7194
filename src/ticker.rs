use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use eventcal::{Event, Notification, NotificationScheduler};

#[derive(Debug, Clone, Copy)]
pub struct TickerConfig {
    pub interval: Duration,
    pub max_ticks: Option<u64>,
}

/// Drives the scheduler at a fixed interval on the calling thread.
///
/// `emit` receives every notification raised by a tick. Returns the number of
/// ticks run; without `max_ticks` the loop only ends with the process.
pub fn run_ticker<F>(
    events: &[Event],
    scheduler: &mut NotificationScheduler,
    config: TickerConfig,
    mut emit: F,
) -> u64
where
    F: FnMut(&Notification),
{
    run_ticker_with_clock(events, scheduler, config, || Local::now().naive_local(), &mut emit)
}

fn run_ticker_with_clock<C, F>(
    events: &[Event],
    scheduler: &mut NotificationScheduler,
    config: TickerConfig,
    mut clock: C,
    emit: &mut F,
) -> u64
where
    C: FnMut() -> NaiveDateTime,
    F: FnMut(&Notification),
{
    info!(
        events = events.len(),
        interval = ?config.interval,
        "ticker_started"
    );
    let mut ticks = 0_u64;
    let mut next_tick = Instant::now();
    loop {
        if config.max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }
        sleep_until(next_tick);
        next_tick += config.interval;

        let already_raised = scheduler.len();
        let outcome = scheduler.tick(events, clock());
        ticks += 1;
        if outcome.notified > 0 {
            for notification in &scheduler.notifications()[already_raised..] {
                emit(notification);
            }
        }
        debug!(tick = ticks, notified = outcome.notified, "ticker_tick");
    }
    info!(ticks, "ticker_stopped");
    ticks
}

fn sleep_until(deadline: Instant) {
    let now = Instant::now();
    if now >= deadline {
        return;
    }
    std::thread::sleep(deadline.saturating_duration_since(now));
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use eventcal::RepeatInfo;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 15)
            .and_then(|date| date.and_hms_opt(h, m, s))
            .expect("valid datetime")
    }

    fn event(id: &str, start: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("일정 {id}"),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            date: "2025-05-15".to_string(),
            start_time: start.to_string(),
            end_time: "23:00".to_string(),
            repeat: RepeatInfo::default(),
            notification_time: 10,
        }
    }

    #[test]
    fn emits_each_notification_once() {
        let events = vec![event("1", "09:05"), event("2", "09:30")];
        let mut scheduler = NotificationScheduler::new();
        let mut seconds = 0;
        let clock = || {
            seconds += 30;
            at(9, 0, 0) + chrono::Duration::seconds(seconds)
        };
        let mut emitted = Vec::new();
        let config = TickerConfig {
            interval: Duration::ZERO,
            max_ticks: Some(40),
        };

        let mut record = |notification: &Notification| emitted.push(notification.id.clone());
        let ticks = run_ticker_with_clock(&events, &mut scheduler, config, clock, &mut record);

        // 40 ticks of 30s reach 09:20, inside event 2's window.
        assert_eq!(ticks, 40);
        assert_eq!(emitted, ["1", "2"]);
        assert_eq!(scheduler.len(), 2);
    }

    #[test]
    fn zero_max_ticks_does_nothing() {
        let mut scheduler = NotificationScheduler::new();
        let config = TickerConfig {
            interval: Duration::from_secs(60),
            max_ticks: Some(0),
        };
        let ticks = run_ticker(&[], &mut scheduler, config, |_| {});
        assert_eq!(ticks, 0);
    }
}

//! Event time-model engine for a personal calendar.
//!
//! Calendar grid arithmetic, holiday lookup, view/search filtering, overlap
//! detection and the reminder scheduler. Everything here works on plain
//! in-memory data; persistence and presentation live with the caller.

pub mod calendar;
pub mod error;
pub mod event;
pub mod notification;

pub use calendar::format::{
    format_date, format_month_label, format_notification_time, format_week_label, pad_zero,
    pad_zero_to,
};
pub use calendar::grid::{
    CalendarMonthGrid, CalendarView, CalendarWeek, NavigateDirection, days_in_month,
    events_on_day, month_grid, navigate, week_dates,
};
pub use calendar::holidays::{HolidayCalendar, StaticHolidayTable, holidays_in_month};
pub use event::filter::filtered_events;
pub use event::model::{Event, EventFields, EventForm, RepeatInfo, RepeatType};
pub use event::overlap::{EventInterval, find_overlaps, overlaps, to_interval};
pub use notification::scheduler::{
    Notification, NotificationScheduler, check_upcoming, format_notification_message,
};

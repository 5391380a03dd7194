use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::format::parse_date;
use crate::event::model::EventFields;

/// Seven Sunday-first day slots; `None` pads days outside the month.
pub type CalendarWeek = [Option<u32>; 7];

pub type CalendarMonthGrid = Vec<CalendarWeek>;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Week,
    #[default]
    Month,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NavigateDirection {
    Prev,
    Next,
}

/// Number of days in the 1-based `month` of `year`.
///
/// Months outside `1..=12` roll over into neighbouring years the way "day 0 of
/// the following month" does: month 0 is the previous December, month 13 the
/// next January.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let total = i64::from(year) * 12 + i64::from(month) - 1;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) + 1;
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The Sunday on or before `anchor` through the following Saturday.
pub fn week_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let from_sunday = u64::from(anchor.weekday().num_days_from_sunday());
    let sunday = anchor
        .checked_sub_days(Days::new(from_sunday))
        .unwrap_or(anchor);
    sunday.iter_days().take(7).collect()
}

pub fn month_grid(anchor: NaiveDate) -> CalendarMonthGrid {
    let total_days = days_in_month(anchor.year(), anchor.month() as i32);
    let weekday = i64::from(anchor.weekday().num_days_from_sunday());
    let leading_blanks = (weekday - i64::from(anchor.day0())).rem_euclid(7) as u32;

    let slot_count = (leading_blanks + total_days).div_ceil(7) * 7;
    let slots: Vec<Option<u32>> = (0..slot_count)
        .map(|slot| {
            let day = slot.checked_sub(leading_blanks)? + 1;
            (day <= total_days).then_some(day)
        })
        .collect();

    slots
        .chunks_exact(7)
        .map(|chunk| {
            let mut week: CalendarWeek = [None; 7];
            week.copy_from_slice(chunk);
            week
        })
        .collect()
}

/// Events whose date falls on day-of-month `day`, in input order.
pub fn events_on_day<T: EventFields>(events: &[T], day: u32) -> Vec<&T> {
    if !(1..=31).contains(&day) {
        return Vec::new();
    }
    events
        .iter()
        .filter(|event| parse_date(event.date()).is_some_and(|date| date.day() == day))
        .collect()
}

pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Moves the anchor one view page. Month steps keep the day-of-month, clamped
/// to the target month's length.
pub fn navigate(view: CalendarView, date: NaiveDate, direction: NavigateDirection) -> NaiveDate {
    let moved = match (view, direction) {
        (CalendarView::Week, NavigateDirection::Prev) => date.checked_sub_days(Days::new(7)),
        (CalendarView::Week, NavigateDirection::Next) => date.checked_add_days(Days::new(7)),
        (CalendarView::Month, NavigateDirection::Prev) => date.checked_sub_months(Months::new(1)),
        (CalendarView::Month, NavigateDirection::Next) => date.checked_add_months(Months::new(1)),
    };
    moved.unwrap_or(date)
}

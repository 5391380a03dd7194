use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::calendar::format::{format_date, parse_date};
use crate::calendar::grid::week_dates;

/// Holiday names keyed by `YYYY-MM-DD`.
pub type HolidayMap = BTreeMap<String, String>;

/// Source of public holidays shown on the calendar grid.
pub trait HolidayCalendar {
    /// Holidays falling in `date`'s year and month; empty if none.
    fn holidays_in_month(&self, date: NaiveDate) -> HolidayMap;

    /// Holidays on the seven days of the Sunday-first week containing `anchor`.
    /// Each month the week touches is looked up once.
    fn holidays_in_week(&self, anchor: NaiveDate) -> HolidayMap {
        let days = week_dates(anchor);
        let keys: Vec<String> = days.iter().map(|day| format_date(*day, None)).collect();
        let mut holidays = HolidayMap::new();
        for (index, day) in days.iter().enumerate() {
            if index > 0 && day.month() == days[index - 1].month() {
                continue;
            }
            holidays.extend(
                self.holidays_in_month(*day)
                    .into_iter()
                    .filter(|(key, _)| keys.contains(key)),
            );
        }
        holidays
    }
}

const HOLIDAYS_2025: &[(&str, &str)] = &[
    ("2025-01-01", "신정"),
    ("2025-01-29", "설날"),
    ("2025-01-30", "설날"),
    ("2025-01-31", "설날"),
    ("2025-03-01", "삼일절"),
    ("2025-05-05", "어린이날"),
    ("2025-06-06", "현충일"),
    ("2025-08-15", "광복절"),
    ("2025-10-03", "개천절"),
    ("2025-10-05", "추석"),
    ("2025-10-06", "추석"),
    ("2025-10-07", "추석"),
    ("2025-10-09", "한글날"),
    ("2025-12-25", "크리스마스"),
];

/// Compiled-in table of fixed holiday dates. Only covers the years listed in
/// the table; other years have no holidays.
#[derive(Debug, Clone, Copy)]
pub struct StaticHolidayTable {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for StaticHolidayTable {
    fn default() -> Self {
        Self {
            entries: HOLIDAYS_2025,
        }
    }
}

impl HolidayCalendar for StaticHolidayTable {
    fn holidays_in_month(&self, date: NaiveDate) -> HolidayMap {
        self.entries
            .iter()
            .filter(|(key, _)| {
                parse_date(key)
                    .is_some_and(|day| day.year() == date.year() && day.month() == date.month())
            })
            .map(|(key, name)| ((*key).to_string(), (*name).to_string()))
            .collect()
    }
}

/// Holidays of `date`'s month from the built-in table.
pub fn holidays_in_month(date: NaiveDate) -> HolidayMap {
    StaticHolidayTable::default().holidays_in_month(date)
}

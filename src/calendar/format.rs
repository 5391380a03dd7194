use std::fmt::Display;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

pub const DEFAULT_PAD_WIDTH: usize = 2;

/// Reminder lead times offered by the event form, in minutes.
pub const NOTIFICATION_OPTIONS: [u32; 5] = [1, 10, 60, 120, 1440];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `#` stands for one ASCII digit, every other byte must match literally.
fn has_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input
            .bytes()
            .zip(shape.bytes())
            .all(|(byte, expected)| match expected {
                b'#' => byte.is_ascii_digit(),
                _ => byte == expected,
            })
}

/// Parses a zero-padded `YYYY-MM-DD` date. Unpadded forms such as
/// `2025-5-15` are rejected.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    if !has_shape(input, "####-##-##") {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Parses zero-padded `HH:MM` or `HH:MM:SS` wall-clock time.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let format = if has_shape(input, "##:##") {
        "%H:%M"
    } else if has_shape(input, "##:##:##") {
        "%H:%M:%S"
    } else {
        return None;
    };
    NaiveTime::parse_from_str(input, format).ok()
}

pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    Some(parse_date(date)?.and_time(parse_time(time)?))
}

pub fn pad_zero(value: impl Display) -> String {
    pad_zero_to(value, DEFAULT_PAD_WIDTH)
}

/// Left-pads the display form of `value` with `'0'` up to `size` characters.
/// Strings already at least `size` long are returned as-is.
pub fn pad_zero_to(value: impl Display, size: usize) -> String {
    format!("{:0>size$}", value.to_string())
}

/// Formats `date` as `YYYY-MM-DD`.
///
/// When `day` is given it replaces the day-of-month verbatim. The result is not
/// re-validated, so `Some(32)` yields `"YYYY-MM-32"`.
pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    format!(
        "{}-{}-{}",
        date.year(),
        pad_zero(date.month()),
        pad_zero(day.unwrap_or_else(|| date.day()))
    )
}

pub fn format_month_label(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Labels the Sunday-first week containing `date`.
///
/// A week belongs to the month that holds its Thursday, so the last days of
/// December can be labelled as week 1 of the next January.
pub fn format_week_label(date: NaiveDate) -> String {
    let from_sunday = u64::from(date.weekday().num_days_from_sunday());
    let thursday = date
        .checked_sub_days(Days::new(from_sunday))
        .and_then(|sunday| sunday.checked_add_days(Days::new(4)))
        .unwrap_or(date);
    let week_of_month = thursday.day0() / 7 + 1;
    format!(
        "{}년 {}월 {}주",
        thursday.year(),
        thursday.month(),
        week_of_month
    )
}

pub fn format_notification_time(minutes: u32) -> String {
    const DAY: u32 = 24 * 60;
    if minutes > 0 && minutes % DAY == 0 {
        format!("{}일 전", minutes / DAY)
    } else if minutes > 0 && minutes % 60 == 0 {
        format!("{}시간 전", minutes / 60)
    } else {
        format!("{minutes}분 전")
    }
}

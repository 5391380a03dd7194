use std::fmt::Write as _;

use chrono::NaiveDate;

use eventcal::calendar::format::{
    format_date, format_month_label, format_notification_time, format_week_label, parse_date,
};
use eventcal::calendar::grid::{events_on_day, month_grid, week_dates};
use eventcal::calendar::holidays::HolidayMap;
use eventcal::Event;

const WEEKDAY_HEADER: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
pub const NO_RESULTS: &str = "검색 결과가 없습니다.";
pub const NO_OVERLAPS: &str = "겹치는 일정이 없습니다.";

/// Month grid with a `*` after days that have events and `!` after holidays.
pub fn render_month(anchor: NaiveDate, events: &[&Event], holidays: &HolidayMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_month_label(anchor));
    let _ = writeln!(out, "{}", WEEKDAY_HEADER.map(|day| format!("{day:>3}")).join(" "));

    for week in month_grid(anchor) {
        let cells: Vec<String> = week
            .iter()
            .map(|slot| match slot {
                Some(day) => {
                    let mut marks = String::new();
                    if holidays.contains_key(&format_date(anchor, Some(*day))) {
                        marks.push('!');
                    }
                    if !events_on_day(events, *day).is_empty() {
                        marks.push('*');
                    }
                    format!("{:>2}{marks:<2}", day)
                }
                None => "    ".to_string(),
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("").trim_end());
    }

    render_holidays(&mut out, holidays);
    render_event_section(&mut out, events);
    out
}

pub fn render_week(anchor: NaiveDate, events: &[&Event], holidays: &HolidayMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_week_label(anchor));
    for (index, date) in week_dates(anchor).into_iter().enumerate() {
        let key = format_date(date, None);
        let mut line = format!("{key} ({})", WEEKDAY_HEADER[index]);
        if let Some(name) = holidays.get(&key) {
            let _ = write!(line, " [{name}]");
        }
        let _ = writeln!(out, "{line}");
        for event in events
            .iter()
            .filter(|event| parse_date(&event.date) == Some(date))
        {
            let _ = writeln!(out, "    {}", event_line(event));
        }
    }
    out
}

pub fn render_event_list(events: &[&Event]) -> String {
    if events.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let mut out = String::new();
    for event in events {
        let _ = writeln!(out, "{}", event_detail(event));
    }
    out
}

pub fn render_overlaps(overlapping: &[&Event]) -> String {
    if overlapping.is_empty() {
        return format!("{NO_OVERLAPS}\n");
    }
    let mut out = String::from("다음 일정과 겹칩니다:\n");
    for event in overlapping {
        let _ = writeln!(
            out,
            "  {} ({} {}-{})",
            event.title, event.date, event.start_time, event.end_time
        );
    }
    out
}

fn render_holidays(out: &mut String, holidays: &HolidayMap) {
    if holidays.is_empty() {
        return;
    }
    let _ = writeln!(out, "공휴일:");
    for (date, name) in holidays {
        let _ = writeln!(out, "  {date} {name}");
    }
}

fn render_event_section(out: &mut String, events: &[&Event]) {
    if events.is_empty() {
        return;
    }
    let _ = writeln!(out, "일정:");
    for event in events {
        let _ = writeln!(out, "  {}", event_line(event));
    }
}

fn event_line(event: &Event) -> String {
    format!(
        "{} {}-{} {} [{}]",
        event.date, event.start_time, event.end_time, event.title, event.id
    )
}

fn event_detail(event: &Event) -> String {
    let mut line = event_line(event);
    if !event.location.is_empty() {
        let _ = write!(line, " @ {}", event.location);
    }
    if !event.category.is_empty() {
        let _ = write!(line, " #{}", event.category);
    }
    if event.notification_time > 0 {
        let _ = write!(line, " 알림: {}", format_notification_time(event.notification_time));
    }
    line
}

use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::format::parse_date;
use crate::calendar::grid::{CalendarView, days_in_month, is_date_in_range, week_dates};
use crate::event::model::EventFields;

/// Inclusive date range shown by a calendar view.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ViewWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ViewWindow {
    pub fn for_view(view: CalendarView, current_date: NaiveDate) -> Self {
        match view {
            CalendarView::Week => {
                let week = week_dates(current_date);
                Self {
                    start: week.first().copied().unwrap_or(current_date),
                    end: week.last().copied().unwrap_or(current_date),
                }
            }
            CalendarView::Month => {
                let start = current_date
                    .checked_sub_days(Days::new(u64::from(current_date.day0())))
                    .unwrap_or(current_date);
                let length = days_in_month(current_date.year(), current_date.month() as i32);
                let end = start
                    .checked_add_days(Days::new(u64::from(length - 1)))
                    .unwrap_or(current_date);
                Self { start, end }
            }
        }
    }

    /// Whether the event's date lies inside the window. Unparseable dates never do.
    pub fn contains<T: EventFields>(&self, event: &T) -> bool {
        parse_date(event.date()).is_some_and(|date| is_date_in_range(date, self.start, self.end))
    }
}

/// Case-insensitive substring match over title, description and location.
/// An empty term matches everything.
pub fn matches_search<T: EventFields>(event: &T, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    [event.title(), event.description(), event.location()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Events visible in `view` around `current_date` that match `search_term`,
/// in input order.
pub fn filtered_events<'a, T: EventFields>(
    events: &'a [T],
    search_term: &str,
    current_date: NaiveDate,
    view: CalendarView,
) -> Vec<&'a T> {
    let window = ViewWindow::for_view(view, current_date);
    events
        .iter()
        .filter(|event| window.contains(*event) && matches_search(*event, search_term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::model::{Event, EventForm, RepeatInfo};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn event(id: &str, title: &str, date: &str, description: &str, location: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            category: String::new(),
            date: date.to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            repeat: RepeatInfo::default(),
            notification_time: 15,
        }
    }

    fn fixtures() -> Vec<Event> {
        vec![
            event("1", "팀 회의", "2025-05-13", "Team 주간 업무 점검", "회의실 A"),
            event("2", "제품 발표", "2025-05-15", "신제품 발표회", "대회의실"),
            event("3", "점심 회식", "2025-05-15", "팀 회식", "식당"),
            event("4", "월간 보고", "2025-05-30", "5월 월간 보고", "회의실 B"),
            event("5", "팀 빌딩", "2025-06-05", "팀 빌딩 활동", "야외 공간"),
        ]
    }

    fn ids<T: EventFields>(events: &[&T]) -> Vec<String> {
        events
            .iter()
            .filter_map(|event| event.id().map(str::to_string))
            .collect()
    }

    #[test]
    fn week_view_without_term_returns_week_events() {
        let events = fixtures();
        let result = filtered_events(&events, "", date(2025, 5, 15), CalendarView::Week);
        assert_eq!(ids(&result), ["1", "2", "3"]);
    }

    #[test]
    fn month_view_returns_whole_month() {
        let events = fixtures();
        let result = filtered_events(&events, "", date(2025, 5, 15), CalendarView::Month);
        assert_eq!(ids(&result), ["1", "2", "3", "4"]);
    }

    #[test]
    fn term_matches_title_description_or_location() {
        let events = fixtures();
        let anchor = date(2025, 5, 15);
        let by_title = filtered_events(&events, "팀", anchor, CalendarView::Month);
        assert_eq!(ids(&by_title), ["1", "3"]);

        let by_description = filtered_events(&events, "보고", anchor, CalendarView::Month);
        assert_eq!(ids(&by_description), ["4"]);

        let by_location = filtered_events(&events, "회의실", anchor, CalendarView::Month);
        assert_eq!(ids(&by_location), ["1", "2", "4"]);
    }

    #[test]
    fn term_is_case_insensitive() {
        let events = fixtures();
        let result = filtered_events(&events, "team", date(2025, 5, 15), CalendarView::Month);
        assert_eq!(ids(&result), ["1"]);
        let result = filtered_events(&events, "TEAM", date(2025, 5, 15), CalendarView::Month);
        assert_eq!(ids(&result), ["1"]);
    }

    #[test]
    fn term_and_window_both_apply() {
        let events = fixtures();
        let result = filtered_events(&events, "회의", date(2025, 5, 15), CalendarView::Week);
        assert_eq!(ids(&result), ["1", "2"]);
    }

    #[test]
    fn empty_results_are_empty() {
        let events = fixtures();
        assert!(filtered_events(&events, "", date(2025, 4, 1), CalendarView::Week).is_empty());
        assert!(
            filtered_events(&events, "존재하지않는검색어", date(2025, 5, 15), CalendarView::Month)
                .is_empty()
        );
        let none: Vec<Event> = Vec::new();
        assert!(filtered_events(&none, "팀", date(2025, 5, 15), CalendarView::Month).is_empty());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let events = vec![
            event("a", "first", "2025-05-01", "", ""),
            event("b", "last", "2025-05-31", "", ""),
            event("c", "before", "2025-04-30", "", ""),
            event("d", "after", "2025-06-01", "", ""),
        ];
        let result = filtered_events(&events, "", date(2025, 5, 20), CalendarView::Month);
        assert_eq!(ids(&result), ["a", "b"]);

        let window = ViewWindow::for_view(CalendarView::Week, date(2025, 12, 30));
        assert_eq!(window.start, date(2025, 12, 28));
        assert_eq!(window.end, date(2026, 1, 3));
    }

    #[test]
    fn unparseable_dates_are_skipped() {
        let events = vec![
            event("bad", "회의", "2025/05/15", "", ""),
            event("ok", "회의", "2025-05-15", "", ""),
        ];
        let result = filtered_events(&events, "", date(2025, 5, 15), CalendarView::Month);
        assert_eq!(ids(&result), ["ok"]);
    }

    #[test]
    fn search_and_window_commute() {
        let events = fixtures();
        let anchors = [date(2025, 5, 15), date(2025, 6, 1), date(2025, 5, 30)];
        let terms = ["", "팀", "회의", "TEAM", "공간", "없음"];
        for anchor in anchors {
            for view in [CalendarView::Week, CalendarView::Month] {
                let window = ViewWindow::for_view(view, anchor);
                for term in terms {
                    let search_first: Vec<&Event> = events
                        .iter()
                        .filter(|e| matches_search(*e, term))
                        .filter(|e| window.contains(*e))
                        .collect();
                    let window_first: Vec<&Event> = events
                        .iter()
                        .filter(|e| window.contains(*e))
                        .filter(|e| matches_search(*e, term))
                        .collect();
                    assert_eq!(search_first, window_first);
                    assert_eq!(filtered_events(&events, term, anchor, view), window_first);
                }
            }
        }
    }

    #[test]
    fn drafts_filter_like_events() {
        let drafts = vec![EventForm {
            title: "Draft Review".to_string(),
            date: "2025-05-14".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            ..EventForm::default()
        }];
        let result = filtered_events(&drafts, "review", date(2025, 5, 15), CalendarView::Week);
        assert_eq!(result.len(), 1);
    }
}

use crate::calendar::format::parse_time;

pub const START_TIME_ERROR: &str = "시작 시간은 종료 시간보다 빨라야 합니다.";
pub const END_TIME_ERROR: &str = "종료 시간은 시작 시간보다 늦어야 합니다.";

/// Per-field messages for the start/end inputs of the event form.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TimeValidation {
    pub start_time_error: Option<&'static str>,
    pub end_time_error: Option<&'static str>,
}

impl TimeValidation {
    pub fn is_ok(&self) -> bool {
        self.start_time_error.is_none() && self.end_time_error.is_none()
    }
}

/// Flags a start time that is not strictly before the end time.
///
/// Blank or unparseable inputs are not reported; the form is still being
/// filled in.
pub fn time_error_message(start: &str, end: &str) -> TimeValidation {
    let (Some(start), Some(end)) = (parse_time(start), parse_time(end)) else {
        return TimeValidation::default();
    };
    if start < end {
        return TimeValidation::default();
    }
    TimeValidation {
        start_time_error: Some(START_TIME_ERROR),
        end_time_error: Some(END_TIME_ERROR),
    }
}

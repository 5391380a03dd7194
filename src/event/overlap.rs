//! Time-range overlap checks run before an event is saved.
//!
//! Intervals are half-open: an event ending at 11:00 and another starting at
//! 11:00 do not overlap. Any side that fails to parse makes the pair
//! non-overlapping instead of failing the whole check.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::calendar::format::{parse_date, parse_date_time};
use crate::event::model::EventFields;

/// Start and end instants of an event; `None` marks an unparseable side.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EventInterval {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl EventInterval {
    pub fn is_valid(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn overlaps(&self, other: &EventInterval) -> bool {
        match (self.start, self.end, other.start, other.end) {
            (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
                a_start < b_end && b_start < a_end
            }
            _ => false,
        }
    }
}

pub fn to_interval<T: EventFields>(event: &T) -> EventInterval {
    EventInterval {
        start: parse_date_time(event.date(), event.start_time()),
        end: parse_date_time(event.date(), event.end_time()),
    }
}

/// Whether two events share any instant on the same day.
pub fn overlaps<A: EventFields, B: EventFields>(a: &A, b: &B) -> bool {
    if parse_date(a.date()) != parse_date(b.date()) {
        return false;
    }
    to_interval(a).overlaps(&to_interval(b))
}

/// Existing events overlapping `candidate`, in input order.
///
/// An existing event with the candidate's id is skipped so editing an event
/// never reports a clash with its own previous version.
pub fn find_overlaps<'a, C: EventFields, E: EventFields>(
    candidate: &C,
    existing: &'a [E],
) -> Vec<&'a E> {
    let candidate_interval = to_interval(candidate);
    if !candidate_interval.is_valid() {
        debug!(date = candidate.date(), "overlap_check_skipped_invalid_candidate");
        return Vec::new();
    }

    let candidate_date = parse_date(candidate.date());
    let overlapping: Vec<&E> = existing
        .iter()
        .filter(|event| match (candidate.id(), event.id()) {
            (Some(candidate_id), Some(event_id)) => candidate_id != event_id,
            _ => true,
        })
        .filter(|event| {
            parse_date(event.date()) == candidate_date
                && candidate_interval.overlaps(&to_interval(*event))
        })
        .collect();

    debug!(
        date = candidate.date(),
        checked = existing.len(),
        overlapping = overlapping.len(),
        "overlap_check"
    );
    overlapping
}

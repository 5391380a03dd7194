use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::event::model::Event;

pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_events_text(&content)?;
    debug!(path = %path.display(), count = events.len(), "events_loaded");
    Ok(events)
}

/// Parses an event file. Accepts `{ "events": [...] }` or a bare array.
///
/// Date and time strings are not checked here; a malformed event is kept and
/// simply never overlaps or notifies.
pub fn parse_events_text(content: &str) -> Result<Vec<Event>> {
    let parsed = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Event>>(content)
    } else {
        serde_json::from_str::<EventFile>(content).map(|file| file.events)
    };
    let events = parsed.map_err(|source| StoreError::Json {
        line: source.line(),
        column: source.column(),
        source,
    })?;

    let mut ids = HashSet::new();
    for event in &events {
        if !ids.insert(event.id.as_str()) {
            return Err(StoreError::DuplicateId(event.id.clone()));
        }
    }

    Ok(events)
}

pub fn save_events(path: &Path, events: &[Event]) -> Result<()> {
    let payload = EventFileRef { events };
    let text = serde_json::to_string_pretty(&payload).map_err(StoreError::Serialize)?;
    fs::write(path, format!("{text}\n")).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = events.len(), "events_saved");
    Ok(())
}

#[derive(Debug, Deserialize)]
struct EventFile {
    events: Vec<Event>,
}

#[derive(Serialize)]
struct EventFileRef<'a> {
    events: &'a [Event],
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    const VALID: &str = r#"
{
  "events": [
    {
      "id": "1",
      "title": "기존 회의",
      "date": "2025-10-15",
      "startTime": "09:00",
      "endTime": "10:00",
      "description": "기존 팀 미팅",
      "location": "회의실 B",
      "category": "업무",
      "repeat": { "type": "none", "interval": 0 },
      "notificationTime": 10
    },
    {
      "id": "2",
      "title": "broken",
      "date": "not-a-date",
      "startTime": "25:99",
      "endTime": "10:00"
    }
  ]
}
"#;

    #[test]
    fn parses_wrapped_event_file() {
        let events = parse_events_text(VALID).expect("valid file");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "기존 회의");
        assert_eq!(events[1].date, "not-a-date");
    }

    #[test]
    fn parses_bare_array() {
        let json = r#"[{"id":"a","title":"t","date":"2025-01-01","startTime":"09:00","endTime":"10:00"}]"#;
        let events = parse_events_text(json).expect("valid array");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "a");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_events_text("{ not-valid-json ").expect_err("must fail");
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn missing_field_error_names_field_and_position() {
        let json = r#"{
  "events": [
    {"id":"1","date":"2025-01-01","startTime":"09:00","endTime":"10:00"}
  ]
}"#;
        let err = parse_events_text(json).expect_err("title is required");
        let message = err.to_string();
        assert!(message.contains("missing field `title`"), "{message}");
        match err {
            StoreError::Json { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_notification_time_reports_position() {
        let json = r#"[
  {"id":"1","title":"t","date":"2025-01-01","startTime":"09:00","endTime":"10:00","notificationTime":-5}
]"#;
        let err = parse_events_text(json).expect_err("negative lead time");
        match err {
            StoreError::Json { line, column, .. } => {
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrapper_without_events_key_is_rejected() {
        let err = parse_events_text(r#"{"items": []}"#).expect_err("events key required");
        assert!(err.to_string().contains("missing field `events`"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
  {"id":"dup","title":"a","date":"2025-01-01","startTime":"09:00","endTime":"10:00"},
  {"id":"dup","title":"b","date":"2025-01-02","startTime":"09:00","endTime":"10:00"}
]"#;
        let err = parse_events_text(json).expect_err("duplicate ids should fail");
        assert!(err.to_string().contains("duplicate event id"));
    }

    #[test]
    fn save_then_load_keeps_events() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("events.json");
        let events = parse_events_text(VALID).expect("valid file");

        save_events(&path, &events).expect("save");
        let loaded = load_events(&path).expect("load");
        assert_eq!(loaded, events);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("missing.json");
        let err = load_events(&path).expect_err("missing file");
        assert!(err.to_string().contains("missing.json"));
    }
}

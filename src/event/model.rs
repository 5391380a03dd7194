use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Recurrence descriptor. Stored and round-tripped, never expanded.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type", default)]
    pub kind: RepeatType,
    #[serde(default)]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// A persisted calendar entry.
///
/// `date`, `start_time` and `end_time` are kept as the raw wall-clock strings
/// the persistence layer handed over. Parsing happens where an instant is
/// needed, so a malformed record never blocks loading the rest.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    #[serde(default)]
    pub notification_time: u32,
}

/// An event draft that has not been assigned an id yet.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    #[serde(default)]
    pub notification_time: u32,
}

impl EventForm {
    pub fn into_event(self, id: impl Into<String>) -> Event {
        Event {
            id: id.into(),
            title: self.title,
            description: self.description,
            location: self.location,
            category: self.category,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            repeat: self.repeat,
            notification_time: self.notification_time,
        }
    }
}

/// Fields shared by [`Event`] and [`EventForm`].
///
/// Filtering, overlap detection and reminders are written against this trait
/// so drafts and persisted events go through the same code.
pub trait EventFields {
    fn id(&self) -> Option<&str>;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn location(&self) -> &str;
    fn category(&self) -> &str;
    fn date(&self) -> &str;
    fn start_time(&self) -> &str;
    fn end_time(&self) -> &str;
    fn notification_time(&self) -> u32;
}

macro_rules! impl_event_fields {
    ($ty:ty, |$this:ident| $id:expr) => {
        impl EventFields for $ty {
            fn id(&self) -> Option<&str> {
                let $this = self;
                $id
            }
            fn title(&self) -> &str {
                &self.title
            }
            fn description(&self) -> &str {
                &self.description
            }
            fn location(&self) -> &str {
                &self.location
            }
            fn category(&self) -> &str {
                &self.category
            }
            fn date(&self) -> &str {
                &self.date
            }
            fn start_time(&self) -> &str {
                &self.start_time
            }
            fn end_time(&self) -> &str {
                &self.end_time
            }
            fn notification_time(&self) -> u32 {
                self.notification_time
            }
        }
    };
}

impl_event_fields!(Event, |this| Some(this.id.as_str()));
impl_event_fields!(EventForm, |_this| None);

impl<T: EventFields + ?Sized> EventFields for &T {
    fn id(&self) -> Option<&str> {
        (**self).id()
    }
    fn title(&self) -> &str {
        (**self).title()
    }
    fn description(&self) -> &str {
        (**self).description()
    }
    fn location(&self) -> &str {
        (**self).location()
    }
    fn category(&self) -> &str {
        (**self).category()
    }
    fn date(&self) -> &str {
        (**self).date()
    }
    fn start_time(&self) -> &str {
        (**self).start_time()
    }
    fn end_time(&self) -> &str {
        (**self).end_time()
    }
    fn notification_time(&self) -> u32 {
        (**self).notification_time()
    }
}

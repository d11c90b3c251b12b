use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const HISTORY_CAP: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "tomei")]
    Taken,
    #[serde(rename = "pulou")]
    Skipped,
    #[serde(rename = "lembrete")]
    Reminded,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Taken => "tomei",
            Action::Skipped => "pulou",
            Action::Reminded => "lembrete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub action: Action,
    pub med: String,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

/// Newest-first event log, capped on write.
#[derive(Debug, Default)]
pub struct History(Vec<Event>);

impl History {
    pub fn new(events: Vec<Event>) -> Self {
        Self(events)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn events(&self) -> &[Event] {
        &self.0
    }

    pub fn record(&mut self, action: Action, med: &str, at: OffsetDateTime) {
        self.0.insert(
            0,
            Event {
                action,
                med: med.to_owned(),
                at,
            },
        );
        self.0.truncate(HISTORY_CAP);
    }
}

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_yaml::Value;

/// One record as it appears in the data file, before any checks.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawItem {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub slides: Option<Value>,
    #[serde(default)]
    pub video: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemDate {
    Single(NaiveDate),
    Range { begin: NaiveDate, end: NaiveDate },
}

impl ItemDate {
    pub fn begin(&self) -> NaiveDate {
        match *self {
            ItemDate::Single(date) => date,
            ItemDate::Range { begin, .. } => begin,
        }
    }

    pub fn end(&self) -> NaiveDate {
        match *self {
            ItemDate::Single(date) => date,
            ItemDate::Range { end, .. } => end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub begin: NaiveDate,
    pub end: NaiveDate,
    pub pretty_date: String,
}

/// A validated item. `schedule` is `None` exactly for self-paced content.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub title: String,
    pub schedule: Option<Schedule>,
    pub slides: Option<String>,
    pub video: Option<String>,
    pub recorded: bool,
    pub extra: BTreeMap<String, Value>,
}

impl Item {
    pub fn is_self_paced(&self) -> bool {
        self.schedule.is_none()
    }

    pub fn begin(&self) -> Option<NaiveDate> {
        self.schedule.as_ref().map(|s| s.begin)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.schedule.as_ref().map(|s| s.end)
    }

    pub fn pretty_date(&self) -> &str {
        self.schedule
            .as_ref()
            .map(|s| s.pretty_date.as_str())
            .unwrap_or("")
    }

    pub fn slides_href(&self) -> &str {
        self.slides.as_deref().unwrap_or("")
    }

    pub fn video_href(&self) -> &str {
        self.video.as_deref().unwrap_or("")
    }

    pub fn has_field(&self, key: &str) -> bool {
        !self.field(key).is_empty()
    }

    /// Passthrough field rendered as text; empty when missing or not a scalar.
    pub fn field(&self, key: &str) -> String {
        match self.extra.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }
}

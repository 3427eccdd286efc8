use std::fmt;

use chrono::NaiveDate;
use serde_yaml::Value;
use thiserror::Error;

use crate::dates::pretty_date;
use crate::models::{Item, ItemDate, RawItem, Schedule};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordErrorKind {
    #[error("title is missing")]
    MissingTitle,
    #[error("title must be text")]
    InvalidTitle,
    #[error("date {0:?} is not a YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("date must be a date or a list of two dates")]
    UnexpectedDateType,
    #[error("date list must have exactly two elements, found {0}")]
    WrongDateCount(usize),
    #[error("date range ends on {end} before it begins on {begin}")]
    ReversedRange { begin: NaiveDate, end: NaiveDate },
    #[error("slides must be a link")]
    InvalidSlides,
    #[error("video must be a link or a boolean")]
    InvalidVideo,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RecordError {
    pub index: usize,
    pub title: Option<String>,
    pub kind: RecordErrorKind,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "item #{} ({title:?}): {}", self.index + 1, self.kind),
            None => write!(f, "item #{}: {}", self.index + 1, self.kind),
        }
    }
}

/// Every problem found in the data file.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<RecordError>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid item(s) in data file", self.errors.len())?;
        for err in &self.errors {
            write!(f, "\n  - {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

pub fn normalize_all(raw: &[RawItem]) -> Result<Vec<Item>, ValidationReport> {
    let mut items = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();

    for (index, record) in raw.iter().enumerate() {
        match normalize(record) {
            Ok(item) => items.push(item),
            Err(kinds) => {
                let title = match &record.title {
                    Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                    _ => None,
                };
                errors.extend(kinds.into_iter().map(|kind| RecordError {
                    index,
                    title: title.clone(),
                    kind,
                }));
            }
        }
    }

    if errors.is_empty() {
        Ok(items)
    } else {
        Err(ValidationReport { errors })
    }
}

pub fn normalize(raw: &RawItem) -> Result<Item, Vec<RecordErrorKind>> {
    let mut errors = Vec::new();

    let title = match &raw.title {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            errors.push(RecordErrorKind::MissingTitle);
            None
        }
        Some(_) => {
            errors.push(RecordErrorKind::InvalidTitle);
            None
        }
    };

    let date = match raw
        .date
        .as_ref()
        .filter(|value| !value.is_null())
        .map(parse_item_date)
        .transpose()
    {
        Ok(date) => date,
        Err(kind) => {
            errors.push(kind);
            None
        }
    };

    let slides = match &raw.slides {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(RecordErrorKind::InvalidSlides);
            None
        }
    };

    let (video, recorded) = match &raw.video {
        None | Some(Value::Null) | Some(Value::Bool(false)) => (None, false),
        Some(Value::String(s)) if s.is_empty() => (None, false),
        Some(Value::String(s)) => (Some(s.clone()), true),
        Some(Value::Bool(true)) => (None, true),
        Some(_) => {
            errors.push(RecordErrorKind::InvalidVideo);
            (None, false)
        }
    };

    match title {
        Some(title) if errors.is_empty() => Ok(Item {
            title,
            schedule: date.map(schedule_for),
            slides,
            video,
            recorded,
            extra: raw.extra.clone(),
        }),
        _ => Err(errors),
    }
}

fn schedule_for(date: ItemDate) -> Schedule {
    Schedule {
        begin: date.begin(),
        end: date.end(),
        pretty_date: pretty_date(date.begin()),
    }
}

fn parse_item_date(value: &Value) -> Result<ItemDate, RecordErrorKind> {
    match value {
        Value::Sequence(values) => {
            let [begin, end] = values.as_slice() else {
                return Err(RecordErrorKind::WrongDateCount(values.len()));
            };
            let (begin, end) = (parse_date(begin)?, parse_date(end)?);
            if end < begin {
                return Err(RecordErrorKind::ReversedRange { begin, end });
            }
            Ok(ItemDate::Range { begin, end })
        }
        other => parse_date(other).map(ItemDate::Single),
    }
}

fn parse_date(value: &Value) -> Result<NaiveDate, RecordErrorKind> {
    match value {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map_err(|_| RecordErrorKind::InvalidDate(s.clone())),
        _ => Err(RecordErrorKind::UnexpectedDateType),
    }
}

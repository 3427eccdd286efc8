use chrono::format::{Item as FormatItem, StrftimeItems};
use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::debug;

const UNPADDED_DAY: &str = "%-d";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported date format: {0}")]
pub struct UnsupportedFormat(pub String);

pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Formats `date` as "<Month> <day><suffix>, <Year>" using `day_spec` for the
/// day of month. Fails when the formatter does not understand the specifier.
pub fn format_pretty(date: NaiveDate, day_spec: &str) -> Result<String, UnsupportedFormat> {
    let fmt = format!("%B {day_spec}{}, %Y", ordinal_suffix(date.day()));
    let items: Vec<FormatItem<'_>> = StrftimeItems::new(&fmt).collect();
    if items.iter().any(|item| matches!(item, FormatItem::Error)) {
        return Err(UnsupportedFormat(fmt));
    }
    Ok(date.format_with_items(items.into_iter()).to_string())
}

/// Zero-padded day variant, e.g. "March 09th, 2020".
pub fn format_padded(date: NaiveDate) -> String {
    format!(
        "{} {:02}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

pub fn pretty_date(date: NaiveDate) -> String {
    pretty_date_with(date, UNPADDED_DAY)
}

fn pretty_date_with(date: NaiveDate, day_spec: &str) -> String {
    format_pretty(date, day_spec).unwrap_or_else(|err| {
        debug!(%date, error = %err, "falling back to zero-padded day");
        format_padded(date)
    })
}

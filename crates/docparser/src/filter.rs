//! Request parameter normalization.
//!
//! The bulk results endpoint takes a list filter, a result format and a date
//! filter. The helpers here coerce loosely-typed input into the exact strings
//! the API expects.

use std::str::FromStr;

use jiff::civil::{Date, DateTime};
use jiff::fmt::strtime;
use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::{Error, Result};

/// Format of rendered dates: `YYYY-MM-DDTHH:MM:SS±HHMM`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Date sent when no usable date was supplied.
pub const EPOCH: &str = "1970-01-01T00:00:00+0000";

/// Which documents the bulk results endpoint returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    /// The most recently uploaded documents
    #[default]
    LastUploaded,
    /// Documents uploaded after the date filter
    UploadedAfter,
    /// Documents processed after the date filter
    ProcessedAfter,
}

impl ListFilter {
    /// Parses a list filter, falling back to [`ListFilter::LastUploaded`]
    /// for anything unrecognized.
    pub fn from_input(input: impl AsRef<str>) -> Self {
        Self::from_str(input.as_ref()).unwrap_or_default()
    }
}

/// Shape of returned parse results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    /// Nested objects
    #[default]
    Object,
    /// Flattened key/value pairs
    Flat,
}

/// A date filter value.
///
/// Structured values are rendered directly; text is parsed first. Civil
/// (zone-less) values are taken to be UTC.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// An instant, rendered in UTC.
    Timestamp(Timestamp),
    /// A zoned datetime, rendered with its own offset.
    Zoned(Zoned),
    /// A civil datetime.
    DateTime(DateTime),
    /// A civil date, at midnight.
    Date(Date),
    /// A date-like string such as `2024-03-01`, `2024-03-01T10:00:00` or
    /// `2024-03-01T10:00:00+02:00`.
    Text(String),
}

impl DateValue {
    /// The current time in the system time zone.
    pub fn now() -> Self {
        Self::Zoned(Zoned::now())
    }

    fn to_zoned(&self) -> Result<Option<Zoned>> {
        let zoned = match self {
            Self::Timestamp(ts) => ts.to_zoned(TimeZone::UTC),
            Self::Zoned(zoned) => zoned.clone(),
            Self::DateTime(dt) => dt.to_zoned(TimeZone::UTC)?,
            Self::Date(date) => date.to_zoned(TimeZone::UTC)?,
            Self::Text(text) if text.trim().is_empty() => return Ok(None),
            Self::Text(text) => parse_date_text(text.trim())?,
        };

        Ok(Some(zoned))
    }
}

impl From<Timestamp> for DateValue {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Zoned> for DateValue {
    fn from(value: Zoned) -> Self {
        Self::Zoned(value)
    }
}

impl From<DateTime> for DateValue {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Date> for DateValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Renders a date filter as `YYYY-MM-DDTHH:MM:SS±HHMM`.
///
/// An absent value, or empty text, renders as [`EPOCH`].
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if text cannot be read as a date.
pub fn normalize_date(value: Option<&DateValue>) -> Result<String> {
    let zoned = match value {
        Some(value) => value.to_zoned()?,
        None => None,
    };

    Ok(match zoned {
        Some(zoned) => zoned.strftime(DATE_FORMAT).to_string(),
        None => EPOCH.to_string(),
    })
}

fn parse_date_text(text: &str) -> Result<Zoned> {
    // Explicit numeric offsets keep their offset.
    for format in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%:z"] {
        if let Ok(parsed) = strtime::parse(format, text) {
            if let (Some(offset), Ok(ts)) = (parsed.offset(), parsed.to_timestamp()) {
                return Ok(ts.to_zoned(TimeZone::fixed(offset)));
            }
        }
    }

    if let Ok(zoned) = text.parse::<Zoned>() {
        return Ok(zoned);
    }

    if let Ok(ts) = text.parse::<Timestamp>() {
        return Ok(ts.to_zoned(TimeZone::fixed(Offset::UTC)));
    }

    if let Ok(dt) = text.parse::<DateTime>() {
        return Ok(dt.to_zoned(TimeZone::UTC)?);
    }

    if let Ok(date) = text.parse::<Date>() {
        return Ok(date.to_zoned(TimeZone::UTC)?);
    }

    Err(Error::invalid_input(format!("Invalid date value '{}'", text)))
}

//! Values a date can be built from, and how they resolve to an instant.

use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use date_types::{DateError, DateResult};

use crate::zone::Zone;

/// Largest distance from the epoch, in milliseconds, that a date may sit at
/// (100,000,000 days either side). Instants are further bounded by what
/// chrono can represent, roughly years -262143 to 262142.
pub const MAX_TIMESTAMP_MILLIS: i64 = 8_640_000_000_000_000;

/// Date-time layouts read as wall time in the value's zone
const LOCAL_DATE_TIME_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts with minute precision and an explicit offset. A trailing
/// `Z` is rewritten to `+00:00` before these are tried.
const ABSOLUTE_MINUTE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Anything a date can be built from
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// An absolute instant
    Instant(DateTime<Utc>),
    /// An ISO-like date string
    Text(String),
    /// Milliseconds since the Unix epoch
    Millis(f64),
}

impl DateInput {
    /// Resolve to an instant, reading zone-less wall times in `zone`.
    pub fn resolve(&self, zone: &Zone) -> DateResult<DateTime<Utc>> {
        let resolved = match self {
            DateInput::Instant(instant) => check_range(*instant),
            DateInput::Text(text) => parse_text(text, zone),
            DateInput::Millis(ms) => from_millis(*ms),
        };
        if let Err(error) = &resolved {
            log::debug!("could not resolve {:?}: {}", self, error);
        }
        resolved
    }
}

/// Instant `ms` milliseconds after the epoch, if it lies in range
pub(crate) fn instant_from_millis(ms: i64) -> Option<DateTime<Utc>> {
    if ms.abs() > MAX_TIMESTAMP_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(ms)
}

fn check_range(instant: DateTime<Utc>) -> DateResult<DateTime<Utc>> {
    instant_from_millis(instant.timestamp_millis()).ok_or_else(|| {
        DateError::invalid_date(format!("instant {} is out of range", instant))
    })
}

fn from_millis(ms: f64) -> DateResult<DateTime<Utc>> {
    if !ms.is_finite() {
        return Err(DateError::invalid_date(format!("timestamp {} is not finite", ms)));
    }
    let truncated = ms.trunc();
    if truncated.abs() > MAX_TIMESTAMP_MILLIS as f64 {
        return Err(DateError::invalid_date(format!("timestamp {} is out of range", ms)));
    }
    instant_from_millis(truncated as i64)
        .ok_or_else(|| DateError::invalid_date(format!("timestamp {} is out of range", ms)))
}

fn parse_text(text: &str, zone: &Zone) -> DateResult<DateTime<Utc>> {
    let text = text.trim();
    let parsed = parse_absolute(text)
        .or_else(|| parse_local(text, zone))
        .or_else(|| parse_date_only(text))
        .or_else(|| parse_period_start(text))
        .or_else(|| parse_us_date(text, zone));

    match parsed {
        Some(instant) => check_range(instant),
        None => Err(DateError::invalid_date("Invalid date input")),
    }
}

// 2024-11-05T14:30:00.000Z, 2024-11-05T14:30:00+05:30, 2024-11-05T14:30Z
fn parse_absolute(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    let normalized = match text.strip_suffix('Z') {
        Some(head) => format!("{}+00:00", head),
        None => text.to_string(),
    };
    ABSOLUTE_MINUTE_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(&normalized, layout).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// 2024-01-15T12:30:45.123 carries no offset and means wall time
fn parse_local(text: &str, zone: &Zone) -> Option<DateTime<Utc>> {
    LOCAL_DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .and_then(|local| zone.from_local(&local))
}

// A bare ISO date is midnight UTC, not local midnight
fn parse_date_only(text: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

// `2024` and `2024-03` start at midnight UTC on the first day of the period
fn parse_period_start(text: &str) -> Option<DateTime<Utc>> {
    if !text.bytes().take(4).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = match text.len() {
        4 => format!("{}-01-01", text),
        7 => format!("{}-01", text),
        _ => return None,
    };
    parse_date_only(&padded)
}

fn parse_us_date(text: &str, zone: &Zone) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text, "%m/%d/%Y").ok()?;
    zone.from_local(&date.and_hms_opt(0, 0, 0)?)
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<&String> for DateInput {
    fn from(text: &String) -> Self {
        DateInput::Text(text.clone())
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        DateInput::Millis(ms as f64)
    }
}

impl From<f64> for DateInput {
    fn from(ms: f64) -> Self {
        DateInput::Millis(ms)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(instant: DateTime<Tz>) -> Self {
        DateInput::Instant(instant.with_timezone(&Utc))
    }
}

impl From<SystemTime> for DateInput {
    fn from(time: SystemTime) -> Self {
        DateInput::Instant(DateTime::<Utc>::from(time))
    }
}

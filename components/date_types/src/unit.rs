//! The closed set of time units.
//!
//! A [`TimeUnit`] is both an arithmetic step (`add(3, TimeUnit::Days)`) and a
//! truncation granularity (`is_after(other, Some(TimeUnit::Months))`). Values
//! arriving from untyped sources (strings, JSON) pass through the conversions
//! here, which reject anything outside the set with
//! [`ErrorKind::UnsupportedUnit`](crate::ErrorKind::UnsupportedUnit).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DateError;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;
const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
const MS_PER_DAY: i64 = MS_PER_HOUR * 24;
const MS_PER_WEEK: i64 = MS_PER_DAY * 7;

/// A calendar or clock granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TimeUnit {
    /// Milliseconds
    Milliseconds,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
    /// Weeks (seven days)
    Weeks,
    /// Calendar months
    Months,
    /// Calendar years
    Years,
}

impl TimeUnit {
    /// Every unit, finest first
    pub const ALL: [TimeUnit; 8] = [
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// The lowercase name used in strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }

    /// Fixed length in milliseconds, or `None` for months and years, whose
    /// length depends on the calendar.
    pub fn fixed_millis(&self) -> Option<i64> {
        match self {
            TimeUnit::Milliseconds => Some(1),
            TimeUnit::Seconds => Some(MS_PER_SECOND),
            TimeUnit::Minutes => Some(MS_PER_MINUTE),
            TimeUnit::Hours => Some(MS_PER_HOUR),
            TimeUnit::Days => Some(MS_PER_DAY),
            TimeUnit::Weeks => Some(MS_PER_WEEK),
            TimeUnit::Months | TimeUnit::Years => None,
        }
    }

    /// Returns true if `name` is exactly one of the unit names
    pub fn is_valid_time_unit(name: &str) -> bool {
        Self::ALL.iter().any(|unit| unit.as_str() == name)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| DateError::unsupported_unit(s))
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&Value> for TimeUnit {
    type Error = DateError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(name) => name.parse(),
            // `Value`'s Display prints `null`, numbers and objects as JSON text
            other => Err(DateError::unsupported_unit(other)),
        }
    }
}

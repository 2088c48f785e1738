//! The immutable date value.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use date_types::{DateComponents, DateError, DateFormat, DateResult, TimeUnit};

use crate::arithmetic;
use crate::input::{instant_from_millis, DateInput, MAX_TIMESTAMP_MILLIS};
use crate::options::DateOptions;
use crate::truncate::truncate_date;
use crate::zone::Zone;

/// An instant paired with the format it renders in.
///
/// Values never change after construction. [`add`](DateValue::add),
/// [`subtract`](DateValue::subtract) and [`with_format`](DateValue::with_format)
/// return new values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValue {
    instant: DateTime<Utc>,
    format: DateFormat,
    zone: Zone,
}

impl DateValue {
    /// The current instant, ISO format, host local time
    pub fn now() -> DateResult<Self> {
        DateOptions::default().now()
    }

    /// Build from any [`DateInput`] with the default options
    pub fn new(input: impl Into<DateInput>) -> DateResult<Self> {
        DateOptions::default().parse(input)
    }

    pub(crate) fn from_parts(instant: DateTime<Utc>, format: DateFormat, zone: Zone) -> Self {
        DateValue {
            instant,
            format,
            zone,
        }
    }

    /// The format this value renders with
    pub fn format(&self) -> &DateFormat {
        &self.format
    }

    /// The zone calendar fields are read in
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    fn local(&self) -> NaiveDateTime {
        self.zone.to_local(&self.instant)
    }

    fn resolve(&self, other: impl Into<DateInput>) -> DateResult<DateTime<Utc>> {
        other.into().resolve(&self.zone)
    }

    // ===== ARITHMETIC =====

    /// Move this date by `amount` units.
    ///
    /// Months and years keep the day of the month where the target month has
    /// it, and otherwise land on that month's last day.
    ///
    /// ```
    /// use date_types::TimeUnit;
    /// use date_value::{DateOptions, Zone};
    ///
    /// let jan31 = DateOptions::new().with_zone(Zone::utc()).parse("2024-01-31").unwrap();
    /// assert_eq!(jan31.add(1, TimeUnit::Months).unwrap().format_date(), "2024-02-29");
    /// ```
    pub fn add(&self, amount: i64, unit: TimeUnit) -> DateResult<Self> {
        let shifted = arithmetic::shift(self.local(), amount, unit)
            .and_then(|local| self.zone.from_local(&local))
            .and_then(|instant| instant_from_millis(instant.timestamp_millis()));

        match shifted {
            Some(instant) => Ok(DateValue::from_parts(instant, self.format.clone(), self.zone)),
            None => {
                log::trace!("{} {} from {} leaves the calendar", amount, unit, self.instant);
                Err(DateError::invalid_date(format!(
                    "adding {} {} to {} is out of range",
                    amount, unit, self.instant
                )))
            }
        }
    }

    /// Move this date back by `amount` units; `add` with the sign flipped
    pub fn subtract(&self, amount: i64, unit: TimeUnit) -> DateResult<Self> {
        let negated = amount.checked_neg().ok_or_else(|| {
            DateError::invalid_date(format!("cannot subtract {} {}", amount, unit))
        })?;
        self.add(negated, unit)
    }

    // ===== DIFFERENCES =====

    /// `self - other` expressed in `unit` (days when `None`).
    ///
    /// Milliseconds through weeks divide the raw millisecond gap by the unit's
    /// fixed length, so results may be fractional. Months and years subtract
    /// calendar fields and ignore everything finer.
    pub fn diff(&self, other: impl Into<DateInput>, unit: Option<TimeUnit>) -> DateResult<f64> {
        let unit = unit.unwrap_or(TimeUnit::Days);
        let other = self.resolve(other)?;

        let result = match unit {
            TimeUnit::Milliseconds
            | TimeUnit::Seconds
            | TimeUnit::Minutes
            | TimeUnit::Hours
            | TimeUnit::Days
            | TimeUnit::Weeks => {
                let delta = self.instant.timestamp_millis() - other.timestamp_millis();
                let length = unit.fixed_millis().unwrap_or(1);
                delta as f64 / length as f64
            }
            TimeUnit::Months => {
                arithmetic::month_delta(&self.local(), &self.zone.to_local(&other)) as f64
            }
            TimeUnit::Years => {
                arithmetic::year_delta(&self.local(), &self.zone.to_local(&other)) as f64
            }
        };
        Ok(result)
    }

    // ===== FIELDS AND FORMATTING =====

    /// Calendar fields of this instant in its zone
    pub fn get_components(&self) -> DateComponents {
        let local = self.local();
        DateComponents {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hours: local.hour(),
            minutes: local.minute(),
            seconds: local.second(),
            milliseconds: local.nanosecond() / 1_000_000,
        }
    }

    /// Render with this value's format
    pub fn format_date(&self) -> String {
        self.format.render(&self.get_components())
    }

    /// Whether the instant lies in the supported range
    pub fn is_valid(&self) -> bool {
        self.instant.timestamp_millis().abs() <= MAX_TIMESTAMP_MILLIS
    }

    /// A copy of the underlying instant
    pub fn to_date(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Same instant and zone, different format
    pub fn with_format(&self, format: impl Into<DateFormat>) -> Self {
        DateValue::from_parts(self.instant, format.into(), self.zone)
    }

    /// This value rounded down to `granularity`, keeping format and zone
    pub fn truncate(&self, granularity: TimeUnit) -> DateResult<Self> {
        let instant = truncate_date(&self.instant, granularity, &self.zone)?;
        Ok(DateValue::from_parts(instant, self.format.clone(), self.zone))
    }

    // ===== COMPARISON =====

    /// True if this date falls strictly after `other` at `granularity`
    /// (milliseconds when `None`).
    ///
    /// Coarser granularities compare truncated instants, so two times on the
    /// same calendar day are neither after nor before each other at `Days`.
    pub fn is_after(
        &self,
        other: impl Into<DateInput>,
        granularity: Option<TimeUnit>,
    ) -> DateResult<bool> {
        let (this, other) = self.comparison_keys(other.into(), granularity)?;
        Ok(this > other)
    }

    /// True if this date falls strictly before `other` at `granularity`
    /// (milliseconds when `None`).
    pub fn is_before(
        &self,
        other: impl Into<DateInput>,
        granularity: Option<TimeUnit>,
    ) -> DateResult<bool> {
        let (this, other) = self.comparison_keys(other.into(), granularity)?;
        Ok(this < other)
    }

    fn comparison_keys(
        &self,
        other: DateInput,
        granularity: Option<TimeUnit>,
    ) -> DateResult<(i64, i64)> {
        let granularity = granularity.unwrap_or(TimeUnit::Milliseconds);
        let other = self.resolve(other)?;

        if granularity == TimeUnit::Milliseconds {
            return Ok((self.instant.timestamp_millis(), other.timestamp_millis()));
        }

        let this = truncate_date(&self.instant, granularity, &self.zone)?.timestamp_millis();
        let other = truncate_date(&other, granularity, &self.zone)?.timestamp_millis();
        log::trace!("comparing at {}: this={} other={}", granularity, this, other);
        Ok((this, other))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_date())
    }
}

impl From<&DateValue> for DateInput {
    fn from(value: &DateValue) -> Self {
        DateInput::Instant(value.instant)
    }
}

impl From<DateValue> for DateInput {
    fn from(value: DateValue) -> Self {
        DateInput::Instant(value.instant)
    }
}

//! Construction-time settings for date values.

use std::sync::Arc;

use date_types::{DateFormat, DateResult};

use crate::clock::{Clock, SystemClock};
use crate::input::DateInput;
use crate::value::DateValue;
use crate::zone::Zone;

/// Format, zone and clock used when building a [`DateValue`]
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use date_types::DateFormat;
/// use date_value::{DateOptions, FixedClock, Zone};
///
/// let options = DateOptions::new()
///     .with_format(DateFormat::Verbose)
///     .with_zone(Zone::utc())
///     .with_clock(FixedClock(Utc.with_ymd_and_hms(2024, 7, 4, 9, 0, 0).unwrap()));
///
/// assert_eq!(options.now().unwrap().format_date(), "July 04, 2024");
/// ```
#[derive(Debug, Clone)]
pub struct DateOptions {
    format: DateFormat,
    zone: Zone,
    clock: Arc<dyn Clock>,
}

impl DateOptions {
    /// ISO format, host local time, system clock
    pub fn new() -> Self {
        DateOptions {
            format: DateFormat::Iso,
            zone: Zone::Local,
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the format new values render with
    pub fn with_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the zone calendar fields are read and written in
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Set the clock consulted when no input is given
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build a value from `input`, or from the clock when `input` is `None`.
    ///
    /// Fails with `InvalidDate` when the input does not denote a valid instant.
    pub fn build(&self, input: Option<DateInput>) -> DateResult<DateValue> {
        let input = input.unwrap_or_else(|| DateInput::Instant(self.clock.now()));
        let instant = input.resolve(&self.zone)?;
        Ok(DateValue::from_parts(instant, self.format.clone(), self.zone))
    }

    /// Build a value from `input`
    pub fn parse(&self, input: impl Into<DateInput>) -> DateResult<DateValue> {
        self.build(Some(input.into()))
    }

    /// Build a value at the clock's current instant
    pub fn now(&self) -> DateResult<DateValue> {
        self.build(None)
    }

    /// The configured format
    pub fn format(&self) -> &DateFormat {
        &self.format
    }

    /// The configured zone
    pub fn zone(&self) -> Zone {
        self.zone
    }
}

impl Default for DateOptions {
    fn default() -> Self {
        DateOptions::new()
    }
}

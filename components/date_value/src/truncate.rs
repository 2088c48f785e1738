//! Rounding instants down to a granularity.

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use date_types::{DateError, DateResult, TimeUnit};

use crate::zone::Zone;

/// Zero every field of `instant` finer than `granularity`, reading and
/// writing fields in `zone`.
///
/// Weeks start on Monday. `Milliseconds` returns the instant unchanged.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use date_types::TimeUnit;
/// use date_value::{truncate_date, Zone};
///
/// // Sunday 25 February 2024
/// let instant = Utc.with_ymd_and_hms(2024, 2, 25, 15, 45, 30).unwrap();
/// let monday = truncate_date(&instant, TimeUnit::Weeks, &Zone::utc()).unwrap();
/// assert_eq!(monday, Utc.with_ymd_and_hms(2024, 2, 19, 0, 0, 0).unwrap());
/// ```
pub fn truncate_date(
    instant: &DateTime<Utc>,
    granularity: TimeUnit,
    zone: &Zone,
) -> DateResult<DateTime<Utc>> {
    if granularity == TimeUnit::Milliseconds {
        return Ok(*instant);
    }

    let local = zone.to_local(instant);
    truncate_local(local, granularity)
        .and_then(|truncated| zone.from_local(&truncated))
        .ok_or_else(|| {
            DateError::invalid_date(format!("cannot truncate {} to {}", instant, granularity))
        })
}

fn truncate_local(local: NaiveDateTime, granularity: TimeUnit) -> Option<NaiveDateTime> {
    let date = local.date();
    let time = local.time();
    match granularity {
        TimeUnit::Milliseconds => Some(local),
        TimeUnit::Seconds => time.with_nanosecond(0).map(|t| date.and_time(t)),
        TimeUnit::Minutes => NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
            .map(|t| date.and_time(t)),
        TimeUnit::Hours => NaiveTime::from_hms_opt(time.hour(), 0, 0).map(|t| date.and_time(t)),
        TimeUnit::Days => date.and_hms_opt(0, 0, 0),
        TimeUnit::Weeks => {
            let back = i64::from(date.weekday().num_days_from_monday());
            date.checked_sub_signed(TimeDelta::days(back))?.and_hms_opt(0, 0, 0)
        }
        TimeUnit::Months => date.with_day(1)?.and_hms_opt(0, 0, 0),
        TimeUnit::Years => date.with_ordinal(1)?.and_hms_opt(0, 0, 0),
    }
}

//! Calendar arithmetic on wall-clock fields.
//!
//! Clock units (milliseconds through weeks) move the wall time by a fixed
//! amount and let the calendar carry into larger fields. Months and years
//! keep the day of the month, clamped to the length of the target month, so
//! Jan 31 + 1 month is the last day of February rather than early March.

use chrono::{Datelike, Months, NaiveDateTime, TimeDelta};
use date_types::TimeUnit;

/// Move `local` by `amount` steps of `unit`. `None` if the result leaves the
/// representable calendar.
pub fn shift(local: NaiveDateTime, amount: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    match unit {
        TimeUnit::Milliseconds => local.checked_add_signed(TimeDelta::try_milliseconds(amount)?),
        TimeUnit::Seconds => local.checked_add_signed(TimeDelta::try_seconds(amount)?),
        TimeUnit::Minutes => local.checked_add_signed(TimeDelta::try_minutes(amount)?),
        TimeUnit::Hours => local.checked_add_signed(TimeDelta::try_hours(amount)?),
        TimeUnit::Days => local.checked_add_signed(TimeDelta::try_days(amount)?),
        TimeUnit::Weeks => local.checked_add_signed(TimeDelta::try_weeks(amount)?),
        TimeUnit::Months => shift_months(local, amount),
        TimeUnit::Years => shift_months(local, amount.checked_mul(12)?),
    }
}

// chrono clamps the day to the end of the target month
fn shift_months(local: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
    if amount >= 0 {
        local.checked_add_months(months)
    } else {
        local.checked_sub_months(months)
    }
}

/// Signed difference in calendar months, ignoring the day of the month
pub fn month_delta(this: &NaiveDateTime, other: &NaiveDateTime) -> i64 {
    year_delta(this, other) * 12 + (i64::from(this.month()) - i64::from(other.month()))
}

/// Signed difference in calendar years, ignoring month and day
pub fn year_delta(this: &NaiveDateTime, other: &NaiveDateTime) -> i64 {
    i64::from(this.year()) - i64::from(other.year())
}

//! The calendar a date value reads and writes its fields in.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

/// Time zone used to map instants to calendar fields and back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The host's local time zone, including its daylight-saving rules
    #[default]
    Local,
    /// A constant offset from UTC
    Fixed(FixedOffset),
}

impl Zone {
    /// UTC, as a fixed zero offset
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// A fixed offset east of UTC, in seconds. `None` if out of range.
    pub fn fixed(offset_seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(offset_seconds).map(Zone::Fixed)
    }

    /// Wall-clock fields of `instant` in this zone
    pub fn to_local(&self, instant: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            Zone::Local => instant.with_timezone(&chrono::Local).naive_local(),
            Zone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }

    /// The instant a wall-clock reading denotes in this zone.
    ///
    /// A reading repeated by a backward transition maps to its earlier
    /// occurrence. A reading skipped by a forward transition is interpreted
    /// with the offset in effect before the gap, which moves it forward.
    pub fn from_local(&self, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Local => resolve(&chrono::Local, local),
            Zone::Fixed(offset) => resolve(offset, local),
        }
    }
}

fn resolve<Tz: TimeZone>(tz: &Tz, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => {
            let before_gap = local.checked_sub_signed(TimeDelta::days(1))?;
            let offset = tz.offset_from_local_datetime(&before_gap).earliest()?.fix();
            let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

use serde::{Deserialize, Serialize};

/// Calendar fields read from an instant in some zone.
///
/// `month` is 1-based (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateComponents {
    /// Full year, e.g. 2024
    pub year: i32,
    /// Month of the year (1-12)
    pub month: u32,
    /// Day of the month (1-31)
    pub day: u32,
    /// Hour of the day (0-23)
    pub hours: u32,
    /// Minute of the hour (0-59)
    pub minutes: u32,
    /// Second of the minute (0-59)
    pub seconds: u32,
    /// Millisecond of the second (0-999)
    pub milliseconds: u32,
}

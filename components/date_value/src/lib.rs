//! Immutable date values with calendar arithmetic.
//!
//! This crate provides [`DateValue`], a small wrapper around an instant and a
//! format template:
//! - Construction from strings, epoch milliseconds or chrono instants
//! - Unit-based add/subtract with month-end clamping
//! - Differences in clock units (fractional) or calendar units (whole)
//! - Token formatting and component extraction
//! - Granularity-aware comparison
//!
//! # Example
//!
//! ```
//! use date_types::{DateFormat, TimeUnit};
//! use date_value::{DateOptions, Zone};
//!
//! let options = DateOptions::new().with_zone(Zone::utc());
//! let start = options.parse("2024-01-15").unwrap();
//!
//! assert_eq!(start.diff("2024-01-10", None).unwrap(), 5.0);
//! assert_eq!(
//!     start.subtract(1, TimeUnit::Months).unwrap().format_date(),
//!     "2023-12-15"
//! );
//! assert_eq!(start.with_format(DateFormat::Eu).format_date(), "15.01.2024");
//! assert!(!start.is_after("2024-01-15T18:00:00Z", Some(TimeUnit::Days)).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod arithmetic;
pub mod clock;
pub mod input;
pub mod options;
pub mod truncate;
pub mod value;
pub mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use input::{DateInput, MAX_TIMESTAMP_MILLIS};
pub use options::DateOptions;
pub use truncate::truncate_date;
pub use value::DateValue;
pub use zone::Zone;

//! Shared vocabulary for date values.
//!
//! This crate holds the closed sets every date operation speaks in:
//!
//! - [`TimeUnit`] - the eight granularities used for arithmetic, diffs and truncation
//! - [`DateFormat`] - named format presets or a custom token template
//! - [`DateComponents`] - plain calendar fields read from an instant
//! - [`DateError`] / [`ErrorKind`] - the single error taxonomy
//!
//! # Examples
//!
//! ```
//! use date_types::{DateComponents, DateFormat, TimeUnit};
//!
//! let unit: TimeUnit = "weeks".parse().unwrap();
//! assert_eq!(unit.fixed_millis(), Some(604_800_000));
//!
//! let parts = DateComponents {
//!     year: 2024,
//!     month: 1,
//!     day: 1,
//!     hours: 0,
//!     minutes: 0,
//!     seconds: 0,
//!     milliseconds: 0,
//! };
//! assert_eq!(DateFormat::Verbose.render(&parts), "January 01, 2024");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod components;
mod error;
mod format;
mod unit;

pub use components::DateComponents;
pub use error::{DateError, DateResult, ErrorKind};
pub use format::{DateFormat, MONTH_NAMES};
pub use unit::TimeUnit;

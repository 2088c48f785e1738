//! Integration test suite for the date components
//!
//! This crate holds tests that drive `date_value` through the vocabulary of
//! `date_types`, the way an application would.

/// Re-export components for test convenience
pub mod components {
    pub use date_types;
    pub use date_value;
}

use date_value::{DateOptions, DateValue, Zone};

/// Build a UTC-calendar value, panicking on bad input. Test helper only.
pub fn utc_date(input: &str) -> DateValue {
    DateOptions::new()
        .with_zone(Zone::utc())
        .parse(input)
        .unwrap_or_else(|e| panic!("{}: {}", input, e))
}

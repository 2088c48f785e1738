//! Error types for date construction and unit validation.

use std::fmt;

/// The kind of date error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input could not be resolved to a valid instant
    InvalidDate,
    /// A value outside the closed set of time units was supplied
    UnsupportedUnit,
}

impl ErrorKind {
    /// Get the error name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDate => "InvalidDate",
            ErrorKind::UnsupportedUnit => "UnsupportedUnit",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A date error with its kind and a human-readable message.
///
/// # Examples
///
/// ```
/// use date_types::{DateError, ErrorKind};
///
/// let error = DateError::unsupported_unit("fortnights");
/// assert_eq!(error.kind, ErrorKind::UnsupportedUnit);
/// assert_eq!(error.to_string(), "Unsupported time unit: fortnights");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DateError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl DateError {
    /// Input could not be turned into an instant; `cause` is kept in the message.
    pub fn invalid_date(cause: impl fmt::Display) -> Self {
        DateError {
            kind: ErrorKind::InvalidDate,
            message: format!("Failed to parse date: {}", cause),
        }
    }

    /// `value` is not one of the eight time units. The value is quoted verbatim.
    pub fn unsupported_unit(value: impl fmt::Display) -> Self {
        DateError {
            kind: ErrorKind::UnsupportedUnit,
            message: format!("Unsupported time unit: {}", value),
        }
    }

    /// Returns true if this error is of the given kind
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

/// Result type for date operations
pub type DateResult<T> = Result<T, DateError>;

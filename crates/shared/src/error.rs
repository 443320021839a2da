//! Calendar error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using `DateError`.
pub type DateResult<T> = Result<T, DateError>;

/// Errors raised when constructing or parsing calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Day of month outside 1-31.
    #[error("day of month must be 1-31, got {day}")]
    InvalidDay {
        /// The rejected day value.
        day: u32,
    },

    /// Month outside 1-12.
    #[error("month must be 1-12, got {month}")]
    InvalidMonth {
        /// The rejected month value.
        month: u32,
    },

    /// Day/month pair that does not exist in the resolved year (e.g. 31 February).
    #[error("day {day} does not exist in month {month} of {year}")]
    InvalidDate {
        /// Day of month.
        day: u32,
        /// Month (1-12).
        month: u32,
        /// The concrete year the day/month was resolved against.
        year: i32,
    },

    /// Input string is not a valid `YYYY-MM-DD` date.
    #[error("expected a YYYY-MM-DD date, got {input:?}")]
    ParseDate {
        /// The rejected input.
        input: String,
    },

    /// Range start date falls after its end date.
    #[error("range start {start} is after end {end}")]
    InvalidRange {
        /// Start of the rejected range.
        start: NaiveDate,
        /// End of the rejected range.
        end: NaiveDate,
    },
}

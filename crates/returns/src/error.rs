//! Returns error types.

use chrono::NaiveDate;
use thiserror::Error;
use waterline_shared::DateError;

/// Errors raised when generating return cycles and lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnsError {
    /// Cycle generation was asked for an inverted date range.
    #[error("invalid return cycle range: start {start} is after end {end}")]
    InvalidCycleRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// A date or descriptor input was invalid.
    #[error(transparent)]
    Date(#[from] DateError),
}

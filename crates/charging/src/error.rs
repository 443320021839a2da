//! Charging error types.

use thiserror::Error;
use waterline_shared::DateError;

/// Errors raised by the charging calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChargingError {
    /// An abstraction-period descriptor failed validation.
    #[error("invalid abstraction period: {0}")]
    Period(#[source] DateError),

    /// A date input was invalid.
    #[error(transparent)]
    Date(#[from] DateError),
}

//! The recurring abstraction-period descriptor.

use serde::{Deserialize, Serialize};

use crate::error::{DateError, DateResult};

/// A recurring yearly window during which water abstraction applies.
///
/// The window is described by day/month boundaries only (e.g. "1 April to
/// 31 October, every year") and may wrap the end of the calendar year
/// ("1 November to 31 March"). It is expanded against a concrete financial
/// year by the charging crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractionPeriod {
    /// Day of month the window opens on.
    pub start_day: u32,
    /// Month (1-12) the window opens in.
    pub start_month: u32,
    /// Day of month the window closes on.
    pub end_day: u32,
    /// Month (1-12) the window closes in.
    pub end_month: u32,
}

impl AbstractionPeriod {
    /// Creates a descriptor. Call [`validate`](Self::validate) before
    /// expanding it against a financial year.
    #[must_use]
    pub const fn new(start_day: u32, start_month: u32, end_day: u32, end_month: u32) -> Self {
        Self {
            start_day,
            start_month,
            end_day,
            end_month,
        }
    }

    /// The window covering the whole year, 1 January - 31 December.
    #[must_use]
    pub const fn all_year() -> Self {
        Self::new(1, 1, 31, 12)
    }

    /// Checks that day and month fields are in range.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDay`] or [`DateError::InvalidMonth`] for
    /// the first out-of-range field.
    pub fn validate(&self) -> DateResult<()> {
        for day in [self.start_day, self.end_day] {
            if !(1..=31).contains(&day) {
                return Err(DateError::InvalidDay { day });
            }
        }
        for month in [self.start_month, self.end_month] {
            if !(1..=12).contains(&month) {
                return Err(DateError::InvalidMonth { month });
            }
        }
        Ok(())
    }

    /// Returns true if the window runs over the end of the calendar year,
    /// i.e. its start day/month falls after its end day/month.
    #[must_use]
    pub fn wraps_calendar_year(&self) -> bool {
        (self.start_month, self.start_day) > (self.end_month, self.end_day)
    }
}

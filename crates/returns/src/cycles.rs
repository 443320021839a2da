//! Return-cycle scheduling.
//!
//! Returns are collected against yearly cycles: winter (all-year) cycles run
//! 1 April - 31 March and summer cycles 1 November - 31 October. The service
//! captures cycles from 1 November 2017 onward.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ReturnsError;

/// One yearly returns cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnCycle {
    /// First day of the cycle.
    pub start_date: NaiveDate,
    /// Last day of the cycle.
    pub end_date: NaiveDate,
    /// True for summer cycles (1 November - 31 October).
    pub is_summer: bool,
    /// Date the return for this cycle is due.
    pub due_date: NaiveDate,
}

/// Due date for a cycle ending on the given date: 28 days later, except the
/// cycle ending 31 March 2020, which had a statutory extension to
/// 16 October 2020.
fn due_date(end_date: NaiveDate) -> Option<NaiveDate> {
    if (end_date.year(), end_date.month(), end_date.day()) == (2020, 3, 31) {
        NaiveDate::from_ymd_opt(2020, 10, 16)
    } else {
        end_date.checked_add_days(Days::new(28))
    }
}

fn cycle_starting(start_date: NaiveDate, is_summer: bool) -> Option<ReturnCycle> {
    let end_date = start_date
        .checked_add_months(Months::new(12))?
        .pred_opt()?;
    Some(ReturnCycle {
        start_date,
        end_date,
        is_summer,
        due_date: due_date(end_date)?,
    })
}

/// Returns the first cycle starting on or after the given date.
///
/// A date on or before 1 April starts that year's winter cycle; on or before
/// 1 November, that year's summer cycle; otherwise the following year's
/// winter cycle. `None` only when the cycle would fall outside chrono's
/// supported date range.
#[must_use]
pub fn next_cycle(date: NaiveDate) -> Option<ReturnCycle> {
    let winter = NaiveDate::from_ymd_opt(date.year(), 4, 1)?;
    let summer = NaiveDate::from_ymd_opt(date.year(), 11, 1)?;

    if date <= winter {
        cycle_starting(winter, false)
    } else if date <= summer {
        cycle_starting(summer, true)
    } else {
        cycle_starting(NaiveDate::from_ymd_opt(date.year() + 1, 4, 1)?, false)
    }
}

/// Generates every return cycle lying completely between the two dates.
///
/// The service's capture horizon begins 1 November 2017; pass that as
/// `start` to enumerate all cycles the service holds.
///
/// # Errors
///
/// Returns [`ReturnsError::InvalidCycleRange`] when `end` is before `start`.
pub fn return_cycles(start: NaiveDate, end: NaiveDate) -> Result<Vec<ReturnCycle>, ReturnsError> {
    if end < start {
        return Err(ReturnsError::InvalidCycleRange { start, end });
    }

    let mut cycles = Vec::new();
    let mut candidate = next_cycle(start);
    while let Some(cycle) = candidate {
        if cycle.end_date > end {
            break;
        }
        candidate = cycle.start_date.succ_opt().and_then(next_cycle);
        cycles.push(cycle);
    }
    debug!(count = cycles.len(), "return cycles generated");
    Ok(cycles)
}

/// Start date of the cycle the given date lies in.
///
/// `None` only when the boundary would fall outside chrono's supported
/// date range.
#[must_use]
pub fn period_start(date: NaiveDate, is_summer: bool) -> Option<NaiveDate> {
    let month = if is_summer { 11 } else { 4 };
    let boundary = NaiveDate::from_ymd_opt(date.year(), month, 1)?;
    let year = if date < boundary {
        date.year() - 1
    } else {
        date.year()
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// End date of the cycle the given date lies in.
#[must_use]
pub fn period_end(date: NaiveDate, is_summer: bool) -> Option<NaiveDate> {
    period_start(date, is_summer)?
        .checked_add_months(Months::new(12))?
        .pred_opt()
}

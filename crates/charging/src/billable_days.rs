//! The billable-days engine.
//!
//! An abstraction period is a recurring day/month window; a billing period is
//! a concrete date range. The engine expands each window against the billing
//! period's financial year, merges the resulting ranges so overlapping
//! windows never double-count, intersects them with the billing period and
//! sums the inclusive day counts.

use chrono::NaiveDate;
use tracing::debug;

use waterline_shared::calendar::{days_inclusive, financial_year_date, financial_year_ending};
use waterline_shared::types::{AbstractionPeriod, DateRange, merge_ranges};

use crate::error::ChargingError;

/// Counts the days in a billing period, inclusive of both ends.
///
/// An inverted start/end pair counts as zero rather than failing; the
/// higher-level cycle generators are the ones that reject inverted ranges.
#[must_use]
pub fn total_days(start: NaiveDate, end: NaiveDate) -> u32 {
    days_inclusive(start, end)
}

/// Expands an abstraction period into the concrete date ranges it covers
/// within the billing period's financial year.
///
/// A window whose concrete end falls before its concrete start wraps the
/// financial-year boundary and contributes two ranges: the head of the
/// billing period up to the window's end, and the window's start to the end
/// of the billing period. Degenerate ranges are dropped; the survivors still
/// need intersecting with the billing period itself.
///
/// # Errors
///
/// Returns [`ChargingError::Date`] when a day/month pair does not resolve to
/// a real date in the financial year.
pub fn abstraction_date_ranges(
    period: &AbstractionPeriod,
    financial_year: i32,
    billing: &DateRange,
) -> Result<Vec<DateRange>, ChargingError> {
    let abs_start = financial_year_date(period.start_day, period.start_month, financial_year)?;
    let abs_end = financial_year_date(period.end_day, period.end_month, financial_year)?;

    let candidates = if abs_end < abs_start {
        vec![(billing.start, abs_end), (abs_start, billing.end)]
    } else {
        vec![(abs_start, abs_end)]
    };

    Ok(candidates
        .into_iter()
        .filter(|&(start, end)| start <= end)
        .map(|(start, end)| DateRange { start, end })
        .collect())
}

/// Computes the number of billable days in a billing period, taking one or
/// more abstraction periods into account.
///
/// The financial year is resolved from the billing period's end date. Days
/// covered by more than one abstraction period are counted once. Returns
/// zero when no window overlaps the billing period.
///
/// # Errors
///
/// Returns [`ChargingError::Period`] if any descriptor has an out-of-range
/// day or month, before any expansion happens.
pub fn billable_days(
    periods: &[AbstractionPeriod],
    billing: &DateRange,
) -> Result<u32, ChargingError> {
    for period in periods {
        period.validate().map_err(ChargingError::Period)?;
    }

    let financial_year = financial_year_ending(billing.end);

    let mut ranges = Vec::new();
    for period in periods {
        ranges.extend(abstraction_date_ranges(period, financial_year, billing)?);
    }

    let days = merge_ranges(ranges)
        .iter()
        .filter_map(|range| range.intersect(billing))
        .map(|overlap| overlap.days())
        .sum();

    debug!(financial_year, days, "billable days computed");
    Ok(days)
}

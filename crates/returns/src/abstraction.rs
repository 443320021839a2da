//! Abstraction-period membership and season classification.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use waterline_shared::types::{AbstractionPeriod, DateRange};

use crate::error::ReturnsError;

/// Summer abstraction window, 1 April - 31 October.
pub const SUMMER: AbstractionPeriod = AbstractionPeriod::new(1, 4, 31, 10);

/// Winter abstraction window, 1 November - 31 March.
pub const WINTER: AbstractionPeriod = AbstractionPeriod::new(1, 11, 31, 3);

/// Default charge season for an abstraction period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeSeason {
    /// Window fits within 1 April - 31 October.
    #[serde(rename = "summer")]
    Summer,
    /// Window fits within 1 November - 31 March.
    #[serde(rename = "winter")]
    Winter,
    /// Window fits neither seasonal window.
    #[serde(rename = "all year")]
    AllYear,
}

impl fmt::Display for ChargeSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::AllYear => "all year",
        };
        f.write_str(name)
    }
}

/// Checks whether a date falls inside a recurring abstraction period,
/// boundaries included, handling windows that wrap the calendar year.
///
/// # Errors
///
/// Returns [`ReturnsError::Date`] when the descriptor has an out-of-range
/// day or month.
pub fn date_in_period(date: NaiveDate, period: &AbstractionPeriod) -> Result<bool, ReturnsError> {
    period.validate()?;

    let pos = (date.month(), date.day());
    let start = (period.start_month, period.start_day);
    let end = (period.end_month, period.end_day);

    Ok(if end >= start {
        pos >= start && pos <= end
    } else {
        pos <= end || pos >= start
    })
}

// Concrete range of a recurring window, anchored at an arbitrary reference
// year; a wrapping window ends in the following year. `None` when the window
// names a date the reference year does not have (e.g. 29 February).
fn concrete_range(period: &AbstractionPeriod, start_year: i32) -> Option<DateRange> {
    let end_year = if period.wraps_calendar_year() {
        start_year + 1
    } else {
        start_year
    };
    let start = NaiveDate::from_ymd_opt(start_year, period.start_month, period.start_day)?;
    let end = NaiveDate::from_ymd_opt(end_year, period.end_month, period.end_day)?;
    DateRange::new(start, end).ok()
}

/// Checks whether `inner` fits entirely within `outer`, boundaries included.
///
/// The windows are compared against both year alignments of `outer`, so an
/// inner window early in the calendar year still matches an outer window
/// that wraps from the year before.
#[must_use]
pub fn period_within(inner: &AbstractionPeriod, outer: &AbstractionPeriod) -> bool {
    let Some(inner_range) = concrete_range(inner, 2018) else {
        return false;
    };
    [2017, 2018].into_iter().any(|year| {
        concrete_range(outer, year).is_some_and(|outer_range| {
            outer_range.start <= inner_range.start && inner_range.end <= outer_range.end
        })
    })
}

/// Classifies an abstraction period into its default charge season.
///
/// This is a starting point; two-part-tariff and other overlays may adjust
/// the season downstream.
#[must_use]
pub fn season(period: &AbstractionPeriod) -> ChargeSeason {
    if period_within(period, &SUMMER) {
        ChargeSeason::Summer
    } else if period_within(period, &WINTER) {
        ChargeSeason::Winter
    } else {
        ChargeSeason::AllYear
    }
}

//! Inclusive date ranges and their algebra.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::days_inclusive;
use crate::error::{DateError, DateResult};

/// A closed date range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting an inverted start/end pair.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> DateResult<Self> {
        if start > end {
            return Err(DateError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the date lies within the range, boundaries included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Computes the overlap of two ranges.
    ///
    /// Ranges that touch on exactly one day overlap on that day; disjoint
    /// ranges produce `None`. Symmetric in its arguments.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }

    /// Number of days in the range, counting both ends.
    #[must_use]
    pub fn days(&self) -> u32 {
        days_inclusive(self.start, self.end)
    }
}

/// Merges a collection of ranges into the minimal ordered set of
/// non-overlapping ranges covering the same days.
///
/// Touching ranges (one ends the day the next starts) are folded together;
/// ranges separated by at least one clear day are kept apart. Merging an
/// already-merged set returns it unchanged.
#[must_use]
pub fn merge_ranges(mut ranges: Vec<DateRange>) -> Vec<DateRange> {
    ranges.sort_unstable();
    let mut merged: Vec<DateRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// A date range that may extend indefinitely into the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range; `None` means open-ended.
    pub end: Option<NaiveDate>,
}

impl OpenRange {
    /// Creates a possibly open-ended range.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidRange`] if a bounded end is before the start.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> DateResult<Self> {
        if let Some(end) = end
            && start > end
        {
            return Err(DateError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the date lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.is_none_or(|end| date <= end)
    }

    /// Returns true if the range shares at least one day with `other`.
    #[must_use]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end.is_none_or(|end| end >= other.start)
    }
}

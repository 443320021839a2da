//! Trait for records carrying a possibly open-ended date range.

use chrono::NaiveDate;

use super::date_range::{DateRange, OpenRange};

/// A record with a start date and an optional end date, such as a licence
/// agreement or a charge version.
///
/// The charging crate's splitter and history-merging functions accept any
/// `Ranged` type, so callers keep their own record shapes.
pub trait Ranged {
    /// First day the record is in effect.
    fn start_date(&self) -> NaiveDate;

    /// Last day the record is in effect; `None` means still in effect.
    fn end_date(&self) -> Option<NaiveDate>;

    /// Returns true if the record's range shares at least one day with
    /// `range`, boundaries included.
    fn overlaps(&self, range: &DateRange) -> bool {
        self.start_date() <= range.end && self.end_date().is_none_or(|end| end >= range.start)
    }
}

impl Ranged for DateRange {
    fn start_date(&self) -> NaiveDate {
        self.start
    }

    fn end_date(&self) -> Option<NaiveDate> {
        Some(self.end)
    }
}

impl Ranged for OpenRange {
    fn start_date(&self) -> NaiveDate {
        self.start
    }

    fn end_date(&self) -> Option<NaiveDate> {
        self.end
    }
}

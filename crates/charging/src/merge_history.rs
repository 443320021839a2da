//! Folding adjacent equivalent history records.
//!
//! Charge and licence histories often arrive as runs of records that differ
//! only in their date ranges (a licence renewed year after year, say). When
//! two consecutive records are equivalent and their ranges are adjacent,
//! they can be collapsed into one record spanning both.

use chrono::NaiveDate;

use waterline_shared::types::Ranged;

/// A [`Ranged`] record whose end date can be rewritten when records merge.
pub trait RangedMut: Ranged {
    /// Replaces the record's end date; `None` makes it open-ended.
    fn set_end_date(&mut self, end: Option<NaiveDate>);
}

/// Merges consecutive history records whose ranges are adjacent and which
/// the supplied predicate considers equal.
///
/// Two records are adjacent when the first ends the day before the second
/// starts, or when the first is open-ended (an open record absorbs its
/// successor). A merged record keeps the first record's fields and takes the
/// second's end date. The predicate should compare identity fields and
/// ignore the date range itself.
pub fn merge_history<T, F>(items: &[T], is_equal: F) -> Vec<T>
where
    T: RangedMut + Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut merged: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        match merged.last_mut() {
            Some(last) if is_adjacent(last, item) && is_equal(last, item) => {
                last.set_end_date(item.end_date());
            }
            _ => merged.push(item.clone()),
        }
    }
    merged
}

fn is_adjacent<T: Ranged>(earlier: &T, later: &T) -> bool {
    match earlier.end_date() {
        Some(end) => end.succ_opt() == Some(later.start_date()),
        None => true,
    }
}

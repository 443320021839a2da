//! Date-range splitting.
//!
//! Partitions a parent range (say, a charge version covering a financial
//! year) into contiguous sub-ranges aligned to the boundaries of overlapping
//! child records (say, agreements), so each sub-range has at most one child
//! in effect for the whole of its span.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use waterline_shared::types::{DateRange, Ranged};

/// One contiguous slice of a parent range, tagged with the child record in
/// effect over it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitRange<'a, C> {
    /// First day of the slice.
    pub effective_start_date: NaiveDate,
    /// Last day of the slice.
    pub effective_end_date: NaiveDate,
    /// The single child overlapping the slice, or `None`.
    pub overlap: Option<&'a C>,
}

impl<C> SplitRange<'_, C> {
    /// The slice's span as a range.
    #[must_use]
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.effective_start_date,
            end: self.effective_end_date,
        }
    }
}

/// Splits a parent range into contiguous sub-ranges at every boundary of the
/// given child records.
///
/// Split points are each child's start date and the day after its end date,
/// kept only when they fall inside the parent range. Consecutive points
/// delimit the sub-ranges; the final sub-range runs to the parent's end.
/// Each sub-range is tagged with the first child overlapping it, so the
/// children are expected not to overlap one another.
///
/// With no children (or none overlapping the parent) the result is a single
/// untagged sub-range equal to the parent.
pub fn split_by_overlap<'a, C: Ranged>(
    parent: &DateRange,
    children: &'a [C],
) -> Vec<SplitRange<'a, C>> {
    let mut points = vec![parent.start];
    for child in children {
        let boundaries = [
            Some(child.start_date()),
            child.end_date().and_then(|d| d.succ_opt()),
        ];
        points.extend(
            boundaries
                .into_iter()
                .flatten()
                .filter(|point| parent.contains(*point)),
        );
    }
    points.sort_unstable();
    points.dedup();
    trace!(splits = points.len(), "split points resolved");

    points
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = points
                .get(i + 1)
                .and_then(|next| next.pred_opt())
                .unwrap_or(parent.end);
            let slice = DateRange { start, end };
            SplitRange {
                effective_start_date: start,
                effective_end_date: end,
                overlap: children.iter().find(|child| child.overlaps(&slice)),
            }
        })
        .collect()
}

//! Property-based tests for the date-range algebra.

use chrono::NaiveDate;
use proptest::prelude::*;

use super::date_range::{DateRange, merge_ranges};

/// Strategy for arbitrary dates between 2000 and 2099.
fn date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for well-formed ranges up to ~2 years long.
fn date_range() -> impl Strategy<Value = DateRange> {
    (date(), 0i64..730).prop_map(|(start, len)| DateRange {
        start,
        end: start + chrono::Duration::days(len),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Intersection does not depend on argument order.
    #[test]
    fn prop_intersect_is_symmetric(a in date_range(), b in date_range()) {
        prop_assert_eq!(a.intersect(&b), b.intersect(&a));
    }

    /// An intersection never extends beyond either input.
    #[test]
    fn prop_intersect_is_contained_in_both(a in date_range(), b in date_range()) {
        if let Some(overlap) = a.intersect(&b) {
            prop_assert!(overlap.start >= a.start && overlap.end <= a.end);
            prop_assert!(overlap.start >= b.start && overlap.end <= b.end);
        }
    }

    /// A range intersected with itself is itself.
    #[test]
    fn prop_intersect_is_idempotent(a in date_range()) {
        prop_assert_eq!(a.intersect(&a), Some(a));
    }

    /// Merging an already-merged set changes nothing.
    #[test]
    fn prop_merge_is_idempotent(ranges in prop::collection::vec(date_range(), 0..8)) {
        let merged = merge_ranges(ranges);
        prop_assert_eq!(merge_ranges(merged.clone()), merged);
    }

    /// Merged output is ascending and strictly non-overlapping.
    #[test]
    fn prop_merge_output_is_ordered_and_disjoint(ranges in prop::collection::vec(date_range(), 0..8)) {
        let merged = merge_ranges(ranges);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    /// Merging preserves exactly the union of covered days.
    #[test]
    fn prop_merge_preserves_coverage(ranges in prop::collection::vec(date_range(), 0..6)) {
        let merged = merge_ranges(ranges.clone());
        for range in &ranges {
            let mut day = range.start;
            while day <= range.end {
                prop_assert!(merged.iter().any(|m| m.contains(day)));
                day = day.succ_opt().unwrap();
            }
        }
        let covered: u32 = merged.iter().map(DateRange::days).sum();
        let mut union_days = ranges
            .iter()
            .flat_map(|r| {
                let mut days = Vec::new();
                let mut day = r.start;
                while day <= r.end {
                    days.push(day);
                    day = day.succ_opt().unwrap();
                }
                days
            })
            .collect::<Vec<_>>();
        union_days.sort_unstable();
        union_days.dedup();
        prop_assert_eq!(covered as usize, union_days.len());
    }
}

//! Property-based tests for the charging calculations.

use chrono::NaiveDate;
use proptest::prelude::*;

use waterline_shared::types::{AbstractionPeriod, DateRange, OpenRange, Ranged};

use crate::billable_days::{billable_days, total_days};
use crate::splitter::split_by_overlap;

/// Strategy for descriptors that always resolve to real dates (day <= 28).
fn abstraction_period() -> impl Strategy<Value = AbstractionPeriod> {
    (1u32..=28, 1u32..=12, 1u32..=28, 1u32..=12)
        .prop_map(|(sd, sm, ed, em)| AbstractionPeriod::new(sd, sm, ed, em))
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (2015i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn billing_period() -> impl Strategy<Value = DateRange> {
    (date(), 0i64..730).prop_map(|(start, len)| DateRange {
        start,
        end: start + chrono::Duration::days(len),
    })
}

fn children() -> impl Strategy<Value = Vec<OpenRange>> {
    prop::collection::vec(
        (date(), prop::option::of(0i64..365)).prop_map(|(start, len)| OpenRange {
            start,
            end: len.map(|l| start + chrono::Duration::days(l)),
        }),
        0..5,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Billable days can never exceed the billing period itself.
    #[test]
    fn prop_billable_days_bounded_by_total(
        periods in prop::collection::vec(abstraction_period(), 0..4),
        billing in billing_period(),
    ) {
        let billable = billable_days(&periods, &billing).unwrap();
        prop_assert!(billable <= total_days(billing.start, billing.end));
    }

    /// The all-year window makes every billing day billable.
    #[test]
    fn prop_all_year_window_bills_every_day(billing in billing_period()) {
        let billable = billable_days(&[AbstractionPeriod::all_year()], &billing).unwrap();
        prop_assert_eq!(billable, total_days(billing.start, billing.end));
    }

    /// Repeating a descriptor never changes the result.
    #[test]
    fn prop_duplicate_descriptors_are_harmless(
        period in abstraction_period(),
        billing in billing_period(),
    ) {
        let once = billable_days(&[period], &billing).unwrap();
        let twice = billable_days(&[period, period], &billing).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Splitting always yields a contiguous partition of the parent.
    #[test]
    fn prop_split_partitions_the_parent(
        billing in billing_period(),
        children in children(),
    ) {
        let slices = split_by_overlap(&billing, &children);

        prop_assert!(!slices.is_empty());
        prop_assert_eq!(slices[0].effective_start_date, billing.start);
        prop_assert_eq!(slices[slices.len() - 1].effective_end_date, billing.end);
        for pair in slices.windows(2) {
            prop_assert_eq!(
                pair[0].effective_end_date.succ_opt(),
                Some(pair[1].effective_start_date)
            );
        }
    }

    /// Every tagged slice really overlaps its tag.
    #[test]
    fn prop_split_tags_are_true_overlaps(
        billing in billing_period(),
        children in children(),
    ) {
        for slice in split_by_overlap(&billing, &children) {
            if let Some(child) = slice.overlap {
                prop_assert!(child.overlaps(&slice.range()));
            }
        }
    }
}

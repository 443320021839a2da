//! Financial-year resolution and whole-day arithmetic.
//!
//! The UK financial year runs 1 April - 31 March and is identified by the
//! calendar year it ends in, so 1 April 2018 - 31 March 2019 is financial
//! year 2019.

use chrono::{Datelike, NaiveDate};

use crate::error::{DateError, DateResult};

/// Canonical serialized date format.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the financial year a date falls in, identified by its ending year.
///
/// Dates in January-March belong to the financial year ending that same
/// calendar year; dates from April onward belong to the year after.
///
/// ```
/// use chrono::NaiveDate;
/// use waterline_shared::calendar::financial_year_ending;
///
/// let date = NaiveDate::from_ymd_opt(2018, 4, 1).unwrap();
/// assert_eq!(financial_year_ending(date), 2019);
/// ```
#[must_use]
pub fn financial_year_ending(date: NaiveDate) -> i32 {
    if date.month() < 4 {
        date.year()
    } else {
        date.year() + 1
    }
}

/// Resolves a recurring day/month to the concrete date it has within the
/// given financial year.
///
/// Months January-March take the financial year's own ending year; months
/// April-December take the preceding calendar year.
///
/// # Errors
///
/// Returns [`DateError::InvalidDay`] / [`DateError::InvalidMonth`] for
/// out-of-range inputs, and [`DateError::InvalidDate`] when the day does not
/// exist in the resolved month (e.g. 31 February). Rollover is never applied.
pub fn financial_year_date(day: u32, month: u32, financial_year: i32) -> DateResult<NaiveDate> {
    if !(1..=31).contains(&day) {
        return Err(DateError::InvalidDay { day });
    }
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth { month });
    }
    let year = if month < 4 {
        financial_year
    } else {
        financial_year - 1
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::InvalidDate { day, month, year })
}

/// Counts the days between two dates, inclusive of both ends.
///
/// An inverted pair (`end` before `start`) counts as zero, never negative.
#[must_use]
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    u32::try_from((end - start).num_days() + 1).unwrap_or(0)
}

/// Parses a canonical `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`DateError::ParseDate`] on malformed input.
pub fn parse_iso_date(input: &str) -> DateResult<NaiveDate> {
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT).map_err(|_| DateError::ParseDate {
        input: input.to_owned(),
    })
}

/// Formats a date in the canonical `YYYY-MM-DD` form.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[rstest]
    #[case(ymd(2018, 1, 1), 2018)]
    #[case(ymd(2018, 3, 31), 2018)]
    #[case(ymd(2018, 4, 1), 2019)]
    #[case(ymd(2018, 12, 31), 2019)]
    fn financial_year_boundaries(#[case] date: NaiveDate, #[case] expected: i32) {
        assert_eq!(financial_year_ending(date), expected);
    }

    #[test]
    fn january_to_march_resolve_to_the_ending_year() {
        assert_eq!(financial_year_date(1, 1, 2019).unwrap(), ymd(2019, 1, 1));
        assert_eq!(financial_year_date(31, 3, 2019).unwrap(), ymd(2019, 3, 31));
    }

    #[test]
    fn april_to_december_resolve_to_the_preceding_year() {
        assert_eq!(financial_year_date(1, 4, 2019).unwrap(), ymd(2018, 4, 1));
        assert_eq!(financial_year_date(31, 12, 2019).unwrap(), ymd(2018, 12, 31));
    }

    #[test]
    fn nonexistent_dates_are_rejected_not_rolled_over() {
        assert_eq!(
            financial_year_date(31, 2, 2019).unwrap_err(),
            DateError::InvalidDate {
                day: 31,
                month: 2,
                year: 2019
            }
        );
        assert_eq!(
            financial_year_date(31, 11, 2019).unwrap_err(),
            DateError::InvalidDate {
                day: 31,
                month: 11,
                year: 2018
            }
        );
    }

    #[test]
    fn leap_day_resolves_only_in_leap_years() {
        assert_eq!(financial_year_date(29, 2, 2020).unwrap(), ymd(2020, 2, 29));
        assert!(financial_year_date(29, 2, 2019).is_err());
    }

    #[rstest]
    #[case(0)]
    #[case(32)]
    fn out_of_range_day_is_rejected(#[case] day: u32) {
        assert_eq!(
            financial_year_date(day, 4, 2019).unwrap_err(),
            DateError::InvalidDay { day }
        );
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn out_of_range_month_is_rejected(#[case] month: u32) {
        assert_eq!(
            financial_year_date(1, month, 2019).unwrap_err(),
            DateError::InvalidMonth { month }
        );
    }

    #[test]
    fn a_full_financial_year_has_365_days() {
        assert_eq!(days_inclusive(ymd(2018, 4, 1), ymd(2019, 3, 31)), 365);
    }

    #[test]
    fn a_financial_year_containing_a_leap_day_has_366_days() {
        assert_eq!(days_inclusive(ymd(2019, 4, 1), ymd(2020, 3, 31)), 366);
    }

    #[test]
    fn a_single_day_counts_as_one() {
        assert_eq!(days_inclusive(ymd(2018, 4, 1), ymd(2018, 4, 1)), 1);
    }

    #[test]
    fn an_inverted_span_counts_as_zero() {
        assert_eq!(days_inclusive(ymd(2019, 3, 31), ymd(2018, 4, 1)), 0);
    }

    #[test]
    fn iso_dates_round_trip() {
        let date = parse_iso_date("2018-04-01").unwrap();
        assert_eq!(date, ymd(2018, 4, 1));
        assert_eq!(format_iso_date(date), "2018-04-01");
    }

    #[rstest]
    #[case("01/04/2018")]
    #[case("2018-4-1x")]
    #[case("not a date")]
    #[case("2018-13-01")]
    fn malformed_dates_fail_to_parse(#[case] input: &str) {
        assert_eq!(
            parse_iso_date(input).unwrap_err(),
            DateError::ParseDate {
                input: input.to_owned()
            }
        );
    }
}

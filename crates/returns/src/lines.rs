//! Return-line generation.
//!
//! A return is reported as a series of lines covering its cycle at the
//! licence's reporting frequency. Weekly lines follow the NALD convention of
//! Sunday-to-Saturday weeks; the week start is always passed explicitly
//! rather than read from any process-wide locale setting.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use waterline_shared::types::DateRange;

/// Week convention used by NALD: weeks run Sunday to Saturday.
pub const NALD_WEEK_START: Weekday = Weekday::Sun;

/// Reporting frequency of a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One line per day.
    Day,
    /// One line per week.
    Week,
    /// One line per calendar month.
    Month,
    /// One line for the whole period.
    Year,
}

/// A single reporting line within a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLine {
    /// First day covered by the line.
    pub start_date: NaiveDate,
    /// Last day covered by the line.
    pub end_date: NaiveDate,
    /// Granularity the line reports at.
    pub time_period: Frequency,
}

impl ReturnLine {
    const fn new(start_date: NaiveDate, end_date: NaiveDate, time_period: Frequency) -> Self {
        Self {
            start_date,
            end_date,
            time_period,
        }
    }
}

/// Generates one line per day from `start` to `end` inclusive.
#[must_use]
pub fn day_lines(start: NaiveDate, end: NaiveDate) -> Vec<ReturnLine> {
    let mut lines = Vec::new();
    let mut day = start;
    loop {
        lines.push(ReturnLine::new(day, day, Frequency::Day));
        day = match day.succ_opt() {
            Some(next) if next <= end => next,
            _ => break,
        };
    }
    lines
}

fn week_bounds(date: NaiveDate, week_starts_on: Weekday) -> Option<DateRange> {
    let week = date.week(week_starts_on);
    Some(DateRange {
        start: week.checked_first_day()?,
        end: week.checked_last_day()?,
    })
}

/// Generates whole-week lines starting with the week containing `start`.
///
/// The first week is always emitted so that split-log returns stay
/// contiguous; subsequent weeks are emitted only while they end on or
/// before `end`.
#[must_use]
pub fn week_lines(start: NaiveDate, end: NaiveDate, week_starts_on: Weekday) -> Vec<ReturnLine> {
    let mut lines = Vec::new();
    let Some(mut week) = week_bounds(start, week_starts_on) else {
        return lines;
    };
    loop {
        lines.push(ReturnLine::new(week.start, week.end, Frequency::Week));
        let next = week
            .start
            .checked_add_days(Days::new(7))
            .and_then(|day| week_bounds(day, week_starts_on));
        week = match next {
            Some(next) if next.end <= end => next,
            _ => break,
        };
    }
    lines
}

fn month_bounds(date: NaiveDate) -> Option<DateRange> {
    let start = date.with_day(1)?;
    Some(DateRange {
        start,
        end: start.checked_add_months(Months::new(1))?.pred_opt()?,
    })
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    month_bounds(date).is_some_and(|month| month.end == date)
}

fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Generates whole-calendar-month lines for every month touched by the
/// period.
///
/// A final (split-log) return whose end date is not the last day of a month
/// excludes that trailing partial month.
#[must_use]
pub fn month_lines(start: NaiveDate, end: NaiveDate, is_final_return: bool) -> Vec<ReturnLine> {
    let include_end_month = !is_final_return || is_last_day_of_month(end);
    let mut lines = Vec::new();
    let Some(mut month) = month_bounds(start) else {
        return lines;
    };
    loop {
        lines.push(ReturnLine::new(month.start, month.end, Frequency::Month));
        let next = month.end.succ_opt().and_then(month_bounds);
        month = match next {
            Some(next)
                if (include_end_month && month_key(next.start) <= month_key(end))
                    || (!include_end_month && month_key(next.start) < month_key(end)) =>
            {
                next
            }
            _ => break,
        };
    }
    lines
}

/// Generates a single line spanning the whole period.
#[must_use]
pub fn year_lines(start: NaiveDate, end: NaiveDate) -> Vec<ReturnLine> {
    vec![ReturnLine::new(start, end, Frequency::Year)]
}

/// Generates the lines required for a return at the given frequency.
#[must_use]
pub fn required_lines(
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
    is_final_return: bool,
    week_starts_on: Weekday,
) -> Vec<ReturnLine> {
    match frequency {
        Frequency::Day => day_lines(start, end),
        Frequency::Week => week_lines(start, end, week_starts_on),
        Frequency::Month => month_lines(start, end, is_final_return),
        Frequency::Year => year_lines(start, end),
    }
}

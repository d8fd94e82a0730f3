//! Calendar-date helpers shared by registration and eviction

use chrono::{Datelike, Months, NaiveDate};

/// Whole years elapsed between `dob` and `as_of`.
///
/// Year difference, minus one when the month/day of `as_of` precedes the
/// month/day of `dob` lexicographically. A February 29 birthday follows the
/// same rule, so in common years it only counts from March 1. Negative when
/// `dob` is after `as_of`.
pub fn age_in_years(dob: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut years = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years
}

/// `date` plus `months` calendar months.
///
/// The month field advances with carry into the year. The day of month is
/// preserved when the target month has it, and clamped to the target month's
/// last day otherwise: Jan 31 + 1 month is Feb 28 (Feb 29 in leap years).
/// Dates past chrono's supported year range saturate to [`NaiveDate::MAX`].
pub fn add_calendar_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

//! Reference-year arithmetic.

use chrono::{Datelike, NaiveDateTime};

/// Synthetic year all timestamps are aligned to. A leap year, so 29 February
/// has a row.
pub const REFERENCE_YEAR: i32 = 2000;

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Moves `timestamp` to `year`, keeping month, day and time of day.
///
/// Returns `None` for 29 February when `year` is not a leap year.
pub fn with_year(timestamp: NaiveDateTime, year: i32) -> Option<NaiveDateTime> {
    timestamp.with_year(year)
}

/// Moves `timestamp` to [`REFERENCE_YEAR`].
pub fn to_reference_year(timestamp: NaiveDateTime) -> NaiveDateTime {
    // Every month/day exists in a leap year.
    with_year(timestamp, REFERENCE_YEAR).unwrap_or(timestamp)
}

//! Proleptic Gregorian Date Calculations
//!
//! The day number equations below use a computational calendar
//! beginning on March 1 of year -4800, which removes the leap day
//! from the middle of the year and makes the month lengths follow
//! a regular (153m + 2) / 5 pattern.
use crate::{computational_year_month, days_before_month};

// Offset between the computational day count and the JDN epoch.
const JDN_SHIFT: i128 = 32_045;

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
#[inline]
pub const fn is_leap(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the JDN for the given proleptic Gregorian date.
///
/// The inputs are not validated. A day outside the month simply
/// overflows into the neighboring month.
pub const fn jdn_from_ymd(year: i64, month: u8, day: u8) -> i128 {
    let (y, m) = computational_year_month(year, month);
    day as i128 + days_before_month(m) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - JDN_SHIFT
}

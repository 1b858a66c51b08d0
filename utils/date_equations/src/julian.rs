//! Proleptic Julian Date Calculations
//!
//! Shares the March-based computational calendar with the Gregorian
//! equations, without the century corrections.
use crate::{computational_year_month, days_before_month};

// Offset between the computational day count and the JDN epoch.
const JDN_SHIFT: i128 = 32_083;

/// Returns whether `year` is a leap year in the proleptic Julian calendar.
#[inline]
pub const fn is_leap(year: i64) -> bool {
    year.rem_euclid(4) == 0
}

/// Returns the JDN for the given proleptic Julian date.
///
/// The inputs are not validated.
pub const fn jdn_from_ymd(year: i64, month: u8, day: u8) -> i128 {
    let (y, m) = computational_year_month(year, month);
    day as i128 + days_before_month(m) + 365 * y + y.div_euclid(4) - JDN_SHIFT
}

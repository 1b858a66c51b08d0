//! # Date Equations
//!
//! Date Equations is a library focused on implementing
//! small, allocation free calendar calculations for the
//! proleptic Gregorian and Julian calendars.
//!
//! Day numbers are Julian Day Numbers (JDN), where day 0 is
//! January 1, 4713 BCE in the proleptic Julian calendar. Years
//! use astronomical numbering, so year 0 is 1 BCE and year -1
//! is 2 BCE.
//!
//! ``` rust
//! use date_equations::{gregorian, julian};
//!
//! assert_eq!(gregorian::jdn_from_ymd(2000, 1, 1), 2_451_545);
//! assert_eq!(julian::jdn_from_ymd(-4712, 1, 1), 0);
//! ```
#![no_std]

pub mod gregorian;
pub mod julian;

/// The number of days in `month` given whether the year is a leap year.
///
/// Returns `None` when `month` is not in `1..=12`.
#[inline]
pub const fn days_in_month(month: u8, leap: bool) -> Option<u8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if leap => Some(29),
        2 => Some(28),
        _ => None,
    }
}

// Returns the computational year and month, where the computational
// year starts on March 1 so the leap day is the last day of the year.
#[inline]
pub(crate) const fn computational_year_month(year: i64, month: u8) -> (i128, i128) {
    let j = (month <= 2) as i128;
    // Shift the year forward so the year is non-negative for any year
    // the JDN range is commonly used with. Floor division below keeps
    // it exact for the remaining years.
    let computational_year = year as i128 + 4800 - j;
    let computational_month = month as i128 + 12 * j - 3;
    (computational_year, computational_month)
}

// Days elapsed in the computational year before the first of the month.
#[inline]
pub(crate) const fn days_before_month(computational_month: i128) -> i128 {
    (153 * computational_month + 2).div_euclid(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2, true), Some(29));
        assert_eq!(days_in_month(2, false), Some(28));
        assert_eq!(days_in_month(9, false), Some(30));
        assert_eq!(days_in_month(12, true), Some(31));
        assert_eq!(days_in_month(0, true), None);
        assert_eq!(days_in_month(13, false), None);
    }

    #[test]
    fn days_before_computational_month() {
        // March
        assert_eq!(days_before_month(0), 0);
        // January of the following civil year.
        assert_eq!(days_before_month(10), 306);
        // February
        assert_eq!(days_before_month(11), 337);
    }
}

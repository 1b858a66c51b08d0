//! Leap year rules for the proleptic Julian and Gregorian calendars.
//!
//! Years are astronomical: year 0 is 1 BCE, year -1 is 2 BCE, and so on.
//! Both fixed rules use the Euclidean remainder, so year 0 and year -4
//! are leap years.

use date_equations::{gregorian, julian};

use crate::{
    civil::new_year_jd,
    reform::{CalendarReform, ITALY},
};

/// Returns whether `year` is a leap year in the proleptic Julian calendar.
///
/// Every fourth year is a leap year, with no century exception.
#[inline]
#[must_use]
pub const fn julian_leap(year: i64) -> bool {
    julian::is_leap(year)
}

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
#[inline]
#[must_use]
pub const fn gregorian_leap(year: i64) -> bool {
    gregorian::is_leap(year)
}

/// Returns whether `year` is a leap year under the `ITALY` reform.
///
/// ```rust
/// use proleptic_rs::{gregorian_leap, julian_leap, leap};
///
/// // 1500 predates the reform, so the Julian rule applies.
/// assert!(leap(1500));
/// assert_eq!(leap(1500), julian_leap(1500));
/// // 1900 follows the reform, so the Gregorian rule applies.
/// assert!(!leap(1900));
/// assert_eq!(leap(1900), gregorian_leap(1900));
/// ```
#[inline]
#[must_use]
pub fn leap(year: i64) -> bool {
    leap_with_reform(year, &ITALY)
}

/// Returns whether `year` is a leap year under `reform`.
///
/// The rule is chosen by the calendar in effect on January 1 of `year`.
#[must_use]
pub fn leap_with_reform(year: i64, reform: &CalendarReform) -> bool {
    if reform.is_gregorian_at(&new_year_jd(year, reform)) {
        gregorian_leap(year)
    } else {
        julian_leap(year)
    }
}

/// Returns the number of days in `year` under `reform`.
///
/// The year in which the reform takes effect is not shortened; this is the
/// length given by the leap rule in effect on January 1.
#[inline]
#[must_use]
pub fn days_in_year(year: i64, reform: &CalendarReform) -> u16 {
    if leap_with_reform(year, reform) {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reform::{ENGLAND, GREGORIAN, JULIAN};

    #[test]
    fn fixed_rule_literals() {
        assert!(julian_leap(1900));
        assert!(!julian_leap(1999));
        assert!(julian_leap(2000));

        assert!(!gregorian_leap(1900));
        assert!(!gregorian_leap(1999));
        assert!(gregorian_leap(2000));
    }

    #[test]
    fn default_reform_literals() {
        assert_eq!(leap(1900), gregorian_leap(1900));
        assert_eq!(leap(1999), gregorian_leap(1999));
        assert_eq!(leap(2000), gregorian_leap(2000));
        // Not the same year, but both are common years.
        assert_eq!(leap(1990), gregorian_leap(1900));
    }

    #[test]
    fn gregorian_rule_matches_definition() {
        for y in -10_000..=10_000i64 {
            let expected = y % 4 == 0 && (y % 100 != 0 || y % 400 == 0);
            assert_eq!(gregorian_leap(y), expected, "year {y}");
            assert_eq!(julian_leap(y), y % 4 == 0, "year {y}");
        }
        for y in [i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX] {
            let expected = y % 4 == 0 && (y % 100 != 0 || y % 400 == 0);
            assert_eq!(gregorian_leap(y), expected, "year {y}");
        }
    }

    #[test]
    fn reform_selects_rule() {
        // Everything after the Italian reform uses the Gregorian rule.
        for y in 1583..=3_000 {
            assert_eq!(leap(y), gregorian_leap(y), "year {y}");
        }
        // Everything before it uses the Julian rule.
        for y in -3_000..=1582 {
            assert_eq!(leap(y), julian_leap(y), "year {y}");
        }
        // England kept the Julian rule through 1752.
        assert!(leap_with_reform(1700, &ENGLAND));
        assert!(!leap_with_reform(1700, &ITALY));
        assert!(!leap_with_reform(1800, &ENGLAND));
    }

    #[test]
    fn unbounded_reforms() {
        for y in -2_000..=4_000 {
            assert_eq!(leap_with_reform(y, &JULIAN), julian_leap(y), "year {y}");
            assert_eq!(
                leap_with_reform(y, &GREGORIAN),
                gregorian_leap(y),
                "year {y}"
            );
        }
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(1900, &ITALY), 365);
        assert_eq!(days_in_year(1900, &JULIAN), 366);
        assert_eq!(days_in_year(2000, &GREGORIAN), 366);
        assert_eq!(days_in_year(2001, &ENGLAND), 365);
    }
}

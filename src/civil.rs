//! Conversion of calendar dates to Julian Day Numbers under a reform.
//!
//! A date is first resolved in the proleptic Gregorian calendar. If that
//! day falls before the reform, the date is resolved again in the proleptic
//! Julian calendar.

use date_equations::{days_in_month, gregorian, julian};

use crate::{ensure_input, error::ErrorMessage, jdn::Jdn, reform::CalendarReform, DateResult};

/// Returns the Julian Day Number of `year`-`month`-`day` under `reform`.
///
/// Years are astronomical, so year 0 is 1 BCE.
///
/// # Errors
///
/// Returns an `InvalidInput` error when the month is not in `1..=12`, when the
/// day does not exist in that month of the selected calendar, or when the date
/// is one of the days skipped by the reform.
///
/// ```rust
/// use proleptic_rs::{civil::jd_from_civil, ENGLAND, ITALY};
///
/// assert_eq!(jd_from_civil(1582, 10, 15, &ITALY).unwrap(), 2_299_161);
/// assert_eq!(jd_from_civil(1582, 10, 4, &ITALY).unwrap(), 2_299_160);
/// assert!(jd_from_civil(1582, 10, 10, &ITALY).is_err());
/// assert_eq!(jd_from_civil(1752, 9, 2, &ENGLAND).unwrap(), 2_361_221);
/// ```
pub fn jd_from_civil(year: i64, month: u8, day: u8, reform: &CalendarReform) -> DateResult<Jdn> {
    ensure_input!((1..=12).contains(&month), ErrorMessage::MonthOutOfRange);

    let gregorian_jd = Jdn::from(gregorian::jdn_from_ymd(year, month, day));
    if reform.is_gregorian_at(&gregorian_jd) {
        ensure_input!(
            is_valid_day(month, day, gregorian::is_leap(year)),
            ErrorMessage::DayOutOfRange
        );
        return Ok(gregorian_jd);
    }

    ensure_input!(
        is_valid_day(month, day, julian::is_leap(year)),
        ErrorMessage::DayOutOfRange
    );
    let julian_jd = Jdn::from(julian::jdn_from_ymd(year, month, day));
    ensure_input!(reform.is_julian_at(&julian_jd), ErrorMessage::DateInReformGap);
    Ok(julian_jd)
}

/// Returns the Julian Day Number of January 1 of `year` under `reform`.
///
/// January 1 is resolved the same way as [`jd_from_civil`], but it is never
/// rejected: for reforms that skip the start of a year the Julian day is
/// returned.
#[must_use]
pub fn new_year_jd(year: i64, reform: &CalendarReform) -> Jdn {
    let gregorian_jd = Jdn::from(gregorian::jdn_from_ymd(year, 1, 1));
    if reform.is_gregorian_at(&gregorian_jd) {
        return gregorian_jd;
    }
    Jdn::from(julian::jdn_from_ymd(year, 1, 1))
}

#[inline]
fn is_valid_day(month: u8, day: u8, leap: bool) -> bool {
    days_in_month(month, leap).is_some_and(|days| (1..=days).contains(&day))
}

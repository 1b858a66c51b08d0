//! This module implements `Date`, a Julian Day Number paired with the
//! calendar reform used to interpret it.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::{Add, Sub},
};

use crate::{
    civil::jd_from_civil,
    jdn::Jdn,
    reform::{CalendarReform, ENGLAND, GREGORIAN, ITALY, JULIAN},
    DateResult,
};


/// The offset between a Julian Day Number and a Modified Julian Day Number.
pub const MJD_EPOCH_JDN: i64 = 2_400_001;
/// The offset between a Julian Day Number and a Lilian Day Number.
pub const LD_EPOCH_JDN: i64 = 2_299_160;

/// A day on the Julian Day Number line, interpreted under a `CalendarReform`.
///
/// Dates are ordered, compared, and hashed by their day number alone. The
/// reform only changes how a date is read as a calendar date, so two dates
/// on the same day with different reforms are equal.
///
/// ```rust
/// use proleptic_rs::{Date, ENGLAND};
///
/// let italy = Date::from_jd(2_299_161);
/// let england = Date::from_jd_with_reform(2_299_161, ENGLAND);
///
/// assert_eq!(italy, england);
/// assert!(italy.is_gregorian());
/// assert!(england.is_julian());
/// assert!(italy < england.succ());
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Date {
    jd: Jdn,
    reform: CalendarReform,
}

// ==== Public API ====

impl Date {
    /// Creates a new `Date` under the `ITALY` reform.
    #[inline]
    #[must_use]
    pub fn from_jd(jd: impl Into<Jdn>) -> Self {
        Self::from_jd_with_reform(jd, ITALY)
    }

    /// Creates a new `Date` under the provided reform.
    #[inline]
    #[must_use]
    pub fn from_jd_with_reform(jd: impl Into<Jdn>, reform: CalendarReform) -> Self {
        Self {
            jd: jd.into(),
            reform,
        }
    }

    /// Creates a new `Date` from a Modified Julian Day Number.
    #[inline]
    #[must_use]
    pub fn from_mjd(mjd: impl Into<Jdn>, reform: CalendarReform) -> Self {
        let mjd: Jdn = mjd.into();
        Self::from_jd_with_reform(mjd + MJD_EPOCH_JDN, reform)
    }

    /// Creates a new `Date` from a Lilian Day Number.
    #[inline]
    #[must_use]
    pub fn from_ld(ld: impl Into<Jdn>, reform: CalendarReform) -> Self {
        let ld: Jdn = ld.into();
        Self::from_jd_with_reform(ld + LD_EPOCH_JDN, reform)
    }

    /// Creates a new `Date` from a calendar date read under `reform`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error when the fields do not name a day
    /// under `reform`. See [`jd_from_civil`].
    pub fn try_from_civil(
        year: i64,
        month: u8,
        day: u8,
        reform: CalendarReform,
    ) -> DateResult<Self> {
        let jd = jd_from_civil(year, month, day, &reform)?;
        Ok(Self::from_jd_with_reform(jd, reform))
    }

    /// Returns this date's Julian Day Number.
    #[inline]
    #[must_use]
    pub fn jd(&self) -> &Jdn {
        &self.jd
    }

    /// Returns this date's reform.
    #[inline]
    #[must_use]
    pub fn reform(&self) -> &CalendarReform {
        &self.reform
    }

    /// Returns this date's Modified Julian Day Number.
    #[inline]
    #[must_use]
    pub fn mjd(&self) -> Jdn {
        &self.jd - MJD_EPOCH_JDN
    }

    /// Returns this date's Lilian Day Number, where day 1 is 1582-10-15.
    #[inline]
    #[must_use]
    pub fn ld(&self) -> Jdn {
        &self.jd - LD_EPOCH_JDN
    }

    /// Returns whether this date is read under the Gregorian calendar.
    #[inline]
    #[must_use]
    pub fn is_gregorian(&self) -> bool {
        self.reform.is_gregorian_at(&self.jd)
    }

    /// Returns whether this date is read under the Julian calendar.
    #[inline]
    #[must_use]
    pub fn is_julian(&self) -> bool {
        !self.is_gregorian()
    }

    /// Compares two dates by day number, returning `-1`, `0`, or `1`.
    #[inline]
    #[must_use]
    pub fn compare(&self, other: &Self) -> i8 {
        self.cmp(other) as i8
    }

    /// Returns the same day read under a different reform.
    #[inline]
    #[must_use]
    pub fn with_reform(&self, reform: CalendarReform) -> Self {
        Self::from_jd_with_reform(self.jd.clone(), reform)
    }

    /// Returns the same day read under the proleptic Julian calendar.
    #[inline]
    #[must_use]
    pub fn to_julian(&self) -> Self {
        self.with_reform(JULIAN)
    }

    /// Returns the same day read under the proleptic Gregorian calendar.
    #[inline]
    #[must_use]
    pub fn to_gregorian(&self) -> Self {
        self.with_reform(GREGORIAN)
    }

    /// Returns the same day read under the `ITALY` reform.
    #[inline]
    #[must_use]
    pub fn to_italy(&self) -> Self {
        self.with_reform(ITALY)
    }

    /// Returns the same day read under the `ENGLAND` reform.
    #[inline]
    #[must_use]
    pub fn to_england(&self) -> Self {
        self.with_reform(ENGLAND)
    }

    /// Returns the date `days` days after this one, keeping the reform.
    #[must_use]
    pub fn add_days(&self, days: impl Into<Jdn>) -> Self {
        let days: Jdn = days.into();
        Self::from_jd_with_reform(&self.jd + &days, self.reform.clone())
    }

    /// Returns the date `days` days before this one, keeping the reform.
    #[must_use]
    pub fn sub_days(&self, days: impl Into<Jdn>) -> Self {
        let days: Jdn = days.into();
        Self::from_jd_with_reform(&self.jd - &days, self.reform.clone())
    }

    /// Returns the following day.
    #[inline]
    #[must_use]
    pub fn succ(&self) -> Self {
        self.add_days(1i64)
    }

    /// Returns the preceding day.
    #[inline]
    #[must_use]
    pub fn pred(&self) -> Self {
        self.sub_days(1i64)
    }

    /// Returns the signed number of days from this date to `other`.
    #[inline]
    #[must_use]
    pub fn days_until(&self, other: &Self) -> Jdn {
        &other.jd - &self.jd
    }
}

// ==== Trait impls ====

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.jd == other.jd
    }
}

impl Eq for Date {}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.jd.hash(state);
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.jd.cmp(&other.jd)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<i64> for &Date {
    type Output = Date;
    fn add(self, rhs: i64) -> Date {
        self.add_days(rhs)
    }
}

impl Add<i64> for Date {
    type Output = Date;
    fn add(self, rhs: i64) -> Date {
        Self {
            jd: self.jd + rhs,
            reform: self.reform,
        }
    }
}

impl Sub<i64> for &Date {
    type Output = Date;
    fn sub(self, rhs: i64) -> Date {
        self.sub_days(rhs)
    }
}

impl Sub<i64> for Date {
    type Output = Date;
    fn sub(self, rhs: i64) -> Date {
        Self {
            jd: self.jd - rhs,
            reform: self.reform,
        }
    }
}

/// The signed number of days between two dates.
impl Sub<&Date> for &Date {
    type Output = Jdn;
    fn sub(self, rhs: &Date) -> Jdn {
        rhs.days_until(self)
    }
}

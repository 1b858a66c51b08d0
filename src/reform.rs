//! This module implements `CalendarReform`, the Julian to Gregorian
//! calendar cutover.
//!
//! A reform is the first Julian Day Number that is interpreted under the
//! Gregorian calendar. Days before it are interpreted under the Julian
//! calendar. The two unbounded reforms select a single proleptic calendar
//! for every day.

use core::{cmp::Ordering, fmt, str::FromStr};

use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    error::{DateError, ErrorMessage},
    jdn::Jdn,
    primitive::{Extended, Infinity},
    DateResult,
};

/// JDN of 1582-10-15 (Gregorian), the first day of the Gregorian calendar in Italy.
pub const ITALY_JDN: i64 = 2_299_161;
/// JDN of 1752-09-14 (Gregorian), the first day of the Gregorian calendar in England.
pub const ENGLAND_JDN: i64 = 2_361_222;

/// Every day is interpreted under the proleptic Gregorian calendar.
pub const GREGORIAN: CalendarReform = CalendarReform::AlwaysGregorian;
/// The Gregorian reform as adopted by Italy, Spain, Portugal and Poland.
pub const ITALY: CalendarReform = CalendarReform::At(Jdn::new(ITALY_JDN));
/// The Gregorian reform as adopted by Great Britain and its colonies.
pub const ENGLAND: CalendarReform = CalendarReform::At(Jdn::new(ENGLAND_JDN));
/// Every day is interpreted under the proleptic Julian calendar.
pub const JULIAN: CalendarReform = CalendarReform::AlwaysJulian;

/// The day a date switches from the Julian to the Gregorian calendar.
///
/// Reforms are totally ordered by their threshold, with `AlwaysGregorian`
/// before every finite threshold and `AlwaysJulian` after every finite
/// threshold:
///
/// ```rust
/// use proleptic_rs::{ENGLAND, GREGORIAN, ITALY, JULIAN};
///
/// assert!(GREGORIAN < ITALY);
/// assert!(ITALY < ENGLAND);
/// assert!(ENGLAND < JULIAN);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarReform {
    /// No Julian days, equivalent to a threshold of negative infinity.
    AlwaysGregorian,
    /// The first Julian Day Number governed by the Gregorian calendar.
    At(Jdn),
    /// No Gregorian days, equivalent to a threshold of positive infinity.
    AlwaysJulian,
}

impl CalendarReform {
    pub const GREGORIAN: Self = GREGORIAN;
    pub const ITALY: Self = ITALY;
    pub const ENGLAND: Self = ENGLAND;
    pub const JULIAN: Self = JULIAN;

    /// Creates a reform at an arbitrary day number.
    ///
    /// Any day number is a valid reform, including ones with no
    /// historical meaning.
    #[inline]
    #[must_use]
    pub fn new(jd: impl Into<Jdn>) -> Self {
        Self::At(jd.into())
    }

    /// Returns this reform as a point on the extended integer line.
    #[inline]
    #[must_use]
    pub const fn as_extended(&self) -> Extended<&Jdn> {
        match self {
            Self::AlwaysGregorian => Extended::Infinite(Infinity::Negative),
            Self::At(jd) => Extended::Finite(jd),
            Self::AlwaysJulian => Extended::Infinite(Infinity::Positive),
        }
    }

    /// Returns the finite threshold, if there is one.
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> Option<&Jdn> {
        match self {
            Self::At(jd) => Some(jd),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::At(_))
    }

    /// Compares two reforms, returning `-1`, `0`, or `1`.
    #[inline]
    #[must_use]
    pub fn compare(&self, other: &Self) -> i8 {
        self.cmp(other) as i8
    }

    /// Returns whether `jd` is interpreted under the Gregorian calendar.
    #[inline]
    #[must_use]
    pub fn is_gregorian_at(&self, jd: &Jdn) -> bool {
        Extended::Finite(jd) >= self.as_extended()
    }

    /// Returns whether `jd` is interpreted under the Julian calendar.
    #[inline]
    #[must_use]
    pub fn is_julian_at(&self, jd: &Jdn) -> bool {
        !self.is_gregorian_at(jd)
    }

    /// Returns the identifier of this reform.
    ///
    /// Reforms other than the four named ones are `"custom"`.
    #[must_use]
    pub fn identifier(&self) -> TinyAsciiStr<16> {
        match self {
            Self::AlwaysGregorian => tinystr!(16, "gregorian"),
            Self::AlwaysJulian => tinystr!(16, "julian"),
            Self::At(jd) if *jd == ITALY_JDN => tinystr!(16, "italy"),
            Self::At(jd) if *jd == ENGLAND_JDN => tinystr!(16, "england"),
            Self::At(_) => tinystr!(16, "custom"),
        }
    }
}

impl Default for CalendarReform {
    fn default() -> Self {
        ITALY
    }
}

impl Ord for CalendarReform {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_extended().cmp(&other.as_extended())
    }
}

impl PartialOrd for CalendarReform {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarReform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identifier = self.identifier();
        match self {
            Self::At(jd) if identifier.as_str() == "custom" => fmt::Display::fmt(jd, f),
            _ => f.write_str(identifier.as_str()),
        }
    }
}

impl From<Infinity> for CalendarReform {
    fn from(value: Infinity) -> Self {
        match value {
            Infinity::Negative => Self::AlwaysGregorian,
            Infinity::Positive => Self::AlwaysJulian,
        }
    }
}

impl From<Extended<Jdn>> for CalendarReform {
    fn from(value: Extended<Jdn>) -> Self {
        match value {
            Extended::Infinite(inf) => inf.into(),
            Extended::Finite(jd) => Self::At(jd),
        }
    }
}

impl TryFrom<f64> for CalendarReform {
    type Error = DateError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Extended::<Jdn>::try_from(value)
            .map(Self::from)
            .map_err(|_| DateError::invalid_input().with_enum(ErrorMessage::ReformNotIntegral))
    }
}

impl FromStr for CalendarReform {
    type Err = DateError;
    fn from_str(s: &str) -> DateResult<Self> {
        if let Ok(name) = TinyAsciiStr::<16>::try_from_str(s) {
            match name.to_ascii_lowercase().as_str() {
                "gregorian" => return Ok(GREGORIAN),
                "italy" => return Ok(ITALY),
                "england" => return Ok(ENGLAND),
                "julian" => return Ok(JULIAN),
                _ => {}
            }
        }
        s.parse::<Jdn>()
            .map(Self::At)
            .map_err(|_| DateError::invalid_input().with_enum(ErrorMessage::ReformParse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alloc::string::ToString;

    const NAMED: [CalendarReform; 4] = [GREGORIAN, ITALY, ENGLAND, JULIAN];

    #[test]
    fn named_reform_table() {
        let expected: [[i8; 4]; 4] = [
            // GREGORIAN, ITALY, ENGLAND, JULIAN
            [0, -1, -1, -1], // GREGORIAN
            [1, 0, -1, -1],  // ITALY
            [1, 1, 0, -1],   // ENGLAND
            [1, 1, 1, 0],    // JULIAN
        ];
        for (i, a) in NAMED.iter().enumerate() {
            for (j, b) in NAMED.iter().enumerate() {
                assert_eq!(a.compare(b), expected[i][j], "{a} <=> {b}");
            }
        }
    }

    #[test]
    fn named_reform_literals() {
        assert_eq!(ITALY.compare(&ITALY), 0);
        assert_eq!(ITALY.compare(&ENGLAND), -1);
        assert_eq!(ITALY.compare(&JULIAN), -1);
        assert_eq!(ITALY.compare(&GREGORIAN), 1);

        assert_eq!(ENGLAND.compare(&ITALY), 1);
        assert_eq!(ENGLAND.compare(&ENGLAND), 0);
        assert_eq!(ENGLAND.compare(&JULIAN), -1);
        assert_eq!(ENGLAND.compare(&GREGORIAN), 1);

        assert_eq!(JULIAN.compare(&ITALY), 1);
        assert_eq!(JULIAN.compare(&ENGLAND), 1);
        assert_eq!(JULIAN.compare(&JULIAN), 0);
        assert_eq!(JULIAN.compare(&GREGORIAN), 1);

        assert_eq!(GREGORIAN.compare(&ITALY), -1);
        assert_eq!(GREGORIAN.compare(&ENGLAND), -1);
        assert_eq!(GREGORIAN.compare(&JULIAN), -1);
        assert_eq!(GREGORIAN.compare(&GREGORIAN), 0);
    }

    #[test]
    fn order_is_antisymmetric_and_transitive() {
        let reforms = [
            GREGORIAN,
            CalendarReform::new(i64::MIN),
            CalendarReform::new(-1),
            ITALY,
            ENGLAND,
            CalendarReform::new(Jdn::from(u64::MAX)),
            JULIAN,
        ];
        for a in &reforms {
            for b in &reforms {
                assert_eq!(a.compare(b), -b.compare(a));
                for c in &reforms {
                    if a <= b && b <= c {
                        assert!(a <= c, "{a} <= {b} <= {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn thresholds() {
        assert_eq!(ITALY.threshold(), Some(&Jdn::new(ITALY_JDN)));
        assert_eq!(ENGLAND.threshold(), Some(&Jdn::new(ENGLAND_JDN)));
        assert_eq!(GREGORIAN.threshold(), None);
        assert_eq!(JULIAN.threshold(), None);

        assert!(ITALY.is_finite());
        assert!(CalendarReform::new(-3).is_finite());
        assert!(!GREGORIAN.is_finite());
        assert!(!JULIAN.is_finite());

        assert_eq!(ENGLAND.as_extended(), Extended::Finite(&Jdn::new(ENGLAND_JDN)));
        assert_eq!(JULIAN.as_extended(), Extended::POSITIVE_INFINITY);
        assert_eq!(GREGORIAN.as_extended(), Extended::NEGATIVE_INFINITY);
    }

    #[test]
    fn gregorian_interpretation() {
        let jd = Jdn::new(ITALY_JDN);
        assert!(ITALY.is_gregorian_at(&jd));
        assert!(ITALY.is_julian_at(&(&jd - 1)));
        assert!(ENGLAND.is_julian_at(&jd));
        assert!(GREGORIAN.is_gregorian_at(&Jdn::new(i64::MIN)));
        assert!(JULIAN.is_julian_at(&Jdn::from(u64::MAX)));
        assert!(!JULIAN.is_gregorian_at(&Jdn::new(i64::MAX)));
    }

    #[test]
    fn identifiers() {
        assert_eq!(ITALY.identifier().as_str(), "italy");
        assert_eq!(ENGLAND.identifier().as_str(), "england");
        assert_eq!(JULIAN.identifier().as_str(), "julian");
        assert_eq!(GREGORIAN.identifier().as_str(), "gregorian");
        assert_eq!(CalendarReform::new(5).identifier().as_str(), "custom");
        assert_eq!(CalendarReform::new(ITALY_JDN), ITALY);
    }

    #[test]
    fn display() {
        assert_eq!(ITALY.to_string(), "italy");
        assert_eq!(JULIAN.to_string(), "julian");
        assert_eq!(CalendarReform::new(-3).to_string(), "-3");
    }

    #[test]
    fn parse_reforms() {
        assert_eq!("Italy".parse::<CalendarReform>().unwrap(), ITALY);
        assert_eq!("ENGLAND".parse::<CalendarReform>().unwrap(), ENGLAND);
        assert_eq!("julian".parse::<CalendarReform>().unwrap(), JULIAN);
        assert!(" julian ".parse::<CalendarReform>().is_err());
        assert_eq!("gregorian".parse::<CalendarReform>().unwrap(), GREGORIAN);
        assert_eq!(
            "2361222".parse::<CalendarReform>().unwrap(),
            CalendarReform::new(ENGLAND_JDN)
        );
        let err = "france".parse::<CalendarReform>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!("a very long unknown reform name".parse::<CalendarReform>().is_err());
    }

    #[test]
    fn parse_rejects_digit_separators() {
        for input in ["2_299_161", "2_361_222", "1_000"] {
            let err = input.parse::<CalendarReform>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{input}");
            assert_eq!(err.message(), ErrorMessage::ReformParse.to_str());
        }
    }

    #[test]
    fn reform_from_floats() {
        assert_eq!(CalendarReform::try_from(f64::INFINITY).unwrap(), JULIAN);
        assert_eq!(CalendarReform::try_from(f64::NEG_INFINITY).unwrap(), GREGORIAN);
        assert_eq!(CalendarReform::try_from(2_299_161.0).unwrap(), ITALY);
        let err = CalendarReform::try_from(2_299_161.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(CalendarReform::try_from(f64::NAN).is_err());
    }
}

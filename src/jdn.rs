//! Implementation of the `Jdn` primitive.
//!
//! A `Jdn` is a signed count of days since the Julian Day epoch
//! (January 1, 4713 BCE, proleptic Julian). It has no range limit: values
//! that fit in an `i64` are stored inline, anything larger is held in a
//! `BigInt`.

use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::{
    error::{DateError, ErrorMessage},
    DateResult,
};

/// A Julian Day Number of arbitrary magnitude.
///
/// ```rust
/// use proleptic_rs::Jdn;
///
/// let small = Jdn::new(2_299_161);
/// let large: Jdn = "340282366920938463463374607431768211456".parse().unwrap();
///
/// assert!(small < large);
/// assert_eq!(&(&large - &large) + 5, Jdn::new(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Jdn(Repr);

// NOTE: `Big` is only ever used for values outside of the `i64` range, so
// the derived equality and hash are by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    Small(i64),
    Big(BigInt),
}

impl Jdn {
    /// The Julian Day epoch.
    pub const ZERO: Self = Self::new(0);

    /// Creates a new `Jdn` from an `i64`.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(Repr::Small(value))
    }

    #[inline]
    fn from_big(value: BigInt) -> Self {
        match value.to_i64() {
            Some(small) => Self(Repr::Small(small)),
            None => Self(Repr::Big(value)),
        }
    }

    /// Returns the value as an `i64` if it fits.
    #[inline]
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self.0 {
            Repr::Small(value) => Some(value),
            Repr::Big(_) => None,
        }
    }

    /// Returns the value as a `BigInt`.
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        match &self.0 {
            Repr::Small(value) => BigInt::from(*value),
            Repr::Big(value) => value.clone(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match &self.0 {
            Repr::Small(value) => *value < 0,
            Repr::Big(value) => value.sign() == Sign::Minus,
        }
    }

    fn checked_op(
        &self,
        other: &Self,
        small: fn(i64, i64) -> Option<i64>,
        big: fn(BigInt, BigInt) -> BigInt,
    ) -> Self {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.0, &other.0) {
            if let Some(result) = small(*a, *b) {
                return Self::new(result);
            }
        }
        Self::from_big(big(self.to_bigint(), other.to_bigint()))
    }
}

impl Default for Jdn {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for Jdn {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            (Repr::Big(a), Repr::Big(b)) => a.cmp(b),
            // A big value is always beyond the `i64` range on its side of zero.
            (Repr::Small(_), Repr::Big(b)) if b.sign() == Sign::Minus => Ordering::Greater,
            (Repr::Small(_), Repr::Big(_)) => Ordering::Less,
            (Repr::Big(a), Repr::Small(_)) if a.sign() == Sign::Minus => Ordering::Less,
            (Repr::Big(_), Repr::Small(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Jdn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for Jdn {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialOrd<i64> for Jdn {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Self::new(*other)))
    }
}

impl fmt::Display for Jdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Small(value) => fmt::Display::fmt(value, f),
            Repr::Big(value) => fmt::Display::fmt(value, f),
        }
    }
}

// ==== Conversions ====

impl From<i64> for Jdn {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Jdn {
    fn from(value: i32) -> Self {
        Self::new(value.into())
    }
}

impl From<u32> for Jdn {
    fn from(value: u32) -> Self {
        Self::new(value.into())
    }
}

impl From<i128> for Jdn {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(small) => Self::new(small),
            Err(_) => Self(Repr::Big(BigInt::from(value))),
        }
    }
}

impl From<u64> for Jdn {
    fn from(value: u64) -> Self {
        Self::from(i128::from(value))
    }
}

impl From<BigInt> for Jdn {
    fn from(value: BigInt) -> Self {
        Self::from_big(value)
    }
}

impl From<Jdn> for BigInt {
    fn from(value: Jdn) -> Self {
        match value.0 {
            Repr::Small(value) => BigInt::from(value),
            Repr::Big(value) => value,
        }
    }
}

impl TryFrom<&Jdn> for i64 {
    type Error = DateError;
    fn try_from(value: &Jdn) -> Result<Self, Self::Error> {
        value
            .as_i64()
            .ok_or(DateError::range().with_enum(ErrorMessage::JdnOutOfI64Range))
    }
}

impl TryFrom<f64> for Jdn {
    type Error = DateError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DateError::invalid_input().with_enum(ErrorMessage::JdnNotFinite));
        }
        if core_maths::CoreFloat::trunc(value) != value {
            return Err(DateError::invalid_input().with_enum(ErrorMessage::JdnNotIntegral));
        }
        if let Some(small) = i64::from_f64(value) {
            return Ok(Self::new(small));
        }
        BigInt::from_f64(value)
            .map(Self::from_big)
            .ok_or(DateError::invalid_input().with_enum(ErrorMessage::JdnNotFinite))
    }
}

impl FromStr for Jdn {
    type Err = DateError;
    fn from_str(s: &str) -> DateResult<Self> {
        if let Ok(small) = s.parse::<i64>() {
            return Ok(Self::new(small));
        }
        // `BigInt` parsing also accepts `_` separators, so check the digits first.
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::invalid_input().with_enum(ErrorMessage::JdnParse));
        }
        s.parse::<BigInt>().map(Self::from_big).map_err(|e| {
            DateError::invalid_input()
                .with_message(alloc::format!("{} ({e})", ErrorMessage::JdnParse.to_str()))
        })
    }
}

// ==== Arithmetic ====

impl Add<&Jdn> for &Jdn {
    type Output = Jdn;
    fn add(self, rhs: &Jdn) -> Jdn {
        self.checked_op(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub<&Jdn> for &Jdn {
    type Output = Jdn;
    fn sub(self, rhs: &Jdn) -> Jdn {
        self.checked_op(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Add<i64> for &Jdn {
    type Output = Jdn;
    fn add(self, rhs: i64) -> Jdn {
        self + &Jdn::new(rhs)
    }
}

impl Sub<i64> for &Jdn {
    type Output = Jdn;
    fn sub(self, rhs: i64) -> Jdn {
        self - &Jdn::new(rhs)
    }
}

impl Add<i64> for Jdn {
    type Output = Jdn;
    fn add(self, rhs: i64) -> Jdn {
        &self + rhs
    }
}

impl Sub<i64> for Jdn {
    type Output = Jdn;
    fn sub(self, rhs: i64) -> Jdn {
        &self - rhs
    }
}

impl Neg for &Jdn {
    type Output = Jdn;
    fn neg(self) -> Jdn {
        &Jdn::ZERO - self
    }
}

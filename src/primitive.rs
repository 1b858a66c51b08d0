//! Implementation of the `Infinity` sentinel and the extended integer line.

use core::{cmp::Ordering, ops::Neg};

use crate::{error::DateError, jdn::Jdn};

/// A directional, unbounded marker.
///
/// `Infinity::Negative` precedes every finite value and
/// `Infinity::Positive` follows every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Infinity {
    Negative,
    Positive,
}

impl Infinity {
    /// Returns the ordering of this infinity relative to any finite value.
    #[inline]
    #[must_use]
    pub const fn cmp_finite(self) -> Ordering {
        match self {
            Self::Negative => Ordering::Less,
            Self::Positive => Ordering::Greater,
        }
    }

    /// Returns `-1` or `1`.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        self.cmp_finite() as i8
    }

    #[inline]
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }

    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

impl Neg for Infinity {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}

impl TryFrom<f64> for Infinity {
    type Error = DateError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == f64::NEG_INFINITY {
            Ok(Self::Negative)
        } else if value == f64::INFINITY {
            Ok(Self::Positive)
        } else {
            Err(DateError::invalid_input().with_message("value is not an infinity."))
        }
    }
}

// An infinity is never equal to a finite value, and its order against one
// does not depend on the finite value.
macro_rules! impl_finite_cmp {
    ($($finite:ty),+) => {
        $(
            impl PartialEq<$finite> for Infinity {
                fn eq(&self, _: &$finite) -> bool {
                    false
                }
            }

            impl PartialEq<Infinity> for $finite {
                fn eq(&self, _: &Infinity) -> bool {
                    false
                }
            }

            impl PartialOrd<$finite> for Infinity {
                fn partial_cmp(&self, _: &$finite) -> Option<Ordering> {
                    Some(self.cmp_finite())
                }
            }

            impl PartialOrd<Infinity> for $finite {
                fn partial_cmp(&self, other: &Infinity) -> Option<Ordering> {
                    Some(other.cmp_finite().reverse())
                }
            }
        )+
    };
}

impl_finite_cmp!(Jdn, i64);

/// A value on the integer line extended with both infinities.
///
/// The order is total: `Infinite(Negative) < Finite(_) < Infinite(Positive)`,
/// and finite values compare as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extended<T> {
    Infinite(Infinity),
    Finite(T),
}

impl<T> Extended<T> {
    pub const NEGATIVE_INFINITY: Self = Self::Infinite(Infinity::Negative);
    pub const POSITIVE_INFINITY: Self = Self::Infinite(Infinity::Positive);

    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the finite value, if any.
    #[inline]
    #[must_use]
    pub const fn finite(&self) -> Option<&T> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Infinite(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Extended<&T> {
        match self {
            Self::Infinite(inf) => Extended::Infinite(*inf),
            Self::Finite(value) => Extended::Finite(value),
        }
    }
}

impl<T: Ord> Ord for Extended<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Infinite(a), Self::Infinite(b)) => a.cmp(b),
            (Self::Infinite(a), Self::Finite(_)) => a.cmp_finite(),
            (Self::Finite(_), Self::Infinite(b)) => b.cmp_finite().reverse(),
            (Self::Finite(a), Self::Finite(b)) => a.cmp(b),
        }
    }
}

impl<T: Ord> PartialOrd for Extended<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> From<Infinity> for Extended<T> {
    fn from(value: Infinity) -> Self {
        Self::Infinite(value)
    }
}

impl From<Jdn> for Extended<Jdn> {
    fn from(value: Jdn) -> Self {
        Self::Finite(value)
    }
}

impl From<i64> for Extended<Jdn> {
    fn from(value: i64) -> Self {
        Self::Finite(Jdn::new(value))
    }
}

impl TryFrom<f64> for Extended<Jdn> {
    type Error = DateError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_infinite() {
            return Infinity::try_from(value).map(Self::Infinite);
        }
        Jdn::try_from(value).map(Self::Finite)
    }
}

/// Compares two values on the extended integer line, returning `-1`, `0`, or `1`.
#[inline]
#[must_use]
pub fn compare<T: Ord>(a: &Extended<T>, b: &Extended<T>) -> i8 {
    a.cmp(b) as i8
}

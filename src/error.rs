//! This module implements `DateError`.

use alloc::borrow::Cow;
use core::fmt;

/// `DateError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// A malformed value was provided where a day number, reform,
    /// or calendar field was expected.
    InvalidInput,
    /// `RangeError`
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::InvalidInput => "InvalidInput",
            Self::Range => "RangeError",
        })
    }
}

/// The error type for `proleptic_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl DateError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid input error.
    #[inline]
    #[must_use]
    pub const fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Add a fixed message to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = Cow::Borrowed(msg.to_str());
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DateError {}

/// The fixed messages used by `proleptic_rs` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    // Day numbers
    JdnNotIntegral,
    JdnNotFinite,
    JdnParse,
    JdnOutOfI64Range,

    // Reforms
    ReformNotIntegral,
    ReformParse,

    // Calendar fields
    MonthOutOfRange,
    DayOutOfRange,
    DateInReformGap,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::JdnNotIntegral => "day number must be an integer.",
            Self::JdnNotFinite => "day number must be finite.",
            Self::JdnParse => "day number is not a valid integer.",
            Self::JdnOutOfI64Range => "day number does not fit in a 64-bit integer.",
            Self::ReformNotIntegral => "reform day number must be an integer or an infinity.",
            Self::ReformParse => {
                "reform must be one of italy, england, julian, gregorian, or an integer day number."
            }
            Self::MonthOutOfRange => "month must be in the range 1..=12.",
            Self::DayOutOfRange => "day is not valid for the given month.",
            Self::DateInReformGap => "date falls in the days skipped by the calendar reform.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_with_and_without_message() {
        assert_eq!(DateError::range().to_string(), "RangeError");
        let err = DateError::invalid_input().with_enum(ErrorMessage::MonthOutOfRange);
        assert_eq!(
            err.to_string(),
            "InvalidInput: month must be in the range 1..=12."
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn general_keeps_owned_message() {
        let err = DateError::general(alloc::format!("bad value {}", 7));
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.message(), "bad value 7");
        assert_eq!(err.into_message(), "bad value 7");
    }
}

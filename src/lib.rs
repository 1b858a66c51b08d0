//! The `proleptic_rs` crate is a proleptic Julian and Gregorian date core
//! built on Julian Day Numbers.
//!
//! ```rust
//! use proleptic_rs::{Date, Jdn, ENGLAND, ITALY, JULIAN, GREGORIAN};
//!
//! // Day numbers have no upper bound.
//! let far = Date::from_jd(1i64 << 33);
//! assert_eq!(far.jd(), &Jdn::new(1 << 33));
//!
//! // Dates compare by day number, whatever their reform.
//! let italy = Date::from_jd_with_reform(2_299_161, ITALY);
//! let england = Date::from_jd_with_reform(2_299_161, ENGLAND);
//! assert_eq!(italy, england);
//!
//! // Reforms are totally ordered.
//! assert!(GREGORIAN < ITALY && ITALY < ENGLAND && ENGLAND < JULIAN);
//! ```
//!
//! A [`Date`] is a [`Jdn`] paired with a [`CalendarReform`]. The reform is
//! the first day interpreted under the Gregorian calendar; days before it
//! are interpreted under the Julian calendar. [`GREGORIAN`] and [`JULIAN`]
//! are unbounded reforms that select one proleptic calendar for every day.
//!
//! The reform never takes part in ordering or equality. It selects the leap
//! year rule (see [`leap_with_reform`]) and the calendar used when a date
//! is converted to or from calendar fields.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
)]

extern crate alloc;
extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod civil;
pub mod error;
pub mod leap;
pub mod primitive;
pub mod reform;

mod date;
mod jdn;

#[doc(inline)]
pub use error::DateError;

/// The `proleptic_rs` result type
pub type DateResult<T> = Result<T, DateError>;

pub use crate::{
    date::{Date, LD_EPOCH_JDN, MJD_EPOCH_JDN},
    jdn::Jdn,
    leap::{days_in_year, gregorian_leap, julian_leap, leap, leap_with_reform},
    primitive::{Extended, Infinity},
    reform::{CalendarReform, ENGLAND, GREGORIAN, ITALY, JULIAN},
};

#[doc(hidden)]
#[macro_export]
macro_rules! ensure_input {
    ($condition:expr, $msg:expr $(,)*) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!("rejected input: {}", $msg.to_str());
            return Err($crate::error::DateError::invalid_input().with_enum($msg));
        }
    };
}

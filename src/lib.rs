//! Exact conversion between the Bikram Sambat (BS) and Gregorian (AD) calendars.
//!
//! Bikram Sambat month lengths follow no arithmetic rule, so every conversion
//! counts whole days from a single verified epoch pair
//! (1 Baisakh 2081 = 13 April 2024) across a published month-length table
//! covering BS 2000 through 2090.
//!
//! ```
//! use bikram_sambat::{GregorianDate, to_ad, to_bs};
//!
//! let ad = GregorianDate::new(2026, 1, 15).unwrap();
//! let bs = to_bs(ad).unwrap();
//! assert_eq!(bs.to_string(), "2082-10-01");
//! assert_eq!(to_ad(2082, 10, 1).unwrap(), ad);
//! ```
//!
//! All operations are pure and the table is compiled in, so every function
//! may be called from any number of threads without coordination.

mod bs;
mod consts;
mod convert;
mod error;
mod fmt;
mod gregorian;
mod prelude;
mod range;
mod table;
mod walker;
mod weekday;

pub use bs::BsDate;
pub use consts::*;
pub use convert::{EPOCH_AD_DATE, EPOCH_BS_DATE, epoch, to_ad, to_bs};
pub use error::CalendarError;
pub use fmt::{
    NATIVE_DIGITS, Script, format, format_long, from_native_digits, month_name, to_native_digits,
    weekday_name,
};
pub use gregorian::{GregorianDate, gregorian_days_in_month, is_leap_year};
pub use range::{BsDateRange, RangeError};
pub use table::{days_in_month, days_in_year, is_supported_year, supported_years};
pub use walker::{advance, day_offset};
pub use weekday::Weekday;

use crate::prelude::*;

/// Errors from parsing dates out of text or validating Gregorian components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    /// Text was well formed but names a BS date the table rejects.
    #[display(fmt = "{_0}")]
    Calendar(CalendarError),
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for ParseError {
    fn from(err: CalendarError) -> Self {
        Self::Calendar(err)
    }
}

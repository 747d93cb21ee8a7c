//! Errors raised by the month-length table and the converters.

use crate::consts::{BS_MAX_YEAR, BS_MIN_YEAR, MAX_MONTH};

/// Error type for every fallible table lookup and calendar conversion.
///
/// Each variant is a value handed back to the caller; nothing in this crate
/// clamps an unsupported year or an overlong day into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CalendarError {
    /// The Bikram Sambat year has no entry in the month-length table.
    #[error("unknown Bikram Sambat year: {year} (supported {min}-{max})", min = BS_MIN_YEAR, max = BS_MAX_YEAR)]
    UnknownYear {
        /// The year that was looked up or walked into.
        year: u16,
    },

    /// A month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// A Bikram Sambat day that does not exist in the given year and month.
    #[error("invalid Bikram Sambat date: {year}-{month:02}-{day:02}")]
    InvalidBsDate {
        /// Year of the rejected date.
        year: u16,
        /// Month of the rejected date.
        month: u8,
        /// The day that is zero or past the end of the month.
        day: u8,
    },

    /// A day number whose Gregorian year falls outside `1..=9999`.
    #[error("Gregorian day number {day_number} is out of range")]
    GregorianOutOfRange {
        /// Julian day number that could not be represented.
        day_number: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_year() {
        let err = CalendarError::UnknownYear { year: 1999 };
        assert_eq!(
            err.to_string(),
            "unknown Bikram Sambat year: 1999 (supported 2000-2090)"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1-12)");
    }

    #[test]
    fn error_invalid_bs_date() {
        let err = CalendarError::InvalidBsDate {
            year: 2081,
            month: 9,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid Bikram Sambat date: 2081-09-30");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}

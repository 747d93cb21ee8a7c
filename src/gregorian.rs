//! Proleptic Gregorian dates and their Julian day numbers.

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::error::CalendarError;
use crate::prelude::*;
use crate::weekday::Weekday;
use crate::{BsDate, ParseError};
use std::str::FromStr;

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Julian day number of a proleptic Gregorian date.
///
/// Integer-only; the divisions truncate toward zero, which is exact for all
/// years from 1 onward.
pub(crate) const fn civil_to_day_number(year: u16, month: u8, day: u8) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12 - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Inverse of [`civil_to_day_number`], returning `(year, month, day)`.
const fn day_number_to_civil(jdn: i64) -> (i64, i64, i64) {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year, month, day)
}

/// Julian day number of 0001-01-01.
const MIN_DAY_NUMBER: i64 = civil_to_day_number(1, 1, 1);
/// Julian day number of 9999-12-31.
const MAX_DAY_NUMBER: i64 = civil_to_day_number(MAX_YEAR, 12, 31);

/// A validated proleptic Gregorian calendar date.
///
/// Carries no time of day; callers normalize timestamps to a calendar date
/// before handing them to the converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: u16,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a Gregorian date from raw components.
    ///
    /// # Errors
    /// - `ParseError::InvalidYear` if `year` is 0 or > `MAX_YEAR`
    /// - `ParseError::InvalidMonth` if `month` is outside `1..=12`
    /// - `ParseError::InvalidDay` if `day` is 0 or past the end of the month
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year == 0 || year > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > gregorian_days_in_month(year, month) {
            return Err(ParseError::InvalidDay { month, day, year });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components known to be valid at compile time.
    pub(crate) const fn from_parts_unchecked(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a Gregorian date from a Julian day number.
    ///
    /// # Errors
    /// Returns `CalendarError::GregorianOutOfRange` if the day number lies
    /// outside 0001-01-01 ..= 9999-12-31.
    pub fn from_day_number(day_number: i64) -> Result<Self, CalendarError> {
        let out_of_range = CalendarError::GregorianOutOfRange { day_number };
        if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&day_number) {
            return Err(out_of_range);
        }
        let (y, m, d) = day_number_to_civil(day_number);
        let year = u16::try_from(y).map_err(|_| out_of_range)?;
        let month = u8::try_from(m).map_err(|_| out_of_range)?;
        let day = u8::try_from(d).map_err(|_| out_of_range)?;
        Self::new(year, month, day).map_err(|_| out_of_range)
    }

    /// Julian day number of this date (2000-01-01 is 2451545).
    pub const fn day_number(&self) -> i64 {
        civil_to_day_number(self.year, self.month, self.day)
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the components as `(year, month, day)`.
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    /// Returns the date `days` days later (or earlier, when negative).
    ///
    /// # Errors
    /// Returns `CalendarError::GregorianOutOfRange` past year 9999 or before year 1.
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        let start = self.day_number();
        let target = start
            .checked_add(days)
            .ok_or(CalendarError::GregorianOutOfRange {
                day_number: start.saturating_add(days),
            })?;
        Self::from_day_number(target)
    }

    /// Converts this date to Bikram Sambat.
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownYear` if the date falls outside the table.
    pub fn to_bs(&self) -> Result<BsDate, CalendarError> {
        crate::convert::to_bs(*self)
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };
        Self::new(
            Self::parse_u16(year)?,
            Self::parse_u8(month)?,
            Self::parse_u8(day)?,
        )
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Bikram Sambat calendar dates.

use crate::consts::{BAISAKH, CHAITRA, DATE_SEPARATOR, MIN_DAY};
use crate::error::CalendarError;
use crate::fmt::from_native_digits;
use crate::gregorian::GregorianDate;
use crate::prelude::*;
use crate::table::days_in_month;
use crate::weekday::Weekday;
use crate::{ParseError, walker};
use std::str::FromStr;

/// A Bikram Sambat date that exists in the month-length table.
///
/// The only public constructor is [`BsDate::new`], which validates against the
/// table, so every value of this type satisfies
/// `1 <= month <= 12` and `1 <= day <= days_in_month(year, month)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct BsDate {
    year: u16,
    month: u8,
    day: u8,
}

impl BsDate {
    /// Validates untrusted components into a `BsDate`.
    ///
    /// # Errors
    /// - `CalendarError::InvalidBsDate` if `month` is outside `1..=12`, or
    ///   `day` is 0 or past the end of the month
    /// - `CalendarError::UnknownYear` if the table has no row for `year`
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max = days_in_month(year, month).map_err(|e| match e {
            CalendarError::InvalidMonth { .. } => CalendarError::InvalidBsDate { year, month, day },
            other => other,
        })?;
        if day < MIN_DAY || day > max {
            return Err(CalendarError::InvalidBsDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date the caller has already checked against the table.
    pub(crate) const fn from_parts_unchecked(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
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

    /// Converts this date to the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::GregorianOutOfRange` only if the table were to
    /// reach outside Gregorian years 1-9999.
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        crate::convert::bs_to_gregorian(*self)
    }

    /// Moves the date by `days` (negative moves backwards).
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownYear` if the result leaves the table.
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        walker::advance(*self, days)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        walker::day_offset(*self, *other)
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(crate::convert::bs_day_number(*self))
    }

    /// First day of this date's month.
    pub const fn first_of_month(&self) -> Self {
        Self::from_parts_unchecked(self.year, self.month, MIN_DAY)
    }

    /// Last day of this date's month.
    pub fn last_of_month(&self) -> Self {
        // Year and month are already known to be in the table
        let last = days_in_month(self.year, self.month).unwrap_or(self.day);
        Self::from_parts_unchecked(self.year, self.month, last)
    }

    /// First day of this date's year (1 Baisakh).
    pub const fn first_of_year(&self) -> Self {
        Self::from_parts_unchecked(self.year, BAISAKH, MIN_DAY)
    }

    /// Last day of this date's year (last day of Chaitra).
    pub fn last_of_year(&self) -> Self {
        Self::from_parts_unchecked(self.year, CHAITRA, MIN_DAY).last_of_month()
    }

    /// Renders as `"{day} {month name} {year}"`; see [`crate::format`].
    pub fn format(&self, use_native_digits: bool) -> String {
        crate::fmt::format(self, use_native_digits)
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        from_native_digits(s)
            .parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for BsDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD` written in Latin or Devanagari digits.
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
        Ok(Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )?)
    }
}

impl TryFrom<(u16, u8, u8)> for BsDate {
    type Error = CalendarError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<BsDate> for (u16, u8, u8) {
    fn from(date: BsDate) -> Self {
        date.to_tuple()
    }
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

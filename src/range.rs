use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    BsDate, CalendarError, GregorianDate, ParseError, RANGE_SEPARATOR, prelude::*, walker,
};

/// An inclusive span of Bikram Sambat days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct BsDateRange {
    start: BsDate,
    end:   BsDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: BsDate, end: BsDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Table lookup or conversion failure.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl BsDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: BsDate, end: BsDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The whole of one Bikram Sambat month.
    ///
    /// # Errors
    /// Returns `RangeError::Calendar` for an unknown year or a month outside `1..=12`.
    pub fn month(year: u16, month: u8) -> Result<Self, RangeError> {
        let first = BsDate::new(year, month, 1)?;
        Ok(Self {
            start: first,
            end:   first.last_of_month(),
        })
    }

    /// The whole of one Bikram Sambat year, 1 Baisakh through the end of Chaitra.
    ///
    /// # Errors
    /// Returns `RangeError::Calendar` for an unknown year.
    pub fn year(year: u16) -> Result<Self, RangeError> {
        let first = BsDate::new(year, 1, 1)?;
        Ok(Self {
            start: first,
            end:   first.last_of_year(),
        })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> BsDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> BsDate {
        self.end
    }

    /// Number of days in the range, both ends included.
    pub fn len_days(&self) -> u32 {
        // end >= start, so the offset is non-negative and bounded by the table
        u32::try_from(walker::day_offset(self.start, self.end)).unwrap_or(0) + 1
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &BsDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Inclusive Gregorian bounds of the range.
    ///
    /// # Errors
    /// Propagates `CalendarError::GregorianOutOfRange` from the conversion.
    pub fn to_gregorian(&self) -> Result<(GregorianDate, GregorianDate), CalendarError> {
        Ok((self.start.to_gregorian()?, self.end.to_gregorian()?))
    }

    /// Every day of the range in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = BsDate> + use<> {
        let start = self.start;
        (0..i64::from(self.len_days())).filter_map(move |offset| walker::advance(start, offset).ok())
    }
}

impl FromStr for BsDateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;

                let start = start_str.trim().parse::<BsDate>()?;
                let end = end_str.trim().parse::<BsDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for BsDateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BsDateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for BsDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BsDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs(y: u16, m: u8, d: u8) -> BsDate {
        BsDate::new(y, m, d).unwrap()
    }

    fn ad(y: u16, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_reversed_bounds() {
        let result = BsDateRange::new(bs(2081, 2, 1), bs(2081, 1, 1));
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
        assert!(BsDateRange::new(bs(2081, 1, 1), bs(2081, 1, 1)).is_ok());
    }

    #[test]
    fn test_month_span() {
        let poush = BsDateRange::month(2081, 9).unwrap();
        assert_eq!(poush.start(), bs(2081, 9, 1));
        assert_eq!(poush.end(), bs(2081, 9, 29));
        assert_eq!(poush.len_days(), 29);
    }

    #[test]
    fn test_month_span_errors() {
        assert_eq!(
            BsDateRange::month(2081, 13),
            Err(RangeError::Calendar(CalendarError::InvalidBsDate {
                year: 2081,
                month: 13,
                day: 1
            }))
        );
        assert_eq!(
            BsDateRange::month(2100, 1),
            Err(RangeError::Calendar(CalendarError::UnknownYear { year: 2100 }))
        );
    }

    #[test]
    fn test_year_span() {
        let y = BsDateRange::year(2081).unwrap();
        assert_eq!(y.start(), bs(2081, 1, 1));
        assert_eq!(y.end(), bs(2081, 12, 31));
        assert_eq!(y.len_days(), 366);
        assert_eq!(y.to_gregorian().unwrap(), (ad(2024, 4, 13), ad(2025, 4, 13)));
    }

    #[test]
    fn test_month_to_gregorian() {
        // Baisakh 2082 runs 14 April to 14 May 2025
        let baisakh = BsDateRange::month(2082, 1).unwrap();
        assert_eq!(
            baisakh.to_gregorian().unwrap(),
            (ad(2025, 4, 14), ad(2025, 5, 14))
        );
    }

    #[test]
    fn test_contains_and_overlaps() {
        let jestha = BsDateRange::month(2081, 2).unwrap();
        let asar = BsDateRange::month(2081, 3).unwrap();
        assert!(jestha.contains(&bs(2081, 2, 32)));
        assert!(!jestha.contains(&bs(2081, 3, 1)));
        assert!(!jestha.overlaps(&asar));

        let straddle = BsDateRange::new(bs(2081, 2, 30), bs(2081, 3, 2)).unwrap();
        assert!(straddle.overlaps(&jestha));
        assert!(straddle.overlaps(&asar));
        assert!(!straddle.is_within(&jestha));
        assert!(jestha.is_within(&BsDateRange::year(2081).unwrap()));
    }

    #[test]
    fn test_iter_visits_every_day() {
        let range = BsDateRange::new(bs(2080, 12, 29), bs(2081, 1, 2)).unwrap();
        let days: Vec<BsDate> = range.iter().collect();
        assert_eq!(
            days,
            vec![
                bs(2080, 12, 29),
                bs(2080, 12, 30),
                bs(2081, 1, 1),
                bs(2081, 1, 2)
            ]
        );
    }

    #[test]
    fn test_parse_and_display() {
        let range: BsDateRange = "2081-01-01/2081-01-31".parse().unwrap();
        assert_eq!(range, BsDateRange::month(2081, 1).unwrap());
        assert_eq!(range.to_string(), "2081-01-01/2081-01-31");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "2081-01-01".parse::<BsDateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2081-01-01/2081-01-02/2081-01-03".parse::<BsDateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2081-02-01/2081-01-01".parse::<BsDateRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
        assert!(matches!(
            "2081-01-40/2081-02-01".parse::<BsDateRange>(),
            Err(RangeError::ParseError(ParseError::Calendar(_)))
        ));
    }

    #[test]
    fn test_ordering() {
        let a = BsDateRange::month(2081, 1).unwrap();
        let b = BsDateRange::month(2081, 2).unwrap();
        let c = BsDateRange::new(bs(2081, 1, 1), bs(2081, 1, 15)).unwrap();
        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn test_serde_as_string() {
        let range = BsDateRange::month(2082, 10).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "\"2082-10-01/2082-10-29\"");
        let parsed: BsDateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, range);
    }
}

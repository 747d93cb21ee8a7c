//! Conversion between Gregorian and Bikram Sambat dates.
//!
//! Both directions count whole days from one fixed pair of dates known to
//! coincide (the epoch) and project the count onto the other calendar.

use crate::bs::BsDate;
use crate::consts::{EPOCH_AD, EPOCH_BS};
use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::walker;

/// Bikram Sambat half of the epoch pair.
pub const EPOCH_BS_DATE: BsDate =
    BsDate::from_parts_unchecked(EPOCH_BS.0, EPOCH_BS.1, EPOCH_BS.2);

/// Gregorian half of the epoch pair.
pub const EPOCH_AD_DATE: GregorianDate =
    GregorianDate::from_parts_unchecked(EPOCH_AD.0, EPOCH_AD.1, EPOCH_AD.2);

/// Julian day number of the Gregorian half of the epoch pair.
pub(crate) const EPOCH_DAY_NUMBER: i64 = EPOCH_AD_DATE.day_number();

/// Returns the epoch pair `(bs, gregorian)`.
pub const fn epoch() -> (BsDate, GregorianDate) {
    (EPOCH_BS_DATE, EPOCH_AD_DATE)
}

/// Converts a Gregorian date to Bikram Sambat.
///
/// # Errors
/// Returns `CalendarError::UnknownYear` if the date falls outside the
/// month-length table.
#[tracing::instrument(level = "trace", skip(date), fields(date = %date))]
pub fn to_bs(date: GregorianDate) -> Result<BsDate, CalendarError> {
    let delta = date.day_number() - EPOCH_DAY_NUMBER;
    walker::advance(EPOCH_BS_DATE, delta)
}

/// Converts raw Bikram Sambat components to a Gregorian date.
///
/// # Errors
/// - `CalendarError::InvalidBsDate` if the month is outside `1..=12` or the
///   day does not exist in that month
/// - `CalendarError::UnknownYear` if the year has no table row
#[tracing::instrument(level = "trace")]
pub fn to_ad(year: u16, month: u8, day: u8) -> Result<GregorianDate, CalendarError> {
    bs_to_gregorian(BsDate::new(year, month, day)?)
}

pub(crate) fn bs_to_gregorian(date: BsDate) -> Result<GregorianDate, CalendarError> {
    GregorianDate::from_day_number(bs_day_number(date))
}

/// Julian day number of a Bikram Sambat date.
pub(crate) fn bs_day_number(date: BsDate) -> i64 {
    EPOCH_DAY_NUMBER + walker::day_offset(EPOCH_BS_DATE, date)
}

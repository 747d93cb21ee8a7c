//! Day-count arithmetic over the month-length table.
//!
//! Dates are mapped to an ordinal (days since 1 Baisakh of the first table
//! year) through the precomputed year starts, so moving by any offset costs a
//! binary search over years plus at most twelve month steps.

use crate::bs::BsDate;
use crate::consts::{BS_MAX_YEAR, BS_MIN_YEAR, MIN_DAY};
use crate::error::CalendarError;
use crate::table::{MONTH_LENGTHS, YEAR_STARTS, YEAR_COUNT};
use tracing::debug;

/// Days from 1 Baisakh `BS_MIN_YEAR` to `date`.
pub(crate) fn ordinal(date: BsDate) -> i64 {
    let idx = usize::from(date.year() - BS_MIN_YEAR);
    let months_before: u32 = MONTH_LENGTHS[idx][..usize::from(date.month() - 1)]
        .iter()
        .map(|&len| u32::from(len))
        .sum();
    i64::from(YEAR_STARTS[idx] + months_before + u32::from(date.day() - MIN_DAY))
}

/// Inverse of [`ordinal`].
///
/// # Errors
/// Returns `CalendarError::UnknownYear` naming the first year past either end
/// of the table when `ordinal` falls outside it.
pub(crate) fn from_ordinal(ordinal: i64) -> Result<BsDate, CalendarError> {
    let total = i64::from(YEAR_STARTS[YEAR_COUNT]);
    if ordinal < 0 {
        debug!(ordinal, "walk left the table before its first year");
        return Err(CalendarError::UnknownYear {
            year: BS_MIN_YEAR - 1,
        });
    }
    if ordinal >= total {
        debug!(ordinal, "walk left the table after its last year");
        return Err(CalendarError::UnknownYear {
            year: BS_MAX_YEAR + 1,
        });
    }
    // In range, so the value fits in u32
    let target = u32::try_from(ordinal).map_err(|_| CalendarError::UnknownYear {
        year: BS_MAX_YEAR + 1,
    })?;

    let idx = YEAR_STARTS.partition_point(|&start| start <= target) - 1;
    let mut remaining = target - YEAR_STARTS[idx];
    let mut month = 1u8;
    for &len in &MONTH_LENGTHS[idx] {
        let len = u32::from(len);
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }

    #[allow(clippy::cast_possible_truncation)]
    let year = BS_MIN_YEAR + idx as u16;
    #[allow(clippy::cast_possible_truncation)]
    let day = remaining as u8 + MIN_DAY;
    Ok(BsDate::from_parts_unchecked(year, month, day))
}

/// Moves `date` by exactly `delta_days` calendar days, rolling over month and
/// year boundaries. A zero delta returns the input unchanged.
///
/// # Errors
/// Returns `CalendarError::UnknownYear` if the walk leaves the table.
pub fn advance(date: BsDate, delta_days: i64) -> Result<BsDate, CalendarError> {
    if delta_days == 0 {
        return Ok(date);
    }
    let target = ordinal(date)
        .checked_add(delta_days)
        .ok_or(CalendarError::UnknownYear {
            year: if delta_days > 0 {
                BS_MAX_YEAR + 1
            } else {
                BS_MIN_YEAR - 1
            },
        })?;
    from_ordinal(target)
}

/// Signed day count such that `advance(from, day_offset(from, to)) == to`.
pub fn day_offset(from: BsDate, to: BsDate) -> i64 {
    ordinal(to) - ordinal(from)
}

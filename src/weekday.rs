//! Day of the week shared by both calendars.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, numbered from Sunday as the Nepali week is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday of a Julian day number.
    pub(crate) const fn from_day_number(day_number: i64) -> Self {
        // JDN 0 fell on a Monday
        Self::ALL[(day_number + 1).rem_euclid(7) as usize]
    }

    /// Position in the week, Sunday = 0 through Saturday = 6.
    pub const fn number_from_sunday(self) -> u8 {
        self as u8
    }
}

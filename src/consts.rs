/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month, shared by both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// First Bikram Sambat year covered by the month-length table
pub const BS_MIN_YEAR: u16 = 2000;
/// Last Bikram Sambat year covered by the month-length table (inclusive)
pub const BS_MAX_YEAR: u16 = 2090;

/// Baisakh, the first month of the Bikram Sambat year
pub const BAISAKH: u8 = 1;
/// Chaitra, the last month of the Bikram Sambat year
pub const CHAITRA: u8 = 12;

/// Bikram Sambat half of the epoch pair: 1 Baisakh 2081
pub const EPOCH_BS: (u16, u8, u8) = (2081, BAISAKH, 1);
/// Gregorian half of the epoch pair: 13 April 2024
pub const EPOCH_AD: (u16, u8, u8) = (2024, 4, 13);

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

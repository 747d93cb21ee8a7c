//! Rendering Bikram Sambat dates for display.

use crate::bs::BsDate;
use crate::weekday::Weekday;

/// Writing system used for month names, weekday names and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    /// Romanized names, ASCII digits.
    #[default]
    Latin,
    /// Nepali names, Devanagari digits.
    Devanagari,
}

/// Devanagari digits, indexed by value.
pub const NATIVE_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

const MONTH_NAMES_LATIN: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush", "Magh",
    "Falgun", "Chaitra",
];

const MONTH_NAMES_DEVANAGARI: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कात्तिक", "मंसिर", "पुस", "माघ", "फागुन", "चैत",
];

const WEEKDAY_NAMES_DEVANAGARI: [&str; 7] = [
    "आइतबार", "सोमबार", "मंगलबार", "बुधबार", "बिहीबार", "शुक्रबार", "शनिबार",
];

/// Month name for `month` (1-12), or `None` outside that range.
pub fn month_name(month: u8, script: Script) -> Option<&'static str> {
    let idx = usize::from(month.checked_sub(1)?);
    match script {
        Script::Latin => MONTH_NAMES_LATIN.get(idx).copied(),
        Script::Devanagari => MONTH_NAMES_DEVANAGARI.get(idx).copied(),
    }
}

pub fn weekday_name(weekday: Weekday, script: Script) -> &'static str {
    match script {
        Script::Latin => match weekday {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        },
        Script::Devanagari => WEEKDAY_NAMES_DEVANAGARI[usize::from(weekday.number_from_sunday())],
    }
}

/// Replaces every ASCII digit in `s` with its Devanagari counterpart.
pub fn to_native_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .map_or(c, |d| NATIVE_DIGITS[d as usize])
        })
        .collect()
}

/// Replaces every Devanagari digit in `s` with its ASCII counterpart.
pub fn from_native_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            NATIVE_DIGITS
                .iter()
                .position(|&n| n == c)
                .and_then(|d| char::from_digit(u32::try_from(d).ok()?, 10))
                .unwrap_or(c)
        })
        .collect()
}

fn render(date: &BsDate, script: Script) -> String {
    // BsDate guarantees 1..=12
    let month = month_name(date.month(), script).unwrap_or_default();
    let text = format!("{} {month} {}", date.day(), date.year());
    match script {
        Script::Latin => text,
        Script::Devanagari => to_native_digits(&text),
    }
}

/// Renders `"{day} {month name} {year}"`.
///
/// With `use_native_digits` the month name is written in Devanagari and every
/// digit goes through [`NATIVE_DIGITS`]; otherwise the romanized name and
/// ASCII digits are used.
///
/// ```
/// use bikram_sambat::{BsDate, format};
///
/// let date = BsDate::new(2082, 10, 1).unwrap();
/// assert_eq!(format(&date, false), "1 Magh 2082");
/// assert_eq!(format(&date, true), "१ माघ २०८२");
/// ```
pub fn format(date: &BsDate, use_native_digits: bool) -> String {
    let script = if use_native_digits {
        Script::Devanagari
    } else {
        Script::Latin
    };
    render(date, script)
}

/// Renders `"{weekday}, {day} {month name} {year}"` in the given script.
pub fn format_long(date: &BsDate, script: Script) -> String {
    format!(
        "{}, {}",
        weekday_name(date.weekday(), script),
        render(date, script)
    )
}

//! Quick-entry dates

use chrono::{Datelike, Duration, NaiveDate};

use super::is_digits;

/// Weekday abbreviations, indexed from Sunday
pub const WEEKDAYS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];

/// Format a raw digit string into `"<weekday>, DD.MM.YYYY"`.
///
/// * 2 digits are a day of the reference month
/// * 4 digits are a day and a month of the reference year
/// * 6 digits are a day, a month and a year in the 2000s
///
/// Anything else is not ready yet, and is returned unchanged.
pub fn format_date(raw: &str, reference_year: i32, reference_month: u32) -> String {
    try_format_date(raw, reference_year, reference_month)
        .unwrap_or_else(|| raw.to_string())
}

/// Same as [`format_date`], but returns `None` when `raw` cannot be formatted (yet)
pub fn try_format_date(raw: &str, reference_year: i32, reference_month: u32) -> Option<String> {
    if is_digits(raw) == false {
        return None;
    }

    let (day, month, year) = match raw.len() {
        2 => (raw, format!("{:02}", reference_month), reference_year),
        4 => (&raw[0..2], raw[2..4].to_string(), reference_year),
        6 => (&raw[0..2], raw[2..4].to_string(), 2000 + raw[4..6].parse::<i32>().ok()?),
        _ => return None,
    };

    let weekday = weekday_abbrev(year, month.parse().ok()?, day.parse().ok()?)?;
    // Day and month are kept as typed
    Some(format!("{}, {}.{}.{}", weekday, day, month, year))
}

/// Returns the weekday abbreviation of a Gregorian date.
///
/// Out-of-range months and days are not rejected, they roll over like a calendar would:
/// the 31st of April is the 1st of May, month 13 is January of the next year, day 0 is the last day of the previous month.
/// This only returns `None` for years that `chrono` cannot represent.
pub fn weekday_abbrev(year: i32, month: u32, day: u32) -> Option<&'static str> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let first_of_month = NaiveDate::from_ymd_opt(
        months.div_euclid(12) as i32,
        months.rem_euclid(12) as u32 + 1,
        1,
    )?;
    let date = first_of_month.checked_add_signed(Duration::days(i64::from(day) - 1))?;
    Some(WEEKDAYS[date.weekday().num_days_from_sunday() as usize])
}

/// Parse a canonical `"Ab, DD.MM.YYYY"` string into `(day, month, year)`.
///
/// The weekday abbreviation must be two ASCII letters, but is not checked against the actual date.
pub fn parse_canonical_date(s: &str) -> Option<(u32, u32, u32)> {
    let b = s.as_bytes();
    if b.len() != 14 {
        return None;
    }
    if b[0].is_ascii_alphabetic() == false || b[1].is_ascii_alphabetic() == false
        || &b[2..4] != b", " || b[6] != b'.' || b[9] != b'.'
    {
        return None;
    }
    let digit_positions = [4, 5, 7, 8, 10, 11, 12, 13];
    if digit_positions.iter().all(|&i| b[i].is_ascii_digit()) == false {
        return None;
    }

    // Every byte is ASCII from here on
    Some((s[4..6].parse().ok()?, s[7..9].parse().ok()?, s[10..14].parse().ok()?))
}

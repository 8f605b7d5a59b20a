//! Quick-entry times

use super::is_digits;

/// Format 4 raw digits into `"HH:MM"`. Anything else is still being typed, and is returned unchanged.
pub fn format_time(raw: &str) -> String {
    try_format_time(raw).unwrap_or_else(|| raw.to_string())
}

/// Same as [`format_time`], but returns `None` when `raw` is not 4 digits
pub fn try_format_time(raw: &str) -> Option<String> {
    if raw.len() == 4 && is_digits(raw) {
        Some(format!("{}:{}", &raw[0..2], &raw[2..4]))
    } else {
        None
    }
}

/// Format a time entry that the user explicitly submitted.
///
/// On top of what [`format_time`] does, 2 digits are understood as a full hour (`"08"` is `"08:00"`).
pub fn finalize_time(raw: &str) -> String {
    if raw.len() == 2 && is_digits(raw) {
        return format!("{}:00", raw);
    }
    format_time(raw)
}

/// Parse a canonical `"H:MM"` or `"HH:MM"` string into `(hours, minutes)`
pub fn parse_canonical_time(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.splitn(2, ':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    if hours.len() > 2 || is_digits(hours) == false {
        return None;
    }
    if minutes.len() != 2 || is_digits(minutes) == false {
        return None;
    }
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

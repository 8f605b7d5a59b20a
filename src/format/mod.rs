//! This module turns raw keystrokes into the canonical date and time strings that are displayed and stored
//!
//! Dates are typed as digits (`04`, `0405` or `040525`) and displayed as `"So, 04.05.2025"`. \
//! Times are typed as digits (`0830`, or `08` when the entry is finalized) and displayed as `"08:30"`. \
//! Nothing is validated: impossible dates roll over to whatever the calendar arithmetic gives, and `9999` is a valid time.

mod date;
pub use date::{format_date, try_format_date, parse_canonical_date, weekday_abbrev, WEEKDAYS};
mod time;
pub use time::{format_time, try_format_time, finalize_time, parse_canonical_time};

/// Whether `s` is a non-empty string of ASCII digits
pub(crate) fn is_digits(s: &str) -> bool {
    s.is_empty() == false && s.bytes().all(|b| b.is_ascii_digit())
}

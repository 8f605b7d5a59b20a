//! Utilities to compare tasks
//!
//! Tasks are ordered by date, then by time. Undated and untimed tasks come after the others, and tasks that are completely empty come last.

use std::cmp::Ordering;

use crate::format::{parse_canonical_date, parse_canonical_time};
use crate::task::Task;

/// A sort key. `SortKey::Last` stands for "infinity", it sorts after every parsed key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Value(u32),
    Last,
}

/// Returns `YYYYMMDD` for a canonical `"Ab, DD.MM.YYYY"` date, or [`SortKey::Last`] for anything else
pub fn date_sort_key(date: &str) -> SortKey {
    match parse_canonical_date(date) {
        Some((day, month, year)) => SortKey::Value(year * 10_000 + month * 100 + day),
        None => SortKey::Last,
    }
}

/// Returns `HHMM` for a canonical `"HH:MM"` time, or [`SortKey::Last`] for anything else
pub fn time_sort_key(time: &str) -> SortKey {
    match parse_canonical_time(time) {
        Some((hours, minutes)) => SortKey::Value(hours * 100 + minutes),
        None => SortKey::Last,
    }
}

/// Compare two tasks for display and storage order
pub fn compare_tasks(left: &Task, right: &Task) -> Ordering {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {},
    }

    date_sort_key(left.date()).cmp(&date_sort_key(right.date()))
        .then_with(|| time_sort_key(left.time()).cmp(&time_sort_key(right.time())))
}

/// Sort tasks in place. The sort is stable: tasks that compare equal keep their relative order.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(compare_tasks);
}

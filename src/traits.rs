//! Traits used at the boundaries of this crate

use std::error::Error;

use chrono::{Local, NaiveDate};

use crate::task::{Task, TaskDraft, TaskId};

/// A durable key-value slot, such as a file on disk, or a browser-like local storage
pub trait Storage {
    /// Returns the value stored for `key`, or `None` if nothing has been stored yet
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;
    /// Store a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>>;
    /// Erase the value stored for `key`. Erasing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), Box<dyn Error>>;
}

/// The actions a view layer can trigger on the task list.
///
/// Each call operates on the most recent collection. Unknown IDs are silently ignored.
pub trait TaskCallbacks {
    fn on_add_task(&mut self, draft: TaskDraft) -> Option<TaskId>;
    fn on_update_task(&mut self, task: Task);
    fn on_delete_task(&mut self, id: TaskId);
    fn on_toggle_task_done(&mut self, id: TaskId);
    /// Callers are expected to have asked the user for confirmation already
    fn on_clear_all(&mut self);
}

/// A source of the current time
pub trait Clock {
    /// The current calendar date, used as a reference for partial dates
    fn today(&self) -> NaiveDate;
    /// Milliseconds since the Unix epoch, used to generate task IDs
    fn now_millis(&self) -> i64;
}

/// The host clock, in the local time zone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

/// A clock that always returns the same instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    today: NaiveDate,
    millis: i64,
}

impl FixedClock {
    pub fn new(today: NaiveDate, millis: i64) -> Self {
        Self { today, millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}

//! Keystroke-level input buffers, for new tasks and for tasks being edited
//!
//! Updating a field, checking whether the buffer wants to be submitted, and submitting it are three separate steps:
//! ```
//! # use chrono::NaiveDate;
//! # use datebook::assembler::{InputAssembler, Field, Commit};
//! let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
//! let mut buffer = InputAssembler::new();
//! buffer.input(Field::Text, "dentist", today);
//! buffer.input(Field::Date, "040525", today);
//! assert!(buffer.is_submit_ready());
//! match buffer.submit(today) {
//!     Some(Commit::Create(draft)) => assert_eq!(draft.date, "So, 04.05.2025"),
//!     _ => panic!(),
//! }
//! ```

use chrono::{Datelike, NaiveDate};

use crate::format::{self, is_digits, parse_canonical_date, parse_canonical_time};
use crate::task::{Task, TaskDraft};

/// One of the three input fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Date,
    Time,
    Text,
}

/// The state of an input field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldState {
    Empty,
    /// Digits that are still being typed
    PartialDigits(String),
    /// A fully formatted date or time
    Canonical(String),
    /// Anything else, kept verbatim
    Freeform(String),
}

impl Default for FieldState {
    fn default() -> Self {
        FieldState::Empty
    }
}

impl FieldState {
    /// What the field displays
    pub fn as_str(&self) -> &str {
        match self {
            FieldState::Empty => "",
            FieldState::PartialDigits(s) | FieldState::Canonical(s) | FieldState::Freeform(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldState::Empty)
    }

    /// Up to 5 digits are kept raw, 6 digits are a complete date
    pub fn from_date_input(value: &str, today: NaiveDate) -> Self {
        if value.is_empty() {
            return FieldState::Empty;
        }
        if is_digits(value) {
            match value.len() {
                1..=5 => return FieldState::PartialDigits(value.to_string()),
                6 => return FieldState::Canonical(format::format_date(value, today.year(), today.month())),
                _ => {},
            }
        }
        FieldState::Freeform(value.to_string())
    }

    /// Up to 3 digits are kept raw, 4 digits are a complete time
    pub fn from_time_input(value: &str) -> Self {
        if value.is_empty() {
            return FieldState::Empty;
        }
        if is_digits(value) {
            match value.len() {
                1..=3 => return FieldState::PartialDigits(value.to_string()),
                4 => return FieldState::Canonical(format::format_time(value)),
                _ => {},
            }
        }
        FieldState::Freeform(value.to_string())
    }

    pub fn from_text_input(value: &str) -> Self {
        if value.is_empty() {
            FieldState::Empty
        } else {
            FieldState::Freeform(value.to_string())
        }
    }

    /// The state of a date that was already stored
    pub fn from_stored_date(value: &str) -> Self {
        if value.is_empty() {
            FieldState::Empty
        } else if parse_canonical_date(value).is_some() {
            FieldState::Canonical(value.to_string())
        } else {
            FieldState::Freeform(value.to_string())
        }
    }

    /// The state of a time that was already stored
    pub fn from_stored_time(value: &str) -> Self {
        if value.is_empty() {
            FieldState::Empty
        } else if parse_canonical_time(value).is_some() {
            FieldState::Canonical(value.to_string())
        } else {
            FieldState::Freeform(value.to_string())
        }
    }

    /// The value to commit for a date field. A day (2 digits) or a day and month (4 digits) are completed from `today`.
    /// Other partial entries are committed as typed.
    pub fn finalize_date(&self, today: NaiveDate) -> String {
        match self {
            FieldState::PartialDigits(raw) if raw.len() == 2 || raw.len() == 4 => {
                format::format_date(raw, today.year(), today.month())
            },
            other => other.as_str().to_string(),
        }
    }

    /// The value to commit for a time field. 2 digits are a full hour.
    /// Other partial entries are committed as typed.
    pub fn finalize_time(&self) -> String {
        match self {
            FieldState::PartialDigits(raw) if raw.len() == 2 => format::finalize_time(raw),
            other => other.as_str().to_string(),
        }
    }
}


/// What a buffer is editing
#[derive(Clone, Debug, PartialEq)]
pub enum EditTarget {
    /// A task that does not exist yet
    New,
    /// A task that is already stored
    Existing(Task),
}

/// The result of a successful submission
#[derive(Clone, Debug, PartialEq)]
pub enum Commit {
    /// A new task should be created from this content
    Create(TaskDraft),
    /// This task should replace the stored task that has the same ID
    Replace(Task),
}

/// The input buffer of a task row
#[derive(Clone, Debug, PartialEq)]
pub struct InputAssembler {
    target: EditTarget,
    date: FieldState,
    time: FieldState,
    text: FieldState,
    /// Set when a complete 6-digit date has just been typed
    date_completed: bool,
}

impl InputAssembler {
    /// An empty buffer for a new task
    pub fn new() -> Self {
        Self {
            target: EditTarget::New,
            date: FieldState::Empty,
            time: FieldState::Empty,
            text: FieldState::Empty,
            date_completed: false,
        }
    }

    /// A buffer pre-filled with the content of an existing task
    pub fn for_task(task: &Task) -> Self {
        let mut assembler = Self::new();
        assembler.load(task);
        assembler
    }

    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    pub fn state(&self, field: Field) -> &FieldState {
        match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Text => &self.text,
        }
    }

    /// The text a field currently displays
    pub fn value(&self, field: Field) -> &str {
        self.state(field).as_str()
    }

    /// Set the whole content of a field, as it is after a keystroke
    pub fn input(&mut self, field: Field, value: &str, today: NaiveDate) {
        match field {
            Field::Date => {
                self.date = FieldState::from_date_input(value, today);
                self.date_completed = matches!(self.date, FieldState::Canonical(_));
            },
            Field::Time => self.time = FieldState::from_time_input(value),
            Field::Text => self.text = FieldState::from_text_input(value),
        }
    }

    /// Whether the last keystrokes completed the buffer, so that it should be submitted right away.
    /// This happens when a full 6-digit date has been typed.
    pub fn is_submit_ready(&self) -> bool {
        self.date_completed
    }

    /// The content this buffer would commit, with partial dates and times completed
    pub fn finalized(&self, today: NaiveDate) -> TaskDraft {
        TaskDraft::new(
            self.date.finalize_date(today),
            self.time.finalize_time(),
            self.text.as_str(),
        )
    }

    /// Finalize the buffer into a [`Commit`].
    ///
    /// Returns `None`, and leaves the buffer untouched, if date, time and text are all empty. \
    /// Otherwise, a buffer for a new task is cleared, and a buffer for an existing task is reloaded with the committed content.
    pub fn submit(&mut self, today: NaiveDate) -> Option<Commit> {
        let draft = self.finalized(today);
        if draft.is_empty() {
            log::debug!("Nothing to submit");
            return None;
        }

        let commit = match &self.target {
            EditTarget::New => Commit::Create(draft),
            EditTarget::Existing(task) => Commit::Replace(task.with_draft(draft)),
        };
        match &commit {
            Commit::Create(_) => self.reset(),
            Commit::Replace(updated) => self.load(updated),
        }
        Some(commit)
    }

    /// Clear every field. An existing task being edited remains the target.
    pub fn reset(&mut self) {
        self.date = FieldState::Empty;
        self.time = FieldState::Empty;
        self.text = FieldState::Empty;
        self.date_completed = false;
    }

    fn load(&mut self, task: &Task) {
        self.target = EditTarget::Existing(task.clone());
        self.date = FieldState::from_stored_date(task.date());
        self.time = FieldState::from_stored_time(task.time());
        self.text = FieldState::from_text_input(task.text());
        self.date_completed = false;
    }
}

impl Default for InputAssembler {
    fn default() -> Self {
        Self::new()
    }
}

//! To-do tasks

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The identifier of a task.
///
/// This is a millisecond timestamp taken when the task was created. It is serialized as a plain JSON number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}


/// The user-editable content of a task, before it is committed to a [`TaskStore`](crate::store::TaskStore)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub date: String,
    pub time: String,
    pub text: String,
}

impl TaskDraft {
    pub fn new<D, T, X>(date: D, time: T, text: X) -> Self
    where
        D: Into<String>,
        T: Into<String>,
        X: Into<String>,
    {
        Self { date: date.into(), time: time.into(), text: text.into() }
    }

    /// Whether date, time and text are all empty
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.time.is_empty() && self.text.is_empty()
    }
}


/// A to-do task
///
/// Once stored, `date` is either empty or `"Ab, DD.MM.YYYY"`, and `time` is either empty or `"HH:MM"`
/// (unless the user typed something free-form, which is kept verbatim).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    date: String,
    time: String,
    text: String,
    #[serde(rename = "isDone")]
    is_done: bool,
}

impl Task {
    /// Create a brand new, not yet completed, task
    pub fn new(id: TaskId, draft: TaskDraft) -> Self {
        Self::new_with_parameters(id, draft, false)
    }

    /// Create a task whose completion status is already known
    pub fn new_with_parameters(id: TaskId, draft: TaskDraft, is_done: bool) -> Self {
        Self {
            id,
            date: draft.date,
            time: draft.time,
            text: draft.text,
            is_done,
        }
    }

    pub fn id(&self) -> TaskId      { self.id          }
    pub fn date(&self) -> &str      { &self.date       }
    pub fn time(&self) -> &str      { &self.time       }
    pub fn text(&self) -> &str      { &self.text       }
    pub fn is_done(&self) -> bool   { self.is_done     }

    /// A task is "empty" when its date, time and text are all empty. Empty tasks sort last.
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.time.is_empty() && self.text.is_empty()
    }

    /// The editable content of this task
    pub fn draft(&self) -> TaskDraft {
        TaskDraft::new(self.date.clone(), self.time.clone(), self.text.clone())
    }

    /// Returns a copy of this task with its content replaced by `draft`, keeping the same ID and completion status
    pub fn with_draft(&self, draft: TaskDraft) -> Self {
        Self::new_with_parameters(self.id, draft, self.is_done)
    }

    pub fn set_done(&mut self, is_done: bool) {
        self.is_done = is_done;
    }

    pub fn toggle_done(&mut self) {
        self.is_done = !self.is_done;
    }
}

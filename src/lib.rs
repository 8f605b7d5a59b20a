//! This crate manages a personal task list, where every task has an optional date, an optional time and a description.
//!
//! Dates and times are meant to be typed quickly, as digits. The [`format`] module turns them into canonical strings
//! (`"So, 04.05.2025"`, `"08:30"`), and the [`assembler`] module decides, keystroke after keystroke, when a row is complete.
//!
//! Tasks live in a [`TaskStore`](store::TaskStore), that keeps them sorted by date then time
//! (see [`utils::comparison`]) and saves them to a [`Storage`](traits::Storage) after every change.
//! A [`Session`](session::Session) ties everything together for a view layer.

pub mod traits;

mod task;
pub use task::{Task, TaskDraft, TaskId};
pub mod format;
pub mod assembler;
pub mod persistence;
pub mod store;
pub use store::TaskStore;
pub mod session;
pub use session::Session;
pub mod storage;

pub mod config;
pub mod utils;

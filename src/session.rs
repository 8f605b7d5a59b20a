//! Glue between input buffers and the task list
//!
//! A [`Session`] is what a view layer talks to: it holds the buffer of the "new task" row,
//! the buffer of the row being edited (if any), and the [`TaskStore`] they commit to.

use crate::assembler::{Commit, EditTarget, Field, InputAssembler};
use crate::store::TaskStore;
use crate::task::TaskId;
use crate::traits::Storage;

pub struct Session<S: Storage> {
    store: TaskStore<S>,
    new_task: InputAssembler,
    editing: Option<InputAssembler>,
}

impl<S: Storage> Session<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            new_task: InputAssembler::new(),
            editing: None,
        }
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn into_store(self) -> TaskStore<S> {
        self.store
    }

    /// The buffer of the "new task" row
    pub fn new_task_buffer(&self) -> &InputAssembler {
        &self.new_task
    }

    /// Update a field of the "new task" row.
    ///
    /// Returns the ID of the created task, in case these keystrokes completed the buffer (see [`InputAssembler::is_submit_ready`])
    pub fn type_new(&mut self, field: Field, value: &str) -> Option<TaskId> {
        let today = self.store.clock().today();
        self.new_task.input(field, value, today);
        if self.new_task.is_submit_ready() {
            return self.submit_new();
        }
        None
    }

    /// Submit the "new task" row (e.g. the user pressed Enter, or clicked "Add")
    pub fn submit_new(&mut self) -> Option<TaskId> {
        let today = self.store.clock().today();
        match self.new_task.submit(today)? {
            Commit::Create(draft) => self.store.create(draft),
            Commit::Replace(task) => {
                log::error!("The new task buffer is bound to existing task {}", task.id());
                None
            },
        }
    }

    /// Start editing a stored task. Any edit in progress is discarded.
    ///
    /// Returns `false` (and does nothing) if there is no such task
    pub fn start_editing(&mut self, id: TaskId) -> bool {
        match self.store.get(id) {
            None => {
                log::debug!("Cannot edit unknown task {}", id);
                false
            },
            Some(task) => {
                if let Some(previous) = self.editing_id() {
                    log::debug!("Discarding the edit of task {}", previous);
                }
                self.editing = Some(InputAssembler::for_task(task));
                true
            },
        }
    }

    /// The buffer of the row being edited
    pub fn edit_buffer(&self) -> Option<&InputAssembler> {
        self.editing.as_ref()
    }

    /// The ID of the task being edited
    pub fn editing_id(&self) -> Option<TaskId> {
        match self.editing.as_ref().map(|e| e.target()) {
            Some(EditTarget::Existing(task)) => Some(task.id()),
            _ => None,
        }
    }

    /// Update a field of the row being edited.
    ///
    /// Returns `true` if these keystrokes completed the buffer, and the task has been saved.
    pub fn type_edit(&mut self, field: Field, value: &str) -> bool {
        let today = self.store.clock().today();
        let ready = match self.editing.as_mut() {
            None => {
                log::debug!("No task is being edited");
                return false;
            },
            Some(buffer) => {
                buffer.input(field, value, today);
                buffer.is_submit_ready()
            },
        };

        if ready {
            return self.save_edit();
        }
        false
    }

    /// Save the row being edited, and leave edit mode.
    ///
    /// Returns `false` (and stays in edit mode) if the buffer is completely empty
    pub fn save_edit(&mut self) -> bool {
        let today = self.store.clock().today();
        let commit = match self.editing.as_mut() {
            None => return false,
            Some(buffer) => buffer.submit(today),
        };

        match commit {
            None => false,
            Some(Commit::Replace(edited)) => {
                self.editing = None;
                // Only the edited fields come from the buffer, the rest (e.g. completion) is what is stored now
                let updated = match self.store.get(edited.id()) {
                    None => {
                        log::debug!("Task {} disappeared while being edited", edited.id());
                        return false;
                    },
                    Some(current) => current.with_draft(edited.draft()),
                };
                self.store.update(updated);
                true
            },
            Some(Commit::Create(draft)) => {
                self.editing = None;
                log::error!("The edit buffer is not bound to an existing task, ignoring {:?}", draft);
                false
            },
        }
    }

    /// Leave edit mode without saving anything
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn toggle_done(&mut self, id: TaskId) {
        self.store.toggle_done(id);
    }

    pub fn delete(&mut self, id: TaskId) {
        if self.editing_id() == Some(id) {
            self.cancel_edit();
        }
        self.store.delete(id);
    }

    /// Callers are expected to have asked the user for confirmation already
    pub fn clear_all(&mut self) {
        self.cancel_edit();
        self.store.clear_all();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::persistence::Persistence;
    use crate::storage::MemoryStorage;
    use crate::traits::FixedClock;

    fn session() -> Session<MemoryStorage> {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(), 1_000);
        let persistence = Persistence::with_key(MemoryStorage::new(), "tasks".to_string());
        Session::new(TaskStore::load_with_clock(persistence, Box::new(clock)))
    }

    #[test]
    fn typing_a_full_date_creates_the_task() {
        let mut session = session();
        assert_eq!(session.type_new(Field::Text, "dentist"), None);
        assert_eq!(session.type_new(Field::Date, "04052"), None);
        let id = session.type_new(Field::Date, "040525").unwrap();

        let task = session.store().get(id).unwrap();
        assert_eq!(task.date(), "So, 04.05.2025");
        assert_eq!(task.text(), "dentist");
        assert_eq!(session.new_task_buffer(), &InputAssembler::new());
    }

    #[test]
    fn edit_and_save() {
        let mut session = session();
        session.type_new(Field::Text, "a");
        let id = session.submit_new().unwrap();

        assert!(session.start_editing(id));
        assert_eq!(session.editing_id(), Some(id));
        session.type_edit(Field::Time, "07");
        assert!(session.save_edit());

        assert_eq!(session.editing_id(), None);
        assert_eq!(session.store().get(id).unwrap().time(), "07:00");
    }

    #[test]
    fn edit_auto_saves_on_full_date() {
        let mut session = session();
        session.type_new(Field::Text, "a");
        let id = session.submit_new().unwrap();

        session.start_editing(id);
        assert!(!session.type_edit(Field::Date, "0605"));
        assert!(session.type_edit(Field::Date, "060525"));
        assert_eq!(session.edit_buffer(), None);
        assert_eq!(session.store().get(id).unwrap().date(), "Di, 06.05.2025");
    }

    #[test]
    fn cancel_and_rejected_edits() {
        let mut session = session();
        session.type_new(Field::Text, "a");
        let id = session.submit_new().unwrap();

        session.start_editing(id);
        session.type_edit(Field::Text, "");
        assert!(!session.save_edit());
        assert_eq!(session.editing_id(), Some(id));

        session.cancel_edit();
        assert_eq!(session.store().get(id).unwrap().text(), "a");
        assert!(!session.start_editing(TaskId::from(99)));
    }

    #[test]
    fn deleting_the_edited_task_leaves_edit_mode() {
        let mut session = session();
        session.type_new(Field::Text, "a");
        let id = session.submit_new().unwrap();

        session.start_editing(id);
        session.delete(id);
        assert_eq!(session.editing_id(), None);
        assert!(session.store().tasks().is_empty());
    }

    #[test]
    fn completion_toggled_during_an_edit_is_kept() {
        let mut session = session();
        session.type_new(Field::Text, "a");
        let id = session.submit_new().unwrap();

        session.start_editing(id);
        session.toggle_done(id);
        session.type_edit(Field::Text, "a2");
        assert!(session.save_edit());

        let task = session.store().get(id).unwrap();
        assert_eq!(task.text(), "a2");
        assert!(task.is_done());
        assert_eq!(session.store().persistence().load(), session.store().tasks());
    }

    #[test]
    fn edit_buffer_without_a_stored_task_creates_nothing() {
        let mut session = session();
        let mut buffer = InputAssembler::new();
        buffer.input(Field::Text, "orphan", NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        session.editing = Some(buffer);

        assert!(!session.save_edit());
        assert!(session.store().tasks().is_empty());
        assert_eq!(session.edit_buffer(), None);
    }
}

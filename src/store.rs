//! The task list, kept sorted and persisted after every change

use crate::persistence::Persistence;
use crate::task::{Task, TaskDraft, TaskId};
use crate::traits::{Clock, Storage, SystemClock, TaskCallbacks};
use crate::utils::comparison::sort_tasks;

/// An in-memory task list, backed by a [`Storage`].
///
/// * creations and updates re-sort the list (see [`compare_tasks`](crate::utils::comparison::compare_tasks))
/// * deletions and completion toggles keep the current order
/// * every mutation is saved right away. A list that becomes empty is erased from the storage rather than saved as empty.
pub struct TaskStore<S: Storage> {
    tasks: Vec<Task>,
    persistence: Persistence<S>,
    clock: Box<dyn Clock>,
    last_issued_id: Option<TaskId>,
}

impl<S: Storage> TaskStore<S> {
    /// Load the task list from a storage, using the system clock to generate IDs
    pub fn load(persistence: Persistence<S>) -> Self {
        Self::load_with_clock(persistence, Box::new(SystemClock))
    }

    pub fn load_with_clock(persistence: Persistence<S>, clock: Box<dyn Clock>) -> Self {
        let tasks = persistence.load();
        log::info!("Task list initialized with {} tasks", tasks.len());
        Self {
            tasks,
            persistence,
            clock,
            last_issued_id: None,
        }
    }

    /// The current tasks, in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Add a new task. Returns `None` (and does nothing) if the draft is completely empty.
    pub fn create(&mut self, draft: TaskDraft) -> Option<TaskId> {
        if draft.is_empty() {
            log::debug!("Ignoring an empty draft");
            return None;
        }

        let id = match self.next_id() {
            Some(id) => id,
            None => {
                log::warn!("No task ID is available, ignoring the new task");
                return None;
            },
        };
        log::debug!("Creating task {}", id);
        self.tasks.push(Task::new(id, draft));
        sort_tasks(&mut self.tasks);
        self.persist();
        Some(id)
    }

    /// Replace the task that has the same ID. Unknown IDs are ignored.
    pub fn update(&mut self, task: Task) {
        let id = task.id();
        match self.tasks.iter_mut().find(|t| t.id() == id) {
            None => {
                log::debug!("Ignoring an update of unknown task {}", id);
                return;
            },
            Some(stored) => *stored = task,
        }
        sort_tasks(&mut self.tasks);
        self.persist();
    }

    /// Remove a task. Unknown IDs are ignored.
    pub fn delete(&mut self, id: TaskId) {
        let n_before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        if self.tasks.len() == n_before {
            log::debug!("Ignoring a deletion of unknown task {}", id);
            return;
        }
        self.persist();
    }

    /// Flip the completion status of a task. Unknown IDs are ignored.
    pub fn toggle_done(&mut self, id: TaskId) {
        match self.tasks.iter_mut().find(|t| t.id() == id) {
            None => {
                log::debug!("Ignoring a completion toggle of unknown task {}", id);
                return;
            },
            Some(task) => task.toggle_done(),
        }
        self.persist();
    }

    /// Remove every task, and erase the storage
    pub fn clear_all(&mut self) {
        log::info!("Clearing {} tasks", self.tasks.len());
        self.tasks.clear();
        self.persistence.erase();
    }

    fn persist(&mut self) {
        if self.tasks.is_empty() {
            self.persistence.erase();
        } else {
            self.persistence.save(&self.tasks);
        }
    }

    /// A timestamp-based ID, that is greater than any ID in use or issued before.
    ///
    /// If that would overflow (the stored list already holds `i64::MAX`), this falls back to the first ID from now on that is not in use.
    fn next_id(&mut self) -> Option<TaskId> {
        let floor = self.tasks.iter()
            .map(|t| t.id())
            .chain(self.last_issued_id)
            .max();

        let now = TaskId::from(self.clock.now_millis());
        let id = match floor {
            Some(floor) if now <= floor => match floor.as_i64().checked_add(1) {
                Some(next) => TaskId::from(next),
                None => {
                    log::warn!("Task IDs have reached their maximum, looking for an unused one");
                    self.first_unused_id_from(now)?
                },
            },
            _ => now,
        };
        self.last_issued_id = Some(id);
        Some(id)
    }

    fn first_unused_id_from(&self, start: TaskId) -> Option<TaskId> {
        let mut candidate = start.as_i64();
        while self.get(TaskId::from(candidate)).is_some() {
            candidate = candidate.checked_add(1)?;
        }
        Some(TaskId::from(candidate))
    }
}

impl<S: Storage> TaskCallbacks for TaskStore<S> {
    fn on_add_task(&mut self, draft: TaskDraft) -> Option<TaskId> {
        self.create(draft)
    }

    fn on_update_task(&mut self, task: Task) {
        self.update(task)
    }

    fn on_delete_task(&mut self, id: TaskId) {
        self.delete(id)
    }

    fn on_toggle_task_done(&mut self, id: TaskId) {
        self.toggle_done(id)
    }

    fn on_clear_all(&mut self) {
        self.clear_all()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::storage::MemoryStorage;
    use crate::traits::FixedClock;

    const KEY: &str = "tasks";

    fn empty_store() -> TaskStore<MemoryStorage> {
        store_with(MemoryStorage::new())
    }

    fn store_with(storage: MemoryStorage) -> TaskStore<MemoryStorage> {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 5, 4).unwrap(), 1_000);
        TaskStore::load_with_clock(Persistence::with_key(storage, KEY.to_string()), Box::new(clock))
    }

    fn texts(store: &TaskStore<MemoryStorage>) -> Vec<&str> {
        store.tasks().iter().map(|t| t.text()).collect()
    }

    fn stored(store: &TaskStore<MemoryStorage>) -> Vec<Task> {
        store.persistence().load()
    }

    #[test]
    fn create_sorts_and_saves() {
        let mut store = empty_store();
        store.create(TaskDraft::new("", "", "undated"));
        store.create(TaskDraft::new("Mo, 05.05.2025", "09:00", "nine"));
        store.create(TaskDraft::new("Mo, 05.05.2025", "08:00", "eight"));

        assert_eq!(texts(&store), vec!["eight", "nine", "undated"]);
        assert_eq!(stored(&store), store.tasks());
        assert!(store.tasks().iter().all(|t| t.is_done() == false));
    }

    #[test]
    fn create_rejects_empty_drafts() {
        let mut store = empty_store();
        assert_eq!(store.create(TaskDraft::default()), None);
        assert!(store.tasks().is_empty());
        assert!(!store.persistence().storage().contains_key(KEY));
    }

    #[test]
    fn ids_are_unique_even_with_a_frozen_clock() {
        let mut store = empty_store();
        let a = store.create(TaskDraft::new("", "", "a")).unwrap();
        let b = store.create(TaskDraft::new("", "", "b")).unwrap();
        store.delete(b);
        let c = store.create(TaskDraft::new("", "", "c")).unwrap();

        assert_eq!(a, TaskId::from(1_000));
        assert!(b > a);
        // IDs are never reused, even after a deletion
        assert!(c > b);
    }

    #[test]
    fn ids_start_after_loaded_ones() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY, r#"[{"id":5000,"date":"","time":"","text":"old","isDone":false}]"#).unwrap();
        let mut store = store_with(storage);
        let id = store.create(TaskDraft::new("", "", "new")).unwrap();
        assert_eq!(id, TaskId::from(5001));
    }

    #[test]
    fn ids_do_not_overflow() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY, r#"[{"id":9223372036854775807,"date":"","time":"","text":"last","isDone":false}]"#).unwrap();
        let mut store = store_with(storage);

        let a = store.create(TaskDraft::new("", "", "a")).unwrap();
        let b = store.create(TaskDraft::new("", "", "b")).unwrap();
        assert_eq!(a, TaskId::from(1_000));
        assert_eq!(b, TaskId::from(1_001));
        assert_eq!(store.tasks().len(), 3);
        assert!(store.get(TaskId::from(i64::MAX)).is_some());
    }

    #[test]
    fn update_replaces_and_resorts() {
        let mut store = empty_store();
        let early = store.create(TaskDraft::new("Mo, 05.05.2025", "08:00", "early")).unwrap();
        store.create(TaskDraft::new("Mo, 05.05.2025", "09:00", "late"));

        let moved = store.get(early).unwrap().with_draft(TaskDraft::new("Mo, 05.05.2025", "10:00", "moved"));
        store.update(moved);

        assert_eq!(texts(&store), vec!["late", "moved"]);
        assert_eq!(store.get(early).unwrap().time(), "10:00");
        assert_eq!(stored(&store), store.tasks());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut store = empty_store();
        store.create(TaskDraft::new("", "", "a"));
        store.create(TaskDraft::new("", "", "b"));
        let before = store.tasks().to_vec();

        let unknown = TaskId::from(42);
        store.delete(unknown);
        store.toggle_done(unknown);
        store.update(Task::new(unknown, TaskDraft::new("", "", "ghost")));

        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn delete_and_toggle_keep_the_order() {
        let mut store = empty_store();
        let a = store.create(TaskDraft::new("", "", "a")).unwrap();
        let b = store.create(TaskDraft::new("", "", "b")).unwrap();
        store.create(TaskDraft::new("", "", "c"));

        // Make the stored order differ from what sorting would give, by making `a` empty.
        // An update would move it to the end, but bypassing the update keeps it first.
        store.tasks[0] = Task::new(a, TaskDraft::default());

        store.toggle_done(b);
        assert_eq!(texts(&store), vec!["", "b", "c"]);
        assert!(store.get(b).unwrap().is_done());
        assert_eq!(stored(&store), store.tasks());

        store.delete(b);
        assert_eq!(texts(&store), vec!["", "c"]);

        store.toggle_done(a);
        store.toggle_done(a);
        assert!(store.get(a).unwrap().is_done() == false);
        assert_eq!(stored(&store), store.tasks());
    }

    #[test]
    fn emptying_the_list_erases_the_storage() {
        let mut store = empty_store();
        let a = store.create(TaskDraft::new("", "", "a")).unwrap();
        assert!(store.persistence().storage().contains_key(KEY));

        store.delete(a);
        assert!(store.tasks().is_empty());
        assert!(!store.persistence().storage().contains_key(KEY));
    }

    #[test]
    fn clear_all() {
        let mut store = empty_store();
        store.create(TaskDraft::new("", "", "a"));
        store.create(TaskDraft::new("", "", "b"));

        store.on_clear_all();
        assert!(store.tasks().is_empty());
        assert!(!store.persistence().storage().contains_key(KEY));
    }

    #[test]
    fn reload_restores_the_same_list() {
        let mut store = empty_store();
        store.on_add_task(TaskDraft::new("Di, 06.05.2025", "", "b"));
        let a = store.on_add_task(TaskDraft::new("Mo, 05.05.2025", "", "a")).unwrap();
        store.on_toggle_task_done(a);

        let storage = store.persistence().storage().clone();
        let reloaded = store_with(storage);
        assert_eq!(reloaded.tasks(), store.tasks());
    }
}

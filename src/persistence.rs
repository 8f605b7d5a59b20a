//! This module saves and restores the task list to and from a [`Storage`]

use std::error::Error;

use crate::task::Task;
use crate::traits::Storage;

/// Reads and writes the whole task list as a single JSON array, under a single key
#[derive(Debug, PartialEq)]
pub struct Persistence<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> Persistence<S> {
    /// Use the key from [`crate::config::STORAGE_KEY`]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, crate::config::storage_key())
    }

    pub fn with_key(storage: S, key: String) -> Self {
        Self { storage, key }
    }

    pub fn key(&self) -> &str           { &self.key     }
    pub fn storage(&self) -> &S         { &self.storage }
    pub fn storage_mut(&mut self) -> &mut S { &mut self.storage }

    /// Read the stored tasks.
    ///
    /// `Ok(None)` means nothing was stored. Errors are either storage failures or malformed payloads.
    pub fn try_load(&self) -> Result<Option<Vec<Task>>, Box<dyn Error>> {
        let content = match self.storage.get(&self.key)? {
            None => return Ok(None),
            Some(content) => content,
        };
        let tasks = serde_json::from_str(&content)
            .map_err(|err| format!("Malformed task list under key {:?}: {}", self.key, err))?;
        Ok(Some(tasks))
    }

    /// Read the stored tasks. A missing or malformed payload is an empty list.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(Some(tasks)) => {
                log::debug!("Loaded {} tasks from {:?}", tasks.len(), self.key);
                tasks
            },
            Ok(None) => {
                log::debug!("No tasks stored under {:?} yet", self.key);
                Vec::new()
            },
            Err(err) => {
                log::warn!("Unable to load tasks: {}. Starting with an empty list", err);
                Vec::new()
            },
        }
    }

    /// Write the whole list.
    ///
    /// Empty lists are not written: callers must [`erase`](Self::erase) the key instead.
    /// Storage failures are logged and ignored.
    pub fn save(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            log::debug!("Not saving an empty task list");
            return;
        }

        let content = match serde_json::to_string(tasks) {
            Err(err) => {
                log::warn!("Unable to serialize: {}", err);
                return;
            },
            Ok(c) => c,
        };

        if let Err(err) = self.storage.set(&self.key, &content) {
            log::warn!("Unable to save tasks: {}", err);
        }
    }

    /// Remove the stored list altogether
    pub fn erase(&mut self) {
        if let Err(err) = self.storage.remove(&self.key) {
            log::warn!("Unable to erase stored tasks: {}", err);
        }
    }
}

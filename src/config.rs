//! Support for library configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The key tasks are stored under, unless [`STORAGE_KEY`] is overridden
pub const DEFAULT_STORAGE_KEY: &str = "taskManagerV2_tasks";

/// The key under which the whole task list is persisted.
/// Feel free to override it when initing this library.
pub static STORAGE_KEY: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new(DEFAULT_STORAGE_KEY.to_string())));

/// The folder a [`FileStorage`](crate::storage::FileStorage) uses by default.
/// Feel free to override it when initing this library.
pub static DATA_FOLDER: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| Arc::new(Mutex::new(default_data_folder())));

fn default_data_folder() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("datebook")
}

/// The current value of [`STORAGE_KEY`]
pub fn storage_key() -> String {
    match STORAGE_KEY.lock() {
        Ok(key) => key.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// The current value of [`DATA_FOLDER`]
pub fn data_folder() -> PathBuf {
    match DATA_FOLDER.lock() {
        Ok(folder) => folder.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

mod config;
pub mod database;
mod slot;

pub use config::{Config, ExportConfig, LogConfig, StorageConfig, TimerConfig};
pub use database::Database;
pub use slot::{DocumentStore, STORAGE_KEY};

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::StorageError;

/// Named string slots. The dashboard document occupies exactly one.
pub trait StateStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_slot(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process slot store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one slot.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl StateStore for MemoryStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write_slot(key, value)
    }

    fn remove_slot(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_slot(key)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `HTS_DATA_DIR` wins when set. Otherwise `~/.config/helpthyself`, or
/// `~/.config/helpthyself-dev` when `HTS_ENV=dev`.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("HTS_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HTS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("helpthyself-dev")
            } else {
                base_dir.join("helpthyself")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

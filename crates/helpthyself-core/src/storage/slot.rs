//! Load/save of the dashboard document against one storage slot.

use super::StateStore;
use crate::error::{Result, StorageError};
use crate::model::{default_state, parse_document, Document};

/// Slot key of the dashboard document.
pub const STORAGE_KEY: &str = "hts_dashboard_v1";

/// Reads and writes the [`Document`] held in the [`STORAGE_KEY`] slot of a
/// [`StateStore`].
pub struct DocumentStore<S> {
    store: S,
}

impl<S: StateStore> DocumentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored document, falling back to defaults.
    ///
    /// A missing slot, a failed read and unparsable content all yield
    /// [`default_state`]; the latter two are logged, never returned.
    pub fn load(&self) -> Document {
        self.load_inner().0
    }

    /// Like [`load`](Self::load), but persists the fresh document when the
    /// slot was empty so seeded ids stay stable across sessions. A corrupt
    /// slot is left untouched until the next save.
    pub fn load_or_init(&self) -> Document {
        let (doc, was_empty) = self.load_inner();
        if was_empty {
            if let Err(e) = self.save(&doc) {
                tracing::warn!(key = STORAGE_KEY, error = %e, "failed to persist initial state");
            }
        }
        doc
    }

    fn load_inner(&self) -> (Document, bool) {
        let raw = match self.store.read_slot(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (default_state(), true),
            Err(e) => {
                tracing::warn!(key = STORAGE_KEY, error = %e, "failed to read state slot");
                return (default_state(), false);
            }
        };

        match parse_document(&raw) {
            Ok(doc) => (doc, false),
            Err(e) => {
                tracing::warn!(key = STORAGE_KEY, error = %e, "failed to parse stored state");
                (default_state(), false)
            }
        }
    }

    /// Serialize `doc` and overwrite the slot.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let json = serde_json::to_string(doc)?;
        self.store.write_slot(STORAGE_KEY, &json)?;
        tracing::debug!(key = STORAGE_KEY, bytes = json.len(), "state saved");
        Ok(())
    }

    /// Remove the slot entirely.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_slot(STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::APP_VERSION;
    use crate::storage::MemoryStore;

    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn read_slot(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Locked)
        }
        fn write_slot(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Locked)
        }
        fn remove_slot(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Locked)
        }
    }

    #[test]
    fn missing_slot_loads_defaults() {
        let slot = DocumentStore::new(MemoryStore::new());
        let doc = slot.load();
        assert_eq!(doc.habits.len(), 2);
    }

    #[test]
    fn garbage_slot_loads_defaults() {
        let slot = DocumentStore::new(MemoryStore::with_slot(STORAGE_KEY, "{not json"));
        let doc = slot.load();
        assert_eq!(doc.version, APP_VERSION);
        assert_eq!(doc.goals.len(), 1);
    }

    #[test]
    fn unreadable_store_loads_defaults() {
        let slot = DocumentStore::new(BrokenStore);
        assert_eq!(slot.load().habits.len(), 2);
    }

    #[test]
    fn save_failure_is_reported() {
        let slot = DocumentStore::new(BrokenStore);
        assert!(slot.save(&default_state()).is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let slot = DocumentStore::new(MemoryStore::new());
        let mut doc = default_state();
        doc.focus.preset_minutes = 50;
        doc.journal.draft.body = "half a thought".into();
        slot.save(&doc).unwrap();
        assert_eq!(slot.load(), doc);
    }

    #[test]
    fn load_or_init_persists_seed_once() {
        let slot = DocumentStore::new(MemoryStore::new());
        let first = slot.load_or_init();
        let second = slot.load_or_init();
        assert_eq!(first, second);
    }

    #[test]
    fn load_or_init_keeps_corrupt_slot() {
        let mem = MemoryStore::with_slot(STORAGE_KEY, "oops");
        DocumentStore::new(&mem).load_or_init();
        assert_eq!(mem.read_slot(STORAGE_KEY).unwrap().as_deref(), Some("oops"));
    }

    #[test]
    fn clear_removes_slot() {
        let mem = MemoryStore::new();
        let slot = DocumentStore::new(&mem);
        slot.save(&default_state()).unwrap();
        slot.clear().unwrap();
        assert!(mem.read_slot(STORAGE_KEY).unwrap().is_none());
    }
}

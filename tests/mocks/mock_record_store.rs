use address_book::error::{StorageError, StorageResult};
use address_book::models::{AddressBook, Record};
use address_book::storage::{RecordEntry, RecordStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock record store for testing.
///
/// Keeps the persisted entries in memory, can be seeded with raw entries
/// (including invalid ones), and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordStore {
    entries: Arc<Mutex<Option<Vec<RecordEntry>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a new store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw persisted entries.
    pub fn with_entries(entries: Vec<RecordEntry>) -> Self {
        let store = Self::new();
        *store.entries.lock().unwrap() = Some(entries);
        store
    }

    /// The entries written by the last save, if any.
    pub fn saved_entries(&self) -> Option<Vec<RecordEntry>> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RecordStore for MockRecordStore {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        let entries = book.records().map(RecordEntry::from).collect();
        *self.entries.lock().unwrap() = Some(entries);
        Ok(())
    }

    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        let entries = self.entries.lock().unwrap().clone().ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "nothing saved",
            ))
        })?;

        let mut book = AddressBook::new();
        for entry in entries {
            book.add_record(Record::try_from(entry)?);
        }
        Ok(book)
    }
}

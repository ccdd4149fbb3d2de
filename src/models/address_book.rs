//! The address book: a name-keyed, insertion-ordered collection of records.

use super::record::Record;
use crate::domain::ValidationError;
use crate::error::StorageResult;
use crate::storage::{JsonFileStore, RecordStore};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// One chunk of an address book: consecutive `(name, record)` pairs.
pub type Page<'a> = Vec<(&'a str, &'a Record)>;

/// A mapping from contact name to [`Record`].
///
/// There is at most one record per exact name. Entries iterate in the order
/// their names were first inserted; replacing a record keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Contact names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    /// Records in iteration order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Insert `record` under its name, replacing any record with the same name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().as_str().to_string();

        match self.index.get(&name) {
            Some(&position) => {
                debug!(contact = %name, "Replacing existing record");
                Some(std::mem::replace(&mut self.records[position], record))
            }
            None => {
                debug!(contact = %name, "Adding record");
                self.index.insert(name, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Exact-name lookup for in-place edits (phones, birthday).
    ///
    /// The record's name cannot change through this reference, so the
    /// name-to-record invariant is preserved.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Remove the record stored under `name`.
    ///
    /// A missing contact is not an error: it is logged and `None` is returned.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let Some(position) = self.index.remove(name) else {
            warn!(contact = name, "Contact to delete does not exist");
            return None;
        };

        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        debug!(contact = name, "Deleted record");
        Some(removed)
    }

    /// Iterate over the book in pages of up to `size` entries.
    ///
    /// Every page but the last holds exactly `size` entries; no empty page is
    /// ever produced. Each call starts again from the first entry.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageSize` when `size` is zero.
    pub fn pages(&self, size: usize) -> Result<Pages<'_>, ValidationError> {
        if size == 0 {
            return Err(ValidationError::InvalidPageSize(size));
        }
        Ok(Pages {
            remaining: &self.records,
            size,
        })
    }

    /// Records whose name or any phone contains `query`.
    ///
    /// Matching is case-sensitive. A record is reported once per matching
    /// phone and once more if its name matches, so it can appear several
    /// times. Returns an empty vector when nothing matches.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let mut matches = Vec::new();

        for record in &self.records {
            for phone in record.phones() {
                if phone.as_str().contains(query) {
                    matches.push(record);
                }
            }
            if record.name().as_str().contains(query) {
                matches.push(record);
            }
        }

        debug!(query, matches = matches.len(), "Searched contacts");
        matches
    }

    /// The text rendering of every match reported by [`AddressBook::search`].
    pub fn find_contacts(&self, query: &str) -> Vec<String> {
        self.search(query)
            .into_iter()
            .map(|record| record.to_string())
            .collect()
    }

    /// Write the whole book to `path` as JSON, replacing any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        JsonFileStore::new(path.as_ref()).save(self)
    }

    /// Build a new address book from the JSON document at `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        JsonFileStore::new(path.as_ref()).load()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

/// Iterator over an address book in fixed-size pages.
///
/// Created by [`AddressBook::pages`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    remaining: &'a [Record],
    size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let take = self.size.min(self.remaining.len());
        let (chunk, rest) = self.remaining.split_at(take);
        self.remaining = rest;

        Some(
            chunk
                .iter()
                .map(|record| (record.name().as_str(), record))
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.remaining.len().div_ceil(self.size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}

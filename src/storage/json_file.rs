//! File-backed JSON storage for address books.

use super::entry::RecordEntry;
use super::traits::RecordStore;
use crate::error::StorageResult;
use crate::models::{AddressBook, Record};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book storage backed by a single JSON file.
///
/// Saves are all-or-nothing: the document is written to a sibling temporary
/// file which is then renamed over the target. An existing target must be
/// writable, and a symlinked target is written through, not replaced.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. Nothing is touched until the
    /// first save or load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file a save will replace.
    ///
    /// Symlinks are resolved so the link itself survives the rename. An
    /// existing target that cannot be opened for writing is rejected before
    /// anything is written.
    fn writable_target(&self) -> io::Result<PathBuf> {
        let target = match fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(self.path.clone()),
            Err(err) => return Err(err),
        };

        if fs::metadata(&target)?.permissions().readonly() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("read-only file: {}", target.display()),
            ));
        }
        fs::OpenOptions::new().write(true).open(&target)?;

        Ok(target)
    }

    fn temp_path(target: &Path) -> io::Result<PathBuf> {
        let file_name = target.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a file path: {}", target.display()),
            )
        })?;

        let mut temp_name = OsString::from(".");
        temp_name.push(file_name);
        temp_name.push(".tmp");
        Ok(target.with_file_name(temp_name))
    }
}

impl RecordStore for JsonFileStore {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let entries: Vec<RecordEntry> = book.records().map(RecordEntry::from).collect();
        let content = serde_json::to_string_pretty(&entries)?;

        let target = self.writable_target()?;
        let temp_path = Self::temp_path(&target)?;
        debug!(path = %temp_path.display(), "Writing address book to temporary file");
        if let Err(err) = fs::write(&temp_path, content) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&temp_path, &target) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        info!(path = %self.path.display(), records = book.len(), "Saved address book");
        Ok(())
    }

    fn load(&self) -> StorageResult<AddressBook> {
        let content = fs::read_to_string(&self.path)?;
        let entries: Vec<RecordEntry> = serde_json::from_str(&content)?;

        let mut book = AddressBook::new();
        for entry in entries {
            book.add_record(Record::try_from(entry)?);
        }

        info!(path = %self.path.display(), records = book.len(), "Loaded address book");
        Ok(book)
    }
}

//! The storage seam address books are saved through.

use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage backend for whole address books.
///
/// Saves replace everything previously stored; loads build a fresh book.
pub trait RecordStore {
    /// Persist every record in `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Reconstruct a new address book from storage.
    ///
    /// Any malformed entry fails the whole load.
    fn load(&self) -> StorageResult<AddressBook>;
}

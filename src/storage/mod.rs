//! Persistence for address books.
//!
//! A book is stored as a single JSON array of [`RecordEntry`] objects. The
//! [`RecordStore`] trait abstracts over where that document lives, with
//! [`JsonFileStore`] as the file-backed implementation.

mod entry;
mod json_file;
mod traits;

pub use entry::RecordEntry;
pub use json_file::JsonFileStore;
pub use traits::RecordStore;

//! Address Book - an in-memory contact manager with JSON persistence.
//!
//! Contacts are [`Record`]s holding a name, phone numbers, and an optional
//! birthday. Every field is validated when it is constructed, so a record
//! never holds an invalid phone or date. An [`AddressBook`] keys records by
//! name and supports lookup, deletion, paged iteration, substring search,
//! and saving to / loading from a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: `Record` and `AddressBook`
//! - **storage**: Persisted file format and the JSON file store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **logging**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Birthday, Record};
//!
//! let mut record = Record::with_birthday("Anton", Birthday::parse("1990-10-10").unwrap());
//! record.add_phone("0964784877").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! assert_eq!(book.find_contacts("ton").len(), 1);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, ConfigError, StorageError};
pub use models::{AddressBook, Page, Pages, Record};
pub use storage::{JsonFileStore, RecordEntry, RecordStore};

//! Data models for the address book.
//!
//! This module contains the contact record and the address book that owns
//! records by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Page, Pages};
pub use record::Record;

//! Data models for the contact directory.
//!
//! This module contains the contact record and the address book that
//! owns all records. Mutation goes through validating methods, so a
//! book in memory never holds a malformed field.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;

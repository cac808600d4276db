//! Address Book - a command-driven personal contact directory.
//!
//! This library keeps a validated in-memory directory of contacts
//! (names, ten-digit phone numbers, optional birthdays), answers an
//! upcoming-birthday query across year boundaries, and persists the
//! whole book as versioned JSON between sessions.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record and the book that owns all records
//! - **error**: crate-level error taxonomy
//! - **config**: configuration management from environment variables
//! - **commands**: tokenizing raw input and executing commands
//! - **storage**: versioned JSON load/save of the whole book
//! - **repl**: the interactive command loop

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, DEFAULT_BIRTHDAY_WINDOW_DAYS};

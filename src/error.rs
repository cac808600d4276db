//! Error types for the address book.
//!
//! This module defines the crate-level error taxonomy using `thiserror`.
//! Field-format failures live in [`crate::domain::ValidationError`] and
//! are wrapped here; nothing in the core swallows an error — every
//! failure propagates to the command layer, and only the REPL renders
//! them as user-facing text.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book and record operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed its format invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with the given name exists
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record holds no phone with the given value
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur while loading or saving the book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The book file could not be read or written
    #[error("Failed to access address book file: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON in the expected shape
    #[error("Malformed address book file: {0}")]
    Json(#[from] serde_json::Error),

    /// The book file was written by an incompatible format revision
    #[error("Unsupported address book file version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the command layer.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A book or record operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// The wrong number of arguments was supplied
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The command word is not recognised
    #[error("Invalid command: {0}")]
    UnknownCommand(String),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

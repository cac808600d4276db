//! Versioned JSON storage for the whole book.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk shape of the book file.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    contacts: Vec<Record>,
}

/// Load the book from `path`. A missing file yields an empty book.
///
/// Records are re-inserted through [`AddressBook::upsert`], so a file
/// with duplicate names collapses to the last occurrence rather than
/// violating the unique-name invariant.
///
/// # Errors
///
/// Returns `StorageError` when the file exists but cannot be read,
/// fails to decode (including invalid phone or birthday values), or
/// carries an unknown format version.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No book file at {}, starting empty", path.display());
            return Ok(AddressBook::new());
        }
        Err(err) => return Err(err.into()),
    };

    let file: BookFile = serde_json::from_str(&raw)?;
    if file.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion(file.version));
    }

    let mut book = AddressBook::new();
    for record in file.contacts {
        book.upsert(record);
    }
    debug!("Loaded {} contacts from {}", book.len(), path.display());
    Ok(book)
}

/// Save the whole book to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns `StorageError` when the file cannot be written.
pub fn save(path: &Path, book: &AddressBook) -> StorageResult<()> {
    let file = BookFile {
        version: FORMAT_VERSION,
        contacts: book.iter().cloned().collect(),
    };

    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    debug!("Saved {} contacts to {}", file.contacts.len(), path.display());
    Ok(())
}

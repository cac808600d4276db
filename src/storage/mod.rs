//! Persistence for the address book.
//!
//! The whole book is saved and restored as one versioned JSON document.
//! The version field lets a future format revision be detected up front
//! instead of misread.

mod json_store;

pub use json_store::{load, save, FORMAT_VERSION};

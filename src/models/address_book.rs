//! The address book: a name-keyed, insertion-ordered set of records.

use super::Record;
use crate::error::BookError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default width of the upcoming-birthday window, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// All contact records, keyed by unique name.
///
/// Records keep their insertion order, and [`upcoming_birthdays`]
/// documents that order as part of its contract — which is why the
/// backing store is a vector with linear name lookup rather than a hash
/// map. At personal-directory scale the linear scan is the right trade.
///
/// [`upcoming_birthdays`]: AddressBook::upcoming_birthdays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    ///
    /// A replaced record keeps its original position; a new name goes to
    /// the end.
    pub fn upsert(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable exact lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove and return the record with the given name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no record matches.
    pub fn remove(&mut self, name: &str) -> Result<Record, BookError> {
        let idx = self
            .position(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(idx))
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose birthday falls within `window_days` of `today`.
    ///
    /// A record qualifies when the next occurrence of its birthday (this
    /// year, or next year once this year's date has passed) is between
    /// zero and `window_days` days away, both ends inclusive. Records
    /// without a birthday never qualify.
    ///
    /// The result keeps the book's insertion order; it is **not** sorted
    /// by how soon the birthday falls. Callers relying on order may
    /// depend on this.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| {
                record.birthday().map_or(false, |birthday| {
                    let delta = (birthday.next_occurrence(today) - today).num_days();
                    (0..=window_days).contains(&delta)
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

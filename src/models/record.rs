//! Contact record: one address book entry.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::BookError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction and keys the record inside an
/// [`AddressBook`](crate::models::AddressBook). Phones keep insertion
/// order and may repeat; all mutation goes through validating methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not
    /// exactly ten digits; the phone list is left untouched.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(value)?);
        Ok(())
    }

    /// Remove every phone equal to `value`.
    ///
    /// Removing a value that is not present is not an error.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// The replacement is validated before anything is touched, so a
    /// failed edit leaves the record exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `new` is not a valid phone
    /// number, or `BookError::PhoneNotFound` if no phone equals `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), BookError> {
        let replacement = PhoneNumber::new(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;
        Ok(())
    }

    /// Look up a phone by exact value.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Parse and assign the birthday, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a
    /// valid `DD.MM.YYYY` date; an existing birthday is kept.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }
}

// Display support - the one-line describe form shown by `all`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_validates() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 1);

        assert!(record.add_phone("123").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_permits_duplicates() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        record.remove_phone("1234567890");
        let remaining: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(remaining, vec!["5555555555"]);

        // Absent value: silently a no-op.
        record.remove_phone("0000000000");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "2222222222").unwrap();
        let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_missing_old_value() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("9999999999", "2222222222").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
    }

    #[test]
    fn test_edit_phone_invalid_new_value_leaves_record_unchanged() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("1111111111", "not-a-phone").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();

        assert!(record.find_phone("1234567890").is_some());
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = Record::new("John");
        record.set_birthday("15.06.1990").unwrap();
        record.set_birthday("16.06.1990").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "16.06.1990");
    }

    #[test]
    fn test_set_birthday_invalid_keeps_previous() {
        let mut record = Record::new("John");
        record.set_birthday("15.06.1990").unwrap();
        assert!(record.set_birthday("31.02.2020").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "15.06.1990");
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );

        record.set_birthday("15.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 15.06.1990"
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.set_birthday("15.06.1990").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"John","phones":["123"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

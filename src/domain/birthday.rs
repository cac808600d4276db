//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Parse and display format for birthdays.
const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono alone would accept "1.1.2020" under %d.%m.%Y; the shape check
// keeps the format strict.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid regex"));

/// A contact's birthday: a plain calendar date, no timezone.
///
/// Parsed from strict `DD.MM.YYYY` and displayed the same way, so values
/// round-trip through their textual form.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::parse("24.05.1819").unwrap();
/// assert_eq!(birthday.to_string(), "24.05.1819");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the input does not
    /// match the format exactly (two-digit day and month, four-digit
    /// year) or names an impossible calendar date such as `31.02.2020`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next calendar occurrence of this birthday on or after `today`.
    ///
    /// The candidate is this year's anniversary; once that date has
    /// passed, next year's. A Feb 29 birthday clamps to Feb 28 in
    /// non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = Self::anniversary(self.0, today.year());
        if this_year < today {
            Self::anniversary(self.0, today.year() + 1)
        } else {
            this_year
        }
    }

    /// The birthday's date with the year swapped out.
    fn anniversary(date: NaiveDate, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
            // Only Feb 29 can fail to exist in another year.
            NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
        })
    }
}

// Serde support - serialize in the same DD.MM.YYYY form users type
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

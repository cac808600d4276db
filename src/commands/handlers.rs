//! Command handlers.
//!
//! Each handler takes the book and the tokenized arguments, mutates or
//! queries the book, and returns the reply line. `today` and the window
//! width are passed in by the caller, so handlers stay clock-free and
//! deterministic under test.

use super::parser::Command;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Execute one parsed command against the book.
pub fn execute(
    book: &mut AddressBook,
    command: Command,
    args: &[String],
    today: NaiveDate,
    window_days: i64,
) -> CommandResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(book, args),
        Command::Change => change_phone(book, args),
        Command::Phone => show_phone(book, args),
        Command::RemovePhone => remove_phone(book, args),
        Command::All => Ok(show_all_contacts(book)),
        Command::Delete => delete_contact(book, args),
        Command::AddBirthday => add_birthday(book, args),
        Command::ShowBirthday => show_birthday(book, args),
        Command::Birthdays => Ok(upcoming_birthdays(book, today, window_days)),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

/// Add a contact, or a phone to an existing contact.
///
/// The merge flow: an existing name gains the phone; otherwise a new
/// record is created, given the phone, and inserted.
pub fn add_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let (name, phone) = two_args(args, "add [name] [phone]")?;
    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone)?;
            book.upsert(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// Replace one of a contact's phone numbers.
pub fn change_phone(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let (name, old, new) = three_args(args, "change [name] [old_phone] [new_phone]")?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old, new)?;
    Ok("Phone number updated.".to_string())
}

/// Show a contact's phone numbers.
pub fn show_phone(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let name = one_arg(args, "phone [name]")?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Phone numbers for {}: {}", name, phones))
}

/// Remove one phone value from a contact.
pub fn remove_phone(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let (name, phone) = two_args(args, "remove-phone [name] [phone]")?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.remove_phone(phone);
    Ok("Phone number removed.".to_string())
}

/// List every contact's describe line.
pub fn show_all_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts in the address book.".to_string();
    }
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Delete a contact by name.
pub fn delete_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let name = one_arg(args, "delete [name]")?;
    book.remove(name)?;
    Ok("Contact deleted.".to_string())
}

/// Set a contact's birthday.
pub fn add_birthday(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let (name, date) = two_args(args, "add-birthday [name] [DD.MM.YYYY]")?;
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.set_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// Show a contact's birthday.
pub fn show_birthday(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let name = one_arg(args, "show-birthday [name]")?;
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday is on {}", name, birthday)),
        None => Ok("Birthday not set for this contact.".to_string()),
    }
}

/// List contacts whose birthday falls within the window.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> String {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return format!("No upcoming birthdays in the next {} days.", window_days);
    }
    let lines = upcoming
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Upcoming birthdays in the next {} days:\n{}",
        window_days, lines
    )
}

fn one_arg<'a>(args: &'a [String], usage: &'static str) -> Result<&'a str, CommandError> {
    match args {
        [a] => Ok(a.as_str()),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn two_args<'a>(
    args: &'a [String],
    usage: &'static str,
) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        [a, b] => Ok((a.as_str(), b.as_str())),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn three_args<'a>(
    args: &'a [String],
    usage: &'static str,
) -> Result<(&'a str, &'a str, &'a str), CommandError> {
    match args {
        [a, b, c] => Ok((a.as_str(), b.as_str(), c.as_str())),
        _ => Err(CommandError::Usage(usage)),
    }
}

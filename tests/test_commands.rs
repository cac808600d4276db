//! Integration tests for the command layer.
//!
//! These drive the same path the REPL does: tokenize a line, parse the
//! command word, execute against the book.

use address_book::commands::{execute, tokenize, Command};
use address_book::{AddressBook, BookError, CommandError};
use chrono::NaiveDate;

fn run(book: &mut AddressBook, line: &str) -> Result<String, CommandError> {
    let (word, args) = tokenize(line).expect("non-blank line");
    let command = word.parse::<Command>()?;
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    execute(book, command, &args, today, 7)
}

#[test]
fn test_full_session() {
    let mut book = AddressBook::new();

    assert_eq!(run(&mut book, "hello").unwrap(), "How can I help you?");
    assert_eq!(
        run(&mut book, "add John 1234567890").unwrap(),
        "Contact added."
    );
    assert_eq!(
        run(&mut book, "add John 5555555555").unwrap(),
        "Contact updated."
    );
    assert_eq!(
        run(&mut book, "phone John").unwrap(),
        "Phone numbers for John: 1234567890, 5555555555"
    );
    assert_eq!(
        run(&mut book, "change John 5555555555 6666666666").unwrap(),
        "Phone number updated."
    );
    assert_eq!(
        run(&mut book, "add-birthday John 15.06.1990").unwrap(),
        "Birthday added."
    );
    assert_eq!(
        run(&mut book, "show-birthday John").unwrap(),
        "John's birthday is on 15.06.1990"
    );
    assert_eq!(
        run(&mut book, "all").unwrap(),
        "Contact name: John, phones: 1234567890; 6666666666, birthday: 15.06.1990"
    );
    assert_eq!(run(&mut book, "exit").unwrap(), "Good bye!");
}

#[test]
fn test_birthdays_command_uses_window() {
    let mut book = AddressBook::new();
    run(&mut book, "add John 1234567890").unwrap();
    run(&mut book, "add-birthday John 15.06.1990").unwrap();
    run(&mut book, "add Jane 5555555555").unwrap();
    run(&mut book, "add-birthday Jane 01.06.1990").unwrap();

    let reply = run(&mut book, "birthdays").unwrap();
    assert!(reply.starts_with("Upcoming birthdays in the next 7 days:"));
    assert!(reply.contains("John"));
    assert!(!reply.contains("Jane"));
}

#[test]
fn test_birthdays_command_empty_window() {
    let mut book = AddressBook::new();
    run(&mut book, "add John 1234567890").unwrap();

    let reply = run(&mut book, "birthdays").unwrap();
    assert_eq!(reply, "No upcoming birthdays in the next 7 days.");
}

#[test]
fn test_delete_and_remove_phone_commands() {
    let mut book = AddressBook::new();
    run(&mut book, "add John 1234567890").unwrap();
    run(&mut book, "add John 5555555555").unwrap();

    assert_eq!(
        run(&mut book, "remove-phone John 1234567890").unwrap(),
        "Phone number removed."
    );
    assert_eq!(
        run(&mut book, "phone John").unwrap(),
        "Phone numbers for John: 5555555555"
    );

    assert_eq!(run(&mut book, "delete John").unwrap(), "Contact deleted.");
    let err = run(&mut book, "delete John").unwrap_err();
    assert!(matches!(
        err,
        CommandError::Book(BookError::ContactNotFound(_))
    ));
}

#[test]
fn test_usage_errors() {
    let mut book = AddressBook::new();

    let err = run(&mut book, "add John").unwrap_err();
    assert_eq!(err.to_string(), "Usage: add [name] [phone]");

    let err = run(&mut book, "change John 1111111111").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Usage: change [name] [old_phone] [new_phone]"
    );

    let err = run(&mut book, "show-birthday").unwrap_err();
    assert_eq!(err.to_string(), "Usage: show-birthday [name]");
}

#[test]
fn test_unknown_command_is_rejected() {
    let mut book = AddressBook::new();
    let err = run(&mut book, "summon John").unwrap_err();
    assert!(matches!(err, CommandError::UnknownCommand(_)));
}

#[test]
fn test_validation_errors_surface_to_caller() {
    let mut book = AddressBook::new();
    run(&mut book, "add John 1234567890").unwrap();

    let err = run(&mut book, "add John 555").unwrap_err();
    assert!(matches!(err, CommandError::Book(BookError::Validation(_))));

    let err = run(&mut book, "add-birthday John 31.02.2020").unwrap_err();
    assert!(matches!(err, CommandError::Book(BookError::Validation(_))));

    // The failed edits left the record as it was.
    assert_eq!(book.find("John").unwrap().phones().len(), 1);
    assert!(book.find("John").unwrap().birthday().is_none());
}

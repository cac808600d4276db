//! Raw input tokenization and command names.

use crate::error::CommandError;
use std::str::FromStr;

/// Commands understood by the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Greet the user
    Hello,
    /// Add a contact, or a phone to an existing contact
    Add,
    /// Replace one of a contact's phones
    Change,
    /// Show a contact's phones
    Phone,
    /// Remove one phone value from a contact
    RemovePhone,
    /// List every contact
    All,
    /// Delete a contact
    Delete,
    /// Set a contact's birthday
    AddBirthday,
    /// Show a contact's birthday
    ShowBirthday,
    /// List contacts with a birthday coming up
    Birthdays,
    /// Save and leave
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Self::Hello),
            "add" => Ok(Self::Add),
            "change" => Ok(Self::Change),
            "phone" => Ok(Self::Phone),
            "remove-phone" => Ok(Self::RemovePhone),
            "all" => Ok(Self::All),
            "delete" => Ok(Self::Delete),
            "add-birthday" => Ok(Self::AddBirthday),
            "show-birthday" => Ok(Self::ShowBirthday),
            "birthdays" => Ok(Self::Birthdays),
            "close" | "exit" => Ok(Self::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Split a raw input line into its command word and argument tokens.
///
/// Returns `None` for blank input. This is the only place raw command
/// text is split; everything downstream works on tokens.
pub fn tokenize(line: &str) -> Option<(&str, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;
    Some((word, tokens.map(str::to_string).collect()))
}

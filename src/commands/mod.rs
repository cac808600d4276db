//! Command layer: tokenizing raw input and executing commands.
//!
//! Handlers are pure functions over the book plus already-tokenized
//! arguments; they return reply strings or typed errors and never print.
//! The REPL is the only place errors are rendered as user-facing text.

mod handlers;
mod parser;

pub use handlers::{
    add_birthday, add_contact, change_phone, delete_contact, execute, remove_phone,
    show_all_contacts, show_birthday, show_phone, upcoming_birthdays,
};
pub use parser::{tokenize, Command};

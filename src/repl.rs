//! Interactive command loop.
//!
//! Owns the terminal: reads lines from stdin, dispatches through the
//! command layer, and renders replies and errors. The book handle is
//! threaded through explicitly; there is no global state.

use crate::commands::{self, Command};
use crate::config::Config;
use crate::storage;
use anyhow::Result;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the REPL until `close`/`exit` or end of input, then save the book.
pub fn run(config: &Config) -> Result<()> {
    let mut book = storage::load(&config.book_path)?;
    debug!(
        "Session started with {} contacts from {}",
        book.len(),
        config.book_path.display()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like an explicit exit, minus the farewell.
            break;
        }

        let Some((word, args)) = commands::tokenize(&line) else {
            continue;
        };

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        if command == Command::Exit {
            println!("Good bye!");
            break;
        }

        let today = Local::now().date_naive();
        match commands::execute(&mut book, command, &args, today, config.birthday_window_days) {
            Ok(reply) => println!("{}", reply),
            Err(err) => println!("{}", err),
        }
    }

    storage::save(&config.book_path, &book)?;
    debug!("Saved book to {}", config.book_path.display());
    Ok(())
}

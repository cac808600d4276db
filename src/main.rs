//! Address Book - Main entry point
//!
//! This is the main executable for the address book assistant, an
//! interactive command loop over a persisted contact directory.

use address_book::Config;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only; stdout belongs to the REPL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Address book file: {}", config.book_path.display());
    info!(
        "Birthday window: {} days",
        config.birthday_window_days
    );

    address_book::repl::run(&config)?;

    info!("Address book session complete");
    Ok(())
}

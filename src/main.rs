//! Address Book - Main entry point
//!
//! Reads one command per line from stdin and prints feedback to stdout.
//! Logs go to stderr.

use address_book::{
    handle_line, save_if_modified, AddressBook, AddressBookStorage, Config,
    JsonAddressBookStorage, Model,
};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so that stdout only carries command feedback
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using data file {}", config.data_file.display());

    let storage = JsonAddressBookStorage::new(&config.data_file);
    let book = match storage.read() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!("Starting with an empty address book");
            AddressBook::new()
        }
        Err(e) => {
            warn!("Data file could not be loaded, starting with an empty address book: {}", e);
            AddressBook::new()
        }
    };

    let mut model = Model::new(book);
    run(&mut model, &storage, config.autosave)?;

    // Changes are still pending when autosave is off or the last autosave failed.
    if save_if_modified(&mut model, &storage).context("Failed to save address book")? {
        info!("Address book saved");
    }
    Ok(())
}

fn run(model: &mut Model, storage: &dyn AddressBookStorage, autosave: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_persons(&mut stdout, model)?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match handle_line(model, storage, &line, autosave) {
            Ok(result) => {
                writeln!(stdout, "{}", result.feedback)?;
                if result.exit {
                    break;
                }
                print_persons(&mut stdout, model)?;
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }

    Ok(())
}

fn print_persons(out: &mut impl Write, model: &Model) -> io::Result<()> {
    for (i, person) in model.person_list().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, person)?;
    }
    out.flush()
}

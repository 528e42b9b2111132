//! Contact Book - Main entry point
//!
//! Wires configuration, logging, the service, and the terminal frontend.

use anyhow::Result;
use contact_book::{Config, ContactBookService};
use std::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first; logging level comes from it
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Log to stderr so the interactive session on stdout stays clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact book (log level: {})", config.log_level);

    let service = ContactBookService::new();

    let stdin = std::io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut output = std::io::stdout();

    if let Err(e) = contact_book::console::run(&service, &mut input, &mut output) {
        error!("Session ended with error: {}", e);
        return Err(e);
    }

    info!("Contact book session ended");
    Ok(())
}

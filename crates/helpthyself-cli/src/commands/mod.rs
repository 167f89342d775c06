pub mod affirmation;
pub mod config;
pub mod data;
pub mod focus;
pub mod goal;
pub mod habit;
pub mod journal;
pub mod quote;
pub mod settings;

use helpthyself_core::{Config, CoreError, Dashboard, Database};
use serde::Serialize;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Open the dashboard backed by the configured database.
pub fn open_dashboard(config: &Config) -> Result<Dashboard<Database>, CoreError> {
    let db = Database::open(config)?;
    Ok(Dashboard::open(db))
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

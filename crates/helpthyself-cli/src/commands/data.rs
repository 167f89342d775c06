use std::path::PathBuf;

use clap::Subcommand;
use helpthyself_core::Config;

use super::{open_dashboard, CommandResult};

#[derive(Subcommand)]
pub enum DataAction {
    /// Export all data as a dated JSON file
    Export {
        /// Target directory (default: export.directory, else current dir)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Print the JSON instead of writing a file
        #[arg(long, conflicts_with = "dir")]
        stdout: bool,
    },
    /// Replace all data with a JSON export
    Import {
        path: PathBuf,
    },
    /// Delete all data and start over
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction, config: &Config) -> CommandResult {
    let mut dash = open_dashboard(config)?;
    match action {
        DataAction::Export { dir, stdout } => {
            if stdout {
                println!("{}", dash.export_json()?);
            } else {
                let dir = dir.unwrap_or_else(|| config.export_dir());
                let path = dash.export_to_dir(&dir)?;
                println!("{}", path.display());
            }
        }
        DataAction::Import { path } => println!("{}", dash.import_file(&path)?),
        DataAction::Reset { yes } => {
            if !yes {
                return Err("reset deletes all data; pass --yes to confirm".into());
            }
            println!("{}", dash.reset_all()?);
        }
    }
    Ok(())
}

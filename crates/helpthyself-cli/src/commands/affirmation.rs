use clap::Subcommand;
use helpthyself_core::Config;

use super::{open_dashboard, print_json, CommandResult};

#[derive(Subcommand)]
pub enum AffirmationAction {
    /// Show affirmation INDEX (default: the first)
    Show {
        index: Option<usize>,
    },
    /// List the pool as JSON
    List,
    /// Add an affirmation to the pool
    Add {
        text: String,
    },
    /// Save pool affirmation INDEX to favorites
    Favorite {
        index: usize,
    },
    /// List favorites as JSON, newest first
    Favorites,
    /// Remove a favorite by its position in `favorites`
    Unfavorite {
        index: usize,
    },
}

pub fn run(action: AffirmationAction, config: &Config) -> CommandResult {
    let mut dash = open_dashboard(config)?;
    match action {
        AffirmationAction::Show { index } => {
            let text = match index {
                Some(i) => Some(dash.select_affirmation(i)?),
                None => dash.current_affirmation(),
            };
            match text {
                Some(text) => println!("{text}"),
                None => println!("Add an affirmation to get started."),
            }
        }
        AffirmationAction::List => print_json(&dash.document().affirmations.pool)?,
        AffirmationAction::Add { text } => {
            println!("{}", dash.add_affirmation(&text)?);
        }
        AffirmationAction::Favorite { index } => {
            dash.select_affirmation(index)?;
            println!("{}", dash.favorite_current_affirmation()?);
        }
        AffirmationAction::Favorites => {
            let favorites: Vec<&str> = dash.affirmation_favorites().collect();
            print_json(&favorites)?;
        }
        AffirmationAction::Unfavorite { index } => {
            dash.remove_affirmation_favorite(index)?;
            println!("Removed.");
        }
    }
    Ok(())
}

use clap::Subcommand;
use helpthyself_core::model::{builtin_quotes, Quote};
use helpthyself_core::Config;

use super::{open_dashboard, print_json, CommandResult};

#[derive(Subcommand)]
pub enum QuoteAction {
    /// Show a random quote, or built-in quote INDEX
    Show {
        index: Option<usize>,
    },
    /// List built-in quotes as JSON
    List,
    /// Save built-in quote INDEX to favorites
    Favorite {
        index: usize,
    },
    /// List favorites as JSON, newest first
    Favorites,
    /// Remove a favorite by its position in `favorites`
    Unfavorite {
        index: usize,
    },
    /// Remove all favorites
    Clear,
}

fn print_quote(quote: &Quote) {
    println!("\"{}\"", quote.text);
    if !quote.author.is_empty() {
        println!("  - {}", quote.author);
    }
}

pub fn run(action: QuoteAction, config: &Config) -> CommandResult {
    let mut dash = open_dashboard(config)?;
    match action {
        QuoteAction::List => print_json(&builtin_quotes())?,
        QuoteAction::Show { index } => {
            let quote = match index {
                Some(i) => dash.select_quote(i)?,
                None => dash.current_quote(),
            };
            print_quote(quote);
        }
        QuoteAction::Favorite { index } => {
            dash.select_quote(index)?;
            println!("{}", dash.favorite_current_quote()?);
        }
        QuoteAction::Favorites => {
            let favorites: Vec<&Quote> = dash.quote_favorites().collect();
            print_json(&favorites)?;
        }
        QuoteAction::Unfavorite { index } => {
            dash.remove_quote_favorite(index)?;
            println!("Removed.");
        }
        QuoteAction::Clear => {
            dash.clear_quote_favorites()?;
            println!("Favorites cleared.");
        }
    }
    Ok(())
}

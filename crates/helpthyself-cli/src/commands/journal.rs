use chrono::{DateTime, Utc};
use clap::Subcommand;
use helpthyself_core::Config;
use serde::Serialize;

use super::{open_dashboard, print_json, CommandResult};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Update the draft; omitted fields keep their current text
    Draft {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// Print the draft as JSON
    ShowDraft,
    /// Save the draft as a new entry
    Commit,
    /// Discard the draft
    ClearDraft,
    /// List recent entries as JSON
    List,
    /// Load an entry into the draft
    Open {
        id: String,
    },
    /// Delete an entry
    Delete {
        id: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryView<'a> {
    id: &'a str,
    title: &'a str,
    body: &'a str,
    created_at: DateTime<Utc>,
}

pub fn run(action: JournalAction, config: &Config) -> CommandResult {
    let mut dash = open_dashboard(config)?;
    match action {
        JournalAction::Draft { title, body } => {
            let draft = &dash.document().journal.draft;
            let title = title.unwrap_or_else(|| draft.title.clone());
            let body = body.unwrap_or_else(|| draft.body.clone());
            dash.update_draft(&title, &body)?;
        }
        JournalAction::ShowDraft => print_json(&dash.document().journal.draft)?,
        JournalAction::Commit => {
            let id = dash.commit_journal_entry()?;
            println!("{id}");
        }
        JournalAction::ClearDraft => dash.clear_draft()?,
        JournalAction::List => {
            let entries: Vec<EntryView> = dash
                .recent_entries()
                .iter()
                .map(|e| EntryView {
                    id: &e.id,
                    title: e.display_title(),
                    body: &e.body,
                    created_at: e.created_at,
                })
                .collect();
            print_json(&entries)?;
        }
        JournalAction::Open { id } => println!("{}", dash.open_entry(&id)?),
        JournalAction::Delete { id } => {
            dash.delete_entry(&id)?;
            println!("Entry deleted.");
        }
    }
    Ok(())
}

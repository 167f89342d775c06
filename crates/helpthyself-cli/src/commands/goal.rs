use clap::Subcommand;
use helpthyself_core::{Config, ValidationError};

use super::{open_dashboard, print_json, CommandResult};

#[derive(Subcommand)]
pub enum GoalAction {
    /// List goals as JSON
    List,
    /// Add a goal
    Add {
        title: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Change a goal's title or notes
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Mark a goal done
    Done {
        id: String,
    },
    /// Mark a goal not done
    Undone {
        id: String,
    },
    /// Delete a goal
    Delete {
        id: String,
    },
}

pub fn run(action: GoalAction, config: &Config) -> CommandResult {
    let mut dash = open_dashboard(config)?;
    match action {
        GoalAction::List => print_json(&dash.document().goals)?,
        GoalAction::Add { title, notes } => {
            let id = dash.add_goal(&title, &notes)?;
            println!("{id}");
        }
        GoalAction::Edit { id, title, notes } => {
            let goal = dash.document().goal(&id).ok_or_else(|| ValidationError::NotFound {
                kind: "goal",
                id: id.clone(),
            })?;
            let title = title.unwrap_or_else(|| goal.title.clone());
            let notes = notes.unwrap_or_else(|| goal.notes.clone());
            println!("{}", dash.edit_goal(&id, &title, &notes)?);
        }
        GoalAction::Done { id } => dash.set_goal_done(&id, true)?,
        GoalAction::Undone { id } => dash.set_goal_done(&id, false)?,
        GoalAction::Delete { id } => {
            dash.delete_goal(&id)?;
            println!("Goal deleted.");
        }
    }
    Ok(())
}

use chrono::NaiveDate;
use clap::Subcommand;
use helpthyself_core::{Config, Dashboard, StateStore, ValidationError};
use serde::Serialize;

use super::{open_dashboard, print_json, CommandResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits with today's check state and the current streak
    List,
    /// Add a habit
    Add {
        title: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Change a habit's title or notes
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Check a habit for today (or --date YYYY-MM-DD)
    Check {
        id: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Uncheck a habit for today (or --date YYYY-MM-DD)
    Uncheck {
        id: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a habit
    Delete {
        id: String,
    },
    /// Print the current streak in days
    Streak,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HabitView<'a> {
    id: &'a str,
    title: &'a str,
    notes: &'a str,
    checked_today: bool,
}

#[derive(Serialize)]
struct HabitList<'a> {
    streak: u32,
    habits: Vec<HabitView<'a>>,
}

pub fn run(action: HabitAction, config: &Config) -> CommandResult {
    let mut dash = open_dashboard(config)?;
    match action {
        HabitAction::List => {
            let habits = dash
                .document()
                .habits
                .iter()
                .map(|h| HabitView {
                    id: &h.id,
                    title: &h.title,
                    notes: &h.notes,
                    checked_today: dash.is_checked_today(h),
                })
                .collect();
            print_json(&HabitList {
                streak: dash.streak(),
                habits,
            })?;
        }
        HabitAction::Add { title, notes } => {
            let id = dash.add_habit(&title, &notes)?;
            println!("{id}");
        }
        HabitAction::Edit { id, title, notes } => {
            let habit = dash.document().habit(&id).ok_or_else(|| ValidationError::NotFound {
                kind: "habit",
                id: id.clone(),
            })?;
            let title = title.unwrap_or_else(|| habit.title.clone());
            let notes = notes.unwrap_or_else(|| habit.notes.clone());
            println!("{}", dash.edit_habit(&id, &title, &notes)?);
        }
        HabitAction::Check { id, date } => set_checked(&mut dash, &id, date, true)?,
        HabitAction::Uncheck { id, date } => set_checked(&mut dash, &id, date, false)?,
        HabitAction::Delete { id } => {
            dash.delete_habit(&id)?;
            println!("Habit deleted.");
        }
        HabitAction::Streak => println!("{}", dash.streak()),
    }
    Ok(())
}

fn set_checked<S: StateStore>(
    dash: &mut Dashboard<S>,
    id: &str,
    date: Option<NaiveDate>,
    checked: bool,
) -> CommandResult {
    match date {
        Some(day) => dash.set_habit_checked_on(id, day, checked)?,
        None => dash.set_habit_checked(id, checked)?,
    }
    println!("{}", dash.streak());
    Ok(())
}

use clap::{Subcommand, ValueEnum};
use helpthyself_core::offline::NoopRegistrar;
use helpthyself_core::Config;

use super::{open_dashboard, print_json, CommandResult};
use crate::notifier::TerminalNotifier;

#[derive(Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    fn enabled(self) -> bool {
        matches!(self, Switch::On)
    }
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print focus settings as JSON
    Show,
    /// Turn mode-change notifications on or off
    Notifications {
        state: Switch,
    },
    /// Turn offline mode on or off
    Offline {
        state: Switch,
    },
}

pub fn run(action: SettingsAction, config: &Config) -> CommandResult {
    let mut dash = open_dashboard(config)?;
    match action {
        SettingsAction::Show => print_json(&dash.document().focus)?,
        SettingsAction::Notifications { state } => {
            let notice = dash.set_notifications_enabled(state.enabled(), &mut TerminalNotifier)?;
            println!("{notice}");
        }
        SettingsAction::Offline { state } => {
            let notice = dash.set_offline_enabled(state.enabled(), &mut NoopRegistrar)?;
            println!("{notice}");
        }
    }
    Ok(())
}

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use helpthyself_core::{Config, TimerRunner};

use super::{open_dashboard, print_json, CommandResult};
use crate::notifier::TerminalNotifier;

#[derive(Subcommand)]
pub enum FocusAction {
    /// Print the timer state as JSON
    Status,
    /// Set the focus preset in minutes (1-180)
    Preset {
        minutes: u32,
    },
    /// Run the timer in the foreground until Ctrl-C
    Run {
        /// Stop after this many focus/break changes
        #[arg(long)]
        cycles: Option<u32>,
        /// Do not draw the countdown
        #[arg(long)]
        quiet: bool,
    },
}

pub fn run(action: FocusAction, config: &Config) -> CommandResult {
    let mut dash = open_dashboard(config)?;
    match action {
        FocusAction::Status => print_json(&dash.timer().snapshot())?,
        FocusAction::Preset { minutes } => {
            dash.set_focus_preset(minutes)?;
            print_json(&dash.timer().snapshot())?;
        }
        FocusAction::Run { cycles, quiet } => {
            let notifications = dash.document().focus.notifications_enabled;
            let mut runner = TimerRunner::new(TerminalNotifier)
                .tick_interval(Duration::from_millis(config.timer.tick_interval_ms))
                .notifications(notifications);

            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let stop = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!(error = %e, "cannot listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };

            let summary = rt.block_on(runner.run(dash.timer_mut(), stop, cycles, |timer, event| {
                if let Some(event) = event {
                    if let Ok(line) = serde_json::to_string(event) {
                        println!("{line}");
                    }
                }
                if !quiet {
                    let mut err = std::io::stderr();
                    let _ = write!(err, "\r{} {}", timer.mode().label(), timer.display());
                    let _ = err.flush();
                }
            }));

            if !quiet {
                eprintln!();
            }
            tracing::info!(
                ticks = summary.ticks,
                transitions = summary.transitions,
                notifications = summary.notifications_shown,
                "focus run finished"
            );
            print_json(&dash.timer().snapshot())?;
        }
    }
    Ok(())
}

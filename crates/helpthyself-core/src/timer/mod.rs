mod engine;
mod notify;
mod runner;

pub use engine::{break_seconds_for_preset, FocusMode, FocusTimer, TimerState};
pub use notify::{ensure_permission, mode_change_message, notify, Notifier, NullNotifier, Permission};
pub use runner::{RunSummary, StopReason, TimerRunner};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{FocusMode, TimerState};

/// Every focus timer state change produces an Event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: FocusMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// A countdown hit zero and the timer flipped to the other mode.
    ModeChanged {
        from: FocusMode,
        to: FocusMode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        mode: FocusMode,
        remaining_secs: u32,
        display: String,
        preset_minutes: u32,
        at: DateTime<Utc>,
    },
}

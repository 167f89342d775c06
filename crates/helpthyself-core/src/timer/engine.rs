//! Focus timer state machine.
//!
//! The engine has no internal thread. Each call to `tick()` accounts for one
//! second; the caller (see [`TimerRunner`](super::TimerRunner)) decides when
//! ticks happen.
//!
//! ## State Transitions
//!
//! ```text
//! (Focus, Paused) --start--> (Focus, Running) --tick at 0--> (Break, Running)
//!        ^                                                         |
//!        +--------------------------reset--------------------------+
//! ```
//!
//! `pause` keeps the remaining time; `reset` always returns to a paused focus
//! block of `preset * 60` seconds.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::model::DEFAULT_PRESET_MINUTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    Focus,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Running,
    Paused,
}

impl FocusMode {
    pub fn label(self) -> &'static str {
        match self {
            FocusMode::Focus => "Focus",
            FocusMode::Break => "Break",
        }
    }

    pub fn other(self) -> Self {
        match self {
            FocusMode::Focus => FocusMode::Break,
            FocusMode::Break => FocusMode::Focus,
        }
    }
}

/// Break length for a focus preset.
///
/// | preset (min) | break (min) |
/// |--------------|-------------|
/// | ..=25        | 5           |
/// | 26..=60      | 10          |
/// | 61..         | 15          |
pub fn break_seconds_for_preset(preset_minutes: u32) -> u32 {
    let minutes = match preset_minutes {
        0..=25 => 5,
        26..=60 => 10,
        _ => 15,
    };
    minutes * 60
}

/// Focus/break countdown. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    preset_minutes: u32,
    mode: FocusMode,
    state: TimerState,
    remaining_secs: u32,
}

impl FocusTimer {
    /// Paused focus block of `preset_minutes`. Zero falls back to the default preset.
    pub fn new(preset_minutes: u32) -> Self {
        let preset_minutes = effective(preset_minutes);
        Self {
            preset_minutes,
            mode: FocusMode::Focus,
            state: TimerState::Paused,
            remaining_secs: preset_minutes.saturating_mul(60),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn preset_minutes(&self) -> u32 {
        self.preset_minutes
    }

    /// Full length of a block in `mode` under the current preset.
    pub fn duration_secs(&self, mode: FocusMode) -> u32 {
        match mode {
            FocusMode::Focus => self.preset_minutes.saturating_mul(60),
            FocusMode::Break => break_seconds_for_preset(self.preset_minutes),
        }
    }

    /// `MM:SS` rendering of the remaining time.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            display: self.display(),
            preset_minutes: self.preset_minutes,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin counting. Returns `None` when already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        self.state = TimerState::Running;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop counting, keeping the remaining time. Returns `None` when already paused.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.state = TimerState::Paused;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Paused;
        self.mode = FocusMode::Focus;
        self.remaining_secs = self.duration_secs(FocusMode::Focus);
        Event::TimerReset {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Change the preset; always resets.
    pub fn set_preset(&mut self, preset_minutes: u32) -> Event {
        self.preset_minutes = effective(preset_minutes);
        self.reset()
    }

    /// Account for one elapsed second.
    ///
    /// Returns `Some(Event::ModeChanged)` when a block that had already reached
    /// zero flips to the other mode.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            return None;
        }

        let from = self.mode;
        self.mode = from.other();
        self.remaining_secs = self.duration_secs(self.mode);
        tracing::debug!(?from, to = ?self.mode, remaining = self.remaining_secs, "focus timer flipped");
        Some(Event::ModeChanged {
            from,
            to: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_PRESET_MINUTES)
    }
}

fn effective(preset_minutes: u32) -> u32 {
    if preset_minutes == 0 {
        DEFAULT_PRESET_MINUTES
    } else {
        preset_minutes
    }
}

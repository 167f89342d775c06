//! Async driver for [`FocusTimer`].
//!
//! Ticks the engine on a fixed interval until a stop future resolves or a
//! requested number of mode changes has happened. Stopping pauses the timer,
//! which drops the pending tick.

use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use super::notify::{mode_change_message, notify, Notifier};
use super::FocusTimer;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The stop future resolved.
    Stopped,
    /// The requested number of mode changes happened.
    TransitionLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub reason: StopReason,
    pub ticks: u64,
    pub transitions: u32,
    pub notifications_shown: u32,
}

pub struct TimerRunner<N> {
    tick_interval: Duration,
    notifications_enabled: bool,
    notifier: N,
}

impl<N: Notifier> TimerRunner<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            notifications_enabled: false,
            notifier,
        }
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        // A zero period would make tokio's interval panic.
        self.tick_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn notifications(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    /// Start `timer` and tick it until `stop` resolves or `max_transitions`
    /// mode changes have been observed. `observer` sees the timer after every
    /// tick, along with the event that tick produced.
    pub async fn run<F, O>(
        &mut self,
        timer: &mut FocusTimer,
        stop: F,
        max_transitions: Option<u32>,
        mut observer: O,
    ) -> RunSummary
    where
        F: Future<Output = ()>,
        O: FnMut(&FocusTimer, Option<&Event>),
    {
        timer.start();

        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of a tokio interval fires immediately.
        interval.tick().await;

        tokio::pin!(stop);
        let mut summary = RunSummary {
            reason: StopReason::Stopped,
            ticks: 0,
            transitions: 0,
            notifications_shown: 0,
        };

        loop {
            if max_transitions.is_some_and(|max| summary.transitions >= max) {
                summary.reason = StopReason::TransitionLimit;
                break;
            }

            tokio::select! {
                biased;
                _ = &mut stop => {
                    summary.reason = StopReason::Stopped;
                    break;
                }
                _ = interval.tick() => {
                    let event = timer.tick();
                    summary.ticks += 1;
                    if let Some(Event::ModeChanged { to, .. }) = &event {
                        summary.transitions += 1;
                        let (title, body) = mode_change_message(*to);
                        if notify(self.notifications_enabled, &mut self.notifier, title, body) {
                            summary.notifications_shown += 1;
                        }
                    }
                    observer(timer, event.as_ref());
                }
            }
        }

        timer.pause();
        summary
    }
}

//! # Help Thy Self Core Library
//!
//! Business logic for a local-first personal dashboard: quotes,
//! affirmations, goals, habit streaks, a journal and a focus timer. All user
//! data lives in one JSON document kept in a single storage slot; front ends
//! (the `hts` CLI, or anything else) are thin layers over [`Dashboard`].
//!
//! ## Architecture
//!
//! - **Model**: the persisted [`Document`] and its defaults
//! - **Migration**: explicit, per-field backfill of older or partial documents
//! - **Storage**: [`StateStore`] slots (SQLite or in-memory) and TOML [`Config`]
//! - **Streak**: consecutive days on which every habit was checked
//! - **Timer**: a tick-driven focus/break state machine and its async runner
//!
//! ## Key Components
//!
//! - [`Dashboard`]: every user action, validated and persisted
//! - [`FocusTimer`]: focus/break countdown
//! - [`DocumentStore`]: fail-soft load and synchronous save
//! - [`Config`]: host configuration

pub mod dashboard;
pub mod error;
pub mod events;
pub mod model;
pub mod offline;
pub mod storage;
pub mod streak;
pub mod timer;
pub mod transfer;

pub use dashboard::{Dashboard, Notice};
pub use error::{
    ConfigError, CoreError, ImportError, NotificationError, StorageError, ValidationError,
};
pub use events::Event;
pub use model::{default_state, migrate, Document, FocusSettings, Goal, Habit, APP_VERSION};
pub use storage::{Config, Database, DocumentStore, MemoryStore, StateStore, STORAGE_KEY};
pub use timer::{FocusMode, FocusTimer, Notifier, Permission, TimerRunner, TimerState};

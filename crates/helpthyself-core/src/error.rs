//! Core error types for helpthyself-core.
//!
//! Every failure a dashboard action can surface is one of these. Messages of
//! [`ValidationError`], [`ImportError`] and [`NotificationError`] are shown to
//! the user verbatim, so keep them short and sentence-cased.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for helpthyself-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage slot errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected user input; nothing was mutated
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Import file could not be read as a document
    #[error("{0}")]
    Import(#[from] ImportError),

    /// Notification permission could not be obtained
    #[error("{0}")]
    Notification(#[from] NotificationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-slot errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked by another process
    #[error("Database is locked")]
    Locked,

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors. Display text is the user-visible message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Goal title is required.")]
    GoalTitleRequired,

    #[error("Habit title is required.")]
    HabitTitleRequired,

    #[error("Journal body is required.")]
    JournalBodyRequired,

    #[error("Affirmation text is required.")]
    AffirmationTextRequired,

    #[error("Focus preset must be between {min} and {max} minutes (got {got}).")]
    PresetOutOfRange { min: u32, max: u32, got: u32 },

    #[error("No {kind} with id '{id}'.")]
    NotFound { kind: &'static str, id: String },

    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

/// Import failures. The wrapped parser error is kept for logs only.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Import failed. Ensure you selected a valid JSON export.")]
    Malformed(#[source] serde_json::Error),

    #[error("Import failed. Could not read {path}.")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Notification permission failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Notifications denied in browser settings.")]
    Denied,

    #[error("Notifications are not supported here.")]
    Unsupported,

    #[error("Notification could not be shown: {0}")]
    Delivery(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(inner, _)
                if inner.code == rusqlite::ErrorCode::DatabaseBusy
                    || inner.code == rusqlite::ErrorCode::DatabaseLocked =>
            {
                StorageError::Locked
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Storage(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        let err: CoreError = ValidationError::GoalTitleRequired.into();
        assert_eq!(err.to_string(), "Goal title is required.");
    }

    #[test]
    fn import_message_hides_parser_detail() {
        let parse = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: CoreError = ImportError::Malformed(parse).into();
        assert_eq!(
            err.to_string(),
            "Import failed. Ensure you selected a valid JSON export."
        );
    }
}

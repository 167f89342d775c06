mod content;
mod document;
pub mod migrate;

pub use content::{
    builtin_quote, builtin_quotes, random_quote, BUILTIN_QUOTES, DEFAULT_AFFIRMATIONS,
};
pub use document::{
    default_state, Affirmations, Document, Draft, FocusSettings, Goal, Habit, Journal,
    JournalEntry, Quote, Quotes, APP_VERSION, DEFAULT_PRESET_MINUTES,
};
pub use migrate::{migrate, parse_document, RawDocument};

pub(crate) use document::new_id;

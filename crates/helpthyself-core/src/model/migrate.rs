//! Forward-only document migration.
//!
//! A stored or imported document is read into [`RawDocument`], where every
//! field is optional, and then filled field by field from
//! [`default_state`](super::default_state):
//!
//! - top-level fields: the raw value wins when present;
//! - `quotes`, `affirmations`, `journal`, `focus`: merged one level deep, so a
//!   sub-field added by a later release is backfilled without touching the
//!   user's existing sub-fields;
//! - `goals`, `habits`: taken whole when present, no per-item backfill;
//! - `version`: always rewritten to [`APP_VERSION`].
//!
//! JSON `null` counts as absent. Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::document::{
    default_state, Affirmations, Document, Draft, FocusSettings, Goal, Habit, Journal,
    JournalEntry, Quote, Quotes, APP_VERSION,
};

/// A document as found in storage or an import file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub version: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub quotes: Option<RawQuotes>,
    pub affirmations: Option<RawAffirmations>,
    pub goals: Option<Vec<Goal>>,
    pub habits: Option<Vec<Habit>>,
    pub journal: Option<RawJournal>,
    pub focus: Option<RawFocus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuotes {
    pub favorites: Option<Vec<Quote>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAffirmations {
    pub pool: Option<Vec<String>>,
    pub favorites: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJournal {
    pub draft: Option<Draft>,
    pub entries: Option<Vec<JournalEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFocus {
    pub preset_minutes: Option<u32>,
    pub notifications_enabled: Option<bool>,
    pub offline_enabled: Option<bool>,
}

/// Fill every missing field of `raw` from the defaults.
pub fn migrate(raw: RawDocument) -> Document {
    let Document {
        created_at: default_created_at,
        quotes: default_quotes,
        affirmations: default_affirmations,
        goals: default_goals,
        habits: default_habits,
        journal: default_journal,
        focus: default_focus,
        ..
    } = default_state();

    if let Some(version) = raw.version.as_deref() {
        if version != APP_VERSION {
            tracing::debug!(from = version, to = APP_VERSION, "restamping document version");
        }
    }

    let quotes = raw.quotes.unwrap_or_default();
    let affirmations = raw.affirmations.unwrap_or_default();
    let journal = raw.journal.unwrap_or_default();
    let focus = raw.focus.unwrap_or_default();

    Document {
        version: APP_VERSION.to_string(),
        created_at: raw.created_at.unwrap_or(default_created_at),
        quotes: Quotes {
            favorites: quotes.favorites.unwrap_or(default_quotes.favorites),
        },
        affirmations: Affirmations {
            pool: affirmations.pool.unwrap_or(default_affirmations.pool),
            favorites: affirmations
                .favorites
                .unwrap_or(default_affirmations.favorites),
        },
        goals: raw.goals.unwrap_or(default_goals),
        habits: raw.habits.unwrap_or(default_habits),
        journal: Journal {
            draft: journal.draft.unwrap_or(default_journal.draft),
            entries: journal.entries.unwrap_or(default_journal.entries),
        },
        focus: FocusSettings {
            preset_minutes: focus.preset_minutes.unwrap_or(default_focus.preset_minutes),
            notifications_enabled: focus
                .notifications_enabled
                .unwrap_or(default_focus.notifications_enabled),
            offline_enabled: focus.offline_enabled.unwrap_or(default_focus.offline_enabled),
        },
    }
}

/// Parse JSON text and migrate it.
pub fn parse_document(text: &str) -> Result<Document, serde_json::Error> {
    serde_json::from_str::<RawDocument>(text).map(migrate)
}

impl From<Document> for RawDocument {
    fn from(doc: Document) -> Self {
        Self {
            version: Some(doc.version),
            created_at: Some(doc.created_at),
            quotes: Some(RawQuotes {
                favorites: Some(doc.quotes.favorites),
            }),
            affirmations: Some(RawAffirmations {
                pool: Some(doc.affirmations.pool),
                favorites: Some(doc.affirmations.favorites),
            }),
            goals: Some(doc.goals),
            habits: Some(doc.habits),
            journal: Some(RawJournal {
                draft: Some(doc.journal.draft),
                entries: Some(doc.journal.entries),
            }),
            focus: Some(RawFocus {
                preset_minutes: Some(doc.focus.preset_minutes),
                notifications_enabled: Some(doc.focus.notifications_enabled),
                offline_enabled: Some(doc.focus.offline_enabled),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_AFFIRMATIONS;
    use serde_json::json;

    #[test]
    fn empty_object_becomes_defaults() {
        let doc = parse_document("{}").unwrap();
        assert_eq!(doc.version, APP_VERSION);
        assert_eq!(doc.goals.len(), 1);
        assert_eq!(doc.habits.len(), 2);
        assert_eq!(doc.focus, FocusSettings::default());
    }

    #[test]
    fn nested_objects_merge_one_level() {
        let raw = json!({
            "affirmations": { "favorites": ["Keep going."] },
            "focus": { "presetMinutes": 50 },
            "journal": { "draft": { "title": "t", "body": "b" } }
        });
        let doc = parse_document(&raw.to_string()).unwrap();

        assert_eq!(doc.affirmations.favorites, vec!["Keep going.".to_string()]);
        assert_eq!(doc.affirmations.pool.len(), DEFAULT_AFFIRMATIONS.len());
        assert_eq!(doc.focus.preset_minutes, 50);
        assert!(!doc.focus.notifications_enabled);
        assert!(doc.focus.offline_enabled);
        assert_eq!(doc.journal.draft.title, "t");
        assert!(doc.journal.entries.is_empty());
    }

    #[test]
    fn arrays_taken_as_is() {
        let raw = json!({ "goals": [], "habits": [] });
        let doc = parse_document(&raw.to_string()).unwrap();
        assert!(doc.goals.is_empty());
        assert!(doc.habits.is_empty());
    }

    #[test]
    fn version_always_overwritten() {
        let doc = parse_document(r#"{"version":"0.1.0"}"#).unwrap();
        assert_eq!(doc.version, APP_VERSION);
        let doc = parse_document(r#"{"version":"9.9.9"}"#).unwrap();
        assert_eq!(doc.version, APP_VERSION);
    }

    #[test]
    fn null_fields_count_as_absent() {
        let doc = parse_document(r#"{"quotes":null,"focus":{"offlineEnabled":null}}"#).unwrap();
        assert!(doc.quotes.favorites.is_empty());
        assert!(doc.focus.offline_enabled);
    }

    #[test]
    fn unknown_fields_ignored() {
        let doc = parse_document(r#"{"theme":"dark","focus":{"sound":"bell"}}"#).unwrap();
        assert_eq!(doc.focus, FocusSettings::default());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(parse_document("[]").is_err());
        assert!(parse_document(r#"{"goals":"nope"}"#).is_err());
        assert!(parse_document("not json").is_err());
    }

    #[test]
    fn js_style_timestamps_parse() {
        let raw = json!({
            "createdAt": "2024-05-01T08:30:00.000Z",
            "goals": [{ "id": "id-1", "title": "Ship", "createdAt": "2024-05-01T08:31:00.000Z" }]
        });
        let doc = parse_document(&raw.to_string()).unwrap();
        assert_eq!(doc.goals[0].notes, "");
        assert!(!doc.goals[0].done);
        assert_eq!(doc.created_at.to_rfc3339(), "2024-05-01T08:30:00+00:00");
    }

    #[test]
    fn items_without_ids_get_fresh_ones() {
        let before = Utc::now();
        let raw = json!({
            "goals": [{ "title": "A" }, { "title": "B" }],
            "habits": [{ "title": "Walk" }],
            "journal": { "entries": [{ "body": "Quiet morning." }] }
        });
        let doc = parse_document(&raw.to_string()).unwrap();

        assert!(!doc.goals[0].id.is_empty());
        assert_ne!(doc.goals[0].id, doc.goals[1].id);
        assert!(doc.goals[0].created_at >= before);
        assert!(!doc.habits[0].id.is_empty());
        assert!(!doc.journal.entries[0].id.is_empty());
        assert!(doc.journal.entries[0].created_at >= before);
    }

    #[test]
    fn full_document_is_a_fixed_point() {
        let doc = default_state();
        let migrated = migrate(RawDocument::from(doc.clone()));
        assert_eq!(migrated, doc);
    }
}

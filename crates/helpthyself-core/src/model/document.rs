//! The persisted dashboard document.
//!
//! Field names serialize in camelCase; the JSON shape is shared by the
//! storage slot and by export files, so renaming anything here is a
//! breaking change for existing users.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::DEFAULT_AFFIRMATIONS;

/// Version stamped on every document this build writes.
pub const APP_VERSION: &str = "1.0.0";

/// Preset used when none is stored (or a stored preset is zero).
pub const DEFAULT_PRESET_MINUTES: u32 = 25;

/// Root document holding all user data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub quotes: Quotes,
    pub affirmations: Affirmations,
    pub goals: Vec<Goal>,
    pub habits: Vec<Habit>,
    pub journal: Journal,
    pub focus: FocusSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotes {
    pub favorites: Vec<Quote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affirmations {
    pub pool: Vec<String>,
    pub favorites: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default = "new_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// A daily habit. `checked_on` is keyed by local calendar day and is never
/// pruned; unchecking records an explicit `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    #[serde(default = "new_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub checked_on: BTreeMap<NaiveDate, bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub draft: Draft,
    pub entries: Vec<JournalEntry>,
}

/// Persisted focus settings. The live countdown is not part of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSettings {
    pub preset_minutes: u32,
    pub notifications_enabled: bool,
    pub offline_enabled: bool,
}

impl Default for Affirmations {
    fn default() -> Self {
        Self {
            pool: DEFAULT_AFFIRMATIONS.iter().map(|s| s.to_string()).collect(),
            favorites: Vec::new(),
        }
    }
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            preset_minutes: DEFAULT_PRESET_MINUTES,
            notifications_enabled: false,
            offline_enabled: true,
        }
    }
}

impl Goal {
    pub fn new(title: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            notes: notes.into(),
            done: false,
            created_at: Utc::now(),
        }
    }
}

impl Habit {
    pub fn new(title: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            notes: notes.into(),
            checked_on: BTreeMap::new(),
        }
    }

    pub fn is_checked_on(&self, day: NaiveDate) -> bool {
        self.checked_on.get(&day).copied().unwrap_or(false)
    }

    pub fn set_checked_on(&mut self, day: NaiveDate, checked: bool) {
        self.checked_on.insert(day, checked);
    }
}

impl JournalEntry {
    /// Title shown in listings.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

impl Document {
    /// Fresh document with the seed goal and habits.
    pub fn new() -> Self {
        Self {
            version: APP_VERSION.to_string(),
            created_at: Utc::now(),
            quotes: Quotes::default(),
            affirmations: Affirmations::default(),
            goals: default_goals(),
            habits: default_habits(),
            journal: Journal::default(),
            focus: FocusSettings::default(),
        }
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn goal_mut(&mut self, id: &str) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|g| g.id == id)
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn habit_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    pub fn entry(&self, id: &str) -> Option<&JournalEntry> {
        self.journal.entries.iter().find(|e| e.id == id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default document.
pub fn default_state() -> Document {
    Document::new()
}

pub(crate) fn default_goals() -> Vec<Goal> {
    vec![Goal::new("Define 3 priorities for this week", "")]
}

pub(crate) fn default_habits() -> Vec<Habit> {
    vec![
        Habit::new("Move for 10 minutes", ""),
        Habit::new("Write 3 sentences in journal", ""),
    ]
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_seeded() {
        let doc = default_state();
        assert_eq!(doc.version, APP_VERSION);
        assert_eq!(doc.goals.len(), 1);
        assert_eq!(doc.habits.len(), 2);
        assert_eq!(doc.affirmations.pool.len(), 7);
        assert!(doc.quotes.favorites.is_empty());
        assert_eq!(doc.focus, FocusSettings::default());
        assert_eq!(doc.focus.preset_minutes, 25);
        assert!(!doc.focus.notifications_enabled);
        assert!(doc.focus.offline_enabled);
    }

    #[test]
    fn seed_ids_are_unique() {
        let a = default_state();
        let b = default_state();
        assert_ne!(a.habits[0].id, a.habits[1].id);
        assert_ne!(a.goals[0].id, b.goals[0].id);
    }

    #[test]
    fn serializes_camel_case_and_iso_day_keys() {
        let mut doc = default_state();
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        doc.habits[0].set_checked_on(day, true);

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["focus"]["presetMinutes"], 25);
        assert_eq!(json["focus"]["notificationsEnabled"], false);
        assert_eq!(json["habits"][0]["checkedOn"]["2024-03-09"], true);
    }

    #[test]
    fn untitled_entry_display() {
        let entry = JournalEntry {
            id: new_id(),
            title: String::new(),
            body: "body".into(),
            created_at: Utc::now(),
        };
        assert_eq!(entry.display_title(), "Untitled");
    }
}

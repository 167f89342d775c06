//! User actions over the dashboard document.
//!
//! A [`Dashboard`] owns the document, its storage slot and the transient
//! session state (focus timer, current quote, affirmation cursor). Every
//! mutating action validates first, mutates, then saves synchronously; a
//! rejected action leaves the document untouched.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};

use crate::error::{Result, ValidationError};
use crate::model::{
    builtin_quote, default_state, new_id, random_quote, Document, Draft, Goal, Habit,
    JournalEntry, Quote, BUILTIN_QUOTES,
};
use crate::offline::{self, OfflineRegistrar};
use crate::storage::{DocumentStore, StateStore};
use crate::streak;
use crate::timer::{ensure_permission, FocusTimer, Notifier};
use crate::transfer;

/// Allowed focus presets, in minutes.
pub const PRESET_RANGE: RangeInclusive<u32> = 1..=180;

/// Journal entries shown in the recent list.
pub const RECENT_ENTRIES: usize = 10;

/// Short confirmation shown to the user after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    QuoteSaved,
    QuoteAlreadySaved,
    AffirmationSaved,
    AffirmationAlreadySaved,
    AffirmationAdded,
    GoalAdded,
    GoalUpdated,
    HabitAdded,
    HabitUpdated,
    EntrySaved,
    EntryLoaded,
    NotificationsEnabled,
    NotificationsDisabled,
    OfflineEnabled,
    OfflineDisabled,
    Exported,
    Imported,
    ResetComplete,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::QuoteSaved => "Saved to favorites.",
            Notice::QuoteAlreadySaved => "Already in favorites.",
            Notice::AffirmationSaved => "Saved.",
            Notice::AffirmationAlreadySaved => "Already saved.",
            Notice::AffirmationAdded => "Affirmation added.",
            Notice::GoalAdded => "Goal added.",
            Notice::GoalUpdated => "Goal updated.",
            Notice::HabitAdded => "Habit added.",
            Notice::HabitUpdated => "Habit updated.",
            Notice::EntrySaved => "Entry saved.",
            Notice::EntryLoaded => "Loaded entry into editor.",
            Notice::NotificationsEnabled => "Notifications enabled.",
            Notice::NotificationsDisabled => "Notifications disabled.",
            Notice::OfflineEnabled => "Offline mode enabled.",
            Notice::OfflineDisabled => "Offline mode disabled.",
            Notice::Exported => "Exported JSON.",
            Notice::Imported => "Imported JSON.",
            Notice::ResetComplete => "Reset complete.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub struct Dashboard<S> {
    doc: Document,
    store: DocumentStore<S>,
    timer: FocusTimer,
    current_quote: Quote,
    affirmation_index: usize,
}

impl<S: StateStore> Dashboard<S> {
    /// Load the document from `store`, seeding it on first use.
    pub fn open(store: S) -> Self {
        let store = DocumentStore::new(store);
        let doc = store.load_or_init();
        Self::from_parts(doc, store)
    }

    fn from_parts(doc: Document, store: DocumentStore<S>) -> Self {
        let timer = FocusTimer::new(doc.focus.preset_minutes);
        Self {
            doc,
            store,
            timer,
            current_quote: random_quote(),
            affirmation_index: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Apply `f` to a copy of the document and keep the copy only once it
    /// has been saved. On any error the live document is untouched.
    fn update<T>(&mut self, f: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let mut next = self.doc.clone();
        let out = f(&mut next)?;
        self.store.save(&next)?;
        self.doc = next;
        Ok(out)
    }

    // ── Quotes ───────────────────────────────────────────────────────

    pub fn current_quote(&self) -> &Quote {
        &self.current_quote
    }

    pub fn new_quote(&mut self) -> &Quote {
        self.current_quote = random_quote();
        &self.current_quote
    }

    /// Make built-in quote `index` current.
    pub fn select_quote(&mut self, index: usize) -> Result<&Quote> {
        self.current_quote = builtin_quote(index).ok_or(ValidationError::OutOfBounds {
            collection: "quotes",
            index,
            len: BUILTIN_QUOTES.len(),
        })?;
        Ok(&self.current_quote)
    }

    pub fn favorite_current_quote(&mut self) -> Result<Notice> {
        if self.doc.quotes.favorites.contains(&self.current_quote) {
            return Ok(Notice::QuoteAlreadySaved);
        }
        let quote = self.current_quote.clone();
        self.update(|doc| {
            doc.quotes.favorites.push(quote);
            Ok(Notice::QuoteSaved)
        })
    }

    /// Favorites as displayed, newest first.
    pub fn quote_favorites(&self) -> impl Iterator<Item = &Quote> {
        self.doc.quotes.favorites.iter().rev()
    }

    /// Remove a favorite by its position in [`quote_favorites`](Self::quote_favorites).
    pub fn remove_quote_favorite(&mut self, index_from_newest: usize) -> Result<()> {
        self.update(|doc| {
            let favorites = &mut doc.quotes.favorites;
            let idx = from_newest(favorites.len(), index_from_newest, "quote favorites")?;
            favorites.remove(idx);
            Ok(())
        })
    }

    pub fn clear_quote_favorites(&mut self) -> Result<()> {
        self.update(|doc| {
            doc.quotes.favorites.clear();
            Ok(())
        })
    }

    // ── Affirmations ─────────────────────────────────────────────────

    /// Affirmation under the cursor; `None` while the pool is empty.
    pub fn current_affirmation(&self) -> Option<&str> {
        let pool = &self.doc.affirmations.pool;
        if pool.is_empty() {
            return None;
        }
        pool.get(self.affirmation_index % pool.len()).map(String::as_str)
    }

    /// Advance the cursor cyclically.
    pub fn next_affirmation(&mut self) -> Option<&str> {
        let len = self.doc.affirmations.pool.len();
        if len == 0 {
            return None;
        }
        self.affirmation_index = (self.affirmation_index + 1) % len;
        self.current_affirmation()
    }

    pub fn select_affirmation(&mut self, index: usize) -> Result<&str> {
        let len = self.doc.affirmations.pool.len();
        if index >= len {
            return Err(ValidationError::OutOfBounds {
                collection: "affirmations",
                index,
                len,
            }
            .into());
        }
        self.affirmation_index = index;
        Ok(&self.doc.affirmations.pool[index])
    }

    pub fn add_affirmation(&mut self, text: &str) -> Result<Notice> {
        let text = clean(text);
        if text.is_empty() {
            return Err(ValidationError::AffirmationTextRequired.into());
        }
        self.update(|doc| {
            doc.affirmations.pool.push(text);
            Ok(Notice::AffirmationAdded)
        })
    }

    pub fn favorite_current_affirmation(&mut self) -> Result<Notice> {
        let text = self.current_affirmation().map(clean).unwrap_or_default();
        if text.is_empty() {
            return Err(ValidationError::AffirmationTextRequired.into());
        }
        if self.doc.affirmations.favorites.contains(&text) {
            return Ok(Notice::AffirmationAlreadySaved);
        }
        self.update(|doc| {
            doc.affirmations.favorites.push(text);
            Ok(Notice::AffirmationSaved)
        })
    }

    pub fn affirmation_favorites(&self) -> impl Iterator<Item = &str> {
        self.doc.affirmations.favorites.iter().rev().map(String::as_str)
    }

    pub fn remove_affirmation_favorite(&mut self, index_from_newest: usize) -> Result<()> {
        self.update(|doc| {
            let favorites = &mut doc.affirmations.favorites;
            let idx = from_newest(favorites.len(), index_from_newest, "affirmation favorites")?;
            favorites.remove(idx);
            Ok(())
        })
    }

    // ── Goals ────────────────────────────────────────────────────────

    /// Add a goal at the top of the list. Returns the new goal's id.
    pub fn add_goal(&mut self, title: &str, notes: &str) -> Result<String> {
        let title = clean(title);
        if title.is_empty() {
            return Err(ValidationError::GoalTitleRequired.into());
        }
        let goal = Goal::new(title, clean(notes));
        let id = goal.id.clone();
        self.update(|doc| {
            doc.goals.insert(0, goal);
            Ok(id)
        })
    }

    pub fn edit_goal(&mut self, id: &str, title: &str, notes: &str) -> Result<Notice> {
        let title = clean(title);
        if title.is_empty() {
            return Err(ValidationError::GoalTitleRequired.into());
        }
        self.update(|doc| {
            let goal = doc.goal_mut(id).ok_or_else(|| not_found("goal", id))?;
            goal.title = title;
            goal.notes = clean(notes);
            Ok(Notice::GoalUpdated)
        })
    }

    pub fn set_goal_done(&mut self, id: &str, done: bool) -> Result<()> {
        self.update(|doc| {
            let goal = doc.goal_mut(id).ok_or_else(|| not_found("goal", id))?;
            goal.done = done;
            Ok(())
        })
    }

    pub fn delete_goal(&mut self, id: &str) -> Result<()> {
        self.update(|doc| {
            if doc.goal(id).is_none() {
                return Err(not_found("goal", id).into());
            }
            doc.goals.retain(|g| g.id != id);
            Ok(())
        })
    }

    // ── Habits ───────────────────────────────────────────────────────

    /// Add a habit at the top of the list. Returns the new habit's id.
    pub fn add_habit(&mut self, title: &str, notes: &str) -> Result<String> {
        let title = clean(title);
        if title.is_empty() {
            return Err(ValidationError::HabitTitleRequired.into());
        }
        let habit = Habit::new(title, clean(notes));
        let id = habit.id.clone();
        self.update(|doc| {
            doc.habits.insert(0, habit);
            Ok(id)
        })
    }

    pub fn edit_habit(&mut self, id: &str, title: &str, notes: &str) -> Result<Notice> {
        let title = clean(title);
        if title.is_empty() {
            return Err(ValidationError::HabitTitleRequired.into());
        }
        self.update(|doc| {
            let habit = doc.habit_mut(id).ok_or_else(|| not_found("habit", id))?;
            habit.title = title;
            habit.notes = clean(notes);
            Ok(Notice::HabitUpdated)
        })
    }

    /// Check or uncheck a habit for today.
    pub fn set_habit_checked(&mut self, id: &str, checked: bool) -> Result<()> {
        self.set_habit_checked_on(id, streak::today(), checked)
    }

    pub fn set_habit_checked_on(&mut self, id: &str, day: NaiveDate, checked: bool) -> Result<()> {
        self.update(|doc| {
            let habit = doc.habit_mut(id).ok_or_else(|| not_found("habit", id))?;
            habit.set_checked_on(day, checked);
            Ok(())
        })
    }

    pub fn delete_habit(&mut self, id: &str) -> Result<()> {
        self.update(|doc| {
            if doc.habit(id).is_none() {
                return Err(not_found("habit", id).into());
            }
            doc.habits.retain(|h| h.id != id);
            Ok(())
        })
    }

    pub fn is_checked_today(&self, habit: &Habit) -> bool {
        habit.is_checked_on(streak::today())
    }

    pub fn streak(&self) -> u32 {
        streak::streak(&self.doc.habits)
    }

    pub fn streak_on(&self, today: NaiveDate) -> u32 {
        streak::streak_on(&self.doc.habits, today)
    }

    // ── Journal ──────────────────────────────────────────────────────

    /// Autosave the draft verbatim.
    pub fn update_draft(&mut self, title: &str, body: &str) -> Result<()> {
        self.update(|doc| {
            doc.journal.draft = Draft {
                title: title.to_string(),
                body: body.to_string(),
            };
            Ok(())
        })
    }

    /// Turn the draft into an entry and clear it. Returns the entry id.
    pub fn commit_journal_entry(&mut self) -> Result<String> {
        let body = clean(&self.doc.journal.draft.body);
        if body.is_empty() {
            return Err(ValidationError::JournalBodyRequired.into());
        }
        let entry = JournalEntry {
            id: new_id(),
            title: clean(&self.doc.journal.draft.title),
            body,
            created_at: Utc::now(),
        };
        let id = entry.id.clone();
        self.update(|doc| {
            doc.journal.entries.insert(0, entry);
            doc.journal.draft = Draft::default();
            Ok(id)
        })
    }

    pub fn clear_draft(&mut self) -> Result<()> {
        self.update(|doc| {
            doc.journal.draft = Draft::default();
            Ok(())
        })
    }

    /// Copy an entry back into the draft for editing.
    pub fn open_entry(&mut self, id: &str) -> Result<Notice> {
        self.update(|doc| {
            let entry = doc.entry(id).ok_or_else(|| not_found("journal entry", id))?;
            let draft = Draft {
                title: entry.title.clone(),
                body: entry.body.clone(),
            };
            doc.journal.draft = draft;
            Ok(Notice::EntryLoaded)
        })
    }

    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        self.update(|doc| {
            if doc.entry(id).is_none() {
                return Err(not_found("journal entry", id).into());
            }
            doc.journal.entries.retain(|e| e.id != id);
            Ok(())
        })
    }

    pub fn recent_entries(&self) -> &[JournalEntry] {
        let entries = &self.doc.journal.entries;
        &entries[..entries.len().min(RECENT_ENTRIES)]
    }

    // ── Focus ────────────────────────────────────────────────────────

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut FocusTimer {
        &mut self.timer
    }

    /// Persist a new preset and reset the timer to it.
    pub fn set_focus_preset(&mut self, minutes: u32) -> Result<()> {
        if !PRESET_RANGE.contains(&minutes) {
            return Err(ValidationError::PresetOutOfRange {
                min: *PRESET_RANGE.start(),
                max: *PRESET_RANGE.end(),
                got: minutes,
            }
            .into());
        }
        self.update(|doc| {
            doc.focus.preset_minutes = minutes;
            Ok(())
        })?;
        self.timer.set_preset(minutes);
        Ok(())
    }

    // ── Settings ─────────────────────────────────────────────────────

    /// Enabling requires a granted permission; otherwise the flag is forced
    /// off, saved, and the permission error returned.
    pub fn set_notifications_enabled<N: Notifier + ?Sized>(
        &mut self,
        enabled: bool,
        notifier: &mut N,
    ) -> Result<Notice> {
        if enabled {
            if let Err(e) = ensure_permission(notifier) {
                self.update(|doc| {
                    doc.focus.notifications_enabled = false;
                    Ok(())
                })?;
                return Err(e.into());
            }
        }
        self.update(|doc| {
            doc.focus.notifications_enabled = enabled;
            Ok(if enabled {
                Notice::NotificationsEnabled
            } else {
                Notice::NotificationsDisabled
            })
        })
    }

    /// Persist the offline flag, then ask the host to (un)register.
    pub fn set_offline_enabled<R: OfflineRegistrar + ?Sized>(
        &mut self,
        enabled: bool,
        registrar: &mut R,
    ) -> Result<Notice> {
        self.update(|doc| {
            doc.focus.offline_enabled = enabled;
            Ok(())
        })?;
        offline::apply(registrar, enabled);
        Ok(if enabled {
            Notice::OfflineEnabled
        } else {
            Notice::OfflineDisabled
        })
    }

    // ── Data ─────────────────────────────────────────────────────────

    pub fn export_json(&self) -> Result<String> {
        transfer::export_json(&self.doc)
    }

    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        transfer::export_to_dir(&self.doc, dir)
    }

    /// Replace the document with an imported one. A malformed import, or one
    /// that cannot be saved, leaves everything unchanged.
    pub fn import_json(&mut self, text: &str) -> Result<Notice> {
        let doc = transfer::import_json(text)?;
        self.replace(doc)?;
        tracing::info!("imported document");
        Ok(Notice::Imported)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<Notice> {
        let doc = transfer::import_file(path)?;
        self.replace(doc)?;
        tracing::info!(path = %path.display(), "imported document");
        Ok(Notice::Imported)
    }

    /// Clear storage and start over from defaults.
    ///
    /// Once the slot is cleared the reset has happened: an empty slot loads
    /// as defaults. The session switches to defaults even if saving the
    /// fresh document then fails, and that error is returned.
    pub fn reset_all(&mut self) -> Result<Notice> {
        self.store.clear()?;
        let fresh = default_state();
        let saved = self.store.save(&fresh);
        self.install(fresh);
        saved?;
        tracing::info!("dashboard reset");
        Ok(Notice::ResetComplete)
    }

    /// Save `doc`, then make it live.
    fn replace(&mut self, doc: Document) -> Result<()> {
        self.store.save(&doc)?;
        self.install(doc);
        Ok(())
    }

    fn install(&mut self, doc: Document) {
        self.timer = FocusTimer::new(doc.focus.preset_minutes);
        self.doc = doc;
        self.affirmation_index = 0;
    }
}

fn clean(s: &str) -> String {
    s.trim().to_string()
}

fn not_found(kind: &'static str, id: &str) -> ValidationError {
    ValidationError::NotFound {
        kind,
        id: id.to_string(),
    }
}

fn from_newest(len: usize, index: usize, collection: &'static str) -> Result<usize, ValidationError> {
    if index >= len {
        return Err(ValidationError::OutOfBounds {
            collection,
            index,
            len,
        });
    }
    Ok(len - 1 - index)
}

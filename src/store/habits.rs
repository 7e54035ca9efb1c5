/// The habit store: single source of truth for habit definitions and the
/// completion log
///
/// Owns persistence (write-through on every mutation) and the retention
/// policy for old log entries. Mutations on unknown ids are silent no-ops;
/// only persistence failures surface as errors.

use chrono::{Months, NaiveDate};

use crate::analytics;
use crate::domain::{default_habits, CompletionLog, Habit, HabitDraft, HabitId, HabitPatch};
use crate::storage::{DocumentStore, StorageError};
use crate::store::today;

/// Document key for the habit collection
pub const HABITS_KEY: &str = "habit-tracker-habits";
/// Document key for the completion log
pub const LOGS_KEY: &str = "habit-tracker-logs";

/// How many calendar months of log history are kept by default
pub const DEFAULT_RETENTION_MONTHS: u32 = 6;

pub struct HabitStore<S: DocumentStore> {
    storage: S,
    habits: Vec<Habit>,
    logs: CompletionLog,
}

impl<S: DocumentStore> HabitStore<S> {
    /// Load both collections from the document store and prune expired log
    /// entries
    ///
    /// A missing or unreadable habits document falls back to the built-in
    /// default set; an unreadable log falls back to an empty log. The
    /// fallback is written back on the next mutation, not immediately.
    pub fn open(storage: S, retention_months: u32) -> Result<Self, StorageError> {
        let habits = match storage.load(HABITS_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(habits) => habits,
                Err(err) => {
                    tracing::warn!("Stored habits unreadable, using defaults: {}", err);
                    default_habits()
                }
            },
            None => default_habits(),
        };

        let logs = match storage.load(LOGS_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(logs) => logs,
                Err(err) => {
                    tracing::warn!("Stored logs unreadable, starting empty: {}", err);
                    CompletionLog::new()
                }
            },
            None => CompletionLog::new(),
        };

        let mut store = Self {
            storage,
            habits,
            logs,
        };
        store.prune_old_logs(retention_months)?;

        Ok(store)
    }

    /// Snapshot of the habit collection, in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Snapshot of the completion log
    pub fn logs(&self) -> &CompletionLog {
        &self.logs
    }

    /// Find a habit by id
    pub fn find(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == id)
    }

    /// Create a habit from a draft and append it to the collection
    ///
    /// The store assigns the id and creation timestamp; name validation is
    /// the caller's concern, upstream of this operation.
    pub fn add(&mut self, draft: HabitDraft) -> Result<HabitId, StorageError> {
        let habit = Habit::create(draft);
        let id = habit.id.clone();

        tracing::debug!("Created habit: {} ({})", habit.name, id);
        self.habits.push(habit);
        self.save_habits()?;

        Ok(id)
    }

    /// Merge the patch into the habit with the given id
    ///
    /// Returns false (without touching storage) if no habit matches.
    pub fn update(&mut self, id: &HabitId, patch: HabitPatch) -> Result<bool, StorageError> {
        let Some(habit) = self.habits.iter_mut().find(|h| &h.id == id) else {
            return Ok(false);
        };

        habit.apply(patch);
        self.save_habits()?;
        Ok(true)
    }

    /// Remove the habit with the given id
    ///
    /// The completion log is left alone: entries for the deleted id stay
    /// behind as inert orphans. Returns false if no habit matches.
    pub fn delete(&mut self, id: &HabitId) -> Result<bool, StorageError> {
        let before = self.habits.len();
        self.habits.retain(|h| &h.id != id);
        if self.habits.len() == before {
            return Ok(false);
        }

        tracing::debug!("Deleted habit: {}", id);
        self.save_habits()?;
        Ok(true)
    }

    /// Flip the completion flag for (date, habit)
    ///
    /// Returns the new state of the flag, or None if the id matches no
    /// habit. Toggling twice restores the prior state and never touches any
    /// other flag.
    pub fn toggle(&mut self, id: &HabitId, date: NaiveDate) -> Result<Option<bool>, StorageError> {
        if self.find(id).is_none() {
            return Ok(None);
        }

        let completed = self.logs.toggle(id, date);
        self.save_logs()?;
        Ok(Some(completed))
    }

    /// Destructively clear the entire completion log
    ///
    /// Habit definitions are unaffected. Callers are expected to confirm
    /// with the user first; there is no undo.
    pub fn reset_all_progress(&mut self) -> Result<(), StorageError> {
        self.logs.clear();
        tracing::info!("All habit progress reset");
        self.save_logs()
    }

    /// Drop log days older than the retention window
    ///
    /// The cutoff is `today - retention_months` calendar months; a day
    /// exactly on the cutoff is retained. Runs once per session, from
    /// `open`.
    pub fn prune_old_logs(&mut self, retention_months: u32) -> Result<usize, StorageError> {
        let Some(cutoff) = today().checked_sub_months(Months::new(retention_months)) else {
            return Ok(0);
        };

        let removed = self.logs.prune_older_than(cutoff);
        if removed > 0 {
            tracing::info!("Pruned {} log days older than {}", removed, cutoff);
            self.save_logs()?;
        }

        Ok(removed)
    }

    /// Completion percentage for a habit over the trailing `range_days`
    /// days, counting back from today inclusive
    pub fn completion_percentage(&self, id: &HabitId, range_days: u32) -> u32 {
        analytics::completion_percentage(&self.logs, id, range_days, today())
    }

    fn save_habits(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.habits)?;
        self.storage.save(HABITS_KEY, &raw)
    }

    fn save_logs(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.logs)?;
        self.storage.save(LOGS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::domain::Category;
    use crate::storage::MemoryStore;

    fn draft(name: &str) -> HabitDraft {
        HabitDraft {
            name: name.to_string(),
            category: Category::General,
            goal: 1,
        }
    }

    fn open_empty() -> HabitStore<Rc<MemoryStore>> {
        HabitStore::open(Rc::new(MemoryStore::new()), DEFAULT_RETENTION_MONTHS).unwrap()
    }

    #[test]
    fn fresh_store_is_seeded_with_default_habits() {
        let store = open_empty();
        assert_eq!(store.habits().len(), 4);
        assert_eq!(store.habits()[0].name, "Morning Walk");
        assert!(store.logs().is_empty());
    }

    #[test]
    fn corrupt_habits_document_falls_back_to_defaults() {
        let storage = Rc::new(MemoryStore::new());
        storage.seed(HABITS_KEY, "definitely { not json");
        storage.seed(LOGS_KEY, "[1, 2, 3]"); // wrong shape

        let store = HabitStore::open(storage, DEFAULT_RETENTION_MONTHS).unwrap();
        assert_eq!(store.habits().len(), 4);
        assert!(store.logs().is_empty());
    }

    #[test]
    fn add_assigns_id_and_persists() {
        let storage = Rc::new(MemoryStore::new());
        let mut store =
            HabitStore::open(Rc::clone(&storage), DEFAULT_RETENTION_MONTHS).unwrap();

        let id = store.add(draft("Stretch")).unwrap();
        assert_eq!(store.habits().len(), 5);
        assert_eq!(store.find(&id).unwrap().name, "Stretch");

        // Reload from the same storage: the mutation was written through.
        let reloaded = HabitStore::open(storage, DEFAULT_RETENTION_MONTHS).unwrap();
        assert_eq!(reloaded.habits(), store.habits());
    }

    #[test]
    fn update_merges_fields_and_ignores_unknown_ids() {
        let mut store = open_empty();
        let id = store.habits()[0].id.clone();

        let changed = store
            .update(
                &id,
                HabitPatch {
                    name: Some("Long Walk".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(changed);
        assert_eq!(store.find(&id).unwrap().name, "Long Walk");

        let changed = store.update(&HabitId::new(), HabitPatch::default()).unwrap();
        assert!(!changed);
    }

    #[test]
    fn delete_leaves_log_entries_orphaned() {
        let mut store = open_empty();
        let id = store.habits()[0].id.clone();
        let day = today();

        store.toggle(&id, day).unwrap();
        assert!(store.delete(&id).unwrap());

        assert_eq!(store.habits().len(), 3);
        assert!(store.find(&id).is_none());
        // Orphaned flag persists, inert.
        assert!(store.logs().is_completed(&id, day));
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut store = open_empty();
        let id = store.habits()[0].id.clone();
        let day = today();

        assert_eq!(store.toggle(&id, day).unwrap(), Some(true));
        assert_eq!(store.toggle(&id, day).unwrap(), Some(false));
        assert!(!store.logs().is_completed(&id, day));
    }

    #[test]
    fn toggle_on_unknown_id_is_a_no_op() {
        let mut store = open_empty();
        assert_eq!(store.toggle(&HabitId::new(), today()).unwrap(), None);
        assert!(store.logs().is_empty());
    }

    #[test]
    fn reset_clears_logs_but_not_habits() {
        let storage = Rc::new(MemoryStore::new());
        let mut store =
            HabitStore::open(Rc::clone(&storage), DEFAULT_RETENTION_MONTHS).unwrap();
        let id = store.habits()[0].id.clone();
        store.toggle(&id, today()).unwrap();
        let habits_before = store.habits().to_vec();

        store.reset_all_progress().unwrap();

        assert!(store.logs().is_empty());
        assert_eq!(store.habits(), habits_before.as_slice());

        let reloaded = HabitStore::open(storage, DEFAULT_RETENTION_MONTHS).unwrap();
        assert!(reloaded.logs().is_empty());
    }

    #[test]
    fn prune_drops_days_past_the_retention_window() {
        let mut store = open_empty();
        let id = store.habits()[0].id.clone();
        let cutoff = today().checked_sub_months(Months::new(6)).unwrap();

        store.toggle(&id, cutoff.pred_opt().unwrap()).unwrap(); // one day too old
        store.toggle(&id, cutoff).unwrap(); // exactly on the boundary
        store.toggle(&id, today()).unwrap();

        let removed = store.prune_old_logs(6).unwrap();

        assert_eq!(removed, 1);
        assert!(!store.logs().has_day(cutoff.pred_opt().unwrap()));
        assert!(store.logs().has_day(cutoff));
        assert!(store.logs().has_day(today()));
    }

    #[test]
    fn completion_percentage_over_trailing_week() {
        let mut store = open_empty();
        let id = store.habits()[0].id.clone();

        assert_eq!(store.completion_percentage(&id, 7), 0);

        for i in 0..7 {
            store
                .toggle(&id, today() - chrono::Duration::days(i))
                .unwrap();
        }
        assert_eq!(store.completion_percentage(&id, 7), 100);
    }
}

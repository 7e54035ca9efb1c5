/// The completion log: which habits were done on which days
///
/// This module defines the sparse two-level map behind the calendar grid.
/// Absence of a day, or of a habit id within a day, means "not completed".

use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::HabitId;

/// Date-indexed record of habit completions
///
/// Serializes as `{ "YYYY-MM-DD": { "<habit-uuid>": bool } }`. Toggling a
/// flag off stores an explicit `false` rather than removing the entry, so a
/// day may exist with no true flags; that is fine and never compacted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionLog(BTreeMap<NaiveDate, BTreeMap<HabitId, bool>>);

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the completion flag for (date, habit), creating the day entry
    /// if needed. Returns the new state of the flag.
    pub fn toggle(&mut self, habit_id: &HabitId, date: NaiveDate) -> bool {
        let day = self.0.entry(date).or_default();
        let flag = day.entry(habit_id.clone()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Whether the habit was completed on the given day
    pub fn is_completed(&self, habit_id: &HabitId, date: NaiveDate) -> bool {
        self.0
            .get(&date)
            .and_then(|day| day.get(habit_id))
            .copied()
            .unwrap_or(false)
    }

    /// Number of true flags on the given day, across all habit ids
    /// (including ids of habits that have since been deleted)
    pub fn completed_count(&self, date: NaiveDate) -> usize {
        self.0
            .get(&date)
            .map(|day| day.values().filter(|done| **done).count())
            .unwrap_or(0)
    }

    /// Drop every day entry strictly before the cutoff date; the cutoff day
    /// itself is retained. Returns the number of days removed.
    pub fn prune_older_than(&mut self, cutoff: NaiveDate) -> usize {
        let before = self.0.len();
        self.0.retain(|date, _| *date >= cutoff);
        before - self.0.len()
    }

    /// Remove every entry, for every date and habit
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the given day has a record at all (even with no true flags)
    pub fn has_day(&self, date: NaiveDate) -> bool {
        self.0.contains_key(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn toggle_twice_is_a_net_no_op() {
        let mut log = CompletionLog::new();
        let habit = HabitId::new();
        let day = date("2025-03-10");

        assert!(log.toggle(&habit, day));
        assert!(log.is_completed(&habit, day));

        assert!(!log.toggle(&habit, day));
        assert!(!log.is_completed(&habit, day));
    }

    #[test]
    fn toggle_off_keeps_an_explicit_false_entry() {
        let mut log = CompletionLog::new();
        let habit = HabitId::new();
        let day = date("2025-03-10");

        log.toggle(&habit, day);
        log.toggle(&habit, day);

        // The day record survives as an artifact of the toggle-off.
        assert!(log.has_day(day));
        assert_eq!(log.completed_count(day), 0);
    }

    #[test]
    fn toggle_does_not_affect_other_flags() {
        let mut log = CompletionLog::new();
        let a = HabitId::new();
        let b = HabitId::new();
        let monday = date("2025-03-10");
        let tuesday = date("2025-03-11");

        log.toggle(&a, monday);
        log.toggle(&b, monday);
        log.toggle(&a, tuesday);

        log.toggle(&a, monday);

        assert!(!log.is_completed(&a, monday));
        assert!(log.is_completed(&b, monday));
        assert!(log.is_completed(&a, tuesday));
    }

    #[test]
    fn prune_keeps_the_boundary_day() {
        let mut log = CompletionLog::new();
        let habit = HabitId::new();
        let cutoff = date("2025-01-15");

        log.toggle(&habit, date("2025-01-14"));
        log.toggle(&habit, date("2025-01-15"));
        log.toggle(&habit, date("2025-01-16"));

        let removed = log.prune_older_than(cutoff);

        assert_eq!(removed, 1);
        assert!(!log.has_day(date("2025-01-14")));
        assert!(log.has_day(date("2025-01-15")));
        assert!(log.has_day(date("2025-01-16")));
    }

    #[test]
    fn clear_empties_every_day() {
        let mut log = CompletionLog::new();
        let habit = HabitId::new();
        log.toggle(&habit, date("2025-03-10"));
        log.toggle(&habit, date("2025-03-11"));

        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.completed_count(date("2025-03-10")), 0);
    }

    #[test]
    fn log_round_trips_through_json() {
        let mut log = CompletionLog::new();
        let a = HabitId::new();
        let b = HabitId::new();
        log.toggle(&a, date("2025-03-10"));
        log.toggle(&b, date("2025-03-10"));
        log.toggle(&b, date("2025-03-10")); // explicit false survives
        log.toggle(&a, date("2025-03-12"));

        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"2025-03-10\""));

        let back: CompletionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}

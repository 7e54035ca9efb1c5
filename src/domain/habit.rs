/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring task
/// the user wants to track, along with the draft/patch types used by the
/// habit store's add and update operations.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{Category, DomainError, HabitId};

/// A habit represents something the user wants to do regularly
///
/// The `streak` and `completed_total` counters are part of the persisted
/// schema but are never recomputed by mutations; live streak numbers come
/// from the analytics functions instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Walk", "Read 10 Pages")
    pub name: String,
    /// Category for organization
    pub category: Category,
    /// Target count, at least 1
    pub goal: u32,
    /// Persisted counter, not recomputed by any operation
    pub streak: u32,
    /// Persisted counter, not recomputed by any operation
    pub completed_total: u32,
    /// When this habit was created; set once, immutable afterwards
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a habit
///
/// The store fills in the id, the counters and the creation timestamp.
#[derive(Debug, Clone)]
pub struct HabitDraft {
    pub name: String,
    pub category: Category,
    pub goal: u32,
}

/// Partial update for a habit; `None` fields are left unchanged
///
/// The id and creation timestamp are deliberately not patchable.
#[derive(Debug, Clone, Default)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub goal: Option<u32>,
}

impl Habit {
    /// Create a habit from a draft, assigning a fresh id and timestamp
    pub fn create(draft: HabitDraft) -> Self {
        Self {
            id: HabitId::new(),
            name: draft.name,
            category: draft.category,
            goal: draft.goal,
            streak: 0,
            completed_total: 0,
            created_at: Utc::now(),
        }
    }

    /// Merge the given fields into this habit
    pub fn apply(&mut self, patch: HabitPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(goal) = patch.goal {
            self.goal = goal;
        }
    }

    /// Validate a habit name at the input boundary
    ///
    /// The store itself accepts any name; commands are expected to call this
    /// before building a draft or patch.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a goal value at the input boundary
    pub fn validate_goal(goal: u32) -> Result<(), DomainError> {
        if goal == 0 {
            return Err(DomainError::InvalidGoal(
                "Goal must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The built-in habit set used when no stored habits document exists
/// (or when the stored document cannot be read).
pub fn default_habits() -> Vec<Habit> {
    let seed = |name: &str, category: Category| Habit {
        id: HabitId::new(),
        name: name.to_string(),
        category,
        goal: 1,
        streak: 0,
        completed_total: 0,
        created_at: Utc::now(),
    };

    vec![
        seed("Morning Walk", Category::Health),
        seed("Read 10 Pages", Category::Mindset),
        seed("Deep Work (2h)", Category::Productivity),
        seed("No Sugar", Category::Health),
    ]
}

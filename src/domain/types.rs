/// Core identifier and category types used throughout the domain layer
///
/// This module defines the fundamental types like Category and the ID newtypes
/// that are used by Habit, TodoItem, and the completion log.

use std::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a habit ID where a todo ID is expected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful when parsing user input)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a todo item
///
/// Similar to HabitId but for entries in the independent todo list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(pub Uuid);

impl TodoId {
    /// Generate a new random todo ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a todo ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Categories for organizing habits into different life areas
///
/// The set is fixed; every habit belongs to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Exercise, diet, sleep
    Health,
    /// Reading, reflection, learning
    Mindset,
    /// Work and deep-focus habits
    Productivity,
    /// Abstinence and self-control habits
    Discipline,
    /// Everything else
    General,
}

impl Category {
    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Mindset => "Mindset",
            Category::Productivity => "Productivity",
            Category::Discipline => "Discipline",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_id_round_trips_through_string() {
        let id = HabitId::new();
        let parsed = HabitId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn category_serializes_as_plain_name() {
        let json = serde_json::to_string(&Category::Mindset).unwrap();
        assert_eq!(json, "\"Mindset\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Mindset);
    }
}

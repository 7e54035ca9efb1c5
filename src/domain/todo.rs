/// Todo item entity
///
/// Todos are ad-hoc one-off tasks, unrelated to habits. They live in their
/// own store with the same load-once / write-through persistence pattern.

use serde::{Deserialize, Serialize};
use chrono::Utc;
use crate::domain::TodoId;

/// A single entry in the quick-task list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier for this todo
    pub id: TodoId,
    /// Free text, already trimmed at creation
    pub text: String,
    /// Whether the task has been checked off
    pub completed: bool,
    /// Creation time in milliseconds since the epoch, used for ordering
    pub created_at: i64,
}

impl TodoItem {
    /// Create a new, not-yet-completed todo with the current timestamp
    pub fn create(text: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            text: text.into(),
            completed: false,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

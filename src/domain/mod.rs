/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, CompletionLog, TodoItem) and
/// the validation rules enforced at the input boundary.

pub mod habit;
pub mod log;
pub mod todo;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use log::*;
pub use todo::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

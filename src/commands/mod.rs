/// User-facing commands
///
/// Each submodule implements one command family. Commands receive the
/// stores they act on by explicit reference - there is no ambient global
/// state - validate input at this boundary, and print their results.

pub mod grid;
pub mod habit;
pub mod insights;
pub mod reset;
pub mod status;
pub mod timer;
pub mod todo;
pub mod toggle;

use crate::domain::{Category, DomainError, HabitId, TodoId};
use crate::storage::DocumentStore;
use crate::store::{HabitStore, TodoStore};

/// Parse a category name as typed on the command line
pub fn parse_category(input: &str) -> Result<Category, DomainError> {
    match input.trim().to_lowercase().as_str() {
        "health" => Ok(Category::Health),
        "mindset" => Ok(Category::Mindset),
        "productivity" => Ok(Category::Productivity),
        "discipline" => Ok(Category::Discipline),
        "general" => Ok(Category::General),
        other => Err(DomainError::InvalidCategory(format!(
            "'{}'. Valid options: health, mindset, productivity, discipline, general",
            other
        ))),
    }
}

/// Resolve a habit selector to an id
///
/// Accepts a full id, a unique id prefix, or a case-insensitive habit
/// name. Returns None when nothing (or more than one habit) matches.
pub fn resolve_habit<S: DocumentStore>(store: &HabitStore<S>, selector: &str) -> Option<HabitId> {
    if let Ok(id) = HabitId::from_string(selector) {
        return store.find(&id).map(|h| h.id.clone());
    }

    let lowered = selector.to_lowercase();
    let matches: Vec<&HabitId> = store
        .habits()
        .iter()
        .filter(|h| {
            h.id.to_string().starts_with(&lowered) || h.name.to_lowercase() == lowered
        })
        .map(|h| &h.id)
        .collect();

    match matches.as_slice() {
        [id] => Some((*id).clone()),
        _ => None,
    }
}

/// Resolve a todo selector (full id or unique id prefix) to an id
pub fn resolve_todo<S: DocumentStore>(store: &TodoStore<S>, selector: &str) -> Option<TodoId> {
    if let Ok(id) = TodoId::from_string(selector) {
        return store.todos().iter().find(|t| t.id == id).map(|t| t.id.clone());
    }

    let lowered = selector.to_lowercase();
    let matches: Vec<&TodoId> = store
        .todos()
        .iter()
        .filter(|t| t.id.to_string().starts_with(&lowered))
        .map(|t| &t.id)
        .collect();

    match matches.as_slice() {
        [id] => Some((*id).clone()),
        _ => None,
    }
}

/// First eight characters of an id, for compact listings
pub fn short_id(id: impl ToString) -> String {
    let full = id.to_string();
    full.chars().take(8).collect()
}

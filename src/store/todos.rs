/// The todo store: an independent list of ad-hoc tasks
///
/// Same persistence pattern as the habit store (load once, write through on
/// every mutation) but with no derived statistics and no relation to habits.

use crate::domain::{TodoId, TodoItem};
use crate::storage::{DocumentStore, StorageError};

/// Document key for the todo collection
pub const TODOS_KEY: &str = "habit-tracker-todos";

pub struct TodoStore<S: DocumentStore> {
    storage: S,
    todos: Vec<TodoItem>,
}

impl<S: DocumentStore> TodoStore<S> {
    /// Load the todo list from the document store
    ///
    /// A missing or unreadable document starts the list empty.
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let todos = match storage.load(TODOS_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(todos) => todos,
                Err(err) => {
                    tracing::warn!("Stored todos unreadable, starting empty: {}", err);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self { storage, todos })
    }

    /// Snapshot of the list, newest first
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Prepend a new todo
    ///
    /// Whitespace-only text is a silent no-op; otherwise the trimmed text is
    /// stored and the new item's id returned.
    pub fn add(&mut self, text: &str) -> Result<Option<TodoId>, StorageError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let todo = TodoItem::create(trimmed);
        let id = todo.id.clone();
        self.todos.insert(0, todo);
        self.save()?;

        Ok(Some(id))
    }

    /// Flip the completed flag of the matching item
    ///
    /// Returns false (without touching storage) if no item matches.
    pub fn toggle(&mut self, id: &TodoId) -> Result<bool, StorageError> {
        let Some(todo) = self.todos.iter_mut().find(|t| &t.id == id) else {
            return Ok(false);
        };

        todo.completed = !todo.completed;
        self.save()?;
        Ok(true)
    }

    /// Remove the matching item
    ///
    /// Returns false if no item matches.
    pub fn delete(&mut self, id: &TodoId) -> Result<bool, StorageError> {
        let before = self.todos.len();
        self.todos.retain(|t| &t.id != id);
        if self.todos.len() == before {
            return Ok(false);
        }

        self.save()?;
        Ok(true)
    }

    fn save(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.todos)?;
        self.storage.save(TODOS_KEY, &raw)
    }
}

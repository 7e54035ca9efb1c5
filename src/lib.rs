/// Public library interface for the habit tracker
///
/// This module wires the two stores to a shared SQLite document store and
/// exports the public types used by the binary and the tests.

use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

// Internal modules
mod analytics;
mod domain;
mod storage;
mod store;
mod timer;

pub mod commands;

// Re-export public modules and types
pub use analytics::{
    completion_percentage, completion_trend, current_streak, daily_summary, habit_performance,
    DailySummary, HabitPerformance, TrendPoint, TREND_WINDOW_DAYS,
};
pub use domain::*;
pub use storage::{DocumentStore, MemoryStore, SqliteStore, StorageError};
pub use store::habits::{DEFAULT_RETENTION_MONTHS, HABITS_KEY, LOGS_KEY};
pub use store::todos::TODOS_KEY;
pub use store::{today, HabitStore, TodoStore};
pub use timer::{FocusTimer, TimerMode};

/// Errors that can occur during application operation
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The assembled application: both stores over one database file
///
/// Opening the app loads all persisted documents and prunes expired log
/// entries; everything after that is synchronous command dispatch.
pub struct HabitTrackerApp {
    habits: HabitStore<Rc<SqliteStore>>,
    todos: TodoStore<Rc<SqliteStore>>,
}

impl HabitTrackerApp {
    /// Open the application state stored at the given database path
    pub fn open(db_path: PathBuf, retention_months: u32) -> Result<Self, AppError> {
        tracing::info!("Opening habit tracker database: {:?}", db_path);

        let storage = Rc::new(SqliteStore::new(db_path)?);
        let habits = HabitStore::open(Rc::clone(&storage), retention_months)?;
        let todos = TodoStore::open(storage)?;

        tracing::info!(
            "Loaded {} habits and {} todos",
            habits.habits().len(),
            todos.todos().len()
        );

        Ok(Self { habits, todos })
    }

    pub fn habits(&self) -> &HabitStore<Rc<SqliteStore>> {
        &self.habits
    }

    pub fn habits_mut(&mut self) -> &mut HabitStore<Rc<SqliteStore>> {
        &mut self.habits
    }

    pub fn todos(&self) -> &TodoStore<Rc<SqliteStore>> {
        &self.todos
    }

    pub fn todos_mut(&mut self) -> &mut TodoStore<Rc<SqliteStore>> {
        &mut self.todos
    }
}

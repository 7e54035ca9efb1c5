/// Stateful stores owning the application's collections
///
/// Each store loads its documents once at construction and writes the whole
/// document back after every mutation. No other component holds a writable
/// reference to the collections; consumers read snapshots and call the
/// mutation operations.

pub mod habits;
pub mod todos;

pub use habits::HabitStore;
pub use todos::TodoStore;

use chrono::{Local, NaiveDate};

/// The calendar day the user is currently living in
///
/// The grid, the statistics and log pruning all key off the local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

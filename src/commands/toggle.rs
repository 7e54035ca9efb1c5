/// Toggle a habit's completion flag for a day
///
/// The command-line analog of clicking a cell in the calendar grid.

use chrono::NaiveDate;

use crate::commands::resolve_habit;
use crate::storage::DocumentStore;
use crate::store::{today, HabitStore};
use crate::AppError;

pub fn run<S: DocumentStore>(
    store: &mut HabitStore<S>,
    selector: &str,
    date: Option<NaiveDate>,
) -> Result<(), AppError> {
    let Some(id) = resolve_habit(store, selector) else {
        println!("No habit matches '{}'", selector);
        return Ok(());
    };

    let date = date.unwrap_or_else(today);
    let name = store.find(&id).map(|h| h.name.clone()).unwrap_or_default();

    match store.toggle(&id, date)? {
        Some(true) => println!("Marked '{}' done on {}", name, date),
        Some(false) => println!("Unmarked '{}' on {}", name, date),
        None => println!("No habit matches '{}'", selector),
    }

    Ok(())
}

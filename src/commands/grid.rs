/// Week view of the completion grid
///
/// Prints one row per habit and one column per day of the selected week
/// (Monday-start). `offset` shifts the view by whole weeks; 0 is the
/// current week.

use chrono::{Datelike, Duration, NaiveDate};

use crate::commands::short_id;
use crate::storage::DocumentStore;
use crate::store::{today, HabitStore};
use crate::AppError;

pub fn run<S: DocumentStore>(store: &HabitStore<S>, offset: i64) -> Result<(), AppError> {
    let now = today();
    let monday = week_start(now) + Duration::weeks(offset);
    let days: Vec<NaiveDate> = (0..7).map(|i| monday + Duration::days(i)).collect();

    println!("Week of {}", monday.format("%b %-d, %Y"));
    print!("{:<10} {:<26}", "ID", "HABIT");
    for day in &days {
        let marker = if *day == now { "*" } else { " " };
        print!("  {}{}", day.format("%a %d"), marker);
    }
    println!();

    if store.habits().is_empty() {
        println!("No habits yet. Create one with 'habit add'.");
        return Ok(());
    }

    for habit in store.habits() {
        print!("{:<10} {:<26}", short_id(&habit.id), habit.name);
        for day in &days {
            let mark = if store.logs().is_completed(&habit.id, *day) {
                "x"
            } else {
                "."
            };
            print!("  {:^7}", mark);
        }
        println!();
    }

    Ok(())
}

/// The Monday on or before the given date
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_is_monday() {
        let friday: NaiveDate = "2025-03-14".parse().unwrap();
        let monday: NaiveDate = "2025-03-10".parse().unwrap();

        assert_eq!(week_start(friday), monday);
        assert_eq!(week_start(monday), monday);
    }
}

/// The dashboard headline numbers

use crate::analytics;
use crate::storage::DocumentStore;
use crate::store::{today, HabitStore};
use crate::AppError;

pub fn run<S: DocumentStore>(store: &HabitStore<S>) -> Result<(), AppError> {
    let now = today();
    let summary = analytics::daily_summary(store.habits(), store.logs(), now);

    println!("Status for {}", now.format("%A, %b %-d"));
    println!(
        "  Completed today:  {} / {}",
        summary.completed_today, summary.total_habits
    );
    println!("  Completion rate:  {}%", summary.completion_rate);
    println!(
        "  Best streak:      {} day{}",
        summary.best_streak,
        if summary.best_streak == 1 { "" } else { "s" }
    );

    Ok(())
}

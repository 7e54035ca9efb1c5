/// 30-day analytics: completion trend and per-habit consistency ranking

use crate::analytics;
use crate::storage::DocumentStore;
use crate::store::{today, HabitStore};
use crate::AppError;

pub fn run<S: DocumentStore>(store: &HabitStore<S>) -> Result<(), AppError> {
    let now = today();
    let trend = analytics::completion_trend(store.habits(), store.logs(), now);
    let performance = analytics::habit_performance(store.habits(), store.logs(), now);

    println!("30-day consistency");
    for point in &trend {
        let bar = "#".repeat((point.completion / 5) as usize);
        println!(
            "  {}  {:<20} {:>3}%",
            point.date.format("%b %d"),
            bar,
            point.completion
        );
    }

    println!();
    println!("Top habits (last 30 days)");
    if performance.is_empty() {
        println!("  No habits to rank yet.");
        return Ok(());
    }
    for (rank, entry) in performance.iter().enumerate() {
        println!(
            "  {}. {:<26} {:>3} completion{}",
            rank + 1,
            entry.name,
            entry.total,
            if entry.total == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Commands for managing habit definitions

use crate::commands::{parse_category, resolve_habit, short_id};
use crate::domain::{Habit, HabitDraft, HabitPatch};
use crate::storage::DocumentStore;
use crate::store::{today, HabitStore};
use crate::{analytics, AppError};

/// Create a new habit
pub fn add<S: DocumentStore>(
    store: &mut HabitStore<S>,
    name: &str,
    category: &str,
    goal: u32,
) -> Result<(), AppError> {
    Habit::validate_name(name)?;
    Habit::validate_goal(goal)?;
    let category = parse_category(category)?;

    let id = store.add(HabitDraft {
        name: name.trim().to_string(),
        category,
        goal,
    })?;

    println!("Created habit '{}' ({})", name.trim(), short_id(&id));
    Ok(())
}

/// Edit fields of an existing habit
pub fn edit<S: DocumentStore>(
    store: &mut HabitStore<S>,
    selector: &str,
    name: Option<&str>,
    category: Option<&str>,
    goal: Option<u32>,
) -> Result<(), AppError> {
    let Some(id) = resolve_habit(store, selector) else {
        println!("No habit matches '{}'", selector);
        return Ok(());
    };

    if let Some(name) = name {
        Habit::validate_name(name)?;
    }
    if let Some(goal) = goal {
        Habit::validate_goal(goal)?;
    }
    let category = category.map(parse_category).transpose()?;

    let patch = HabitPatch {
        name: name.map(|n| n.trim().to_string()),
        category,
        goal,
    };

    if patch.name.is_none() && patch.category.is_none() && patch.goal.is_none() {
        println!("Nothing to change.");
        return Ok(());
    }

    store.update(&id, patch)?;
    println!("Updated habit {}", short_id(&id));
    Ok(())
}

/// Delete a habit; its log entries stay behind, inert
pub fn remove<S: DocumentStore>(store: &mut HabitStore<S>, selector: &str) -> Result<(), AppError> {
    let Some(id) = resolve_habit(store, selector) else {
        println!("No habit matches '{}'", selector);
        return Ok(());
    };

    let name = store.find(&id).map(|h| h.name.clone()).unwrap_or_default();
    store.delete(&id)?;
    println!("Deleted habit '{}'", name);
    Ok(())
}

/// List all habits with their streak and recent completion rate
pub fn list<S: DocumentStore>(store: &HabitStore<S>) -> Result<(), AppError> {
    if store.habits().is_empty() {
        println!("No habits yet. Create one with 'habit add'.");
        return Ok(());
    }

    let now = today();
    println!(
        "{:<10} {:<26} {:<14} {:>6} {:>8} {:>8}",
        "ID", "NAME", "CATEGORY", "GOAL", "STREAK", "7-DAY"
    );
    for habit in store.habits() {
        let streak = analytics::current_streak(store.logs(), &habit.id, now);
        let week = store.completion_percentage(&habit.id, 7);
        println!(
            "{:<10} {:<26} {:<14} {:>6} {:>8} {:>7}%",
            short_id(&habit.id),
            habit.name,
            habit.category.display_name(),
            habit.goal,
            streak,
            week
        );
    }

    Ok(())
}

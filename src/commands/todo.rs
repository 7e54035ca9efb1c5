/// Commands for the quick-task list

use crate::commands::{resolve_todo, short_id};
use crate::storage::DocumentStore;
use crate::store::TodoStore;
use crate::AppError;

/// Add a task; whitespace-only text is quietly dropped
pub fn add<S: DocumentStore>(store: &mut TodoStore<S>, text: &str) -> Result<(), AppError> {
    match store.add(text)? {
        Some(id) => println!("Added task ({})", short_id(&id)),
        None => println!("Nothing to add."),
    }
    Ok(())
}

/// Check a task off (or back on)
pub fn toggle<S: DocumentStore>(store: &mut TodoStore<S>, selector: &str) -> Result<(), AppError> {
    let Some(id) = resolve_todo(store, selector) else {
        println!("No task matches '{}'", selector);
        return Ok(());
    };

    store.toggle(&id)?;
    let done = store
        .todos()
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.completed)
        .unwrap_or(false);
    println!(
        "Task {} {}",
        short_id(&id),
        if done { "completed" } else { "reopened" }
    );
    Ok(())
}

/// Delete a task
pub fn remove<S: DocumentStore>(store: &mut TodoStore<S>, selector: &str) -> Result<(), AppError> {
    let Some(id) = resolve_todo(store, selector) else {
        println!("No task matches '{}'", selector);
        return Ok(());
    };

    store.delete(&id)?;
    println!("Deleted task {}", short_id(&id));
    Ok(())
}

/// List tasks, newest first
pub fn list<S: DocumentStore>(store: &TodoStore<S>) -> Result<(), AppError> {
    if store.todos().is_empty() {
        println!("No tasks yet. Add one with 'todo add'.");
        return Ok(());
    }

    for todo in store.todos() {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{}] {:<10} {}", mark, short_id(&todo.id), todo.text);
    }

    Ok(())
}

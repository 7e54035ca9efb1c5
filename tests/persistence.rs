/// Integration tests exercising the full application over a real
/// SQLite database file: seeding, write-through persistence, fallback
/// behavior and the destructive reset.

use std::path::Path;

use habit_tracker::*;
use tempfile::tempdir;

fn open_app(path: &Path) -> HabitTrackerApp {
    HabitTrackerApp::open(path.to_path_buf(), DEFAULT_RETENTION_MONTHS)
        .expect("Failed to open application")
}

#[test]
fn fresh_database_is_seeded_with_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let app = open_app(&dir.path().join("habits.db"));

    let names: Vec<&str> = app
        .habits()
        .habits()
        .iter()
        .map(|h| h.name.as_str())
        .collect();

    assert_eq!(
        names,
        ["Morning Walk", "Read 10 Pages", "Deep Work (2h)", "No Sugar"]
    );
    assert!(app.habits().logs().is_empty());
    assert!(app.todos().todos().is_empty());
}

#[test]
fn state_survives_reopening() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("habits.db");

    let (habit_id, habits_before, day) = {
        let mut app = open_app(&db_path);
        let habit_id = app
            .habits_mut()
            .add(HabitDraft {
                name: "Cold Shower".to_string(),
                category: Category::Discipline,
                goal: 1,
            })
            .expect("Failed to add habit");

        let day = today();
        app.habits_mut()
            .toggle(&habit_id, day)
            .expect("Failed to toggle");
        app.todos_mut().add("Buy milk").expect("Failed to add todo");

        (habit_id, app.habits().habits().to_vec(), day)
    };

    // A second session sees exactly what the first one wrote.
    let app = open_app(&db_path);
    assert_eq!(app.habits().habits(), habits_before.as_slice());
    assert!(app.habits().logs().is_completed(&habit_id, day));
    assert_eq!(app.todos().todos().len(), 1);
    assert_eq!(app.todos().todos()[0].text, "Buy milk");
    assert!(!app.todos().todos()[0].completed);
}

#[test]
fn reset_clears_progress_but_keeps_habits() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("habits.db");

    {
        let mut app = open_app(&db_path);
        let id = app.habits().habits()[0].id.clone();
        app.habits_mut().toggle(&id, today()).expect("Failed to toggle");
        app.habits_mut()
            .reset_all_progress()
            .expect("Failed to reset");
    }

    let app = open_app(&db_path);
    assert!(app.habits().logs().is_empty());
    assert_eq!(app.habits().habits().len(), 4);
}

#[test]
fn corrupt_documents_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("habits.db");

    {
        let store = SqliteStore::new(db_path.clone()).expect("Failed to open store");
        store
            .save(HABITS_KEY, "definitely { not json")
            .expect("Failed to save");
        store.save(LOGS_KEY, "[\"wrong shape\"]").expect("Failed to save");
        store.save(TODOS_KEY, "{}").expect("Failed to save");
    }

    let app = open_app(&db_path);
    assert_eq!(app.habits().habits().len(), 4);
    assert!(app.habits().logs().is_empty());
    assert!(app.todos().todos().is_empty());
}

#[test]
fn deleted_habit_leaves_orphaned_log_entries() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("habits.db");
    let day = today();

    let habit_id = {
        let mut app = open_app(&db_path);
        let id = app.habits().habits()[0].id.clone();
        app.habits_mut().toggle(&id, day).expect("Failed to toggle");
        app.habits_mut().delete(&id).expect("Failed to delete");
        id
    };

    let app = open_app(&db_path);
    assert!(app.habits().find(&habit_id).is_none());
    // The orphaned flag is still counted by day-level statistics.
    assert!(app.habits().logs().is_completed(&habit_id, day));
    assert_eq!(app.habits().logs().completed_count(day), 1);
}

#[test]
fn stored_documents_round_trip_identically() {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("habits.db");

    let raw_before = {
        let mut app = open_app(&db_path);
        let id = app.habits().habits()[1].id.clone();
        app.habits_mut().toggle(&id, today()).expect("Failed to toggle");
        // Toggle a second habit off again so an explicit false is stored.
        let other = app.habits().habits()[2].id.clone();
        app.habits_mut().toggle(&other, today()).expect("Failed to toggle");
        app.habits_mut().toggle(&other, today()).expect("Failed to toggle");

        let store = SqliteStore::new(db_path.clone()).expect("Failed to open store");
        (
            store.load(HABITS_KEY).unwrap().unwrap(),
            store.load(LOGS_KEY).unwrap().unwrap(),
        )
    };

    // Loading and re-saving through a second session must not lose or
    // reorder anything, including the explicit false flag.
    let mut app = open_app(&db_path);
    let id = app.habits().habits()[0].id.clone();
    app.habits_mut().toggle(&id, today()).expect("Failed to toggle");
    app.habits_mut().toggle(&id, today()).expect("Failed to toggle");

    let store = SqliteStore::new(db_path).expect("Failed to open store");
    let habits_after = store.load(HABITS_KEY).unwrap().unwrap();
    let logs_after: CompletionLog =
        serde_json::from_str(&store.load(LOGS_KEY).unwrap().unwrap()).unwrap();
    let logs_before: CompletionLog = serde_json::from_str(&raw_before.1).unwrap();

    assert_eq!(habits_after, raw_before.0);
    assert!(!logs_before.is_completed(&id, today()));
    // The second session only added an explicit false for habit 0.
    assert_eq!(logs_after.completed_count(today()), logs_before.completed_count(today()));
}

/// Main entry point for the habit tracker CLI
///
/// Sets up logging, resolves the database location, opens the application
/// state and dispatches the requested command.

use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

use habit_tracker::{commands, HabitTrackerApp, TimerMode, DEFAULT_RETENTION_MONTHS};

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit-tracker");
            p
        }),
        // 2. User's home directory
        dirs::home_dir().map(|mut p| {
            p.push(".habit-tracker");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit-tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let mut db_path = potential_path.clone();
            db_path.push("habits.db");
            return Ok(db_path);
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit-tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// How many calendar months of log history to keep
    #[arg(long, default_value_t = DEFAULT_RETENTION_MONTHS)]
    retention_months: u32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage habit definitions
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },
    /// Toggle a habit's completion for a day (defaults to today)
    Toggle {
        /// Habit id, id prefix, or name
        habit: String,
        /// Day to toggle, as YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the weekly completion grid
    Grid {
        /// Week offset relative to the current week (e.g. -1 for last week)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// Show today's completion summary
    Status,
    /// Show the 30-day trend and habit ranking
    Insights,
    /// Manage the quick-task list
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },
    /// Erase the whole completion log (asks for confirmation)
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Run a focus timer (25 minutes work / 5 minutes break)
    Timer {
        /// Either "work" or "break"
        #[arg(long, default_value = "work")]
        mode: String,
    },
}

#[derive(Subcommand, Debug)]
enum HabitAction {
    /// Create a new habit
    Add {
        name: String,
        /// health, mindset, productivity, discipline or general
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long, default_value_t = 1)]
        goal: u32,
    },
    /// Change name, category or goal of a habit
    Edit {
        /// Habit id, id prefix, or name
        habit: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        goal: Option<u32>,
    },
    /// Delete a habit (its log entries are kept)
    Rm {
        /// Habit id, id prefix, or name
        habit: String,
    },
    /// List all habits
    List,
}

#[derive(Subcommand, Debug)]
enum TodoAction {
    /// Add a task
    Add { text: String },
    /// Check a task off (or back on)
    Toggle {
        /// Task id or id prefix
        todo: String,
    },
    /// Delete a task
    Rm {
        /// Task id or id prefix
        todo: String,
    },
    /// List all tasks
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep command output on stdout clean
        .init();

    // The timer needs no application state; handle it before opening the
    // database.
    if let Command::Timer { mode } = &args.command {
        let mode = match mode.trim().to_lowercase().as_str() {
            "work" => TimerMode::Work,
            "break" => TimerMode::Break,
            other => {
                return Err(format!("Invalid timer mode '{}'. Use work or break.", other).into())
            }
        };
        commands::timer::run(mode)?;
        return Ok(());
    }

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());
    let mut app = HabitTrackerApp::open(db_path, args.retention_months)?;

    match args.command {
        Command::Habit { action } => match action {
            HabitAction::Add {
                name,
                category,
                goal,
            } => commands::habit::add(app.habits_mut(), &name, &category, goal)?,
            HabitAction::Edit {
                habit,
                name,
                category,
                goal,
            } => commands::habit::edit(
                app.habits_mut(),
                &habit,
                name.as_deref(),
                category.as_deref(),
                goal,
            )?,
            HabitAction::Rm { habit } => commands::habit::remove(app.habits_mut(), &habit)?,
            HabitAction::List => commands::habit::list(app.habits())?,
        },
        Command::Toggle { habit, date } => commands::toggle::run(app.habits_mut(), &habit, date)?,
        Command::Grid { offset } => commands::grid::run(app.habits(), offset)?,
        Command::Status => commands::status::run(app.habits())?,
        Command::Insights => commands::insights::run(app.habits())?,
        Command::Todo { action } => match action {
            TodoAction::Add { text } => commands::todo::add(app.todos_mut(), &text)?,
            TodoAction::Toggle { todo } => commands::todo::toggle(app.todos_mut(), &todo)?,
            TodoAction::Rm { todo } => commands::todo::remove(app.todos_mut(), &todo)?,
            TodoAction::List => commands::todo::list(app.todos())?,
        },
        Command::Reset { yes } => commands::reset::run(app.habits_mut(), yes)?,
        Command::Timer { .. } => unreachable!("handled above"),
    }

    Ok(())
}

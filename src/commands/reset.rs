/// Full progress reset, gated behind an explicit confirmation

use std::io::{self, BufRead, Write};

use crate::storage::DocumentStore;
use crate::store::HabitStore;
use crate::AppError;

pub fn run<S: DocumentStore>(store: &mut HabitStore<S>, assume_yes: bool) -> Result<(), AppError> {
    if !assume_yes && !confirm("Reset ALL progress? This cannot be undone. [y/N] ")? {
        println!("Reset cancelled.");
        return Ok(());
    }

    store.reset_all_progress()?;
    println!("All progress has been reset. Habit definitions were kept.");
    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Focus timer command loop
///
/// Drives the countdown with a coarse one-second tick and rewrites the
/// remaining time in place. Runs until the countdown hits zero.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::timer::{FocusTimer, TimerMode};
use crate::AppError;

pub fn run(mode: TimerMode) -> Result<(), AppError> {
    let mut timer = FocusTimer::new(mode);
    timer.start();

    println!("{} timer started.", mode.label());
    while !timer.is_finished() {
        print!("\r  {}  {} ", mode.label(), timer.display());
        io::stdout().flush()?;

        thread::sleep(Duration::from_secs(1));
        timer.tick();
    }

    println!("\r  {}  00:00", mode.label());
    match mode {
        TimerMode::Work => println!("Time's up! Take a break."),
        TimerMode::Break => println!("Break's over. Back to it."),
    }

    Ok(())
}

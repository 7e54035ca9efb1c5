/// Focus timer countdown
///
/// A small state machine behind the `timer` command: 25 minutes of work or
/// 5 minutes of break, driven by a one-second tick from the command loop.
/// The timer keeps no persistent state.

use std::fmt;

/// What the current countdown is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Work,
    Break,
}

impl TimerMode {
    /// Full countdown length for this mode, in seconds
    pub fn duration_secs(self) -> u32 {
        match self {
            TimerMode::Work => 25 * 60,
            TimerMode::Break => 5 * 60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Work => "Focus",
            TimerMode::Break => "Break",
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Countdown state for one work or break session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
}

impl FocusTimer {
    /// Create a paused timer with the mode's full duration
    pub fn new(mode: TimerMode) -> Self {
        Self {
            mode,
            remaining_secs: mode.duration_secs(),
            running: false,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn start(&mut self) {
        if !self.is_finished() {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance the countdown by one second
    ///
    /// Does nothing unless the timer is running; stops it when the
    /// countdown reaches zero.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
        }
    }

    /// Stop and restore the current mode's full duration
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.mode.duration_secs();
    }

    /// Switch between work and break; stops and reloads the countdown
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.running = false;
        self.remaining_secs = mode.duration_secs();
    }

    /// Remaining time as `mm:ss`
    pub fn display(&self) -> String {
        let mins = self.remaining_secs / 60;
        let secs = self.remaining_secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}

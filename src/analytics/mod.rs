/// Derived statistics over store snapshots
///
/// Everything here is a pure function of `(habits, log, today)`: the
/// dashboard numbers, the 30-day trend, the per-habit consistency ranking
/// and the streak calculation. Nothing in this module mutates state.

use chrono::{Duration, NaiveDate};

use crate::domain::{CompletionLog, Habit, HabitId};

/// Window used by the trend and performance views
pub const TREND_WINDOW_DAYS: u32 = 30;

/// Upper bound on streak scans, to keep the walk finite
const MAX_STREAK_DAYS: u32 = 365;

/// One day of the completion trend
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Percentage of habits completed that day, 0-100
    pub completion: u32,
}

/// 30-day completion total for one habit
#[derive(Debug, Clone, PartialEq)]
pub struct HabitPerformance {
    pub habit_id: HabitId,
    pub name: String,
    pub total: u32,
}

/// The dashboard headline numbers
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub completed_today: usize,
    pub total_habits: usize,
    /// round(100 * completed / total); 0 when there are no habits
    pub completion_rate: u32,
    /// Best current streak across all habits
    pub best_streak: u32,
}

/// Percentage of the trailing `range_days` days (ending today, inclusive)
/// on which the habit was completed
///
/// `range_days` must be at least 1; callers guarantee this.
pub fn completion_percentage(
    log: &CompletionLog,
    habit_id: &HabitId,
    range_days: u32,
    today: NaiveDate,
) -> u32 {
    let completed = (0..range_days)
        .filter(|i| log.is_completed(habit_id, today - Duration::days(*i as i64)))
        .count();

    percentage(completed, range_days as usize)
}

/// Completed / total / rate for the given day, plus the best streak
pub fn daily_summary(habits: &[Habit], log: &CompletionLog, today: NaiveDate) -> DailySummary {
    let completed_today = log.completed_count(today);
    let total_habits = habits.len();

    let best_streak = habits
        .iter()
        .map(|h| current_streak(log, &h.id, today))
        .max()
        .unwrap_or(0);

    DailySummary {
        completed_today,
        total_habits,
        completion_rate: percentage(completed_today, total_habits),
        best_streak,
    }
}

/// Per-day completion percentage over the trailing 30 days, oldest first
///
/// Each point counts the true flags of that day against the current habit
/// count; with no habits every point is 0.
pub fn completion_trend(
    habits: &[Habit],
    log: &CompletionLog,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    (0..TREND_WINDOW_DAYS)
        .rev()
        .map(|i| {
            let date = today - Duration::days(i as i64);
            TrendPoint {
                date,
                completion: percentage(log.completed_count(date), habits.len()),
            }
        })
        .collect()
}

/// 30-day completion totals per habit, most consistent first
///
/// Ties keep the habit collection's insertion order (the sort is stable).
pub fn habit_performance(
    habits: &[Habit],
    log: &CompletionLog,
    today: NaiveDate,
) -> Vec<HabitPerformance> {
    let mut performance: Vec<HabitPerformance> = habits
        .iter()
        .map(|habit| {
            let total = (0..TREND_WINDOW_DAYS)
                .filter(|i| log.is_completed(&habit.id, today - Duration::days(*i as i64)))
                .count() as u32;

            HabitPerformance {
                habit_id: habit.id.clone(),
                name: habit.name.clone(),
                total,
            }
        })
        .collect();

    performance.sort_by(|a, b| b.total.cmp(&a.total));
    performance
}

/// Consecutive-day completion count for a habit
///
/// The run ends today, or yesterday when today has not been completed yet
/// (an unfinished today does not break the streak).
pub fn current_streak(log: &CompletionLog, habit_id: &HabitId, today: NaiveDate) -> u32 {
    let mut checking = if log.is_completed(habit_id, today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    for _ in 0..MAX_STREAK_DAYS {
        if !log.is_completed(habit_id, checking) {
            break;
        }
        streak += 1;
        checking = checking - Duration::days(1);
    }

    streak
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

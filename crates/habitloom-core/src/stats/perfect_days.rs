//! Perfect-day counting across habits.
//!
//! A perfect day is one on which the number of habits completed meets or
//! exceeds a percentage-derived threshold of all tracked habits. Counted
//! both over the combined history (oldest entry across habits through
//! today) and over the visible display window.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habit::Habit;

/// Perfect-day totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfectDayCount {
    /// Perfect days from the oldest entry across all habits through today.
    pub all_days: u32,
    /// Perfect days among the supplied display window.
    pub visible_days: u32,
}

/// Count perfect days for a set of habits.
///
/// The threshold is `floor(percentage / 100 × habit count)`; a threshold of
/// zero makes every examined day perfect, including visible days with no
/// completions at all. Habits with no entries contribute nothing; when no
/// habit has any entry the count is zero on both sides.
pub fn perfect_days(
    habits: &[Habit],
    percentage: f64,
    date_range: &[NaiveDate],
    today: NaiveDate,
) -> PerfectDayCount {
    if habits.is_empty() {
        return PerfectDayCount::default();
    }

    let threshold = ((percentage / 100.0) * habits.len() as f64).floor() as usize;

    let oldest = match habits.iter().filter_map(Habit::first_entry).min() {
        Some(day) => day,
        None => return PerfectDayCount::default(),
    };

    // Completion counts per day, over the whole history and over the
    // visible window separately. Window days outside the history still
    // participate (at zero) on the visible side.
    let mut all_counts: HashMap<NaiveDate, usize> = oldest
        .iter_days()
        .take_while(|d| *d <= today)
        .map(|d| (d, 0))
        .collect();
    let mut visible_counts: HashMap<NaiveDate, usize> =
        date_range.iter().map(|d| (*d, 0)).collect();

    for habit in habits {
        for entry in habit.sorted_entries() {
            if let Some(count) = all_counts.get_mut(&entry) {
                *count += 1;
            }
            if let Some(count) = visible_counts.get_mut(&entry) {
                *count += 1;
            }
        }
    }

    let all_days = all_counts.values().filter(|c| **c >= threshold).count() as u32;
    let visible_days = visible_counts.values().filter(|c| **c >= threshold).count() as u32;

    PerfectDayCount {
        all_days,
        visible_days,
    }
}

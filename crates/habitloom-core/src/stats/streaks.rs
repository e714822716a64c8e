//! Longest-streak reducers.
//!
//! Two variants share the bridged-gap rule but walk different sequences.
//! The in-range reducer steps through an explicit display window day by day,
//! so a forgiven day inside the window keeps the run alive without ticking
//! it; the all-time reducer only ever looks at entry-to-entry transitions.
//!
//! Streak values are `f64`: the freeze penalty is a real number, so a
//! bridged transition can deduct a fraction. Integer-only inputs always
//! produce integer-valued results.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::freeze::{compute_freeze_dates, count_frozen_days, is_gap_frozen};
use super::policy::FreezePolicy;

/// Longest streak within an explicit display window.
///
/// Walks `date_range` exactly in the order given (callers supply it
/// chronologically; nothing is sorted here). A window day that is neither
/// an entry nor frozen resets the run; the next entry then starts a fresh
/// streak of one, with no bridging check against anything before the reset.
/// Empty entries or an empty window return 0.
pub fn longest_streak_in_range(
    entries: &[NaiveDate],
    date_range: &[NaiveDate],
    policy: &FreezePolicy,
) -> f64 {
    if entries.is_empty() || date_range.is_empty() {
        return 0.0;
    }

    let entry_set: HashSet<NaiveDate> = entries.iter().copied().collect();
    let frozen = compute_freeze_dates(entries, policy);
    let penalty = policy.freeze_penalty.max(0.0);

    let mut max_streak: f64 = 0.0;
    let mut current: f64 = 0.0;
    let mut last_tick: Option<NaiveDate> = None;

    for &day in date_range {
        if entry_set.contains(&day) {
            current = match last_tick {
                None => 1.0,
                Some(prev) if is_gap_frozen(prev, day, &frozen) => {
                    let frozen_days = if penalty > 0.0 {
                        count_frozen_days(prev, day, &frozen)
                    } else {
                        0
                    };
                    (current + 1.0 - penalty * f64::from(frozen_days)).max(1.0)
                }
                Some(_) => 1.0,
            };
            max_streak = max_streak.max(current);
            last_tick = Some(day);
        } else if !frozen.contains(&day) {
            current = 0.0;
            last_tick = None;
        }
        // Frozen non-entry days leave the state untouched: the streak
        // survives silently and the last tick stays where it was.
    }

    max_streak
}

/// Longest streak over all entries, ignoring any display window.
///
/// Sorts a copy of the entries and folds over consecutive pairs only;
/// freeze days bridging a gap are credited through the gap check but never
/// independently examined. Empty entries return 0, a single entry 1.
pub fn longest_streak_ever(entries: &[NaiveDate], policy: &FreezePolicy) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let mut sorted = entries.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let frozen = compute_freeze_dates(entries, policy);
    let penalty = policy.freeze_penalty.max(0.0);

    let mut max_streak: f64 = 1.0;
    let mut current: f64 = 1.0;

    for pair in sorted.windows(2) {
        let (prev, day) = (pair[0], pair[1]);
        if is_gap_frozen(prev, day, &frozen) {
            let frozen_days = if penalty > 0.0 {
                count_frozen_days(prev, day, &frozen)
            } else {
                0
            };
            current = (current + 1.0 - penalty * f64::from(frozen_days)).max(1.0);
        } else {
            current = 1.0;
        }
        max_streak = max_streak.max(current);
    }

    max_streak
}

//! Integration tests for freeze-bridged streak reconstruction.

use chrono::NaiveDate;
use habitloom_core::{
    compute_freeze_dates, longest_streak_ever, longest_streak_in_range, FreezePolicy,
};

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn days(strs: &[&str]) -> Vec<NaiveDate> {
    strs.iter().map(|s| day(s)).collect()
}

fn window(from: &str, to: &str) -> Vec<NaiveDate> {
    let end = day(to);
    day(from).iter_days().take_while(|d| *d <= end).collect()
}

#[test]
fn test_strict_policy_counts_plain_runs() {
    let entries = days(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"]);
    let policy = FreezePolicy::new(0, 0, 0.0);

    assert!(compute_freeze_dates(&entries, &policy).is_empty());
    assert_eq!(longest_streak_ever(&entries, &policy), 3.0);
    assert_eq!(
        longest_streak_in_range(&entries, &window("2024-01-01", "2024-01-07"), &policy),
        3.0
    );
}

#[test]
fn test_single_missed_day_is_bridged() {
    // One missed day inside an otherwise daily habit.
    let entries = days(&["2024-01-01", "2024-01-02", "2024-01-04", "2024-01-05"]);
    let policy = FreezePolicy::new(1, 0, 0.0);

    let frozen = compute_freeze_dates(&entries, &policy);
    assert_eq!(frozen.into_iter().collect::<Vec<_>>(), days(&["2024-01-03"]));

    assert_eq!(longest_streak_ever(&entries, &policy), 4.0);
    assert_eq!(
        longest_streak_in_range(&entries, &window("2024-01-01", "2024-01-05"), &policy),
        4.0
    );
}

#[test]
fn test_weekly_quota_discards_the_whole_gap() {
    // A two-day gap cannot borrow one freeze: with quota 1 the second
    // candidate fails, and the first is rolled back with it.
    let entries = days(&["2024-01-01", "2024-01-04"]);
    let policy = FreezePolicy::new(3, 1, 0.0);

    assert!(compute_freeze_dates(&entries, &policy).is_empty());
    assert_eq!(longest_streak_ever(&entries, &policy), 1.0);
}

#[test]
fn test_earlier_gap_spends_the_quota_first() {
    // Both gaps are bridgeable alone; the earlier one claims the weekly
    // quota and the later one is discarded whole.
    let entries = days(&["2024-01-01", "2024-01-03", "2024-01-05"]);
    let policy = FreezePolicy::new(2, 1, 0.0);

    let frozen = compute_freeze_dates(&entries, &policy);
    assert_eq!(frozen.into_iter().collect::<Vec<_>>(), days(&["2024-01-02"]));

    // Run of 2 through the bridged gap, then a reset at the unbridged one.
    assert_eq!(longest_streak_ever(&entries, &policy), 2.0);
}

#[test]
fn test_quota_replenishes_after_a_week() {
    let entries = days(&["2024-01-01", "2024-01-03", "2024-01-10", "2024-01-12"]);
    let policy = FreezePolicy::new(2, 1, 0.0);

    // 01-02 and 01-11 are seven days apart, so each sits in its own
    // trailing window; the middle gap is far over the freeze cap.
    let frozen = compute_freeze_dates(&entries, &policy);
    assert_eq!(
        frozen.into_iter().collect::<Vec<_>>(),
        days(&["2024-01-02", "2024-01-11"])
    );
}

#[test]
fn test_ten_weekly_one_day_gaps_all_bridge_under_quota_of_one() {
    // A 71-day daily habit missing one day per week: every gap lands
    // exactly seven days after the previous one, so each candidate's
    // trailing window has just let the prior freeze out.
    let start = day("2024-01-01");
    let missed: Vec<NaiveDate> = (0..10)
        .map(|week| start + chrono::Duration::days(3 + 7 * week))
        .collect();
    let entries: Vec<NaiveDate> = start
        .iter_days()
        .take(71)
        .filter(|d| !missed.contains(d))
        .collect();
    let policy = FreezePolicy::new(1, 1, 0.0);

    let frozen = compute_freeze_dates(&entries, &policy);
    assert_eq!(frozen.iter().copied().collect::<Vec<_>>(), missed);

    // No trailing 7-day window ever holds more than one freeze.
    for &d in &frozen {
        let in_window = frozen
            .iter()
            .filter(|f| **f > d - chrono::Duration::days(7) && **f <= d)
            .count();
        assert_eq!(in_window, 1);
    }

    // Every gap bridged: the whole span reads as one run.
    assert_eq!(longest_streak_ever(&entries, &policy), 61.0);
}

#[test]
fn test_penalty_deducts_per_frozen_day() {
    let entries = days(&["2024-01-01", "2024-01-02", "2024-01-04"]);
    let policy = FreezePolicy::new(1, 0, 0.5);

    // Run reaches 2 on 01-02, then the bridged transition adds 1 and
    // deducts half for the single frozen day.
    assert_eq!(longest_streak_ever(&entries, &policy), 2.5);
    assert_eq!(
        longest_streak_in_range(&entries, &window("2024-01-01", "2024-01-04"), &policy),
        2.5
    );
}

#[test]
fn test_penalty_never_drops_a_bridged_run_below_one() {
    let entries = days(&["2024-01-01", "2024-01-03"]);
    let policy = FreezePolicy::new(1, 0, 5.0);

    assert_eq!(longest_streak_ever(&entries, &policy), 1.0);
}

#[test]
fn test_window_limits_what_the_range_reducer_sees() {
    // Ten daily entries, but the display window only covers the last four.
    let entries = window("2024-01-01", "2024-01-10");
    let policy = FreezePolicy::new(0, 0, 0.0);

    assert_eq!(longest_streak_ever(&entries, &policy), 10.0);
    assert_eq!(
        longest_streak_in_range(&entries, &window("2024-01-07", "2024-01-10"), &policy),
        4.0
    );
}

#[test]
fn test_run_entering_the_window_through_a_frozen_edge() {
    // The window opens on a frozen day. The day keeps state untouched, so
    // the first in-window entry starts at one with no phantom bridge.
    let entries = days(&["2024-01-01", "2024-01-03", "2024-01-04"]);
    let policy = FreezePolicy::new(1, 0, 0.0);

    assert_eq!(
        longest_streak_in_range(&entries, &window("2024-01-02", "2024-01-04"), &policy),
        2.0
    );
}

#[test]
fn test_fractional_penalty_accumulates_across_gaps() {
    let entries = days(&["2024-01-01", "2024-01-03", "2024-01-05"]);
    let policy = FreezePolicy::new(1, 0, 0.5);

    // 1, then 1 + 1 - 0.5 = 1.5, then 1.5 + 1 - 0.5 = 2.0.
    assert_eq!(longest_streak_ever(&entries, &policy), 2.0);
}

#[test]
fn test_unsorted_duplicate_entries_are_normalized() {
    let entries = days(&["2024-01-04", "2024-01-01", "2024-01-02", "2024-01-02"]);
    let policy = FreezePolicy::new(1, 0, 0.0);

    assert_eq!(longest_streak_ever(&entries, &policy), 3.0);
    assert_eq!(
        longest_streak_in_range(&entries, &window("2024-01-01", "2024-01-04"), &policy),
        3.0
    );
}

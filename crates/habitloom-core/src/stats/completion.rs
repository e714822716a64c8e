//! Completion-rate reporting.
//!
//! Counts completed days against elapsed calendar days, both over the
//! habit's whole history ("ever": oldest entry through today) and over an
//! explicit display window. Pure counting over the entry set; the freeze
//! engine plays no part here.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completion counts for one window of days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionWindow {
    /// Completed days inside the window.
    pub entry_count: usize,
    /// Calendar days spanned by the window (floored at 1 once entries exist).
    pub total_days: i64,
    /// `entry_count / total_days`, as a percentage.
    pub percentage: f64,
}

impl CompletionWindow {
    fn new(entry_count: usize, total_days: i64) -> Self {
        let percentage = if total_days > 0 {
            (entry_count as f64 / total_days as f64) * 100.0
        } else {
            0.0
        };
        Self {
            entry_count,
            total_days,
            percentage,
        }
    }

    /// "12/30"-style completed-over-total label.
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.entry_count, self.total_days)
    }

    /// Percentage label with one decimal ("40.0%"); bare "0%" for an
    /// empty window.
    pub fn percentage_label(&self) -> String {
        if self.total_days == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", self.percentage)
        }
    }
}

/// Completion rates over the full history and the displayed window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// Oldest entry through today, inclusive.
    pub ever: CompletionWindow,
    /// The supplied display window (zeroed when none was given).
    pub displayed: CompletionWindow,
}

/// Compute completion rates for a habit's entries.
///
/// The "ever" window runs from the oldest entry through `today`, inclusive,
/// never shorter than one day. The "displayed" window spans the supplied
/// range, except that when the oldest entry falls inside it the span runs
/// from that entry through `today` instead; its entry count only considers
/// days that are members of the range. Duplicate entries count once. Empty
/// entries yield an all-zero report; an empty range zeroes only the
/// displayed half.
pub fn completion_stats(
    entries: &[NaiveDate],
    date_range: &[NaiveDate],
    today: NaiveDate,
) -> CompletionReport {
    if entries.is_empty() {
        return CompletionReport::default();
    }

    let mut sorted = entries.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let oldest = sorted[0];
    let total_days_ever = ((today - oldest).num_days() + 1).max(1);
    let ever = CompletionWindow::new(sorted.len(), total_days_ever);

    let displayed = if date_range.is_empty() {
        CompletionWindow::default()
    } else {
        let window_start = date_range.iter().min().copied().unwrap_or(oldest);
        let window_end = date_range.iter().max().copied().unwrap_or(today);

        // When the whole history starts inside the window, measure from the
        // first entry through today rather than the window bounds.
        let (start, end) = if oldest > window_start {
            (oldest, today)
        } else {
            (window_start, window_end)
        };
        let total_days = ((end - start).num_days() + 1).max(1);

        let range_set: HashSet<NaiveDate> = date_range.iter().copied().collect();
        let entry_count = sorted.iter().filter(|d| range_set.contains(d)).count();
        CompletionWindow::new(entry_count, total_days)
    };

    CompletionReport { ever, displayed }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_empty_entries_zero_report() {
        let report = completion_stats(&[], &window("2024-01-01", "2024-01-07"), day("2024-01-10"));
        assert_eq!(report, CompletionReport::default());
        assert_eq!(report.ever.fraction(), "0/0");
        assert_eq!(report.ever.percentage_label(), "0%");
    }

    #[test]
    fn test_ever_spans_oldest_entry_through_today() {
        let entries = days(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let report = completion_stats(&entries, &[], day("2024-01-10"));
        assert_eq!(report.ever.entry_count, 3);
        assert_eq!(report.ever.total_days, 10);
        assert_eq!(report.ever.fraction(), "3/10");
        assert_eq!(report.ever.percentage_label(), "30.0%");
        assert_eq!(report.displayed, CompletionWindow::default());
    }

    #[test]
    fn test_single_entry_today_is_full_rate() {
        let entries = days(&["2024-01-10"]);
        let report = completion_stats(&entries, &[], day("2024-01-10"));
        assert_eq!(report.ever.total_days, 1);
        assert_eq!(report.ever.percentage, 100.0);
    }

    #[test]
    fn test_duplicate_entries_count_once() {
        let entries = days(&["2024-01-01", "2024-01-01"]);
        let report = completion_stats(&entries, &[], day("2024-01-02"));
        assert_eq!(report.ever.entry_count, 1);
        assert_eq!(report.ever.total_days, 2);
    }

    #[test]
    fn test_displayed_window_bounds() {
        // History starts before the window: the displayed span is the
        // window itself and only in-window entries count.
        let entries = days(&["2024-01-01", "2024-01-05"]);
        let report = completion_stats(
            &entries,
            &window("2024-01-03", "2024-01-07"),
            day("2024-01-10"),
        );
        assert_eq!(report.displayed.entry_count, 1);
        assert_eq!(report.displayed.total_days, 5);
        assert_eq!(report.displayed.percentage_label(), "20.0%");
    }

    #[test]
    fn test_displayed_window_shrinks_to_history_inside_it() {
        // The oldest entry lies inside the window, so the span runs from
        // that entry through today.
        let entries = days(&["2024-01-05"]);
        let report = completion_stats(
            &entries,
            &window("2024-01-01", "2024-01-07"),
            day("2024-01-10"),
        );
        assert_eq!(report.displayed.entry_count, 1);
        assert_eq!(report.displayed.total_days, 6);
        assert_eq!(report.displayed.percentage_label(), "16.7%");
    }
}

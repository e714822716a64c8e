//! Freeze allocation and gap evaluation.
//!
//! A "freeze" forgives a missed day between two completions so a streak can
//! survive the gap. Allocation is greedy and chronological-forward: gaps are
//! considered in calendar order, each as an all-or-nothing unit, and earlier
//! commitments constrain later gaps through the weekly quota but never the
//! other way around. Swapping this for a globally optimal allocator would
//! change observable streak results, so the forward order is load-bearing.

use std::collections::{BTreeSet, VecDeque};

use chrono::{Duration, NaiveDate};

use super::policy::FreezePolicy;

/// Sliding window of committed freeze days, used only for weekly-quota
/// accounting. Days arrive in chronological order; eviction drops everything
/// older than the trailing 7-day window ending at the current candidate.
#[derive(Debug, Default)]
struct QuotaWindow {
    committed: VecDeque<NaiveDate>,
}

impl QuotaWindow {
    /// Evict committed days that fell out of the trailing window.
    fn evict_before(&mut self, window_start: NaiveDate) {
        while let Some(&front) = self.committed.front() {
            if front >= window_start {
                break;
            }
            self.committed.pop_front();
        }
    }

    /// Committed days inside `[window_start, candidate]`.
    fn count_within(&self, window_start: NaiveDate, candidate: NaiveDate) -> usize {
        self.committed
            .iter()
            .filter(|d| **d >= window_start && **d <= candidate)
            .count()
    }

    fn commit(&mut self, day: NaiveDate) {
        self.committed.push_back(day);
    }
}

/// Compute the set of forgiven days for a habit's completion entries.
///
/// Every returned day lies strictly between two consecutive entries, in a
/// gap no longer than `policy.freeze_days`. Gaps bridge as a whole: if any
/// day of a gap would break the weekly quota, the entire gap is discarded.
/// The quota window is evaluated relative to each candidate day, not
/// "today", so historical weeks are judged where the freeze would land.
///
/// Fewer than two entries, or a policy with `freeze_days == 0`, yields an
/// empty set. The input is not mutated; a sorted, deduplicated copy is used.
pub fn compute_freeze_dates(entries: &[NaiveDate], policy: &FreezePolicy) -> BTreeSet<NaiveDate> {
    let mut frozen = BTreeSet::new();
    if entries.len() < 2 || !policy.allows_freezes() {
        return frozen;
    }

    let mut sorted = entries.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let max_weekly = policy.max_freezes_per_week as usize;
    let mut window = QuotaWindow::default();

    for pair in sorted.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let gap = (next - prev).num_days() - 1;
        if gap <= 0 || gap > i64::from(policy.freeze_days) {
            continue;
        }

        // Try the whole gap as a unit; a quota failure on any candidate
        // discards every tentative day of the gap.
        let mut tentative: Vec<NaiveDate> = Vec::with_capacity(gap as usize);
        let mut can_bridge = true;

        for offset in 1..=gap {
            let candidate = prev + Duration::days(offset);

            if max_weekly > 0 {
                let window_start = candidate - Duration::days(6);
                window.evict_before(window_start);
                let committed = window.count_within(window_start, candidate);
                let pending = tentative.iter().filter(|d| **d >= window_start).count();
                if committed + pending >= max_weekly {
                    can_bridge = false;
                    break;
                }
            }

            tentative.push(candidate);
        }

        if can_bridge {
            for day in tentative {
                window.commit(day);
                frozen.insert(day);
            }
        }
    }

    frozen
}

/// Whether the gap between two completion days is fully bridged.
///
/// Days exactly one apart are naturally consecutive (true without any
/// freeze); the same day or a reversed pair is never frozen. Longer gaps
/// are bridged only when every strictly-intermediate day is in `frozen`.
pub fn is_gap_frozen(start: NaiveDate, end: NaiveDate, frozen: &BTreeSet<NaiveDate>) -> bool {
    let diff = (end - start).num_days();
    if diff <= 1 {
        return diff == 1;
    }
    (1..diff).all(|offset| frozen.contains(&(start + Duration::days(offset))))
}

/// Number of frozen days strictly between two completion days.
///
/// Used for penalty scaling only, never for the bridging decision; on a gap
/// already known to be fully bridged it equals the gap length.
pub fn count_frozen_days(start: NaiveDate, end: NaiveDate, frozen: &BTreeSet<NaiveDate>) -> u32 {
    let diff = (end - start).num_days();
    if diff <= 1 {
        return 0;
    }
    (1..diff)
        .filter(|offset| frozen.contains(&(start + Duration::days(*offset))))
        .count() as u32
}

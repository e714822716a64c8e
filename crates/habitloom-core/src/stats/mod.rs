//! Statistics module for Habitloom
//!
//! This module provides consistency analytics for habit completion
//! histories, including freeze-bridged streak reconstruction, completion
//! ratios over display windows, and perfect-day counting across habits.

mod completion;
mod freeze;
mod perfect_days;
mod policy;
mod streaks;

pub use completion::{completion_stats, CompletionReport, CompletionWindow};

pub use freeze::{compute_freeze_dates, count_frozen_days, is_gap_frozen};

pub use perfect_days::{perfect_days, PerfectDayCount};

pub use policy::{
    resolve_freeze_days, resolve_freeze_penalty, resolve_max_freezes_per_week, FreezePolicy,
};

pub use streaks::{longest_streak_ever, longest_streak_in_range};

//! # Habitloom Core Library
//!
//! This library provides the core logic for the Habitloom habit tracker.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary over a plain JSON habit store.
//!
//! ## Architecture
//!
//! - **Stats Engine**: Pure functions that reconstruct streaks from sparse
//!   completion-day sets, bridging short gaps with a bounded freeze
//!   allowance
//! - **Storage**: JSON-based habit storage and TOML-based configuration
//! - **Calendar**: Canonical `YYYY-MM-DD` day handling and display
//!   formatting
//!
//! ## Key Components
//!
//! - [`Habit`]: A named set of completion days
//! - [`FreezePolicy`]: Sanitized streak leniency parameters
//! - [`HabitStore`]: Habit persistence
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod error;
pub mod habit;
pub mod stats;
pub mod storage;
pub mod text;

pub use error::{ConfigError, CoreError, StoreError};
pub use habit::Habit;
pub use stats::{
    completion_stats, compute_freeze_dates, longest_streak_ever, longest_streak_in_range,
    perfect_days, CompletionReport, FreezePolicy, PerfectDayCount,
};
pub use storage::{Config, HabitStore};

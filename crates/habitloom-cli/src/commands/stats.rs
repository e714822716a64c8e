//! Consistency statistics commands for CLI.

use chrono::{Duration, Local, NaiveDate};
use clap::{Args, Subcommand};
use serde::Serialize;

use habitloom_core::calendar;
use habitloom_core::stats::{
    completion_stats, compute_freeze_dates, longest_streak_ever, longest_streak_in_range,
    perfect_days, resolve_freeze_days, resolve_freeze_penalty, resolve_max_freezes_per_week,
    FreezePolicy,
};
use habitloom_core::text::pluralize;
use habitloom_core::{Config, HabitStore};

/// Days shown when no explicit window is given (three weeks).
const DEFAULT_WINDOW_DAYS: i64 = 21;

/// Leniency overrides shared by the streak-aware commands. Raw values go
/// through the same sanitizers as the configuration file.
#[derive(Args)]
pub struct LeniencyArgs {
    /// Override the configured freeze window, in days
    #[arg(long)]
    freeze_days: Option<f64>,
    /// Override the configured weekly freeze quota
    #[arg(long)]
    max_freezes_per_week: Option<f64>,
    /// Override the configured freeze penalty
    #[arg(long)]
    freeze_penalty: Option<f64>,
}

impl LeniencyArgs {
    /// Overrides layered over the configured policy; absent or invalid
    /// flags fall back to the config value.
    fn into_policy(self, config: &Config) -> FreezePolicy {
        let base = config.freeze_policy();
        FreezePolicy::new(
            resolve_freeze_days(self.freeze_days, base.freeze_days),
            resolve_max_freezes_per_week(self.max_freezes_per_week, base.max_freezes_per_week),
            resolve_freeze_penalty(self.freeze_penalty, base.freeze_penalty),
        )
    }
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Longest streak for a habit
    Streak {
        /// Habit name
        name: String,
        /// Window start (YYYY-MM-DD); computes the windowed streak when given
        #[arg(long)]
        from: Option<String>,
        /// Window end (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<String>,
        #[command(flatten)]
        leniency: LeniencyArgs,
    },
    /// Days forgiven by freezes for a habit
    Freezes {
        /// Habit name
        name: String,
        #[command(flatten)]
        leniency: LeniencyArgs,
    },
    /// Completion rate for a habit
    Completion {
        /// Habit name
        name: String,
        /// Window start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Window end (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<String>,
    },
    /// Perfect days across all habits
    PerfectDays {
        /// Window start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Window end (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<String>,
        /// Override the configured threshold percentage
        #[arg(long)]
        percentage: Option<f64>,
    },
    /// Full consistency summary for a habit
    Summary {
        /// Habit name
        name: String,
        /// Window start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Window end (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<String>,
        #[command(flatten)]
        leniency: LeniencyArgs,
    },
}

/// Streak figures for one habit, over all history or a window.
#[derive(Serialize)]
struct StreakReport {
    habit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    window_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    window_end: Option<NaiveDate>,
    longest: f64,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = HabitStore::open()?;
    let config = Config::load()?;
    let today = Local::now().date_naive();

    match action {
        StatsAction::Streak {
            name,
            from,
            to,
            leniency,
        } => {
            let habit = store.get(&name)?;
            let policy = leniency.into_policy(&config);
            let report = if from.is_none() && to.is_none() {
                StreakReport {
                    habit: habit.name.clone(),
                    window_start: None,
                    window_end: None,
                    longest: longest_streak_ever(&habit.entries, &policy),
                }
            } else {
                let window = resolve_window(from.as_deref(), to.as_deref(), today)?;
                StreakReport {
                    habit: habit.name.clone(),
                    window_start: window.first().copied(),
                    window_end: window.last().copied(),
                    longest: longest_streak_in_range(&habit.entries, &window, &policy),
                }
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Freezes { name, leniency } => {
            let habit = store.get(&name)?;
            let policy = leniency.into_policy(&config);
            let frozen = compute_freeze_dates(&habit.entries, &policy);
            println!("{}", serde_json::to_string_pretty(&frozen)?);
        }
        StatsAction::Completion { name, from, to } => {
            let habit = store.get(&name)?;
            let window = resolve_window(from.as_deref(), to.as_deref(), today)?;
            let report = completion_stats(&habit.entries, &window, today);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::PerfectDays {
            from,
            to,
            percentage,
        } => {
            let window = resolve_window(from.as_deref(), to.as_deref(), today)?;
            let threshold = percentage.unwrap_or(config.perfect_days.percentage);
            let count = perfect_days(&store.habits, threshold, &window, today);
            println!("{}", serde_json::to_string_pretty(&count)?);
        }
        StatsAction::Summary {
            name,
            from,
            to,
            leniency,
        } => {
            let habit = store.get(&name)?;
            let policy = leniency.into_policy(&config);
            let window = resolve_window(from.as_deref(), to.as_deref(), today)?;

            let ever = longest_streak_ever(&habit.entries, &policy);
            let in_window = longest_streak_in_range(&habit.entries, &window, &policy);
            let frozen = compute_freeze_dates(&habit.entries, &policy);
            let completion = completion_stats(&habit.entries, &window, today);

            println!("Habit: {}", habit.name);
            match habit.first_entry() {
                Some(first) => println!(
                    "First entry: {} ({})",
                    calendar::pretty_day(first, today),
                    calendar::day_of_week(first)
                ),
                None => println!("First entry: none"),
            }
            println!(
                "Longest streak ever: {} {}",
                trim_number(ever),
                pluralize(ever, "day", None)
            );
            println!(
                "Longest streak in window: {} {}",
                trim_number(in_window),
                pluralize(in_window, "day", None)
            );
            println!(
                "Forgiven days: {} {}",
                frozen.len(),
                pluralize(frozen.len() as f64, "day", None)
            );
            println!(
                "Completion ever: {} ({})",
                completion.ever.fraction(),
                completion.ever.percentage_label()
            );
            println!(
                "Completion in window: {} ({})",
                completion.displayed.fraction(),
                completion.displayed.percentage_label()
            );
        }
    }
    Ok(())
}

/// Inclusive day window for the display-range commands. The end defaults
/// to today and the start to a three-week window ending there.
fn resolve_window(
    from: Option<&str>,
    to: Option<&str>,
    today: NaiveDate,
) -> Result<Vec<NaiveDate>, Box<dyn std::error::Error>> {
    let end = match to {
        Some(s) => calendar::parse_day(s)?,
        None => today,
    };
    let start = match from {
        Some(s) => calendar::parse_day(s)?,
        None => end - Duration::days(DEFAULT_WINDOW_DAYS - 1),
    };
    if start > end {
        return Err(format!("window start {start} is after its end {end}").into());
    }
    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

/// Streak values read naturally: integers bare, fractions as-is.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

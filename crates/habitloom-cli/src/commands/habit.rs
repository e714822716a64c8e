//! Habit management commands for CLI.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use habitloom_core::calendar;
use habitloom_core::HabitStore;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
    },
    /// Remove a habit and all its entries
    Remove {
        /// Habit name
        name: String,
    },
    /// List habits
    List,
    /// Show a habit with its completion days
    Show {
        /// Habit name
        name: String,
    },
    /// Mark a habit done on a day
    Tick {
        /// Habit name
        name: String,
        /// Day to mark (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove a completion mark
    Untick {
        /// Habit name
        name: String,
        /// Day to unmark (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = HabitStore::open()?;

    match action {
        HabitAction::Add { name } => {
            store.add(&name)?;
            store.save()?;
            println!("Habit added: {name}");
        }
        HabitAction::Remove { name } => {
            store.remove(&name)?;
            store.save()?;
            println!("Habit removed: {name}");
        }
        HabitAction::List => {
            println!("{}", serde_json::to_string_pretty(&store.habits)?);
        }
        HabitAction::Show { name } => {
            let habit = store.get(&name)?;
            println!("{}", serde_json::to_string_pretty(habit)?);
        }
        HabitAction::Tick { name, date } => {
            let day = parse_day_or_today(date.as_deref())?;
            let habit = store.get_mut(&name)?;
            if habit.tick(day) {
                store.save()?;
                println!("Ticked {name}: {}", calendar::day_string(day));
            } else {
                println!("Already ticked {name}: {}", calendar::day_string(day));
            }
        }
        HabitAction::Untick { name, date } => {
            let day = parse_day_or_today(date.as_deref())?;
            let habit = store.get_mut(&name)?;
            if habit.untick(day) {
                store.save()?;
                println!("Unticked {name}: {}", calendar::day_string(day));
            } else {
                println!("No entry for {name}: {}", calendar::day_string(day));
            }
        }
    }
    Ok(())
}

fn parse_day_or_today(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => Ok(calendar::parse_day(s)?),
        None => Ok(Local::now().date_naive()),
    }
}

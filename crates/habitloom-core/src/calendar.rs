//! Calendar-day parsing and formatting.
//!
//! Habit entries are whole calendar days with no time-of-day component,
//! represented as [`chrono::NaiveDate`]. The canonical text form is ISO
//! `YYYY-MM-DD`, whose lexicographic order equals chronological order;
//! everything heterogeneous (timestamps, locale strings) must be normalized
//! to this form before it reaches the statistics engine.

use chrono::NaiveDate;

use crate::error::Result;

/// Canonical day format.
const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a canonical `YYYY-MM-DD` string into a day.
///
/// # Errors
/// Returns [`CoreError::InvalidDate`](crate::CoreError::InvalidDate) when the
/// input is not a valid calendar day in canonical form.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DAY_FORMAT)?)
}

/// Format a day in canonical `YYYY-MM-DD` form.
pub fn day_string(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Lowercase full weekday name for a day ("monday", "tuesday", ...).
pub fn day_of_week(day: NaiveDate) -> String {
    day.format("%A").to_string().to_lowercase()
}

/// Human-readable date like "January 5, 2024", prefixed with "Today, "
/// when the day is the current one.
pub fn pretty_day(day: NaiveDate, today: NaiveDate) -> String {
    let pretty = day.format("%B %-d, %Y").to_string();
    if day == today {
        format!("Today, {pretty}")
    } else {
        pretty
    }
}

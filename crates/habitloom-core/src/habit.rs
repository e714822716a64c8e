//! Habit domain type.
//!
//! A habit is a named, sparse set of completion days. Entries are stored in
//! the order they were recorded; ordering and uniqueness carry no meaning
//! (the statistics engine treats entries as a set and sorts its own copy).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked habit: a name plus the days it was marked done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Display name, unique within a store.
    pub name: String,

    /// Days the habit was completed.
    #[serde(default)]
    pub entries: Vec<NaiveDate>,
}

impl Habit {
    /// Create a habit with no entries.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Whether the habit was completed on the given day.
    pub fn has_entry(&self, day: NaiveDate) -> bool {
        self.entries.contains(&day)
    }

    /// Mark the habit done on a day. Returns false if it was already marked.
    pub fn tick(&mut self, day: NaiveDate) -> bool {
        if self.has_entry(day) {
            return false;
        }
        self.entries.push(day);
        true
    }

    /// Remove a completion mark. Returns false if the day was not marked.
    pub fn untick(&mut self, day: NaiveDate) -> bool {
        let before = self.entries.len();
        self.entries.retain(|d| *d != day);
        self.entries.len() != before
    }

    /// Entries sorted chronologically with duplicates removed.
    pub fn sorted_entries(&self) -> Vec<NaiveDate> {
        let mut sorted = self.entries.clone();
        sorted.sort_unstable();
        sorted.dedup();
        sorted
    }

    /// Oldest completion day, if any.
    pub fn first_entry(&self) -> Option<NaiveDate> {
        self.entries.iter().min().copied()
    }
}

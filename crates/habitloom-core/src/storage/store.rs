//! JSON-backed habit store.
//!
//! Habits are persisted as pretty-printed JSON at
//! `~/.config/habitloom/habits.json`. The store is a plain collection;
//! statistics are computed on demand from entry sets, never cached here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{Result, StoreError};
use crate::habit::Habit;

/// Habit store file name.
const HABITS_FILE: &str = "habits.json";

/// Collection of tracked habits, persisted to a single JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitStore {
    /// Tracked habits, in creation order.
    #[serde(default)]
    pub habits: Vec<Habit>,

    #[serde(skip)]
    path: PathBuf,
}

impl HabitStore {
    /// Open the store in the default data directory, creating an empty
    /// one on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the
    /// store file exists but cannot be parsed.
    pub fn open() -> Result<Self> {
        Ok(Self::open_at(data_dir()?.join(HABITS_FILE))?)
    }

    /// Open a store backed by the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if an
    /// initial empty store cannot be written.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let mut store: HabitStore =
                    serde_json::from_str(&content).map_err(|e| StoreError::LoadFailed {
                        path: path.clone(),
                        message: e.to_string(),
                    })?;
                store.path = path;
                Ok(store)
            }
            Err(_) => {
                let store = Self {
                    habits: Vec::new(),
                    path,
                };
                store.save()?;
                Ok(store)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&self) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| StoreError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Add a habit with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if a habit with that name already exists.
    pub fn add(&mut self, name: &str) -> Result<(), StoreError> {
        if self.habits.iter().any(|h| h.name == name) {
            return Err(StoreError::HabitExists(name.to_string()));
        }
        self.habits.push(Habit::new(name));
        Ok(())
    }

    /// Remove a habit by name, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if no habit with that name exists.
    pub fn remove(&mut self, name: &str) -> Result<Habit, StoreError> {
        match self.habits.iter().position(|h| h.name == name) {
            Some(index) => Ok(self.habits.remove(index)),
            None => Err(StoreError::HabitNotFound(name.to_string())),
        }
    }

    /// Look up a habit by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no habit with that name exists.
    pub fn get(&self, name: &str) -> Result<&Habit, StoreError> {
        self.habits
            .iter()
            .find(|h| h.name == name)
            .ok_or_else(|| StoreError::HabitNotFound(name.to_string()))
    }

    /// Look up a habit by name for mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if no habit with that name exists.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Habit, StoreError> {
        self.habits
            .iter_mut()
            .find(|h| h.name == name)
            .ok_or_else(|| StoreError::HabitNotFound(name.to_string()))
    }
}

//! Core error types for habitloom-core.
//!
//! The statistics functions themselves are total over their documented
//! input domain and never return errors; this hierarchy covers the
//! boundaries around them (day parsing, the habit store, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A day identifier was not in canonical `YYYY-MM-DD` form
    #[error("Invalid calendar day: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// Habit store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Habit-store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No habit with the given name exists
    #[error("No habit named '{0}'")]
    HabitNotFound(String),

    /// A habit with the given name already exists
    #[error("Habit '{0}' already exists")]
    HabitExists(String),

    /// Failed to read the store file
    #[error("Failed to load habits from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write the store file
    #[error("Failed to save habits to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dotted configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

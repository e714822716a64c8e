//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Streak leniency (freeze days, weekly freeze quota, freeze penalty)
//! - Perfect-day threshold percentage
//!
//! Configuration is stored at `~/.config/habitloom/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::stats::{
    resolve_freeze_days, resolve_freeze_penalty, resolve_max_freezes_per_week, FreezePolicy,
};

/// Streak leniency configuration.
///
/// Values are kept as raw numbers so a hand-edited file with fractional or
/// negative values still loads; they are sanitized into a [`FreezePolicy`]
/// when read through [`Config::freeze_policy`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreaksConfig {
    /// Maximum gap length, in days, that freezes may bridge.
    #[serde(default = "default_zero")]
    pub freeze_days: f64,
    /// Freezes allowed per trailing 7-day window (0 disables the cap).
    #[serde(default = "default_zero")]
    pub max_freezes_per_week: f64,
    /// Streak value deducted per frozen day when a gap is bridged.
    #[serde(default = "default_zero")]
    pub freeze_penalty: f64,
}

/// Perfect-day configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfectDaysConfig {
    /// Percentage of habits that must be completed for a day to count.
    #[serde(default = "default_percentage")]
    pub percentage: f64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitloom/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub streaks: StreaksConfig,
    #[serde(default)]
    pub perfect_days: PerfectDaysConfig,
}

// Default functions
fn default_zero() -> f64 {
    0.0
}
fn default_percentage() -> f64 {
    100.0
}

impl Default for StreaksConfig {
    fn default() -> Self {
        Self {
            freeze_days: 0.0,
            max_freezes_per_week: 0.0,
            freeze_penalty: 0.0,
        }
    }
}

impl Default for PerfectDaysConfig {
    fn default() -> Self {
        Self { percentage: 100.0 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            streaks: StreaksConfig::default(),
            perfect_days: PerfectDaysConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as number"),
                        })?;
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("cannot parse '{value}' as number"),
                            })?
                    }
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: "key does not name a scalar setting".to_string(),
                        })
                    }
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    /// Path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path,
                        message: e.to_string(),
                    })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// Sanitized freeze policy derived from the raw streak settings.
    pub fn freeze_policy(&self) -> FreezePolicy {
        FreezePolicy::new(
            resolve_freeze_days(Some(self.streaks.freeze_days), 0),
            resolve_max_freezes_per_week(Some(self.streaks.max_freezes_per_week), 0),
            resolve_freeze_penalty(Some(self.streaks.freeze_penalty), 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.streaks.freeze_days, 0.0);
        assert_eq!(parsed.perfect_days.percentage, 100.0);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.streaks.max_freezes_per_week, 0.0);
        assert_eq!(parsed.perfect_days.percentage, 100.0);

        let parsed: Config = toml::from_str("[streaks]\nfreeze_days = 3.0\n").unwrap();
        assert_eq!(parsed.streaks.freeze_days, 3.0);
        assert_eq!(parsed.streaks.freeze_penalty, 0.0);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("streaks.freeze_days").as_deref(), Some("0.0"));
        assert_eq!(cfg.get("perfect_days.percentage").as_deref(), Some("100.0"));
        assert!(cfg.get("streaks.missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "streaks.freeze_days", "2").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "streaks.freeze_days").unwrap(),
            &serde_json::json!(2.0)
        );
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "streaks.nonexistent_key", "1");
        assert!(matches!(result, Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn set_json_value_by_path_rejects_whole_section() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "streaks", "1");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn set_json_value_by_path_rejects_non_numeric_value() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "streaks.freeze_days", "lots");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn freeze_policy_sanitizes_raw_values() {
        let cfg = Config {
            streaks: StreaksConfig {
                freeze_days: 2.9,
                max_freezes_per_week: -1.0,
                freeze_penalty: -0.5,
            },
            ..Config::default()
        };
        let policy = cfg.freeze_policy();
        assert_eq!(policy.freeze_days, 2);
        assert_eq!(policy.max_freezes_per_week, 0);
        assert_eq!(policy.freeze_penalty, 0.0);
    }
}

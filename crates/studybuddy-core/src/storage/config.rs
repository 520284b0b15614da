//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Where to find the tips file, and an optional seed for tip selection
//! - The default break reminder length
//! - A default roster file for the CLI
//!
//! Configuration is stored at `~/.config/studybuddy/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::tips::DEFAULT_TIPS_FILE;

/// Study tip configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipsConfig {
    #[serde(default = "default_tips_path")]
    pub path: String,
    /// Fixed seed for tip selection. Random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Break reminder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderConfig {
    #[serde(default = "default_break_minutes")]
    pub break_minutes: f64,
}

/// Roster configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Used when the CLI is not given `--roster`.
    #[serde(default)]
    pub default_path: Option<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studybuddy/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tips: TipsConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
    #[serde(default)]
    pub roster: RosterConfig,
}

fn default_tips_path() -> String {
    DEFAULT_TIPS_FILE.into()
}
fn default_break_minutes() -> f64 {
    25.0
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            path: default_tips_path(),
            seed: None,
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            break_minutes: default_break_minutes(),
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

    fn replace_leaf(root: &mut serde_json::Value, key: &str, value: serde_json::Value) {
        let (parent, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (parent.split('.').try_fold(root, |cur, part| cur.get_mut(part)), leaf),
            None => (Some(root), key),
        };
        if let Some(obj) = parent.and_then(|p| p.as_object_mut()) {
            obj.insert(leaf.to_string(), value);
        }
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = if value == "null" {
                    serde_json::Value::Null
                } else {
                    match existing {
                        serde_json::Value::Bool(_) => serde_json::Value::Bool(
                            value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                        ),
                        serde_json::Value::Number(_) => {
                            if let Ok(n) = value.parse::<u64>() {
                                serde_json::Value::Number(n.into())
                            } else if let Ok(n) = value.parse::<f64>() {
                                serde_json::Number::from_f64(n)
                                    .map(serde_json::Value::Number)
                                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                            } else {
                                return Err(invalid(format!("cannot parse '{value}' as number")));
                            }
                        }
                        // Unset optional: take numbers and booleans as such, anything else as text.
                        serde_json::Value::Null => serde_json::from_str(value)
                            .unwrap_or_else(|_| serde_json::Value::String(value.into())),
                        _ => serde_json::Value::String(value.into()),
                    }
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if the default config cannot be written to disk. An
    /// unreadable file is never overwritten.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "cannot read config file");
                Err(ConfigError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Same as [`Config::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
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

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let original = serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        let mut json = original.clone();
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = match serde_json::from_value(json) {
            Ok(cfg) => cfg,
            // An unset text option given something that looks like a number or bool.
            Err(e)
                if value != "null"
                    && Self::get_json_value_by_path(&original, key).is_some_and(|v| v.is_null()) =>
            {
                let mut json = original;
                Self::replace_leaf(&mut json, key, serde_json::Value::String(value.into()));
                serde_json::from_value(json).map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })?
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            }
        };
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let minutes = self.reminder.break_minutes;
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "reminder.break_minutes".into(),
                message: format!("must be a positive number of minutes, got {minutes}"),
            });
        }
        Ok(())
    }
}

//! Core error types for studybuddy-core.
//!
//! This module defines the error hierarchy using thiserror. Recoverable
//! conditions that the operations report as notices (an unknown subject,
//! an invalid timer response) are events, not errors; see [`crate::events`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studybuddy-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Roster loading and lookup errors
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    /// Study tip errors
    #[error("Tip error: {0}")]
    Tip(#[from] TipError),

    /// Break reminder errors
    #[error("Reminder error: {0}")]
    Reminder(#[from] ReminderError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the data directory
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but could not be read
    #[error("Failed to read configuration from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-separated key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Roster-specific errors.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Failed to read the roster file
    #[error("Failed to read roster at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the roster file
    #[error("Failed to parse roster at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// The file extension is neither `.toml` nor `.json`
    #[error("Unsupported roster format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// No student with the given name
    #[error("No student named '{0}' in roster")]
    UnknownStudent(String),

    /// Both names resolve to the same record
    #[error("'{0}' cannot be paired with themselves")]
    SamePerson(String),
}

/// Study tip errors.
#[derive(Error, Debug)]
pub enum TipError {
    /// The tips file could not be opened
    #[error("Tips file {} is missing! Please make sure it exists.", .path.display())]
    NotFound { path: PathBuf },

    /// The tips file contains no tips
    #[error("Tips file {} has no tips in it.", .path.display())]
    Empty { path: PathBuf },

    /// Any other read failure
    #[error("Failed to read tips from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Break reminder errors.
#[derive(Error, Debug)]
pub enum ReminderError {
    /// The break length is zero, negative or not a number
    #[error("Break length must be a positive number of minutes, got {0}")]
    InvalidDuration(f64),

    /// The interactive prompt could not be read
    #[error("Failed to read timer response: {0}")]
    Prompt(#[source] std::io::Error),

    /// Input closed before an answer was given
    #[error("Input closed while waiting for a timer response")]
    InputClosed,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

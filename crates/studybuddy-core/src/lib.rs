//! # Study Buddy Core Library
//!
//! This library provides the core logic for Study Buddy, a small study
//! companion. All operations are available through the standalone
//! `studybuddy` CLI binary, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Students**: records with interests, availability, goals and progress
//! - **Matching**: compatibility scoring, partner search and shared study times
//! - **Progress**: goal setting, progress updates and status reports
//! - **Reminder**: a blocking break reminder state machine
//! - **Tips**: random study tips read from a text file
//! - **Storage**: TOML-based configuration
//!
//! User-facing notices are [`Event`]s handed to a [`Notifier`]; logging goes
//! through `tracing`.
//!
//! ## Key Components
//!
//! - [`StudentRecord`]: a student and everything tracked about them
//! - [`BreakReminder`]: break reminder state machine
//! - [`TipProvider`]: study tip source
//! - [`Config`]: application configuration management

pub mod availability;
pub mod error;
pub mod events;
pub mod matching;
pub mod progress;
pub mod reminder;
pub mod roster;
pub mod scheduler;
pub mod storage;
pub mod student;
pub mod tips;

pub use availability::common_times;
pub use error::{ConfigError, CoreError, ReminderError, RosterError, TipError};
pub use events::{ConsoleNotifier, Event, Notifier};
pub use matching::{find_best_partner, score, PartnerMatch};
pub use progress::{progress_report, set_goal, update_progress, GoalStatus, ProgressReport, SubjectProgress};
pub use reminder::{BreakReminder, ReminderHost, ReminderState, RestartAnswer, TerminalHost};
pub use roster::Roster;
pub use scheduler::schedule;
pub use storage::Config;
pub use student::{Session, StudentProfile, StudentRecord};
pub use tips::{RandomPicker, TipPicker, TipProvider};

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every user-facing notice in the system is an Event.
/// Operations hand them to a [`Notifier`]; the CLI prints them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    GoalSet {
        student: String,
        subject: String,
        target_hours: f64,
        at: DateTime<Utc>,
    },
    /// Progress for a subject reached or passed its target.
    GoalMet {
        student: String,
        subject: String,
        actual_hours: f64,
        target_hours: f64,
        at: DateTime<Utc>,
    },
    /// Progress was reported for a subject that has no goal.
    UnknownSubject {
        student: String,
        subject: String,
        at: DateTime<Utc>,
    },
    SessionScheduled {
        participant_a: String,
        participant_b: String,
        time_slot: String,
        at: DateTime<Utc>,
    },
    BreakStarted {
        break_minutes: f64,
        at: DateTime<Utc>,
    },
    BreakEnded {
        at: DateTime<Utc>,
    },
    /// Echo of the raw answer to the restart prompt.
    ResponseReceived {
        input: String,
        at: DateTime<Utc>,
    },
    InvalidResponse {
        input: String,
        at: DateTime<Utc>,
    },
    ReminderStopped {
        cycles: u32,
        at: DateTime<Utc>,
    },
    TipShown {
        tip: String,
        at: DateTime<Utc>,
    },
    TipsMissing {
        path: String,
        at: DateTime<Utc>,
    },
    TipsEmpty {
        path: String,
        at: DateTime<Utc>,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::GoalSet {
                student,
                subject,
                target_hours,
                ..
            } => write!(f, "Goal set for {student}: {target_hours} hours of {subject}."),
            Event::GoalMet {
                student,
                subject,
                actual_hours,
                target_hours,
                ..
            } => write!(
                f,
                "Congratulations {student}! You met your {subject} goal ({actual_hours}/{target_hours} hours)."
            ),
            Event::UnknownSubject {
                student, subject, ..
            } => write!(
                f,
                "{student} has no study goal for {subject}. Set a goal first."
            ),
            Event::SessionScheduled {
                participant_a,
                participant_b,
                time_slot,
                ..
            } => write!(
                f,
                "Study session scheduled between {participant_a} and {participant_b} at {time_slot}."
            ),
            Event::BreakStarted { .. } => write!(f, "Take a break!"),
            Event::BreakEnded { .. } => write!(f, "Break is over, resume work!"),
            Event::ResponseReceived { input, .. } => write!(f, "Input received: {input}"),
            Event::InvalidResponse { input, .. } => {
                write!(f, "Invalid input '{input}'. Stopping the timer.")
            }
            Event::ReminderStopped { cycles, .. } => {
                write!(f, "Break reminder stopped after {cycles} cycle(s).")
            }
            Event::TipShown { tip, .. } => write!(f, "Here's a tip!: '{tip}'"),
            Event::TipsMissing { path, .. } => write!(
                f,
                "File is missing! Please ensure {path} is in the same folder."
            ),
            Event::TipsEmpty { path, .. } => write!(f, "No tips found in {path}."),
        }
    }
}

/// Collaborator output channel for user-facing notices.
pub trait Notifier {
    fn notify(&mut self, event: Event);
}

/// Collects events in order; used by tests and by callers that render later.
impl Notifier for Vec<Event> {
    fn notify(&mut self, event: Event) {
        self.push(event);
    }
}

/// Prints each event's display text to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, event: Event) {
        println!("{event}");
    }
}

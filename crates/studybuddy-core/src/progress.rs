//! Study goals and progress tracking.
//!
//! Progress is only recorded for subjects that have a goal. Setting a goal
//! for a new subject starts its progress at zero; re-setting an existing goal
//! keeps the hours already logged.

use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::events::{Event, Notifier};
use crate::student::StudentRecord;

/// Whether a subject has reached its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Falling Behind")]
    FallingBehind,
}

impl GoalStatus {
    pub fn from_hours(actual_hours: f64, target_hours: f64) -> Self {
        if actual_hours >= target_hours {
            GoalStatus::OnTrack
        } else {
            GoalStatus::FallingBehind
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::OnTrack => "On Track",
            GoalStatus::FallingBehind => "Falling Behind",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One subject's line in a progress report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub target_hours: f64,
    pub actual_hours: f64,
    pub status: GoalStatus,
}

/// Subject -> progress, in goal order.
pub type ProgressReport = IndexMap<String, SubjectProgress>;

/// Add `hours` to a subject's progress.
///
/// A subject without a goal is reported to `notifier` and nothing changes.
/// Returns the student's progress mapping either way.
pub fn update_progress<'a>(
    student: &'a mut StudentRecord,
    subject: &str,
    hours: f64,
    notifier: &mut dyn Notifier,
) -> &'a IndexMap<String, f64> {
    let Some(&target_hours) = student.study_goals.get(subject) else {
        tracing::warn!(student = student.name(), subject, "no goal set for subject");
        notifier.notify(Event::UnknownSubject {
            student: student.name().to_string(),
            subject: subject.to_string(),
            at: Utc::now(),
        });
        return &student.progress;
    };

    let actual_hours = {
        let entry = student.progress.entry(subject.to_string()).or_insert(0.0);
        *entry += hours;
        *entry
    };
    student.total_study_hours += hours;
    tracing::debug!(
        student = student.name(),
        subject,
        hours,
        actual_hours,
        total = student.total_study_hours,
        "progress updated"
    );

    if actual_hours >= target_hours {
        notifier.notify(Event::GoalMet {
            student: student.name().to_string(),
            subject: subject.to_string(),
            actual_hours,
            target_hours,
            at: Utc::now(),
        });
    }
    &student.progress
}

/// Set or overwrite the target hours for a subject.
///
/// Returns the student's goals after the change.
pub fn set_goal<'a>(
    student: &'a mut StudentRecord,
    subject: &str,
    target_hours: f64,
    notifier: &mut dyn Notifier,
) -> &'a IndexMap<String, f64> {
    student
        .study_goals
        .insert(subject.to_string(), target_hours);
    student.progress.entry(subject.to_string()).or_insert(0.0);

    tracing::info!(student = student.name(), subject, target_hours, "study goal set");
    notifier.notify(Event::GoalSet {
        student: student.name().to_string(),
        subject: subject.to_string(),
        target_hours,
        at: Utc::now(),
    });
    &student.study_goals
}

/// Status of every subject that has a goal.
pub fn progress_report(student: &StudentRecord) -> ProgressReport {
    student
        .study_goals()
        .iter()
        .map(|(subject, &target_hours)| {
            let actual_hours = student.progress().get(subject).copied().unwrap_or(0.0);
            (
                subject.clone(),
                SubjectProgress {
                    target_hours,
                    actual_hours,
                    status: GoalStatus::from_hours(actual_hours, target_hours),
                },
            )
        })
        .collect()
}

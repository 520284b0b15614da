//! Student records and study sessions.
//!
//! A [`StudentRecord`] is built once from a [`StudentProfile`] and then only
//! changes through [`crate::progress::update_progress`],
//! [`crate::progress::set_goal`] and [`crate::scheduler::schedule`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Construction input for a student, as found in roster files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub grade: String,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    /// Day label -> free time range, e.g. `"Monday" -> "6-8pm"`.
    #[serde(default)]
    pub availability: IndexMap<String, String>,
    /// Subject -> target hours.
    #[serde(default)]
    pub study_goals: IndexMap<String, f64>,
}

impl StudentProfile {
    pub fn new(name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            ..Self::default()
        }
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(interests.into_iter().map(Into::into));
        self
    }

    pub fn with_availability(mut self, day: impl Into<String>, range: impl Into<String>) -> Self {
        self.availability.insert(day.into(), range.into());
        self
    }

    pub fn with_goal(mut self, subject: impl Into<String>, target_hours: f64) -> Self {
        self.study_goals.insert(subject.into(), target_hours);
        self
    }
}

/// A scheduled study meeting between two students.
///
/// The same value is cloned into both participants' session logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub participant_a: String,
    pub participant_b: String,
    pub time_slot: String,
    pub scheduled_at: DateTime<Utc>,
}

/// A student with goals, accumulated progress and a session log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    name: String,
    grade: String,
    interests: BTreeSet<String>,
    availability: IndexMap<String, String>,
    pub(crate) study_goals: IndexMap<String, f64>,
    /// Always holds a key for every subject in `study_goals`.
    pub(crate) progress: IndexMap<String, f64>,
    /// Sum of `progress` values.
    pub(crate) total_study_hours: f64,
    pub(crate) scheduled_sessions: Vec<Session>,
}

impl StudentRecord {
    /// Build a record with zero progress for every goal subject.
    pub fn new(profile: StudentProfile) -> Self {
        let progress = profile
            .study_goals
            .keys()
            .map(|subject| (subject.clone(), 0.0))
            .collect();
        Self {
            name: profile.name,
            grade: profile.grade,
            interests: profile.interests,
            availability: profile.availability,
            study_goals: profile.study_goals,
            progress,
            total_study_hours: 0.0,
            scheduled_sessions: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    pub fn availability(&self) -> &IndexMap<String, String> {
        &self.availability
    }

    pub fn study_goals(&self) -> &IndexMap<String, f64> {
        &self.study_goals
    }

    pub fn progress(&self) -> &IndexMap<String, f64> {
        &self.progress
    }

    pub fn total_study_hours(&self) -> f64 {
        self.total_study_hours
    }

    pub fn scheduled_sessions(&self) -> &[Session] {
        &self.scheduled_sessions
    }
}

impl From<StudentProfile> for StudentRecord {
    fn from(profile: StudentProfile) -> Self {
        Self::new(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> StudentRecord {
        StudentProfile::new("Alice", "10th")
            .with_interests(["Math", "Science"])
            .with_availability("Monday", "6-8pm")
            .with_availability("Wednesday", "4-6pm")
            .with_goal("Math", 5.0)
            .with_goal("Science", 3.0)
            .into()
    }

    #[test]
    fn accessors_expose_profile() {
        let student = alice();
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.grade(), "10th");
        assert!(student.interests().contains("Math"));
        assert_eq!(student.availability()["Monday"], "6-8pm");
        assert_eq!(student.study_goals()["Science"], 3.0);
    }

    #[test]
    fn progress_starts_at_zero_for_every_goal() {
        let student = alice();
        assert_eq!(student.progress().len(), 2);
        assert!(student.progress().values().all(|h| *h == 0.0));
        assert_eq!(student.total_study_hours(), 0.0);
        assert!(student.scheduled_sessions().is_empty());
    }

    #[test]
    fn availability_keeps_insertion_order() {
        let student = alice();
        let days: Vec<&str> = student.availability().keys().map(String::as_str).collect();
        assert_eq!(days, ["Monday", "Wednesday"]);
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let profile: StudentProfile =
            serde_json::from_str(r#"{"name": "Bob", "grade": "10th"}"#).unwrap();
        assert!(profile.interests.is_empty());
        assert!(profile.study_goals.is_empty());
    }
}

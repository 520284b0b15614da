//! Working set of students loaded from a TOML or JSON file.
//!
//! ```toml
//! [[students]]
//! name = "Alice"
//! grade = "10th"
//! interests = ["Math", "Science"]
//! availability = { Monday = "6-8pm", Wednesday = "4-6pm" }
//! study_goals = { Math = 5, Science = 3 }
//! ```
//!
//! Records live in memory only; nothing is written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::student::{StudentProfile, StudentRecord};

#[derive(Debug, Default, Serialize, Deserialize)]
struct RosterFile {
    #[serde(default)]
    students: Vec<StudentProfile>,
}

/// An ordered list of students.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new(students: Vec<StudentRecord>) -> Self {
        Self { students }
    }

    /// Load a roster, choosing the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension
    /// or does not parse.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_failed = |message: String| RosterError::ParseFailed {
            path: path.to_path_buf(),
            message,
        };
        let file: RosterFile = match format.as_deref() {
            Some("toml") => toml::from_str(&content).map_err(|e| parse_failed(e.to_string()))?,
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| parse_failed(e.to_string()))?
            }
            _ => return Err(RosterError::UnsupportedFormat(path.to_path_buf())),
        };
        tracing::info!(path = %path.display(), students = file.students.len(), "roster loaded");
        Ok(Self::new(
            file.students.into_iter().map(StudentRecord::new).collect(),
        ))
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// First student with the given name.
    pub fn get(&self, name: &str) -> Result<&StudentRecord, RosterError> {
        self.position(name).map(|i| &self.students[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut StudentRecord, RosterError> {
        let index = self.position(name)?;
        Ok(&mut self.students[index])
    }

    /// Two different students, both mutable.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::SamePerson`] if both names resolve to the same
    /// record.
    pub fn pair_mut(
        &mut self,
        a: &str,
        b: &str,
    ) -> Result<(&mut StudentRecord, &mut StudentRecord), RosterError> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        if i == j {
            return Err(RosterError::SamePerson(a.to_string()));
        }
        if i < j {
            let (left, right) = self.students.split_at_mut(j);
            Ok((&mut left[i], &mut right[0]))
        } else {
            let (left, right) = self.students.split_at_mut(i);
            Ok((&mut right[0], &mut left[j]))
        }
    }

    fn position(&self, name: &str) -> Result<usize, RosterError> {
        self.students
            .iter()
            .position(|s| s.name() == name)
            .ok_or_else(|| RosterError::UnknownStudent(name.to_string()))
    }
}

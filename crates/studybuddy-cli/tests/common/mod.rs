//! Common utilities for CLI E2E tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

pub const ROSTER_TOML: &str = r#"
[[students]]
name = "Alice"
grade = "10th"
interests = ["Math", "Science"]
availability = { Monday = "6-8pm", Wednesday = "4-6pm" }
study_goals = { Math = 5, Science = 3 }

[[students]]
name = "Bob"
grade = "10th"
interests = ["Math", "History"]
availability = { Monday = "6-8pm", Tuesday = "4-6pm" }
study_goals = { Math = 4, History = 2 }

[[students]]
name = "Cara"
grade = "12th"
interests = ["Art"]
availability = { Friday = "1-3pm" }
"#;

/// Isolated home directory with a roster file in it.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("Failed to create temp home");
        std::fs::write(home.path().join("roster.toml"), ROSTER_TOML).expect("Failed to write roster");
        Self { home }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    pub fn roster(&self) -> PathBuf {
        self.path("roster.toml")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_studybuddy"));
        cmd.args(args)
            .current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env_remove("STUDYBUDDY_ENV")
            .env_remove("STUDYBUDDY_LOG");
        cmd
    }

    /// Invoke a CLI command and return (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        self.run_with_input(args, "")
    }

    /// Invoke a CLI command with `input` on stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> (String, String, i32) {
        use std::io::Write;

        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute CLI command");
        child
            .stdin
            .take()
            .expect("stdin piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to wait for CLI");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        (stdout, stderr, code)
    }

    /// Invoke a CLI command with the sandbox roster and expect success.
    pub fn run_success(&self, args: &[&str]) -> String {
        let roster = self.roster();
        let mut full = vec!["--roster", roster.to_str().expect("utf-8 path")];
        full.extend_from_slice(args);
        let (stdout, stderr, code) = self.run(&full);
        assert_eq!(code, 0, "CLI command failed with code {code}: {args:?}\n{stderr}");
        stdout
    }
}

/// Parse JSON output from CLI.
pub fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

/// Check if string contains substring
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected '{}' to contain '{}'",
        haystack,
        needle
    );
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

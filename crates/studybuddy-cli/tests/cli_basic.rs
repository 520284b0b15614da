//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against a temporary home directory and
//! roster file.

mod common;

use common::{assert_contains, parse_json, Sandbox};

#[test]
fn test_students_list() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_success(&["students"]);
    assert_contains(&out, "Alice (10th): Math, Science");
    assert_contains(&out, "Cara (12th): Art");
}

#[test]
fn test_score() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_success(&["--json", "score", "Alice", "Bob"]);
    assert_eq!(parse_json(&out)["score"], 100);
    let out = sandbox.run_success(&["--json", "score", "Alice", "Cara"]);
    assert_eq!(parse_json(&out)["score"], 0);
}

#[test]
fn test_match() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_success(&["match", "Alice"]);
    assert_contains(&out, "Best partner for Alice: Bob (score 100)");

    let out = sandbox.run_success(&["--json", "match", "Cara"]);
    let json = parse_json(&out);
    assert!(json["partner"].is_null());
    assert_eq!(json["score"], 0);
}

#[test]
fn test_times() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_success(&["--json", "times", "Alice", "Bob"]);
    assert_eq!(parse_json(&out), serde_json::json!(["Monday: 6-8pm"]));
}

#[test]
fn test_schedule_defaults_to_first_common_time() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_success(&["schedule", "Alice", "Bob"]);
    assert_contains(
        &out,
        "Study session scheduled between Alice and Bob at Monday: 6-8pm.",
    );
    assert_contains(&out, "Bob has 1 session(s):");
}

#[test]
fn test_schedule_without_common_time_fails() {
    let sandbox = Sandbox::new();
    let roster = sandbox.roster();
    let (_, stderr, code) =
        sandbox.run(&["--roster", roster.to_str().unwrap(), "schedule", "Alice", "Cara"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "no days in common");
}

#[test]
fn test_progress_update_and_goal_met() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_success(&["--json", "progress", "Alice", "Math", "5"]);
    let json = parse_json(&out);
    assert_eq!(json["total_study_hours"], 5.0);
    assert_eq!(json["report"]["Math"]["status"], "On Track");
    assert_eq!(json["report"]["Science"]["status"], "Falling Behind");
    assert_eq!(json["events"][0]["type"], "goal_met");
}

#[test]
fn test_progress_unknown_subject() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_success(&["progress", "Alice", "History", "2"]);
    assert_contains(&out, "Alice has no study goal for History.");
    assert_contains(&out, "Total: 0 hours");
}

#[test]
fn test_goal_and_report() {
    let sandbox = Sandbox::new();
    let out = sandbox.run_success(&["goal", "Cara", "Art", "2.5"]);
    assert_contains(&out, "Goal set for Cara: 2.5 hours of Art.");

    let out = sandbox.run_success(&["report", "Bob"]);
    assert_contains(&out, "Math: 0/4 hours (Falling Behind)");
}

#[test]
fn test_negative_hours_rejected() {
    let sandbox = Sandbox::new();
    let roster = sandbox.roster();
    let (_, _, code) = sandbox.run(&[
        "--roster",
        roster.to_str().unwrap(),
        "progress",
        "Alice",
        "Math",
        "-2",
    ]);
    assert_ne!(code, 0);
}

#[test]
fn test_unknown_student() {
    let sandbox = Sandbox::new();
    let roster = sandbox.roster();
    let (_, stderr, code) = sandbox.run(&["--roster", roster.to_str().unwrap(), "report", "Zed"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "No student named 'Zed'");
}

#[test]
fn test_missing_roster_argument() {
    let sandbox = Sandbox::new();
    let (_, stderr, code) = sandbox.run(&["students"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "no roster file given");
}

#[test]
fn test_tip_from_file() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.path("tips.txt"), "  Stay hydrated and take breaks!  \n").unwrap();
    let (stdout, _, code) = sandbox.run(&["tip"]);
    assert_eq!(code, 0);
    assert_contains(&stdout, "Here's a tip!: 'Stay hydrated and take breaks!'");
}

#[test]
fn test_tip_missing_file() {
    let sandbox = Sandbox::new();
    let (stdout, _, code) = sandbox.run(&["tip"]);
    assert_eq!(code, 1);
    assert_contains(&stdout, "File is missing!");
}

#[test]
fn test_remind_stops_on_no() {
    let sandbox = Sandbox::new();
    let (stdout, _, code) = sandbox.run_with_input(&["remind", "--minutes", "0.0001"], "no\n");
    assert_eq!(code, 0);
    assert_contains(&stdout, "Take a break!");
    assert_contains(&stdout, "Break is over, resume work!");
    assert_contains(&stdout, "Restart timer?\n(Yes/No)\n");
    assert_contains(&stdout, "Input received: no");
}

#[test]
fn test_remind_rejects_zero_minutes() {
    let sandbox = Sandbox::new();
    let (_, stderr, code) = sandbox.run(&["remind", "--minutes", "0"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "positive number of minutes");
}

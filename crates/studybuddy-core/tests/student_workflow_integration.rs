//! Integration tests for the student workflow.
//!
//! Walks two students from a roster file through matching, scheduling,
//! goal setting and progress reporting.

use std::io::Write;

use studybuddy_core::{
    common_times, find_best_partner, progress_report, schedule, score, set_goal, update_progress,
    Event, GoalStatus, Roster, StudentProfile, StudentRecord,
};

fn alice() -> StudentRecord {
    StudentProfile::new("Alice", "10th")
        .with_interests(["Math", "Science"])
        .with_availability("Monday", "6-8pm")
        .with_availability("Wednesday", "4-6pm")
        .with_goal("Math", 5.0)
        .with_goal("Science", 3.0)
        .into()
}

fn bob() -> StudentRecord {
    StudentProfile::new("Bob", "10th")
        .with_interests(["Math", "History"])
        .with_availability("Monday", "6-8pm")
        .with_availability("Tuesday", "4-6pm")
        .with_goal("Math", 4.0)
        .with_goal("History", 2.0)
        .into()
}

#[test]
fn test_full_study_partner_workflow() {
    let mut alice = alice();
    let mut bob = bob();
    let mut events = Vec::new();

    assert_eq!(score(&alice, &bob), 100);

    let candidates = vec![bob.clone()];
    let found = find_best_partner(&alice, &candidates);
    assert_eq!(found.partner.map(StudentRecord::name), Some("Bob"));
    assert_eq!(found.score, 100);

    let times = common_times(&alice, &bob);
    assert_eq!(times, ["Monday: 6-8pm"]);

    schedule(&mut alice, &mut bob, times[0].clone(), &mut events);
    assert_eq!(alice.scheduled_sessions().len(), 1);
    assert_eq!(bob.scheduled_sessions().len(), 1);
    assert_eq!(alice.scheduled_sessions()[0], bob.scheduled_sessions()[0]);

    update_progress(&mut alice, "Math", 3.0, &mut events);
    assert_eq!(alice.progress()["Math"], 3.0);
    assert_eq!(alice.total_study_hours(), 3.0);
    assert_eq!(progress_report(&alice)["Math"].status, GoalStatus::FallingBehind);

    update_progress(&mut alice, "Math", 2.0, &mut events);
    assert_eq!(progress_report(&alice)["Math"].status, GoalStatus::OnTrack);

    let goals = set_goal(&mut alice, "English", 2.0, &mut events);
    assert_eq!(goals["English"], 2.0);
    let report = progress_report(&alice);
    let subjects: Vec<&str> = report.keys().map(String::as_str).collect();
    assert_eq!(subjects, ["Math", "Science", "English"]);

    let kinds: Vec<&str> = events
        .iter()
        .map(|e| match e {
            Event::SessionScheduled { .. } => "scheduled",
            Event::GoalMet { .. } => "goal_met",
            Event::GoalSet { .. } => "goal_set",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, ["scheduled", "goal_met", "goal_set"]);
}

#[test]
fn test_roster_partner_search_and_pairing() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[students]]
name = "Alice"
grade = "10th"
interests = ["Math", "Science"]
availability = {{ Monday = "6-8pm", Wednesday = "4-6pm" }}

[[students]]
name = "Dan"
grade = "11th"
interests = ["Science"]
availability = {{ Wednesday = "5-7pm" }}

[[students]]
name = "Bob"
grade = "10th"
interests = ["Math", "History"]
availability = {{ Monday = "6-8pm", Tuesday = "4-6pm" }}
"#
    )
    .unwrap();

    let mut roster = Roster::load(file.path()).unwrap();
    let alice = roster.get("Alice").unwrap();
    let found = find_best_partner(alice, roster.students());
    assert_eq!(found.partner.unwrap().name(), "Bob");
    assert_eq!(found.score, 100);

    let (alice, dan) = roster.pair_mut("Alice", "Dan").unwrap();
    assert_eq!(common_times(alice, dan), ["Wednesday: 4-6pm"]);
    let mut events = Vec::new();
    schedule(alice, dan, "Wednesday: 4-6pm", &mut events);

    assert_eq!(roster.get("Dan").unwrap().scheduled_sessions().len(), 1);
    assert!(roster.get("Bob").unwrap().scheduled_sessions().is_empty());
}

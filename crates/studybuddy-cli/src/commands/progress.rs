use serde_json::json;
use studybuddy_core::{progress_report, set_goal, update_progress, ProgressReport};

use super::Context;

/// Clap value parser for hour counts: finite and not negative.
pub fn parse_hours(value: &str) -> Result<f64, String> {
    let hours: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of hours"))?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(format!("hours must be zero or more, got {value}"));
    }
    Ok(hours)
}

fn print_report(name: &str, report: &ProgressReport) {
    if report.is_empty() {
        println!("{name} has no study goals.");
        return;
    }
    println!("Progress report for {name}:");
    for (subject, entry) in report {
        println!(
            "  {subject}: {}/{} hours ({})",
            entry.actual_hours, entry.target_hours, entry.status
        );
    }
}

pub fn update(
    ctx: &Context,
    name: &str,
    subject: &str,
    hours: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut roster = ctx.load_roster()?;
    let student = roster.get_mut(name)?;
    let mut notices = ctx.notices();
    update_progress(student, subject, hours, &mut notices);
    let report = progress_report(student);

    if ctx.json {
        return ctx.print_json(&json!({
            "student": name,
            "total_study_hours": student.total_study_hours(),
            "report": report,
            "events": notices.into_events(),
        }));
    }
    print_report(name, &report);
    println!("  Total: {} hours", student.total_study_hours());
    Ok(())
}

pub fn goal(
    ctx: &Context,
    name: &str,
    subject: &str,
    hours: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut roster = ctx.load_roster()?;
    let student = roster.get_mut(name)?;
    let mut notices = ctx.notices();
    let goals = set_goal(student, subject, hours, &mut notices).clone();

    if ctx.json {
        return ctx.print_json(&json!({
            "student": name,
            "study_goals": goals,
            "events": notices.into_events(),
        }));
    }
    for (subject, target) in &goals {
        println!("  {subject}: {target} hours");
    }
    Ok(())
}

pub fn report(ctx: &Context, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let roster = ctx.load_roster()?;
    let report = progress_report(roster.get(name)?);

    if ctx.json {
        return ctx.print_json(&report);
    }
    print_report(name, &report);
    Ok(())
}

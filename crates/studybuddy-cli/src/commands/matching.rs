use serde_json::json;
use studybuddy_core::{common_times, find_best_partner, RosterError, StudentRecord};

use super::Context;

pub fn score(ctx: &Context, a: &str, b: &str) -> Result<(), Box<dyn std::error::Error>> {
    let roster = ctx.load_roster()?;
    let first = roster.get(a)?;
    let second = roster.get(b)?;
    if std::ptr::eq(first, second) {
        return Err(RosterError::SamePerson(a.to_string()).into());
    }
    let score = studybuddy_core::score(first, second);

    if ctx.json {
        return ctx.print_json(&json!({ "a": a, "b": b, "score": score }));
    }
    println!("Compatibility between {a} and {b}: {score}");
    Ok(())
}

pub fn best_match(ctx: &Context, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let roster = ctx.load_roster()?;
    let student = roster.get(name)?;
    let found = find_best_partner(student, roster.students());
    let partner = found.partner.map(StudentRecord::name);

    if ctx.json {
        return ctx.print_json(&json!({
            "student": name,
            "partner": partner,
            "score": found.score,
        }));
    }
    match partner {
        Some(partner) => println!("Best partner for {name}: {partner} (score {})", found.score),
        None => println!("No compatible partner found for {name}."),
    }
    Ok(())
}

pub fn times(ctx: &Context, a: &str, b: &str) -> Result<(), Box<dyn std::error::Error>> {
    let roster = ctx.load_roster()?;
    let times = common_times(roster.get(a)?, roster.get(b)?);

    if ctx.json {
        return ctx.print_json(&times);
    }
    if times.is_empty() {
        println!("{a} and {b} have no days in common.");
    }
    for time in times {
        println!("{time}");
    }
    Ok(())
}

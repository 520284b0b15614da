use serde::Serialize;

use super::Context;

#[derive(Serialize)]
struct StudentSummary<'a> {
    name: &'a str,
    grade: &'a str,
    interests: Vec<&'a str>,
}

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let roster = ctx.load_roster()?;
    let summaries: Vec<StudentSummary> = roster
        .students()
        .iter()
        .map(|s| StudentSummary {
            name: s.name(),
            grade: s.grade(),
            interests: s.interests().iter().map(String::as_str).collect(),
        })
        .collect();

    if ctx.json {
        return ctx.print_json(&summaries);
    }
    if summaries.is_empty() {
        println!("Roster is empty.");
    }
    for s in summaries {
        println!("{} ({}): {}", s.name, s.grade, s.interests.join(", "));
    }
    Ok(())
}

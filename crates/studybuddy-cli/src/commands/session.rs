use serde_json::json;
use studybuddy_core::{common_times, schedule};

use super::Context;

pub fn run(
    ctx: &Context,
    a: &str,
    b: &str,
    slot: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut roster = ctx.load_roster()?;
    let (first, second) = roster.pair_mut(a, b)?;
    let slot = match slot {
        Some(slot) => slot,
        None => common_times(first, second)
            .into_iter()
            .next()
            .ok_or_else(|| format!("{a} and {b} have no days in common; pass --slot"))?,
    };

    let mut notices = ctx.notices();
    let session = schedule(first, second, slot, &mut notices);

    if ctx.json {
        return ctx.print_json(&json!({
            "session": session,
            "events": notices.into_events(),
        }));
    }
    for student in [&*first, &*second] {
        println!("{} has {} session(s):", student.name(), student.scheduled_sessions().len());
        for s in student.scheduled_sessions() {
            println!("  {} with {} at {}", s.participant_a, s.participant_b, s.time_slot);
        }
    }
    Ok(())
}

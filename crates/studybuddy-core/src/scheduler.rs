use chrono::Utc;

use crate::events::{Event, Notifier};
use crate::student::{Session, StudentRecord};

/// Schedule a study session and append it to both students' logs.
///
/// Any slot string is accepted; it does not have to come from
/// [`crate::availability::common_times`].
pub fn schedule(
    a: &mut StudentRecord,
    b: &mut StudentRecord,
    time_slot: impl Into<String>,
    notifier: &mut dyn Notifier,
) -> Session {
    let session = Session {
        participant_a: a.name().to_string(),
        participant_b: b.name().to_string(),
        time_slot: time_slot.into(),
        scheduled_at: Utc::now(),
    };
    a.scheduled_sessions.push(session.clone());
    b.scheduled_sessions.push(session.clone());

    tracing::info!(
        participant_a = %session.participant_a,
        participant_b = %session.participant_b,
        time_slot = %session.time_slot,
        "study session scheduled"
    );
    notifier.notify(Event::SessionScheduled {
        participant_a: session.participant_a.clone(),
        participant_b: session.participant_b.clone(),
        time_slot: session.time_slot.clone(),
        at: session.scheduled_at,
    });
    session
}

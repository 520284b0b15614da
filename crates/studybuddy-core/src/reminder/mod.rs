mod engine;
mod host;

pub use engine::{BreakReminder, RestartAnswer, ReminderState, RESTART_PROMPT};
pub use host::{ReminderHost, TerminalHost};

//! Break reminder state machine.
//!
//! The reminder waits out a work period, announces a break, waits a quarter
//! of that period, announces the end of the break and then asks whether to
//! go again. All waiting and prompting goes through a [`ReminderHost`], so
//! the caller decides whether time is real.
//!
//! ## State Transitions
//!
//! ```text
//! Running -> BreakNotified -> ResumeNotified -> (Running | Stopped)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut reminder = BreakReminder::new(25.0)?;
//! let cycles = reminder.run(&mut TerminalHost::stdio(), &mut ConsoleNotifier)?;
//! ```

use std::io;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::host::ReminderHost;
use crate::error::ReminderError;
use crate::events::{Event, Notifier};

/// Literal prompt written before reading the restart answer.
pub const RESTART_PROMPT: &str = "Restart timer?\n(Yes/No)\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderState {
    /// Counting down the work period.
    Running,
    /// Break announced, counting down the break.
    BreakNotified,
    /// Break over, waiting for the restart answer.
    ResumeNotified,
    Stopped,
}

/// Parsed answer to [`RESTART_PROMPT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartAnswer {
    Yes,
    No,
    Invalid,
}

impl RestartAnswer {
    /// Case-insensitive. Whitespace is not stripped, so `" yes"` is invalid.
    pub fn parse(input: &str) -> Self {
        match input.to_uppercase().as_str() {
            "YES" => RestartAnswer::Yes,
            "NO" => RestartAnswer::No,
            _ => RestartAnswer::Invalid,
        }
    }
}

/// Blocking break reminder.
#[derive(Debug, Clone)]
pub struct BreakReminder {
    break_minutes: f64,
    work_period: Duration,
    state: ReminderState,
    /// Completed break cycles.
    cycles: u32,
}

impl BreakReminder {
    /// Create a reminder that fires every `break_minutes` minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::InvalidDuration`] if `break_minutes` is zero,
    /// negative or not finite.
    pub fn new(break_minutes: f64) -> Result<Self, ReminderError> {
        if !break_minutes.is_finite() || break_minutes <= 0.0 {
            return Err(ReminderError::InvalidDuration(break_minutes));
        }
        let work_period = Duration::try_from_secs_f64(break_minutes * 60.0)
            .map_err(|_| ReminderError::InvalidDuration(break_minutes))?;
        Ok(Self {
            break_minutes,
            work_period,
            state: ReminderState::Running,
            cycles: 0,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> ReminderState {
        self.state
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn break_minutes(&self) -> f64 {
        self.break_minutes
    }

    /// Time before the break announcement.
    pub fn work_period(&self) -> Duration {
        self.work_period
    }

    /// Length of the break itself: a quarter of the work period.
    pub fn break_period(&self) -> Duration {
        self.work_period / 4
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Perform one transition and return the new state.
    ///
    /// Calling `step` once stopped does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the restart answer cannot be read. The reminder
    /// is stopped in that case.
    pub fn step(
        &mut self,
        host: &mut dyn ReminderHost,
        notifier: &mut dyn Notifier,
    ) -> Result<ReminderState, ReminderError> {
        match self.state {
            ReminderState::Running => {
                host.pause(self.work_period);
                tracing::debug!(break_minutes = self.break_minutes, "break started");
                notifier.notify(Event::BreakStarted {
                    break_minutes: self.break_minutes,
                    at: Utc::now(),
                });
                self.state = ReminderState::BreakNotified;
            }
            ReminderState::BreakNotified => {
                host.pause(self.break_period());
                self.cycles += 1;
                tracing::debug!(cycles = self.cycles, "break ended");
                notifier.notify(Event::BreakEnded { at: Utc::now() });
                self.state = ReminderState::ResumeNotified;
            }
            ReminderState::ResumeNotified => {
                let input = match host.ask(RESTART_PROMPT) {
                    Ok(input) => input,
                    Err(e) => {
                        self.state = ReminderState::Stopped;
                        return Err(if e.kind() == io::ErrorKind::UnexpectedEof {
                            ReminderError::InputClosed
                        } else {
                            ReminderError::Prompt(e)
                        });
                    }
                };
                notifier.notify(Event::ResponseReceived {
                    input: input.clone(),
                    at: Utc::now(),
                });
                match RestartAnswer::parse(&input) {
                    RestartAnswer::Yes => self.state = ReminderState::Running,
                    RestartAnswer::No => self.stop(notifier),
                    RestartAnswer::Invalid => {
                        tracing::warn!(input = %input, "invalid timer response");
                        notifier.notify(Event::InvalidResponse {
                            input,
                            at: Utc::now(),
                        });
                        self.stop(notifier);
                    }
                }
            }
            ReminderState::Stopped => {}
        }
        Ok(self.state)
    }

    /// Step until stopped. Returns the number of completed break cycles.
    ///
    /// # Errors
    ///
    /// Returns an error if the restart answer cannot be read.
    pub fn run(
        &mut self,
        host: &mut dyn ReminderHost,
        notifier: &mut dyn Notifier,
    ) -> Result<u32, ReminderError> {
        while self.step(host, notifier)? != ReminderState::Stopped {}
        Ok(self.cycles)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn stop(&mut self, notifier: &mut dyn Notifier) {
        self.state = ReminderState::Stopped;
        tracing::info!(cycles = self.cycles, "break reminder stopped");
        notifier.notify(Event::ReminderStopped {
            cycles: self.cycles,
            at: Utc::now(),
        });
    }
}

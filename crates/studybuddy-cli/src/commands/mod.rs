pub mod config;
pub mod matching;
pub mod progress;
pub mod remind;
pub mod session;
pub mod students;
pub mod tip;

use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;
use studybuddy_core::{Config, ConsoleNotifier, Event, Notifier, Roster};

/// Options shared by every command.
pub struct Context {
    pub roster: Option<PathBuf>,
    pub json: bool,
}

impl Context {
    /// Load the roster from `--roster`, falling back to the configured default.
    pub fn load_roster(&self) -> Result<Roster, Box<dyn Error>> {
        let path = match &self.roster {
            Some(path) => path.clone(),
            None => Config::load_or_default()
                .roster
                .default_path
                .map(PathBuf::from)
                .ok_or("no roster file given: pass --roster or set roster.default_path")?,
        };
        Ok(Roster::load(&path)?)
    }

    /// Notices print immediately in text mode and are collected in JSON mode.
    pub fn notices(&self) -> Notices {
        if self.json {
            Notices::Collected(Vec::new())
        } else {
            Notices::Console(ConsoleNotifier)
        }
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<(), Box<dyn Error>> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

pub enum Notices {
    Console(ConsoleNotifier),
    Collected(Vec<Event>),
}

impl Notices {
    pub fn into_events(self) -> Vec<Event> {
        match self {
            Notices::Console(_) => Vec::new(),
            Notices::Collected(events) => events,
        }
    }
}

impl Notifier for Notices {
    fn notify(&mut self, event: Event) {
        match self {
            Notices::Console(console) => console.notify(event),
            Notices::Collected(events) => events.notify(event),
        }
    }
}

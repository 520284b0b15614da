//! Random study tips from a plain-text file, one tip per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::TipError;
use crate::events::{Event, Notifier};

/// Default tips file name, resolved against the working directory.
pub const DEFAULT_TIPS_FILE: &str = "tips.txt";

/// Chooses which tip to show.
pub trait TipPicker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomPicker<R>(pub R);

impl RandomPicker<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomPicker<Pcg64> {
    /// Reproducible choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg64::seed_from_u64(seed))
    }
}

impl<R: Rng> TipPicker for RandomPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Reads tips from a file and hands one out at random.
#[derive(Debug, Clone)]
pub struct TipProvider {
    path: PathBuf,
}

impl Default for TipProvider {
    fn default() -> Self {
        Self::new(DEFAULT_TIPS_FILE)
    }
}

impl TipProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every line of the file, trimmed, in file order. Blank lines stay as
    /// empty tips.
    ///
    /// # Errors
    ///
    /// [`TipError::NotFound`] if the file cannot be opened, [`TipError::Io`]
    /// if reading fails part way.
    pub fn load(&self) -> Result<Vec<String>, TipError> {
        let file = File::open(&self.path).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "cannot open tips file");
            TipError::NotFound {
                path: self.path.clone(),
            }
        })?;
        let mut tips = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| self.io_error(source))?;
            tips.push(line.trim().to_string());
        }
        tracing::debug!(path = %self.path.display(), count = tips.len(), "tips loaded");
        Ok(tips)
    }

    /// One tip chosen by `picker`.
    ///
    /// # Errors
    ///
    /// Everything [`TipProvider::load`] returns, plus [`TipError::Empty`]
    /// when the file holds no tips.
    pub fn random_tip(&self, picker: &mut dyn TipPicker) -> Result<String, TipError> {
        let mut tips = self.load()?;
        if tips.is_empty() {
            return Err(TipError::Empty {
                path: self.path.clone(),
            });
        }
        let index = picker.pick_index(tips.len()).min(tips.len() - 1);
        Ok(tips.swap_remove(index))
    }

    /// Show a tip through `notifier`.
    ///
    /// A missing or empty file becomes a notice instead of an error; the
    /// return value is `None` in that case.
    pub fn present(
        &self,
        picker: &mut dyn TipPicker,
        notifier: &mut dyn Notifier,
    ) -> Option<String> {
        let path = self.path.display().to_string();
        let at = Utc::now();
        match self.random_tip(picker) {
            Ok(tip) => {
                notifier.notify(Event::TipShown {
                    tip: tip.clone(),
                    at,
                });
                Some(tip)
            }
            Err(TipError::NotFound { .. }) => {
                notifier.notify(Event::TipsMissing { path, at });
                None
            }
            Err(TipError::Empty { .. }) => {
                notifier.notify(Event::TipsEmpty { path, at });
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read tips");
                notifier.notify(Event::TipsMissing { path, at });
                None
            }
        }
    }

    fn io_error(&self, source: io::Error) -> TipError {
        TipError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

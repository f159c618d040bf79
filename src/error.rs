//! Error types for dictionary loading and ladder search.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Why a ladder search ended without a ladder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Every reachable word was expanded without reaching the goal.
    #[error("no ladder connects '{start}' to '{end}'")]
    Exhausted { start: String, end: String },

    /// More relaxation steps were needed than the configured budget allows.
    #[error("step budget of {max_steps} exceeded before a ladder was found")]
    StepBudgetExceeded { max_steps: u64 },

    /// The wall-clock budget ran out mid-search.
    #[error("search timed out after {timeout:?}")]
    TimedOut { timeout: Duration },

    /// Following parent links from the goal did not lead back to the start.
    #[error("ladder reconstruction broke off at '{word}'")]
    Disconnected { word: String },
}

impl LadderError {
    /// True when the search was cut short by a limit rather than proven
    /// impossible. A retry with larger limits may succeed.
    pub fn is_budget_exhausted(&self) -> bool {
        matches!(
            self,
            LadderError::StepBudgetExceeded { .. } | LadderError::TimedOut { .. }
        )
    }
}

/// Failure to read a word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read word list")]
    Read(#[from] io::Error),
}

//! # Weaver Solver
//!
//! Finds the shortest word ladder between two words of the same length, where
//! each step changes exactly one letter and every word on the way is in the
//! dictionary.
//!
//! The search is best-first: the cost of stepping onto a word is its distance
//! to the goal, so candidates that already resemble the goal are tried early.
//! A timeout and a step budget can cap how long a single search may run.

pub mod dictionary;
pub mod distance;
pub mod error;
mod frontier;
pub mod limits;
pub mod oracle;
pub mod solver;
pub mod sweep;

pub use dictionary::Dictionary;
pub use distance::{can_change_word, hamming_distance};
pub use error::{DictionaryError, LadderError};
pub use limits::Limits;
pub use oracle::{all_neighbors, neighbors};
pub use solver::{solve, LadderSolver, Solution};
pub use sweep::{sweep, SweepEntry, SweepReport};

/// Word length of the bundled dictionary
pub const DEFAULT_WORD_LENGTH: usize = 4;

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Dictionary {
    Dictionary::embedded()
}

/// Solve a ladder with the embedded dictionary and no limits.
pub fn play_game(start: &str, end: &str) -> Result<Vec<String>, LadderError> {
    solve(&load_dictionary(), start, end, Limits::unlimited())
}

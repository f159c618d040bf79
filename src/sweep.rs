//! Solve from one start word to every word in the dictionary.
//!
//! Each target gets its own independent search; rayon spreads the searches
//! across threads. Results come back in dictionary order.

use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::error::LadderError;
use crate::limits::Limits;
use crate::solver::LadderSolver;

/// Outcome for one target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepEntry {
    pub target: String,
    /// Number of words in the ladder, start and target included.
    pub result: Result<usize, LadderError>,
}

#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    pub start: String,
    pub entries: Vec<SweepEntry>,
}

impl SweepReport {
    pub fn solved_count(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_ok()).count()
    }

    pub fn unsolved_count(&self) -> usize {
        self.entries.len() - self.solved_count()
    }

    /// Targets given up on because a limit ran out.
    pub fn budget_exhausted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(&e.result, Err(err) if err.is_budget_exhausted()))
            .count()
    }

    /// The first target with the longest ladder.
    pub fn longest(&self) -> Option<(&str, usize)> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().ok().map(|&len| (e.target.as_str(), len)))
            .fold(None, |best, (target, len)| match best {
                Some((_, best_len)) if best_len >= len => best,
                _ => Some((target, len)),
            })
    }

    pub fn average_length(&self) -> Option<f64> {
        let solved = self.solved_count();
        if solved == 0 {
            return None;
        }
        let total: usize = self.entries.iter().filter_map(|e| e.result.as_ref().ok()).sum();
        Some(total as f64 / solved as f64)
    }

    /// Ladder lengths paired with how many targets needed them, shortest first.
    pub fn length_distribution(&self) -> Vec<(usize, usize)> {
        let lengths: Vec<usize> = self
            .entries
            .iter()
            .filter_map(|e| e.result.as_ref().ok().copied())
            .collect();

        let max_length = lengths.iter().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_length + 1];
        for len in lengths {
            distribution[len] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// Solve `start -> target` for every dictionary word.
pub fn sweep(dictionary: &Dictionary, start: &str, limits: Limits) -> SweepReport {
    let solver = LadderSolver::new(dictionary, limits);
    let entries = dictionary
        .words()
        .par_iter()
        .map(|target| SweepEntry {
            target: target.clone(),
            result: solver.solve(start, target).map(|solution| solution.ladder.len()),
        })
        .collect();

    SweepReport {
        start: start.to_string(),
        entries,
    }
}

//! Shortest word-ladder search.
//!
//! This module runs a best-first search over the graph whose nodes are
//! dictionary words and whose edges join words one letter apart. The cost of
//! stepping onto a word is its Hamming distance to the goal, so the frontier
//! favors candidates that already look like the goal on top of the cost
//! accumulated so far.
//!
//! A word is final the first time it is popped. Cheaper costs discovered
//! afterwards are recorded but the word is never expanded again, and the
//! parent recorded at the last improvement is the one used to rebuild the
//! ladder.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::dictionary::Dictionary;
use crate::distance::hamming_distance;
use crate::error::LadderError;
use crate::frontier::Frontier;
use crate::limits::Limits;
use crate::oracle;

/// A solved ladder together with what it cost to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Words from start to end inclusive.
    pub ladder: Vec<String>,
    /// Neighbors processed, the quantity bounded by the step budget.
    pub steps: u64,
    /// Words popped and expanded.
    pub expansions: u64,
    /// Largest frontier size seen, stale entries included.
    pub peak_frontier: usize,
}

impl Solution {
    /// Number of single-letter changes in the ladder.
    pub fn changes(&self) -> usize {
        self.ladder.len().saturating_sub(1)
    }
}

/// Solver bound to one dictionary and one set of limits.
///
/// Holds no search state between calls; every [`LadderSolver::solve`] starts
/// from scratch, so repeated calls with the same words give the same ladder.
#[derive(Debug, Clone, Copy)]
pub struct LadderSolver<'d> {
    dictionary: &'d Dictionary,
    limits: Limits,
}

impl<'d> LadderSolver<'d> {
    pub fn new(dictionary: &'d Dictionary, limits: Limits) -> Self {
        Self { dictionary, limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Find a ladder from `start` to `end`.
    ///
    /// Neither word has to be in the dictionary for the search to start, but
    /// every intermediate word and `end` itself must be reachable through it.
    pub fn solve(&self, start: &str, end: &str) -> Result<Solution, LadderError> {
        search(self.dictionary, start, end, &self.limits)
    }
}

/// Find a ladder from `start` to `end`, returning only the words.
pub fn solve(
    dictionary: &Dictionary,
    start: &str,
    end: &str,
    limits: Limits,
) -> Result<Vec<String>, LadderError> {
    LadderSolver::new(dictionary, limits)
        .solve(start, end)
        .map(|solution| solution.ladder)
}

struct SearchState<'a> {
    visited: HashSet<&'a str>,
    best_cost: HashMap<&'a str, u64>,
    parent: HashMap<&'a str, &'a str>,
    frontier: Frontier<'a>,
    peak_frontier: usize,
}

impl<'a> SearchState<'a> {
    fn new(start: &'a str) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            best_cost: HashMap::new(),
            parent: HashMap::new(),
            frontier: Frontier::new(),
            peak_frontier: 0,
        };
        state.best_cost.insert(start, 0);
        state.push(0, start);
        state
    }

    fn push(&mut self, cost: u64, word: &'a str) {
        self.frontier.push(cost, word);
        self.peak_frontier = self.peak_frontier.max(self.frontier.len());
    }

    /// Words without a recorded cost are infinitely far away.
    fn cost_of(&self, word: &str) -> Option<u64> {
        self.best_cost.get(word).copied()
    }

    /// Record `current -> next` if it strictly improves the cost of `next`.
    fn relax(&mut self, current: &'a str, next: &'a str, cost: u64) {
        if self.cost_of(next).map_or(true, |known| cost < known) {
            self.parent.insert(next, current);
            self.best_cost.insert(next, cost);
            self.push(cost, next);
        }
    }

    /// Walk parent links back from `end` and return the ladder start first.
    fn reconstruct(&self, start: &str, end: &'a str) -> Result<Vec<String>, LadderError> {
        let mut path = vec![end];
        let mut current = end;
        while current != start {
            current = match self.parent.get(current) {
                Some(&parent) => parent,
                None => {
                    return Err(LadderError::Disconnected {
                        word: current.to_string(),
                    })
                }
            };
            path.push(current);
            // A chain longer than the parent map can only be a cycle.
            if path.len() > self.parent.len() + 1 {
                return Err(LadderError::Disconnected {
                    word: current.to_string(),
                });
            }
        }
        Ok(path.into_iter().rev().map(str::to_string).collect())
    }
}

fn search<'a>(
    dictionary: &'a Dictionary,
    start: &'a str,
    end: &'a str,
    limits: &Limits,
) -> Result<Solution, LadderError> {
    let clock = limits.timeout.map(|timeout| (Instant::now(), timeout));
    let mut state = SearchState::new(start);
    let mut steps: u64 = 0;
    let mut expansions: u64 = 0;
    let mut reached = false;

    while let Some((_, current)) = state.frontier.pop() {
        if !state.visited.insert(current) {
            continue;
        }
        if current == end {
            reached = true;
            break;
        }

        expansions += 1;
        let current_cost = state.cost_of(current).unwrap_or_default();

        for next in oracle::neighbors(dictionary, current) {
            steps += 1;
            if let Some(max_steps) = limits.exceeded_step_budget(steps) {
                return Err(LadderError::StepBudgetExceeded { max_steps });
            }
            if state.visited.contains(next) {
                continue;
            }

            let weight = hamming_distance(next, end) as u64;
            state.relax(current, next, current_cost + weight);

            if let Some((started, timeout)) = clock {
                if started.elapsed() > timeout {
                    return Err(LadderError::TimedOut { timeout });
                }
            }
        }
    }

    if !reached {
        return Err(LadderError::Exhausted {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let ladder = state.reconstruct(start, end)?;
    Ok(Solution {
        ladder,
        steps,
        expansions,
        peak_frontier: state.peak_frontier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_parents<'a>(start: &'a str, links: &[(&'a str, &'a str)]) -> SearchState<'a> {
        let mut state = SearchState::new(start);
        for &(child, parent) in links {
            state.parent.insert(child, parent);
        }
        state
    }

    #[test]
    fn relax_only_on_strict_improvement() {
        let mut state = SearchState::new("cold");
        state.relax("cold", "cord", 3);
        state.relax("word", "cord", 3);
        assert_eq!(state.parent.get("cord"), Some(&"cold"));

        state.relax("card", "cord", 2);
        assert_eq!(state.parent.get("cord"), Some(&"card"));
        assert_eq!(state.cost_of("cord"), Some(2));
    }

    #[test]
    fn start_is_never_improved() {
        let mut state = SearchState::new("cold");
        state.relax("cord", "cold", 0);
        assert!(state.parent.get("cold").is_none());
        assert_eq!(state.cost_of("cold"), Some(0));
    }

    #[test]
    fn reconstruct_follows_parents_to_start() {
        let state = state_with_parents(
            "cold",
            &[("warm", "ward"), ("ward", "word"), ("word", "cord"), ("cord", "cold")],
        );
        assert_eq!(
            state.reconstruct("cold", "warm").unwrap(),
            vec!["cold", "cord", "word", "ward", "warm"]
        );
    }

    #[test]
    fn reconstruct_fails_on_missing_link() {
        let state = state_with_parents("cold", &[("warm", "ward")]);
        assert_eq!(
            state.reconstruct("cold", "warm"),
            Err(LadderError::Disconnected { word: "ward".into() })
        );
    }

    #[test]
    fn reconstruct_fails_on_cycle() {
        let state = state_with_parents("cold", &[("warm", "ward"), ("ward", "warm")]);
        assert!(matches!(
            state.reconstruct("cold", "warm"),
            Err(LadderError::Disconnected { .. })
        ));
    }
}

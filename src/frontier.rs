//! Min-priority frontier of candidate words.
//!
//! Entries pop lowest cost first; entries with equal cost pop in the order
//! they were pushed. The same word may sit in the frontier several times
//! with different costs.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct FrontierEntry<'a> {
    key: Reverse<(u64, u64)>,
    word: &'a str,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
pub(crate) struct Frontier<'a> {
    heap: BinaryHeap<FrontierEntry<'a>>,
    pushed: u64,
}

impl<'a> Frontier<'a> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub(crate) fn push(&mut self, cost: u64, word: &'a str) {
        self.heap.push(FrontierEntry {
            key: Reverse((cost, self.pushed)),
            word,
        });
        self.pushed += 1;
    }

    /// Remove the cheapest entry, returning its cost and word.
    pub(crate) fn pop(&mut self) -> Option<(u64, &'a str)> {
        self.heap.pop().map(|e| (e.key.0 .0, e.word))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

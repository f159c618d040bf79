//! Neighbor enumeration over the implicit word graph.
//!
//! Two dictionary words are adjacent when [`can_change_word`] holds. Nothing
//! is cached: each call scans the whole dictionary, O(D × L).

use crate::dictionary::Dictionary;
use crate::distance::can_change_word;

/// Lazily yield every dictionary word one letter away from `word`, in
/// dictionary order.
pub fn neighbors<'a>(
    dictionary: &'a Dictionary,
    word: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    dictionary
        .iter()
        .filter(move |candidate| can_change_word(word, candidate))
}

/// Collected form of [`neighbors`].
pub fn all_neighbors<'a>(dictionary: &'a Dictionary, word: &str) -> Vec<&'a str> {
    dictionary
        .iter()
        .filter(|candidate| can_change_word(word, candidate))
        .collect()
}

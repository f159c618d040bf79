//! Letter-by-letter comparison of words.
//!
//! This module decides whether two words sit one step apart on a ladder.
//! Words are compared character by character, so multi-byte letters count
//! as a single position.

/// Count the positions at which two words differ.
///
/// Characters are compared pairwise up to the length of the shorter word;
/// trailing characters of the longer word are ignored. No length check is
/// applied, so `hamming_distance("word", "words")` is `0`.
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// Whether `next` can follow `last` on a ladder (exactly one letter changed).
///
/// Follows [`hamming_distance`], including its truncation on words of
/// different lengths.
pub fn can_change_word(last: &str, next: &str) -> bool {
    hamming_distance(last, next) == 1
}

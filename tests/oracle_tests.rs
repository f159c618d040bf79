use weaver_solver::{all_neighbors, load_dictionary, neighbors, Dictionary};

#[test]
fn test_find_possible_words_for_word() {
    let words = Dictionary::from_words(["word", "work", "bord", "ward", "soup", "blah"]);
    assert_eq!(all_neighbors(&words, "word"), vec!["work", "bord", "ward"]);
}

#[test]
fn test_neighbors_is_lazy_and_ordered() {
    let words = Dictionary::from_words(["word", "work", "bord", "ward", "soup", "blah"]);
    let mut iter = neighbors(&words, "word");
    assert_eq!(iter.next(), Some("work"));
    assert_eq!(iter.next(), Some("bord"));
    assert_eq!(iter.next(), Some("ward"));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_word_is_not_its_own_neighbor() {
    let words = load_dictionary();
    let found = all_neighbors(&words, "cold");
    assert!(!found.contains(&"cold"));
    assert!(found.contains(&"cord"));
}

#[test]
fn test_neighbors_keep_duplicates() {
    let words = Dictionary::from_words(["work", "work", "fork"]);
    assert_eq!(all_neighbors(&words, "word"), vec!["work", "work"]);
}

#[test]
fn test_neighbors_of_word_outside_dictionary() {
    let words = Dictionary::from_words(["cord", "card", "ward"]);
    assert_eq!(all_neighbors(&words, "cold"), vec!["cord"]);
}

#[test]
fn test_neighbors_cross_length_by_truncation() {
    let words = Dictionary::from_words(["work", "worms", "wo"]);
    assert_eq!(all_neighbors(&words, "word"), vec!["work", "worms"]);
}

#[test]
fn test_neighbors_empty_dictionary() {
    let words = Dictionary::default();
    assert!(all_neighbors(&words, "word").is_empty());
}

use weaver_solver::{can_change_word, hamming_distance};

#[test]
fn test_can_change_word_to_work() {
    assert!(can_change_word("word", "work"));
    assert!(can_change_word("work", "word"));
}

#[test]
fn test_cannot_change_word_to_fork() {
    assert!(!can_change_word("word", "fork"));
    assert!(!can_change_word("fork", "word"));
}

#[test]
fn test_cannot_change_to_invalid() {
    assert!(!can_change_word("word", "words"));
    assert!(!can_change_word("word", "wor"));
    assert!(!can_change_word("word", ""));
}

#[test]
fn test_cannot_change_word_to_word() {
    assert!(!can_change_word("word", "word"));
}

#[test]
fn test_truncated_comparison_can_match_across_lengths() {
    // Only the overlapping prefix is compared.
    assert!(can_change_word("word", "worm_"));
    assert!(can_change_word("wore", "wox"));
}

#[test]
fn test_distance_is_symmetric() {
    let words = ["cold", "cord", "card", "ward", "warm", "word", "soup"];
    for a in words {
        for b in words {
            assert_eq!(hamming_distance(a, b), hamming_distance(b, a), "{a} / {b}");
            assert_eq!(hamming_distance(a, b) == 0, a == b, "{a} / {b}");
        }
    }
}

#[test]
fn test_can_change_matches_distance_one() {
    let words = ["cold", "cord", "card", "ward", "warm", "word", "soup"];
    for a in words {
        for b in words {
            assert_eq!(can_change_word(a, b), hamming_distance(a, b) == 1, "{a} / {b}");
        }
    }
}

use weaver_solver::{sweep, Dictionary, LadderError, Limits};

fn get_test_words() -> Dictionary {
    Dictionary::from_words(["cold", "cord", "card", "ward", "warm", "soup"])
}

#[test]
fn test_sweep_covers_every_word_in_order() {
    let words = get_test_words();
    let report = sweep(&words, "cold", Limits::unlimited());

    let targets: Vec<&str> = report.entries.iter().map(|e| e.target.as_str()).collect();
    assert_eq!(targets, vec!["cold", "cord", "card", "ward", "warm", "soup"]);
    assert_eq!(report.start, "cold");
}

#[test]
fn test_sweep_lengths() {
    let words = get_test_words();
    let report = sweep(&words, "cold", Limits::unlimited());

    let lengths: Vec<Option<usize>> = report
        .entries
        .iter()
        .map(|e| e.result.as_ref().ok().copied())
        .collect();
    assert_eq!(lengths, vec![Some(1), Some(2), Some(3), Some(4), Some(5), None]);

    assert_eq!(report.solved_count(), 5);
    assert_eq!(report.unsolved_count(), 1);
    assert_eq!(report.budget_exhausted_count(), 0);
    assert_eq!(report.longest(), Some(("warm", 5)));
    assert_eq!(report.average_length(), Some(3.0));
    assert_eq!(
        report.length_distribution(),
        vec![(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]
    );
}

#[test]
fn test_sweep_with_step_budget() {
    let words = get_test_words();
    let report = sweep(&words, "cold", Limits::unlimited().with_max_steps(0));

    assert_eq!(report.solved_count(), 1);
    assert_eq!(report.budget_exhausted_count(), 5);
    assert!(matches!(
        report.entries[5].result,
        Err(LadderError::StepBudgetExceeded { max_steps: 0 })
    ));
}

#[test]
fn test_sweep_empty_dictionary() {
    let report = sweep(&Dictionary::default(), "cold", Limits::unlimited());
    assert!(report.entries.is_empty());
    assert_eq!(report.longest(), None);
    assert_eq!(report.average_length(), None);
    assert!(report.length_distribution().is_empty());
}

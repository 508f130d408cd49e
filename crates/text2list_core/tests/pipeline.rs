use std::sync::Once;

use pretty_assertions::assert_eq;
use text2list_core::pipeline::{run, tokenize};
use text2list_core::{AbortReason, MaxItemsCheck, Outcome, PipelineConfig, Separators};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(form_logging::initialize_for_tests);
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn accepted(outcome: &Outcome) -> (&[String], &[String]) {
    match outcome {
        Outcome::Accepted { added, merged } => (added.as_slice(), merged.as_slice()),
        Outcome::Aborted(reason) => panic!("expected accepted, got abort: {reason}"),
    }
}

#[test]
fn default_separators_split_on_space_and_comma() {
    init_logging();
    let result = run("text1 text2,text3 text4", &[], &PipelineConfig::default());
    let (added, merged) = accepted(&result.outcome);
    assert_eq!(added, list(&["text1", "text2", "text3", "text4"]).as_slice());
    assert_eq!(merged, added);
}

#[test]
fn custom_separators_are_a_regex() {
    init_logging();
    let config = PipelineConfig {
        separators: Separators::new("f|g").unwrap(),
        ..PipelineConfig::default()
    };
    let result = run("123f456g789f0", &[], &config);
    assert_eq!(result.merged().unwrap(), list(&["123", "456", "789", "0"]).as_slice());
}

#[test]
fn blank_tokens_never_reach_the_result() {
    init_logging();
    let inputs = [
        "   a     b   ",
        ",,, ,",
        "x,\t, y",
        "",
        "  \n  ",
        "a,,b||c",
    ];
    for input in inputs {
        let result = run(input, &[], &PipelineConfig::default());
        for entry in result.merged().unwrap() {
            assert!(!entry.trim().is_empty(), "blank entry from {input:?}");
        }
    }
    let result = run("   a     b   ", &[], &PipelineConfig::default());
    assert_eq!(result.merged().unwrap(), list(&["a", "b"]).as_slice());
}

#[test]
fn tokens_keep_whitespace_that_is_not_a_separator() {
    let separators = Separators::new(",").unwrap();
    assert_eq!(tokenize(" a , b ", &separators), vec!["a ", " b"]);
}

#[test]
fn empty_input_is_accepted_without_changes() {
    init_logging();
    let existing = list(&["a"]);
    let result = run("   ", &existing, &PipelineConfig::default());
    assert!(!result.is_aborted());
    let (added, merged) = accepted(&result.outcome);
    assert!(added.is_empty());
    assert_eq!(merged, existing.as_slice());
}

#[test]
fn list_duplicates_are_filtered_and_reported() {
    init_logging();
    let existing = list(&["a", "b"]);
    let result = run("  a  c  b  d", &existing, &PipelineConfig::default());

    assert_eq!(result.merged().unwrap(), list(&["c", "d", "a", "b"]).as_slice());
    assert_eq!(result.report.list_duplicates, Some(list(&["a", "b"])));
    assert_eq!(result.report.batch_duplicates, Some(Vec::new()));
}

#[test]
fn list_duplicates_stop_the_commit_when_configured() {
    init_logging();
    let config = PipelineConfig {
        stop_on_duplicate: true,
        ..PipelineConfig::default()
    };
    let existing = list(&["a", "b"]);
    let result = run("  a  c  b  d", &existing, &config);

    assert_eq!(result.outcome, Outcome::Aborted(AbortReason::ListDuplicates));
    assert!(result.is_aborted());
    assert!(result.merged().is_none());
    assert_eq!(result.report.list_duplicates, Some(list(&["a", "b"])));
}

#[test]
fn batch_duplicates_keep_first_occurrence() {
    init_logging();
    let result = run("x y x z y x", &[], &PipelineConfig::default());
    assert_eq!(result.merged().unwrap(), list(&["x", "y", "z"]).as_slice());
    assert_eq!(result.report.batch_duplicates, Some(list(&["x", "y"])));
}

#[test]
fn batch_duplicates_stop_before_list_check() {
    init_logging();
    let config = PipelineConfig {
        stop_on_duplicate: true,
        ..PipelineConfig::default()
    };
    let result = run("x a x", &list(&["a"]), &config);
    assert_eq!(result.outcome, Outcome::Aborted(AbortReason::BatchDuplicates));
    assert_eq!(result.report.batch_duplicates, Some(list(&["x"])));
    assert_eq!(result.report.list_duplicates, None);
}

#[test]
fn rerunning_the_same_text_never_duplicates() {
    init_logging();
    let config = PipelineConfig::default();
    let first = run("a b a c", &[], &config);
    let after_first = first.merged().unwrap().to_vec();
    let second = run("a b a c", &after_first, &config);
    let after_second = second.merged().unwrap();

    assert_eq!(after_second, after_first.as_slice());
    let mut sorted = after_second.to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), after_second.len());
}

#[test]
fn max_items_truncates_when_not_stopping() {
    init_logging();
    let config = PipelineConfig {
        max_items: Some(3),
        ..PipelineConfig::default()
    };
    let result = run("1 c 2 d", &list(&["a", "b"]), &config);
    let (added, merged) = accepted(&result.outcome);

    assert_eq!(added, list(&["1"]).as_slice());
    assert_eq!(merged, list(&["1", "a", "b"]).as_slice());
    assert_eq!(
        result.report.max_items,
        Some(MaxItemsCheck {
            limit: 3,
            exceeded: true
        })
    );
}

#[test]
fn max_items_stops_when_configured() {
    init_logging();
    let config = PipelineConfig {
        max_items: Some(3),
        stop_on_max_items_error: true,
        ..PipelineConfig::default()
    };
    let result = run("1 c 2 d", &list(&["a", "b"]), &config);
    assert_eq!(result.outcome, Outcome::Aborted(AbortReason::MaxItems));
    assert!(result.report.max_items.unwrap().exceeded);
}

#[test]
fn max_items_within_limit_is_reported_clear() {
    init_logging();
    let config = PipelineConfig {
        max_items: Some(5),
        ..PipelineConfig::default()
    };
    let result = run("1 2", &list(&["a"]), &config);
    assert_eq!(result.merged().unwrap(), list(&["1", "2", "a"]).as_slice());
    assert_eq!(
        result.report.max_items,
        Some(MaxItemsCheck {
            limit: 5,
            exceeded: false
        })
    );
}

#[test]
fn full_list_accepts_nothing_more() {
    init_logging();
    let config = PipelineConfig {
        max_items: Some(2),
        ..PipelineConfig::default()
    };
    let result = run("x y", &list(&["a", "b", "c"]), &config);
    let (added, merged) = accepted(&result.outcome);
    assert!(added.is_empty());
    assert_eq!(merged, list(&["a", "b", "c"]).as_slice());
}

#[test]
fn invalid_entries_are_filtered_and_reported() {
    init_logging();
    let config = PipelineConfig::default().with_validator(|entry: &str| entry.len() < 3);
    let result = run("   123  c   21234   d", &list(&["a", "b"]), &config);

    assert_eq!(result.merged().unwrap(), list(&["c", "d", "a", "b"]).as_slice());
    assert_eq!(result.report.invalid, Some(list(&["123", "21234"])));
}

#[test]
fn invalid_entries_stop_the_commit_when_configured() {
    init_logging();
    let config = PipelineConfig {
        stop_on_validation_error: true,
        ..PipelineConfig::default()
    }
    .with_validator(|entry: &str| entry.len() < 3);
    let result = run("   123  c   21234   d", &list(&["a", "b"]), &config);

    assert_eq!(result.outcome, Outcome::Aborted(AbortReason::Validation));
    assert_eq!(result.report.invalid, Some(list(&["123", "21234"])));
    assert_eq!(result.report.batch_duplicates, None);
}

#[test]
fn all_valid_input_reports_empty_invalid_set() {
    init_logging();
    let config = PipelineConfig::default().with_validator(|_: &str| true);
    let result = run("a b", &[], &config);
    assert_eq!(result.report.invalid, Some(Vec::new()));
}

#[test]
fn validation_runs_before_dedup() {
    init_logging();
    let config = PipelineConfig {
        stop_on_duplicate: true,
        ..PipelineConfig::default()
    }
    .with_validator(|entry: &str| entry != "bad");
    // The repeated token is invalid, so it never reaches the duplicate check.
    let result = run("bad ok bad", &[], &config);
    assert_eq!(result.merged().unwrap(), list(&["ok"]).as_slice());
}

#[test]
fn inputs_are_not_mutated() {
    init_logging();
    let existing = list(&["a", "b"]);
    let snapshot = existing.clone();
    let _ = run("c a", &existing, &PipelineConfig::default());
    assert_eq!(existing, snapshot);
}

// Integration tests for the frequency-map and membership problems

use algotrace::algorithms::frequency::{
    all_unique, anagrams, exclusive_items, intersection, intersection_with_dupes,
    most_frequent_char,
};
use algotrace::algorithms::Strategy;
use algotrace::snapshot::{Action, FrequencyAction, Tone};
use algotrace::structures::value::Value;

fn strs(items: &[&str]) -> Vec<Value> {
    items.iter().map(|&s| Value::from(s)).collect()
}

fn nums(items: &[i64]) -> Vec<Value> {
    items.iter().map(|&n| Value::Int(n)).collect()
}

#[test]
fn test_anagrams_true() {
    let traced = anagrams("restful", "fluster").expect("valid trace");
    assert!(traced.result);

    let last = traced.snapshots.last().expect("non-empty trace");
    assert_eq!(last.action, Action::Frequency(FrequencyAction::Complete));
    assert_eq!(last.result, Some(Value::Bool(true)));
}

#[test]
fn test_anagrams_mismatch_exits_early() {
    let traced = anagrams("abc", "abd").expect("valid trace");
    assert!(!traced.result);

    let last = traced.snapshots.last().expect("non-empty trace");
    assert_eq!(last.action, Action::Frequency(FrequencyAction::Mismatch));
    assert_eq!(last.action.tone(), Tone::Failure);

    // No success-toned step may precede the failure
    let failure_at = traced
        .snapshots
        .iter()
        .position(|s| s.action.tone() == Tone::Failure)
        .expect("a failure step");
    assert!(traced.snapshots[..failure_at]
        .iter()
        .all(|s| s.action.tone() != Tone::Success));
}

#[test]
fn test_anagrams_leftover_count() {
    // Same characters, different multiplicities
    let traced = anagrams("aab", "ab").expect("valid trace");
    assert!(!traced.result);
    let last = traced.snapshots.last().expect("non-empty trace");
    assert_eq!(last.action, Action::Frequency(FrequencyAction::Mismatch));
}

#[test]
fn test_anagrams_empty_strings() {
    let traced = anagrams("", "").expect("valid trace");
    assert!(traced.result);
    assert!(traced.snapshots.len() >= 2);
}

#[test]
fn test_most_frequent_char() {
    let traced = most_frequent_char("bookeeper").expect("valid trace");
    assert_eq!(traced.result, Some('e'));
}

#[test]
fn test_most_frequent_char_tie_goes_to_first() {
    let traced = most_frequent_char("abba").expect("valid trace");
    assert_eq!(traced.result, Some('a'));
}

#[test]
fn test_most_frequent_char_empty() {
    let traced = most_frequent_char("").expect("valid trace");
    assert_eq!(traced.result, None);
    let last = traced.snapshots.last().expect("non-empty trace");
    assert_eq!(last.result, Some(Value::Null));
}

#[test]
fn test_all_unique_both_strategies() {
    for strategy in [Strategy::BruteForce, Strategy::SetOptimized] {
        let dup = all_unique(&strs(&["q", "r", "s", "a", "r"]), strategy).expect("valid trace");
        assert!(!dup.result, "{:?}", strategy);
        let last = dup.snapshots.last().expect("non-empty trace");
        assert_eq!(last.action, Action::Frequency(FrequencyAction::Duplicate));

        let unique = all_unique(&strs(&["a", "b", "c"]), strategy).expect("valid trace");
        assert!(unique.result, "{:?}", strategy);
    }
}

#[test]
fn test_all_unique_empty() {
    for strategy in [Strategy::BruteForce, Strategy::SetOptimized] {
        let traced = all_unique(&[], strategy).expect("valid trace");
        assert!(traced.result);
        assert!(traced.snapshots.len() >= 2);
        assert!(traced.snapshots[0].action.is_initialize());
    }
}

#[test]
fn test_intersection_follows_second_array() {
    let a = nums(&[4, 2, 1, 6]);
    let b = nums(&[3, 6, 9, 2, 10]);
    for strategy in [Strategy::BruteForce, Strategy::SetOptimized] {
        let traced = intersection(&a, &b, strategy).expect("valid trace");
        assert_eq!(traced.result, nums(&[6, 2]), "{:?}", strategy);
    }
}

#[test]
fn test_exclusive_items() {
    let a = nums(&[4, 2, 1, 6]);
    let b = nums(&[3, 6, 9, 2, 10]);
    for strategy in [Strategy::BruteForce, Strategy::SetOptimized] {
        let traced = exclusive_items(&a, &b, strategy).expect("valid trace");
        assert_eq!(traced.result, nums(&[4, 1, 3, 9, 10]), "{:?}", strategy);
    }
}

#[test]
fn test_exclusive_items_disjoint_and_empty() {
    let traced = exclusive_items(&strs(&["a"]), &[], Strategy::SetOptimized).expect("valid trace");
    assert_eq!(traced.result, strs(&["a"]));

    let traced = exclusive_items(&[], &[], Strategy::BruteForce).expect("valid trace");
    assert!(traced.result.is_empty());
}

#[test]
fn test_intersection_with_dupes() {
    let traced = intersection_with_dupes(
        &strs(&["a", "b", "c", "b"]),
        &strs(&["x", "y", "b", "b"]),
    )
    .expect("valid trace");
    assert_eq!(traced.result, strs(&["b", "b"]));

    let traced = intersection_with_dupes(
        &strs(&["q", "b", "m", "s", "s", "s"]),
        &strs(&["s", "m", "s"]),
    )
    .expect("valid trace");
    assert_eq!(traced.result, strs(&["m", "s", "s"]));
}

#[test]
fn test_counts_shown_sorted() {
    let traced = anagrams("cab", "abc").expect("valid trace");
    let fields = traced.snapshots[3].state.fields();
    let counts = fields
        .iter()
        .find(|(name, _)| *name == "counts")
        .map(|(_, v)| v.to_string())
        .expect("counts field");
    assert_eq!(counts, "{'a': 1, 'b': 1, 'c': 1}");
}

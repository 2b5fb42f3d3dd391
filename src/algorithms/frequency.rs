//! Frequency-map and membership problems
//!
//! Every function here counts or remembers items in a hash map or set and
//! records a snapshot on each counter increment, each membership check, each
//! early exit, the final zero check, and completion.
//!
//! Item-list problems take `&[Value]` so strings, numbers and characters can
//! share one implementation.

use super::Strategy;
use crate::snapshot::{
    FrequencyAction as A, FrequencyState, InvariantViolation, Recorder, Traced,
};
use crate::structures::value::Value;

/// Do two strings use exactly the same characters the same number of times?
pub fn anagrams(first: &str, second: &str) -> Result<Traced<bool>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = FrequencyState::default();

    rec.emit(
        A::Initialize,
        format!("Check whether \"{}\" and \"{}\" are anagrams", first, second),
        concat!(
            "Count every character of the first string, ",
            "then cancel the counts out with the second string."
        ),
        state.clone(),
    );

    for (i, c) in first.chars().enumerate() {
        let count = state.counts.entry(Value::Char(c)).or_insert(0);
        *count += 1;
        let count = *count;
        state.index = Some(i);
        state.current = Some(Value::Char(c));
        rec.emit(
            A::Increment,
            format!("Count '{}'", c),
            format!("counts['{}'] is now {}.", c, count),
            state.clone(),
        );
    }

    for (i, c) in second.chars().enumerate() {
        let key = Value::Char(c);
        state.index = Some(i);
        state.current = Some(key.clone());

        if !state.counts.contains_key(&key) {
            rec.emit_result(
                A::Mismatch,
                format!("'{}' never appears in \"{}\"", c, first),
                concat!(
                    "A character without a counterpart means the strings cannot be anagrams. ",
                    "Exit early."
                ),
                state.clone(),
                false,
            );
            return rec.finish(false);
        }
        rec.emit(
            A::Check,
            format!("Found '{}' in the counts", c),
            format!("'{}' appears in the first string.", c),
            state.clone(),
        );

        let count = state.counts.entry(key).or_insert(0);
        *count -= 1;
        let count = *count;
        rec.emit(
            A::Decrement,
            format!("Cancel one '{}'", c),
            format!("counts['{}'] drops to {}.", c, count),
            state.clone(),
        );
    }

    state.index = None;
    let mut keys: Vec<Value> = state.counts.keys().cloned().collect();
    keys.sort();
    for key in keys {
        let count = state.counts.get(&key).copied().unwrap_or(0);
        state.current = Some(key.clone());
        if count != 0 {
            rec.emit_result(
                A::Mismatch,
                format!("{} is left at {}", key, count),
                "Every count must return to zero; this one did not.",
                state.clone(),
                false,
            );
            return rec.finish(false);
        }
        rec.emit(
            A::Verify,
            format!("{} balances to 0", key),
            "Both strings use this character equally often.",
            state.clone(),
        );
    }

    state.current = None;
    rec.emit_result(
        A::Complete,
        "Every count is zero: the strings are anagrams",
        "O(n + m) time, O(n) space for the character counts.",
        state,
        true,
    );
    rec.finish(true)
}

/// The most frequent character of `s`. Ties go to the character that appears
/// first in `s`; an empty string has no answer.
pub fn most_frequent_char(s: &str) -> Result<Traced<Option<char>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = FrequencyState::default();

    rec.emit(
        A::Initialize,
        format!("Find the most frequent character of \"{}\"", s),
        "First count every character, then scan the string again keeping the best count.",
        state.clone(),
    );

    for (i, c) in s.chars().enumerate() {
        let count = state.counts.entry(Value::Char(c)).or_insert(0);
        *count += 1;
        let count = *count;
        state.index = Some(i);
        state.current = Some(Value::Char(c));
        rec.emit(
            A::Increment,
            format!("Count '{}'", c),
            format!("counts['{}'] is now {}.", c, count),
            state.clone(),
        );
    }

    let mut best: Option<char> = None;
    for (i, c) in s.chars().enumerate() {
        let count = state.counts.get(&Value::Char(c)).copied().unwrap_or(0);
        state.index = Some(i);
        state.current = Some(Value::Char(c));

        let best_count = state.best.as_ref().map_or(0, |(_, n)| *n);
        let detail = if count > best_count {
            best = Some(c);
            state.best = Some((Value::Char(c), count));
            format!(
                "{} beats the best count of {}; '{}' is the new leader.",
                count, best_count, c
            )
        } else {
            format!("{} does not beat the best count of {}.", count, best_count)
        };
        rec.emit(
            A::Compare,
            format!("Compare '{}' ({}) with the leader", c, count),
            detail,
            state.clone(),
        );
    }

    state.index = None;
    state.current = None;
    let description = match best {
        Some(c) => format!("'{}' is the most frequent character", c),
        None => "The string is empty: there is no most frequent character".to_string(),
    };
    rec.emit_result(
        A::Complete,
        description,
        "Two linear passes: O(n) time, O(k) space for k distinct characters.",
        state,
        best,
    );
    rec.finish(best)
}

/// Does `items` contain no repeated element?
pub fn all_unique(items: &[Value], strategy: Strategy) -> Result<Traced<bool>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = FrequencyState::default();

    rec.emit(
        A::Initialize,
        format!("Check whether all {} items are unique", items.len()),
        match strategy {
            Strategy::BruteForce => "Compare every pair of items: O(n²) time, O(1) space.",
            Strategy::SetOptimized => "Remember each item in a set: O(n) time, O(n) space.",
        },
        state.clone(),
    );

    match strategy {
        Strategy::BruteForce => {
            for i in 0..items.len() {
                for j in (i + 1)..items.len() {
                    state.index = Some(i);
                    state.inner_index = Some(j);
                    state.current = Some(items[i].clone());
                    if items[i] == items[j] {
                        rec.emit_result(
                            A::Duplicate,
                            format!("items[{}] and items[{}] are both {}", i, j, items[i]),
                            "A repeated item was found. Exit early.",
                            state.clone(),
                            false,
                        );
                        return rec.finish(false);
                    }
                    rec.emit(
                        A::Compare,
                        format!("Compare items[{}] with items[{}]", i, j),
                        format!("{} differs from {}.", items[i], items[j]),
                        state.clone(),
                    );
                }
            }
        }
        Strategy::SetOptimized => {
            for (i, item) in items.iter().enumerate() {
                state.index = Some(i);
                state.current = Some(item.clone());
                if state.seen.contains(item) {
                    rec.emit_result(
                        A::Duplicate,
                        format!("{} is already in the set", item),
                        "A repeated item was found. Exit early.",
                        state.clone(),
                        false,
                    );
                    return rec.finish(false);
                }
                rec.emit(
                    A::Check,
                    format!("{} is not in the set yet", item),
                    "No earlier item matches it.",
                    state.clone(),
                );
                state.seen.insert(item.clone());
                rec.emit(
                    A::Insert,
                    format!("Add {} to the set", item),
                    format!("The set now holds {} item(s).", state.seen.len()),
                    state.clone(),
                );
            }
        }
    }

    state.index = None;
    state.inner_index = None;
    state.current = None;
    rec.emit_result(
        A::Complete,
        "No duplicates: every item is unique",
        "The scan finished without an early exit.",
        state,
        true,
    );
    rec.finish(true)
}

/// Items of `second` that also appear in `first`, in the order of `second`
pub fn intersection(
    first: &[Value],
    second: &[Value],
    strategy: Strategy,
) -> Result<Traced<Vec<Value>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = FrequencyState::default();

    rec.emit(
        A::Initialize,
        "Find the items shared by both arrays",
        match strategy {
            Strategy::BruteForce => {
                "For each item of the second array, scan the first array: O(n·m) time."
            }
            Strategy::SetOptimized => {
                "Put the first array in a set, then probe it with the second array: O(n + m) time."
            }
        },
        state.clone(),
    );

    match strategy {
        Strategy::BruteForce => {
            for (i, item) in second.iter().enumerate() {
                state.index = Some(i);
                state.current = Some(item.clone());
                for (j, candidate) in first.iter().enumerate() {
                    state.inner_index = Some(j);
                    let equal = candidate == item;
                    rec.emit(
                        A::Compare,
                        format!("Compare {} with first[{}]", item, j),
                        format!("{} {} {}.", item, if equal { "==" } else { "!=" }, candidate),
                        state.clone(),
                    );
                    if equal {
                        state.collected.push(item.clone());
                        rec.emit(
                            A::Collect,
                            format!("{} is shared", item),
                            "Add it to the result and stop scanning.",
                            state.clone(),
                        );
                        break;
                    }
                }
                state.inner_index = None;
            }
        }
        Strategy::SetOptimized => {
            for (j, item) in first.iter().enumerate() {
                state.index = Some(j);
                state.current = Some(item.clone());
                state.seen.insert(item.clone());
                rec.emit(
                    A::Insert,
                    format!("Add {} to the set", item),
                    "Set membership checks are O(1).",
                    state.clone(),
                );
            }
            for (i, item) in second.iter().enumerate() {
                state.index = Some(i);
                state.current = Some(item.clone());
                let present = state.seen.contains(item);
                rec.emit(
                    A::Check,
                    format!("Is {} in the set?", item),
                    if present { "Yes." } else { "No, skip it." },
                    state.clone(),
                );
                if present {
                    state.collected.push(item.clone());
                    rec.emit(
                        A::Collect,
                        format!("{} is shared", item),
                        "Add it to the result.",
                        state.clone(),
                    );
                }
            }
        }
    }

    let result = state.collected.clone();
    state.index = None;
    state.current = None;
    rec.emit_result(
        A::Complete,
        format!("Found {} shared item(s)", result.len()),
        "Every item of the second array has been checked.",
        state,
        result.clone(),
    );
    rec.finish(result)
}

/// Items that appear in exactly one of the two arrays: those of `first`
/// missing from `second`, followed by those of `second` missing from `first`
pub fn exclusive_items(
    first: &[Value],
    second: &[Value],
    strategy: Strategy,
) -> Result<Traced<Vec<Value>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = FrequencyState::default();

    rec.emit(
        A::Initialize,
        "Find the items that belong to only one array",
        match strategy {
            Strategy::BruteForce => "Scan the other array for every item: O(n·m) time.",
            Strategy::SetOptimized => "Build a set per array, then probe: O(n + m) time and space.",
        },
        state.clone(),
    );

    if strategy == Strategy::SetOptimized {
        for (i, item) in first.iter().enumerate() {
            state.index = Some(i);
            state.current = Some(item.clone());
            state.seen.insert(item.clone());
            rec.emit(
                A::Insert,
                format!("Add {} to the first set", item),
                "",
                state.clone(),
            );
        }
        for (i, item) in second.iter().enumerate() {
            state.index = Some(i);
            state.current = Some(item.clone());
            state.other_seen.insert(item.clone());
            rec.emit(
                A::Insert,
                format!("Add {} to the second set", item),
                "",
                state.clone(),
            );
        }
    }

    for (items, others, from_first) in [(first, second, true), (second, first, false)] {
        let (own_name, other_name) = if from_first {
            ("first", "second")
        } else {
            ("second", "first")
        };
        for (i, item) in items.iter().enumerate() {
            state.index = Some(i);
            state.current = Some(item.clone());

            let present = match strategy {
                Strategy::BruteForce => {
                    let mut found = false;
                    for (j, other) in others.iter().enumerate() {
                        state.inner_index = Some(j);
                        let equal = other == item;
                        rec.emit(
                            A::Compare,
                            format!("Compare {}[{}] with {}[{}]", own_name, i, other_name, j),
                            format!("{} {} {}.", item, if equal { "==" } else { "!=" }, other),
                            state.clone(),
                        );
                        if equal {
                            found = true;
                            break;
                        }
                    }
                    state.inner_index = None;
                    found
                }
                Strategy::SetOptimized => {
                    let set = if from_first {
                        &state.other_seen
                    } else {
                        &state.seen
                    };
                    let found = set.contains(item);
                    rec.emit(
                        A::Check,
                        format!("Is {} in the {} set?", item, other_name),
                        if found { "Yes, so it is not exclusive." } else { "No." },
                        state.clone(),
                    );
                    found
                }
            };

            if !present {
                state.collected.push(item.clone());
                rec.emit(
                    A::Collect,
                    format!("{} only appears in the {} array", item, own_name),
                    "Add it to the result.",
                    state.clone(),
                );
            }
        }
    }

    let result = state.collected.clone();
    state.index = None;
    state.current = None;
    rec.emit_result(
        A::Complete,
        format!("Found {} exclusive item(s)", result.len()),
        "Both arrays have been checked against each other.",
        state,
        result.clone(),
    );
    rec.finish(result)
}

/// Shared items, each repeated as often as it appears in both arrays
/// (`min` of the two counts), in first-occurrence order of `first`
pub fn intersection_with_dupes(
    first: &[Value],
    second: &[Value],
) -> Result<Traced<Vec<Value>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = FrequencyState::default();

    rec.emit(
        A::Initialize,
        "Find the shared items, keeping duplicates",
        "Count both arrays, then emit each shared item min(count_a, count_b) times.",
        state.clone(),
    );

    let mut order: Vec<Value> = Vec::new();
    for (i, item) in first.iter().enumerate() {
        let count = state.counts.entry(item.clone()).or_insert(0);
        *count += 1;
        let count = *count;
        if count == 1 {
            order.push(item.clone());
        }
        state.index = Some(i);
        state.current = Some(item.clone());
        rec.emit(
            A::Increment,
            format!("Count {} in the first array", item),
            format!("counts[{}] is now {}.", item, count),
            state.clone(),
        );
    }

    for (i, item) in second.iter().enumerate() {
        let count = state.other_counts.entry(item.clone()).or_insert(0);
        *count += 1;
        let count = *count;
        state.index = Some(i);
        state.current = Some(item.clone());
        rec.emit(
            A::Increment,
            format!("Count {} in the second array", item),
            format!("other counts[{}] is now {}.", item, count),
            state.clone(),
        );
    }

    state.index = None;
    for item in order {
        let mine = state.counts.get(&item).copied().unwrap_or(0);
        let theirs = state.other_counts.get(&item).copied().unwrap_or(0);
        state.current = Some(item.clone());
        rec.emit(
            A::Check,
            format!("Does {} appear in the second array?", item),
            format!("{} time(s) in the first, {} time(s) in the second.", mine, theirs),
            state.clone(),
        );
        for copy in 0..mine.min(theirs) {
            state.collected.push(item.clone());
            rec.emit(
                A::Collect,
                format!("Add {} (copy {})", item, copy + 1),
                format!("Keep min({}, {}) copies.", mine, theirs),
                state.clone(),
            );
        }
    }

    let result = state.collected.clone();
    state.current = None;
    rec.emit_result(
        A::Complete,
        format!("Found {} shared item(s) with duplicates", result.len()),
        "O(n + m) time, O(n + m) space for the two count maps.",
        state,
        result.clone(),
    );
    rec.finish(result)
}

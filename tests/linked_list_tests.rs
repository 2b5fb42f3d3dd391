// Integration tests for the linked-list problems, both traversal styles

use algotrace::algorithms::linked_list::{
    get_node_value, linked_list_find, linked_list_values, reverse_list, sum_list,
};
use algotrace::algorithms::Style;
use algotrace::snapshot::{Action, ListAction, State};
use algotrace::structures::list::LinkedList;
use algotrace::structures::value::Value;

const STYLES: [Style; 2] = [Style::Iterative, Style::Recursive];

fn letters(items: &[&str]) -> LinkedList<Value> {
    let values: Vec<Value> = items.iter().map(|&s| Value::from(s)).collect();
    LinkedList::from_values(&values)
}

#[test]
fn test_linked_list_values() {
    let list = letters(&["a", "b", "c", "d"]);
    for style in STYLES {
        let traced = linked_list_values(&list, style).expect("valid trace");
        assert_eq!(traced.result, list.values(), "{:?}", style);
    }
}

#[test]
fn test_linked_list_values_empty() {
    let list: LinkedList<Value> = LinkedList::from_values(&[]);
    for style in STYLES {
        let traced = linked_list_values(&list, style).expect("valid trace");
        assert!(traced.result.is_empty());
        assert!(traced.snapshots.len() >= 2);
    }
}

#[test]
fn test_sum_list() {
    let list = LinkedList::from_values(&[2, 8, 3, -1, 7]);
    for style in STYLES {
        let traced = sum_list(&list, style).expect("valid trace");
        assert_eq!(traced.result, 19, "{:?}", style);
    }

    let empty: LinkedList<i64> = LinkedList::from_values(&[]);
    assert_eq!(sum_list(&empty, Style::Recursive).expect("valid trace").result, 0);
}

#[test]
fn test_recursive_sum_combines_after_children() {
    let list = LinkedList::from_values(&[1, 2]);
    let traced = sum_list(&list, Style::Recursive).expect("valid trace");
    let actions: Vec<Action> = traced.snapshots.iter().map(|s| s.action).collect();

    let base = actions
        .iter()
        .position(|a| *a == Action::List(ListAction::BaseCase))
        .expect("base case");
    let first_combine = actions
        .iter()
        .position(|a| *a == Action::List(ListAction::Combine))
        .expect("combine step");
    assert!(first_combine > base);
    assert_eq!(
        actions
            .iter()
            .filter(|a| **a == Action::List(ListAction::Combine))
            .count(),
        2
    );
}

#[test]
fn test_recursive_depths_step_by_one() {
    let list = letters(&["a", "b", "c"]);
    let traced = linked_list_values(&list, Style::Recursive).expect("valid trace");
    let depths: Vec<usize> = traced
        .snapshots
        .iter()
        .filter(|s| s.action.is_call_entry())
        .filter_map(|s| s.state.depth())
        .collect();
    assert_eq!(depths, vec![0, 1, 2, 3]);
}

#[test]
fn test_linked_list_find() {
    let list = letters(&["a", "b", "c", "d"]);
    for style in STYLES {
        let hit = linked_list_find(&list, &Value::from("c"), style).expect("valid trace");
        assert!(hit.result, "{:?}", style);

        let miss = linked_list_find(&list, &Value::from("q"), style).expect("valid trace");
        assert!(!miss.result, "{:?}", style);
    }
}

#[test]
fn test_iterative_find_stops_at_match() {
    let list = letters(&["a", "b", "c", "d"]);
    let traced = linked_list_find(&list, &Value::from("b"), Style::Iterative).expect("valid trace");
    let last = traced.snapshots.last().expect("non-empty trace");
    assert_eq!(last.action, Action::List(ListAction::Found));

    let visits = traced
        .snapshots
        .iter()
        .filter(|s| s.action == Action::List(ListAction::Visit))
        .count();
    assert_eq!(visits, 2);
}

#[test]
fn test_get_node_value() {
    let list = letters(&["a", "b", "c", "d"]);
    for style in STYLES {
        let traced = get_node_value(&list, 2, style).expect("valid trace");
        assert_eq!(traced.result, Some(Value::from("c")), "{:?}", style);

        let traced = get_node_value(&list, 7, style).expect("valid trace");
        assert_eq!(traced.result, None, "{:?}", style);
        let last = traced.snapshots.last().expect("non-empty trace");
        assert_eq!(last.result, Some(Value::Null));
    }
}

#[test]
fn test_reverse_list() {
    let list = letters(&["a", "b", "c", "d", "e", "f"]);
    let expected = letters(&["f", "e", "d", "c", "b", "a"]).values();
    for style in STYLES {
        let traced = reverse_list(&list, style).expect("valid trace");
        assert_eq!(traced.result, expected, "{:?}", style);
    }
    // Input list is left as it was
    assert_eq!(list.values(), letters(&["a", "b", "c", "d", "e", "f"]).values());
}

#[test]
fn test_reverse_relinks_one_node_per_step() {
    let list = letters(&["a", "b", "c"]);
    let traced = reverse_list(&list, Style::Iterative).expect("valid trace");
    let relinks: Vec<&State> = traced
        .snapshots
        .iter()
        .filter(|s| s.action == Action::List(ListAction::Relink))
        .map(|s| &s.state)
        .collect();
    assert_eq!(relinks.len(), 3);

    // After the first relink the old head points nowhere
    let State::List(first) = relinks[0] else {
        panic!("list state expected");
    };
    assert_eq!(first.links, vec![None, Some(2), None]);

    let last = traced.snapshots.last().expect("non-empty trace");
    let State::List(done) = &last.state else {
        panic!("list state expected");
    };
    assert_eq!(done.head, Some(2));
    assert_eq!(done.links, vec![None, Some(0), Some(1)]);
}

#[test]
fn test_reverse_single_and_empty() {
    for style in STYLES {
        let one = letters(&["a"]);
        assert_eq!(reverse_list(&one, style).expect("valid trace").result, one.values());

        let empty: LinkedList<Value> = LinkedList::from_values(&[]);
        assert!(reverse_list(&empty, style).expect("valid trace").result.is_empty());
    }
}

/// Every list trace for `list`, one per problem and style
fn all_list_traces(list: &LinkedList<Value>) -> Vec<(String, Vec<Action>)> {
    let numbers = LinkedList::from_values(&[4, -2, 9]);
    let mut traces = Vec::new();
    for style in STYLES {
        let runs = [
            ("values", linked_list_values(list, style).expect("valid trace").snapshots),
            ("sum", sum_list(&numbers, style).expect("valid trace").snapshots),
            (
                "find",
                linked_list_find(list, &Value::from("zz"), style)
                    .expect("valid trace")
                    .snapshots,
            ),
            ("get", get_node_value(list, 9, style).expect("valid trace").snapshots),
            ("reverse", reverse_list(list, style).expect("valid trace").snapshots),
        ];
        for (name, snapshots) in runs {
            let actions = snapshots.iter().map(|s| s.action).collect();
            traces.push((format!("{} {:?}", name, style), actions));
        }
    }
    traces
}

#[test]
fn test_every_call_is_followed_by_a_decision() {
    let list = letters(&["a", "b", "c"]);
    for (label, actions) in all_list_traces(&list) {
        for (i, action) in actions.iter().enumerate() {
            if *action == Action::List(ListAction::Call) {
                assert_eq!(
                    actions.get(i + 1),
                    Some(&Action::List(ListAction::Decide)),
                    "{}: step {} enters a call without deciding",
                    label,
                    i
                );
            }
        }
    }
}

#[test]
fn test_every_visit_is_followed_by_a_decision() {
    let list = letters(&["a", "b", "c"]);
    for (label, actions) in all_list_traces(&list) {
        let visits = actions
            .iter()
            .filter(|a| **a == Action::List(ListAction::Visit))
            .count();
        if label.ends_with("Iterative") {
            assert!(visits > 0, "{}: no visits", label);
        }
        for (i, action) in actions.iter().enumerate() {
            if *action == Action::List(ListAction::Visit) {
                assert_eq!(
                    actions.get(i + 1),
                    Some(&Action::List(ListAction::Decide)),
                    "{}: step {} visits without deciding",
                    label,
                    i
                );
            }
        }
    }
}

#[test]
fn test_recursive_sum_decides_before_recursing() {
    let list = LinkedList::from_values(&[1]);
    let traced = sum_list(&list, Style::Recursive).expect("valid trace");
    let actions: Vec<Action> = traced.snapshots.iter().map(|s| s.action).collect();

    use ListAction::*;
    let expected: Vec<Action> = [
        Initialize, Call, Decide, Recurse, Call, Decide, BaseCase, Combine, Complete,
    ]
    .into_iter()
    .map(Action::List)
    .collect();
    assert_eq!(actions, expected);
}

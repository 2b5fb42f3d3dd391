//! Linked-list traversal, each problem in an iterative and a recursive style
//!
//! Iterative variants record, per node: visit, a decision, and (unless they
//! return early) a move to the next node. Recursive variants record, per call:
//! call entry with its depth, a decision, and either a base-case return or a
//! recursion into `depth + 1`. Anything combined after a child call returns is
//! recorded after that call's own snapshots.
//!
//! Frame-local data (node, depth, remaining index) travels as parameters. The
//! shared [`ListState`] is only a display buffer that each frame overwrites
//! from its own locals right before it records.

use super::Style;
use crate::snapshot::{InvariantViolation, ListAction as A, ListState, Recorder, Traced};
use crate::structures::list::LinkedList;
use crate::structures::value::Value;
use crate::structures::NodeId;

fn value_of<T: Clone + Into<Value>>(list: &LinkedList<T>, node: Option<NodeId>) -> Option<Value> {
    node.and_then(|id| list.value(id)).cloned().map(Into::into)
}

fn describe(node: Option<NodeId>) -> String {
    match node {
        Some(id) => format!("node {}", id),
        None => "null".to_string(),
    }
}

/// Point the display buffer at one node
fn focus<T: Clone + Into<Value>>(
    state: &mut ListState,
    list: &LinkedList<T>,
    node: Option<NodeId>,
    position: usize,
    depth: Option<usize>,
) {
    state.node = node;
    state.value = value_of(list, node);
    state.next = node.and_then(|id| list.next(id));
    state.position = position;
    state.depth = depth;
}

fn initial_state<T>(list: &LinkedList<T>) -> ListState {
    ListState {
        head: list.head(),
        node: list.head(),
        links: list.links(),
        ..ListState::default()
    }
}

fn opening_detail(style: Style) -> &'static str {
    match style {
        Style::Iterative => "Walk the list with a single pointer: O(n) time, O(1) extra space.",
        Style::Recursive => "Recurse once per node: O(n) time, O(n) call-stack space.",
    }
}

/// Record the null check on `node` that decides between the base case and
/// doing this node's work
fn decide_null(rec: &mut Recorder, state: &ListState, node: Option<NodeId>, work: &str) {
    match node {
        Some(id) => rec.emit(
            A::Decide,
            format!("node {} is not null: continue", id),
            work.to_string(),
            state.clone(),
        ),
        None => rec.emit(
            A::Decide,
            "node is null: base case",
            "There is no node left in this branch.",
            state.clone(),
        ),
    }
}

/// Every value of the list, head to tail
pub fn linked_list_values<T: Clone + Into<Value>>(
    list: &LinkedList<T>,
    style: Style,
) -> Result<Traced<Vec<T>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = initial_state(list);
    rec.emit(
        A::Initialize,
        "Collect the values of the list",
        opening_detail(style),
        state.clone(),
    );

    let mut values: Vec<T> = Vec::new();
    match style {
        Style::Iterative => {
            let mut current = list.head();
            let mut position = 0;
            while let Some(id) = current {
                focus(&mut state, list, current, position, None);
                rec.emit(
                    A::Visit,
                    format!("Visit {}", describe(current)),
                    format!("current points at position {}.", position),
                    state.clone(),
                );
                decide_null(&mut rec, &state, current, "Collect its value.");

                if let Some(value) = list.value(id) {
                    values.push(value.clone());
                    state.collected.push(value.clone().into());
                }
                rec.emit(
                    A::Collect,
                    format!("Push {}", state.value.clone().unwrap_or_default()),
                    format!("values now holds {} item(s).", values.len()),
                    state.clone(),
                );

                current = list.next(id);
                position += 1;
                rec.emit(
                    A::Advance,
                    format!("Move to {}", describe(current)),
                    "current = current.next",
                    state.clone(),
                );
            }
        }
        Style::Recursive => {
            fill_values(list, list.head(), 0, &mut values, &mut rec, &mut state);
        }
    }

    state.node = None;
    state.value = None;
    state.next = None;
    state.depth = None;
    rec.emit_result(
        A::Complete,
        format!("Collected {} value(s)", values.len()),
        "The end of the list was reached.",
        state,
        values.clone(),
    );
    rec.finish(values)
}

fn fill_values<T: Clone + Into<Value>>(
    list: &LinkedList<T>,
    node: Option<NodeId>,
    depth: usize,
    values: &mut Vec<T>,
    rec: &mut Recorder,
    state: &mut ListState,
) {
    focus(state, list, node, depth, Some(depth));
    rec.emit(
        A::Call,
        format!("fillValues({}) at depth {}", describe(node), depth),
        "Enter a new call frame.",
        state.clone(),
    );
    decide_null(rec, state, node, "Collect its value, then recurse.");

    let Some(id) = node else {
        rec.emit(
            A::BaseCase,
            "Reached null: return",
            "Nothing left to collect in this branch.",
            state.clone(),
        );
        return;
    };

    if let Some(value) = list.value(id) {
        values.push(value.clone());
        state.collected.push(value.clone().into());
    }
    rec.emit(
        A::Collect,
        format!("Push {}", state.value.clone().unwrap_or_default()),
        format!("values now holds {} item(s).", values.len()),
        state.clone(),
    );

    let next = list.next(id);
    rec.emit(
        A::Recurse,
        format!("Recurse into {}", describe(next)),
        format!("Call fillValues at depth {}.", depth + 1),
        state.clone(),
    );
    fill_values(list, next, depth + 1, values, rec, state);
}

/// Sum of every value in the list; `0` for an empty list
pub fn sum_list(list: &LinkedList<i64>, style: Style) -> Result<Traced<i64>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = initial_state(list);
    state.total = Some(0);
    rec.emit(
        A::Initialize,
        "Add up the values of the list",
        opening_detail(style),
        state.clone(),
    );

    let total = match style {
        Style::Iterative => {
            let mut total: i64 = 0;
            let mut current = list.head();
            let mut position = 0;
            while let Some(id) = current {
                focus(&mut state, list, current, position, None);
                rec.emit(
                    A::Visit,
                    format!("Visit {}", describe(current)),
                    format!("current points at position {}.", position),
                    state.clone(),
                );
                decide_null(&mut rec, &state, current, "Add its value to the total.");

                let value = list.value(id).copied().unwrap_or(0);
                total = total.wrapping_add(value);
                state.total = Some(total);
                rec.emit(
                    A::Collect,
                    format!("Add {} to the total", value),
                    format!("total is now {}.", total),
                    state.clone(),
                );

                current = list.next(id);
                position += 1;
                rec.emit(
                    A::Advance,
                    format!("Move to {}", describe(current)),
                    "current = current.next",
                    state.clone(),
                );
            }
            total
        }
        Style::Recursive => sum_from(list, list.head(), 0, &mut rec, &mut state),
    };

    state.node = None;
    state.value = None;
    state.next = None;
    state.depth = None;
    state.total = Some(total);
    rec.emit_result(
        A::Complete,
        format!("The sum is {}", total),
        "Every node has been added.",
        state,
        total,
    );
    rec.finish(total)
}

fn sum_from(
    list: &LinkedList<i64>,
    node: Option<NodeId>,
    depth: usize,
    rec: &mut Recorder,
    state: &mut ListState,
) -> i64 {
    focus(state, list, node, depth, Some(depth));
    state.total = None;
    rec.emit(
        A::Call,
        format!("sumList({}) at depth {}", describe(node), depth),
        "Enter a new call frame.",
        state.clone(),
    );
    decide_null(rec, state, node, "Recurse, then add this value.");

    let Some(id) = node else {
        state.total = Some(0);
        rec.emit(
            A::BaseCase,
            "Reached null: return 0",
            "The sum of an empty list is 0.",
            state.clone(),
        );
        return 0;
    };

    let value = list.value(id).copied().unwrap_or(0);
    let next = list.next(id);
    rec.emit(
        A::Recurse,
        format!("Recurse into {}", describe(next)),
        format!("This frame returns {} + sumList(next).", value),
        state.clone(),
    );
    let rest = sum_from(list, next, depth + 1, rec, state);

    let total = value.wrapping_add(rest);
    focus(state, list, node, depth, Some(depth));
    state.total = Some(total);
    rec.emit(
        A::Combine,
        format!("Return {} + {} = {}", value, rest, total),
        format!("Back at depth {} after the child call returned.", depth),
        state.clone(),
    );
    total
}

/// Does the list contain `target`?
pub fn linked_list_find<T: Clone + PartialEq + Into<Value>>(
    list: &LinkedList<T>,
    target: &T,
    style: Style,
) -> Result<Traced<bool>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = initial_state(list);
    let wanted: Value = target.clone().into();
    rec.emit(
        A::Initialize,
        format!("Search the list for {}", wanted),
        opening_detail(style),
        state.clone(),
    );

    let found = match style {
        Style::Iterative => {
            let mut current = list.head();
            let mut position = 0;
            while let Some(id) = current {
                focus(&mut state, list, current, position, None);
                rec.emit(
                    A::Visit,
                    format!("Visit {}", describe(current)),
                    format!("current points at position {}.", position),
                    state.clone(),
                );

                let hit = list.value(id) == Some(target);
                rec.emit(
                    A::Decide,
                    format!("Compare {} with {}", state.value.clone().unwrap_or_default(), wanted),
                    if hit { "They match." } else { "No match." },
                    state.clone(),
                );
                if hit {
                    rec.emit_result(
                        A::Found,
                        format!("Found {} at position {}", wanted, position),
                        "Return true without visiting the rest of the list.",
                        state,
                        true,
                    );
                    return rec.finish(true);
                }

                current = list.next(id);
                position += 1;
                rec.emit(
                    A::Advance,
                    format!("Move to {}", describe(current)),
                    "current = current.next",
                    state.clone(),
                );
            }
            false
        }
        Style::Recursive => find_from(list, list.head(), target, 0, &mut rec, &mut state),
    };

    state.node = None;
    state.value = None;
    state.next = None;
    state.depth = None;
    let description = if found {
        format!("{} is in the list", wanted)
    } else {
        format!("{} is not in the list", wanted)
    };
    rec.emit_result(
        A::Complete,
        description,
        "The search has finished.",
        state,
        found,
    );
    rec.finish(found)
}

fn find_from<T: Clone + PartialEq + Into<Value>>(
    list: &LinkedList<T>,
    node: Option<NodeId>,
    target: &T,
    depth: usize,
    rec: &mut Recorder,
    state: &mut ListState,
) -> bool {
    focus(state, list, node, depth, Some(depth));
    rec.emit(
        A::Call,
        format!("linkedListFind({}) at depth {}", describe(node), depth),
        "Enter a new call frame.",
        state.clone(),
    );

    let Some(id) = node else {
        decide_null(rec, state, node, "");
        rec.emit(
            A::BaseCase,
            "Reached null: return false",
            "The target is not in this branch.",
            state.clone(),
        );
        return false;
    };

    let hit = list.value(id) == Some(target);
    rec.emit(
        A::Decide,
        format!("Compare node {} with the target", id),
        if hit { "They match." } else { "No match." },
        state.clone(),
    );
    if hit {
        rec.emit(
            A::BaseCase,
            "Match: return true",
            "The answer propagates back up unchanged.",
            state.clone(),
        );
        return true;
    }

    let next = list.next(id);
    rec.emit(
        A::Recurse,
        format!("Recurse into {}", describe(next)),
        format!("Call linkedListFind at depth {}.", depth + 1),
        state.clone(),
    );
    find_from(list, next, target, depth + 1, rec, state)
}

/// Value at position `index`, or `None` past the end of the list
pub fn get_node_value<T: Clone + Into<Value>>(
    list: &LinkedList<T>,
    index: usize,
    style: Style,
) -> Result<Traced<Option<T>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = initial_state(list);
    rec.emit(
        A::Initialize,
        format!("Get the value at index {}", index),
        opening_detail(style),
        state.clone(),
    );

    let value = match style {
        Style::Iterative => {
            let mut current = list.head();
            let mut position = 0;
            while let Some(id) = current {
                focus(&mut state, list, current, position, None);
                rec.emit(
                    A::Visit,
                    format!("Visit {}", describe(current)),
                    format!("current points at position {}.", position),
                    state.clone(),
                );

                let hit = position == index;
                rec.emit(
                    A::Decide,
                    format!("Is position {} equal to {}?", position, index),
                    if hit { "Yes." } else { "No, keep walking." },
                    state.clone(),
                );
                if hit {
                    let value = list.value(id).cloned();
                    rec.emit_result(
                        A::Found,
                        format!(
                            "Index {} holds {}",
                            index,
                            state.value.clone().unwrap_or_default()
                        ),
                        "Return its value.",
                        state,
                        value.clone(),
                    );
                    return rec.finish(value);
                }

                current = list.next(id);
                position += 1;
                rec.emit(
                    A::Advance,
                    format!("Move to {}", describe(current)),
                    "current = current.next",
                    state.clone(),
                );
            }
            None
        }
        Style::Recursive => value_from(list, list.head(), index, 0, &mut rec, &mut state),
    };

    state.node = None;
    state.value = None;
    state.next = None;
    state.depth = None;
    let description = match &value {
        Some(v) => format!("Index {} holds {}", index, Into::<Value>::into(v.clone())),
        None => format!("The list has no index {}", index),
    };
    rec.emit_result(
        A::Complete,
        description,
        "The lookup has finished.",
        state,
        value.clone(),
    );
    rec.finish(value)
}

fn value_from<T: Clone + Into<Value>>(
    list: &LinkedList<T>,
    node: Option<NodeId>,
    remaining: usize,
    depth: usize,
    rec: &mut Recorder,
    state: &mut ListState,
) -> Option<T> {
    focus(state, list, node, depth, Some(depth));
    rec.emit(
        A::Call,
        format!("getNodeValue({}, {}) at depth {}", describe(node), remaining, depth),
        "Enter a new call frame.",
        state.clone(),
    );

    let Some(id) = node else {
        decide_null(rec, state, node, "");
        rec.emit(
            A::BaseCase,
            "Reached null: return null",
            "The index is past the end of the list.",
            state.clone(),
        );
        return None;
    };

    let hit = remaining == 0;
    rec.emit(
        A::Decide,
        format!("Is the remaining index {} zero?", remaining),
        if hit { "Yes." } else { "No, count down and recurse." },
        state.clone(),
    );
    if hit {
        rec.emit(
            A::BaseCase,
            format!("Return {}", state.value.clone().unwrap_or_default()),
            "This node is the requested one.",
            state.clone(),
        );
        return list.value(id).cloned();
    }

    let next = list.next(id);
    rec.emit(
        A::Recurse,
        format!("Recurse into {} with index {}", describe(next), remaining - 1),
        format!("Call getNodeValue at depth {}.", depth + 1),
        state.clone(),
    );
    value_from(list, next, remaining - 1, depth + 1, rec, state)
}

/// Reverse the list's links and return its values in the new order. The
/// input list is untouched; relinking happens on a private copy.
pub fn reverse_list<T: Clone + Into<Value>>(
    list: &LinkedList<T>,
    style: Style,
) -> Result<Traced<Vec<T>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut work = list.clone();
    let mut state = initial_state(&work);
    rec.emit(
        A::Initialize,
        "Reverse the list",
        opening_detail(style),
        state.clone(),
    );

    let new_head = match style {
        Style::Iterative => {
            let mut prev: Option<NodeId> = None;
            let mut current = work.head();
            let mut position = 0;
            while let Some(id) = current {
                focus(&mut state, &work, current, position, None);
                state.prev = prev;
                rec.emit(
                    A::Visit,
                    format!("Visit {}", describe(current)),
                    format!("prev = {}, next = {}.", describe(prev), describe(state.next)),
                    state.clone(),
                );
                decide_null(&mut rec, &state, current, "Relink it to prev.");

                let next = work.next(id);
                work.set_next(id, prev);
                state.links = work.links();
                rec.emit(
                    A::Relink,
                    format!("Point node {} back at {}", id, describe(prev)),
                    "current.next = prev",
                    state.clone(),
                );

                prev = current;
                current = next;
                position += 1;
                state.prev = prev;
                rec.emit(
                    A::Advance,
                    format!("Move to {}", describe(current)),
                    "prev = current; current = next",
                    state.clone(),
                );
            }
            prev
        }
        Style::Recursive => reverse_from(&mut work, list.head(), None, 0, &mut rec, &mut state),
    };

    work.set_head(new_head);
    let values = work.values();
    state.head = new_head;
    state.node = None;
    state.value = None;
    state.prev = None;
    state.next = None;
    state.depth = None;
    state.links = work.links();
    state.collected = values.iter().cloned().map(Into::into).collect();
    rec.emit_result(
        A::Complete,
        format!("The list now starts at {}", describe(new_head)),
        "Every link points backwards.",
        state,
        values.clone(),
    );
    rec.finish(values)
}

fn reverse_from<T: Clone + Into<Value>>(
    work: &mut LinkedList<T>,
    node: Option<NodeId>,
    prev: Option<NodeId>,
    depth: usize,
    rec: &mut Recorder,
    state: &mut ListState,
) -> Option<NodeId> {
    focus(state, work, node, depth, Some(depth));
    state.prev = prev;
    rec.emit(
        A::Call,
        format!(
            "reverseList({}, prev = {}) at depth {}",
            describe(node),
            describe(prev),
            depth
        ),
        "Enter a new call frame.",
        state.clone(),
    );
    decide_null(rec, state, node, "Relink it to prev, then recurse.");

    let Some(id) = node else {
        rec.emit(
            A::BaseCase,
            format!("Reached null: {} is the new head", describe(prev)),
            "Return prev.",
            state.clone(),
        );
        return prev;
    };

    let next = work.next(id);
    work.set_next(id, prev);
    state.links = work.links();
    rec.emit(
        A::Relink,
        format!("Point node {} back at {}", id, describe(prev)),
        "head.next = prev",
        state.clone(),
    );

    rec.emit(
        A::Recurse,
        format!("Recurse into {}", describe(next)),
        format!("Call reverseList(next, head) at depth {}.", depth + 1),
        state.clone(),
    );
    reverse_from(work, next, node, depth + 1, rec, state)
}

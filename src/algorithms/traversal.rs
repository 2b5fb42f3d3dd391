//! Breadth-first tree traversal
//!
//! The queue starts with the root. Each dequeue records four moments: the
//! dequeue itself, the visit, the value being added to the result, and (when
//! the node has children) the children being enqueued, left before right.

use crate::snapshot::{InvariantViolation, Recorder, Traced, TraversalAction as A, TraversalState};
use crate::structures::tree::BinaryTree;
use crate::structures::value::Value;
use crate::structures::NodeId;
use std::collections::VecDeque;

fn entry<T: Clone + Into<Value>>(tree: &BinaryTree<T>, id: NodeId) -> (NodeId, Value) {
    let value = tree.value(id).cloned().map(Into::into).unwrap_or_default();
    (id, value)
}

/// Values of the tree in level order
pub fn breadth_first_values<T: Clone + Into<Value>>(
    tree: &BinaryTree<T>,
) -> Result<Traced<Vec<T>>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut state = TraversalState::default();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    if let Some(root) = tree.root() {
        queue.push_back(root);
    }
    state.queue = queue.iter().map(|&id| entry(tree, id)).collect();
    rec.emit(
        A::Initialize,
        match tree.root() {
            Some(_) => "Start with the root in the queue",
            None => "The tree is empty: the queue starts empty",
        },
        "Dequeue from the front, enqueue children at the back: O(n) time, O(n) queue space.",
        state.clone(),
    );

    let mut values: Vec<T> = Vec::new();
    while let Some(id) = queue.pop_front() {
        let current = entry(tree, id);
        state.queue = queue.iter().map(|&id| entry(tree, id)).collect();
        state.current = Some(current.clone());
        rec.emit(
            A::Dequeue,
            format!("Dequeue {}", current.1),
            format!("{} node(s) remain in the queue.", queue.len()),
            state.clone(),
        );

        rec.emit(
            A::Visit,
            format!("Visit {}", current.1),
            format!("Node {} is processed in level order.", id),
            state.clone(),
        );

        if let Some(value) = tree.value(id) {
            values.push(value.clone());
        }
        state.values.push(current.1.clone());
        rec.emit(
            A::Collect,
            format!("Add {} to the result", current.1),
            format!("The result holds {} value(s).", state.values.len()),
            state.clone(),
        );

        let children: Vec<NodeId> = [tree.left(id), tree.right(id)]
            .into_iter()
            .flatten()
            .collect();
        if !children.is_empty() {
            queue.extend(children.iter().copied());
            state.queue = queue.iter().map(|&id| entry(tree, id)).collect();
            let names: Vec<String> = children
                .iter()
                .map(|&child| entry(tree, child).1.to_string())
                .collect();
            rec.emit(
                A::Enqueue,
                format!("Enqueue {}", names.join(" then ")),
                "Left child first, then right child.",
                state.clone(),
            );
        }
    }

    state.current = None;
    state.queue.clear();
    rec.emit_result(
        A::Complete,
        format!("The queue is empty: visited {} node(s)", values.len()),
        "Every node has been visited exactly once.",
        state,
        values.clone(),
    );
    rec.finish(values)
}

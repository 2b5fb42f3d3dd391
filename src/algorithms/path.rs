//! Maximum root-to-leaf path sum, computed bottom-up
//!
//! Each call returns the best path sum from its node down to a leaf. A null
//! child returns [`PathSum::NoPath`], which loses every comparison. Internal
//! nodes record a compare-paths snapshot once both children have returned,
//! then a combine snapshot with `node + max(left, right)`.
//!
//! The root-to-current path is passed down as a slice, so sibling branches
//! never see each other's entries. The only state shared across branches is
//! [`BestPath`], threaded through every call by `&mut`.

use crate::snapshot::{InvariantViolation, PathAction as A, PathState, Recorder, Traced};
use crate::structures::tree::BinaryTree;
use crate::structures::value::PathSum;
use crate::structures::NodeId;

/// Best leaf path found so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestPath {
    pub sum: PathSum,
    pub path: Vec<i64>,
}

impl BestPath {
    /// Take `path` as the new best if it beats the current one
    fn offer(&mut self, sum: PathSum, path: &[i64]) -> bool {
        if sum > self.sum {
            self.sum = sum;
            self.path = path.to_vec();
            true
        } else {
            false
        }
    }
}

/// A snapshot state for one frame, filled from that frame's locals
fn frame(
    node: Option<NodeId>,
    value: Option<i64>,
    depth: usize,
    path: &[i64],
    best: &BestPath,
) -> PathState {
    PathState {
        node,
        value,
        depth,
        path: path.to_vec(),
        best: best.sum,
        best_path: best.path.clone(),
        ..PathState::default()
    }
}

/// Largest sum along any root-to-leaf path; `NoPath` for an empty tree
pub fn max_path_sum(tree: &BinaryTree<i64>) -> Result<Traced<PathSum>, InvariantViolation> {
    let mut rec = Recorder::new();
    let mut best = BestPath::default();

    rec.emit(
        A::Initialize,
        "Find the maximum root-to-leaf path sum",
        "Each call returns node + max(left, right); null children return -∞ so they never win.",
        frame(None, None, 0, &[], &best),
    );

    let result = visit(tree, tree.root(), 0, &[], &mut best, &mut rec);

    let mut state = frame(None, None, 0, &[], &best);
    state.combined = Some(result);
    let description = match result {
        PathSum::Sum(s) => format!("The maximum path sum is {}", s),
        PathSum::NoPath => "The tree is empty: no root-to-leaf path exists".to_string(),
    };
    let detail = if best.path.is_empty() {
        "The result is the -∞ sentinel.".to_string()
    } else {
        let steps: Vec<String> = best.path.iter().map(|v| v.to_string()).collect();
        format!("Best path: {}", steps.join(" -> "))
    };
    rec.emit_result(A::Complete, description, detail, state, result);
    rec.finish(result)
}

fn visit(
    tree: &BinaryTree<i64>,
    node: Option<NodeId>,
    depth: usize,
    path: &[i64],
    best: &mut BestPath,
    rec: &mut Recorder,
) -> PathSum {
    let Some(id) = node else {
        let mut state = frame(None, None, depth, path, best);
        state.combined = Some(PathSum::NoPath);
        rec.emit(
            A::BaseCase,
            "Null child: return -∞",
            "There is no leaf below a missing node.",
            state,
        );
        return PathSum::NoPath;
    };

    let value = tree.value(id).copied().unwrap_or(0);
    let mut here = path.to_vec();
    here.push(value);

    rec.emit(
        A::Call,
        format!("maxPathSum(node {} = {}) at depth {}", id, value, depth),
        "Enter a new call frame.",
        frame(node, Some(value), depth, &here, best),
    );

    if tree.is_leaf(id) {
        // Leaf upwards, the same order the combine steps add in
        let sum = here.iter().rev().fold(0i64, |acc, v| acc.saturating_add(*v));
        let improved = best.offer(PathSum::Sum(sum), &here);
        let mut state = frame(node, Some(value), depth, &here, best);
        state.path_sum = Some(sum);
        state.combined = Some(PathSum::Sum(value));
        rec.emit(
            A::Leaf,
            format!("Leaf {}: path sum {}", value, sum),
            if improved {
                format!("{} is the new best. Return {}.", sum, value)
            } else {
                format!("Does not beat the best of {}. Return {}.", best.sum, value)
            },
            state,
        );
        return PathSum::Sum(value);
    }

    let left = visit(tree, tree.left(id), depth + 1, &here, best, rec);
    let right = visit(tree, tree.right(id), depth + 1, &here, best, rec);

    let mut state = frame(node, Some(value), depth, &here, best);
    state.left = Some(left);
    state.right = Some(right);
    rec.emit(
        A::ComparePaths,
        format!("Compare left {} with right {}", left, right),
        format!("The larger child path continues through node {}.", id),
        state.clone(),
    );

    let combined = left.max(right).add(value);
    state.combined = Some(combined);
    rec.emit(
        A::Combine,
        format!("Return {} + {} = {}", value, left.max(right), combined),
        format!("Back at depth {} with both children resolved.", depth),
        state,
    );
    combined
}

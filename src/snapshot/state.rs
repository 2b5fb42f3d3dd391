//! Per-family state bags
//!
//! A state bag is the algorithm-specific part of a snapshot: counts, pointers,
//! queue contents, recursion depth, accumulated path. Bags are plain owned
//! data. Algorithms keep a live bag while they run and hand the recorder a
//! clone of it, so later mutation of the live bag never reaches a recorded one.

use crate::structures::value::{PathSum, Value};
use crate::structures::NodeId;
use rustc_hash::{FxHashMap, FxHashSet};

/// Frequency-map and membership problems
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrequencyState {
    pub counts: FxHashMap<Value, i64>,
    /// Second map, used when both inputs are counted
    pub other_counts: FxHashMap<Value, i64>,
    pub seen: FxHashSet<Value>,
    pub other_seen: FxHashSet<Value>,
    pub index: Option<usize>,
    pub inner_index: Option<usize>,
    pub current: Option<Value>,
    pub collected: Vec<Value>,
    /// Running maximum as `(item, count)`
    pub best: Option<(Value, i64)>,
}

/// Pair search over a number array
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairState {
    pub target: i64,
    pub index: Option<usize>,
    pub inner_index: Option<usize>,
    pub current: Option<i64>,
    pub complement: Option<i64>,
    /// Value -> first index it was seen at
    pub previous: FxHashMap<i64, usize>,
    pub pair: Option<(usize, usize)>,
}

/// Linked-list traversal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub head: Option<NodeId>,
    pub node: Option<NodeId>,
    pub value: Option<Value>,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    pub position: usize,
    /// Recursion depth; `None` for iterative variants
    pub depth: Option<usize>,
    pub collected: Vec<Value>,
    pub total: Option<i64>,
    /// `next` index of every node, indexed by node id
    pub links: Vec<Option<NodeId>>,
}

/// Breadth-first tree traversal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraversalState {
    /// Queue contents front to back as `(node, value)`
    pub queue: Vec<(NodeId, Value)>,
    pub current: Option<(NodeId, Value)>,
    pub values: Vec<Value>,
}

/// Bottom-up root-to-leaf path optimization
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathState {
    pub node: Option<NodeId>,
    pub value: Option<i64>,
    pub depth: usize,
    /// Root-to-current path
    pub path: Vec<i64>,
    pub path_sum: Option<i64>,
    pub left: Option<PathSum>,
    pub right: Option<PathSum>,
    pub combined: Option<PathSum>,
    pub best: PathSum,
    pub best_path: Vec<i64>,
}

/// A snapshot's state bag, tagged by algorithm family
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Frequency(FrequencyState),
    Pair(PairState),
    List(ListState),
    Traversal(TraversalState),
    Path(PathState),
}

fn push_opt<T: Into<Value>>(
    fields: &mut Vec<(&'static str, Value)>,
    name: &'static str,
    v: Option<T>,
) {
    if let Some(v) = v {
        fields.push((name, v.into()));
    }
}

impl State {
    /// Recursion depth carried by the bag, if any
    pub fn depth(&self) -> Option<usize> {
        match self {
            State::List(s) => s.depth,
            State::Path(s) => Some(s.depth),
            _ => None,
        }
    }

    /// Named fields for display, in a stable order. Hash maps and sets are
    /// rendered sorted by key; absent optional fields are skipped.
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        let mut fields = Vec::new();
        match self {
            State::Frequency(s) => {
                push_opt(&mut fields, "i", s.index);
                push_opt(&mut fields, "j", s.inner_index);
                push_opt(&mut fields, "current", s.current.clone());
                if !s.counts.is_empty() {
                    fields.push(("counts", Value::sorted_map(s.counts.clone())));
                }
                if !s.other_counts.is_empty() {
                    fields.push(("other counts", Value::sorted_map(s.other_counts.clone())));
                }
                if !s.seen.is_empty() {
                    let mut seen: Vec<Value> = s.seen.iter().cloned().collect();
                    seen.sort();
                    fields.push(("set", Value::List(seen)));
                }
                if !s.other_seen.is_empty() {
                    let mut seen: Vec<Value> = s.other_seen.iter().cloned().collect();
                    seen.sort();
                    fields.push(("other set", Value::List(seen)));
                }
                if !s.collected.is_empty() {
                    fields.push(("result", Value::List(s.collected.clone())));
                }
                if let Some((item, count)) = &s.best {
                    fields.push(("best", item.clone()));
                    fields.push(("best count", Value::Int(*count)));
                }
            }
            State::Pair(s) => {
                fields.push(("target", Value::Int(s.target)));
                push_opt(&mut fields, "i", s.index);
                push_opt(&mut fields, "j", s.inner_index);
                push_opt(&mut fields, "num", s.current);
                push_opt(&mut fields, "complement", s.complement);
                if !s.previous.is_empty() {
                    fields.push(("previous", Value::sorted_map(s.previous.clone())));
                }
                push_opt(&mut fields, "pair", s.pair);
            }
            State::List(s) => {
                push_opt(&mut fields, "depth", s.depth);
                push_opt(&mut fields, "head", s.head);
                push_opt(&mut fields, "current", s.node);
                push_opt(&mut fields, "value", s.value.clone());
                push_opt(&mut fields, "prev", s.prev);
                push_opt(&mut fields, "next", s.next);
                fields.push(("position", Value::from(s.position)));
                push_opt(&mut fields, "total", s.total);
                if !s.collected.is_empty() {
                    fields.push(("values", Value::List(s.collected.clone())));
                }
                if !s.links.is_empty() {
                    fields.push(("links", Value::list(s.links.clone())));
                }
            }
            State::Traversal(s) => {
                fields.push((
                    "queue",
                    Value::list(s.queue.iter().map(|(_, v)| v.clone())),
                ));
                push_opt(&mut fields, "current", s.current.as_ref().map(|(_, v)| v.clone()));
                fields.push(("values", Value::List(s.values.clone())));
            }
            State::Path(s) => {
                fields.push(("depth", Value::from(s.depth)));
                push_opt(&mut fields, "node", s.value);
                fields.push(("path", Value::list(s.path.clone())));
                push_opt(&mut fields, "path sum", s.path_sum);
                push_opt(&mut fields, "left", s.left);
                push_opt(&mut fields, "right", s.right);
                push_opt(&mut fields, "combined", s.combined);
                fields.push(("best", Value::from(s.best)));
                fields.push(("best path", Value::list(s.best_path.clone())));
            }
        }
        fields
    }
}

impl From<FrequencyState> for State {
    fn from(s: FrequencyState) -> Self {
        State::Frequency(s)
    }
}

impl From<PairState> for State {
    fn from(s: PairState) -> Self {
        State::Pair(s)
    }
}

impl From<ListState> for State {
    fn from(s: ListState) -> Self {
        State::List(s)
    }
}

impl From<TraversalState> for State {
    fn from(s: TraversalState) -> Self {
        State::Traversal(s)
    }
}

impl From<PathState> for State {
    fn from(s: PathState) -> Self {
        State::Path(s)
    }
}

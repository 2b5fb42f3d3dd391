//! Action tags attached to every snapshot
//!
//! Each algorithm family has its own fixed tag enumeration. [`Action`] wraps
//! them so a trace can be replayed and rendered without knowing which family
//! produced it. Tags classify themselves: exactly one tag per family is
//! initialize-class, and a small set per family may end a trace.

/// Display tone of a tag, used by the renderer to color steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Failure,
}

/// Tags for frequency-map and membership problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyAction {
    Initialize,
    Increment,
    Decrement,
    Check,
    Compare,
    Insert,
    Collect,
    /// Early exit: a character or item has no counterpart
    Mismatch,
    /// Early exit: a repeated item was found
    Duplicate,
    Verify,
    Complete,
}

/// Tags for hash-based and brute-force pair search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairAction {
    Initialize,
    CheckComplement,
    Compare,
    Store,
    PairFound,
    Complete,
}

/// Tags for linked-list traversal, iterative and recursive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    Initialize,
    Visit,
    Decide,
    Collect,
    Relink,
    Advance,
    Call,
    BaseCase,
    Recurse,
    Combine,
    Found,
    Complete,
}

/// Tags for breadth-first tree traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalAction {
    Initialize,
    Dequeue,
    Visit,
    Collect,
    Enqueue,
    Complete,
}

/// Tags for bottom-up root-to-leaf path optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathAction {
    Initialize,
    Call,
    BaseCase,
    Leaf,
    ComparePaths,
    Combine,
    Complete,
}

/// A snapshot's tag, tagged by algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Frequency(FrequencyAction),
    Pair(PairAction),
    List(ListAction),
    Traversal(TraversalAction),
    Path(PathAction),
}

impl Action {
    /// Short lowercase label, e.g. `check-complement`
    pub fn label(&self) -> &'static str {
        match self {
            Action::Frequency(a) => match a {
                FrequencyAction::Initialize => "initialize",
                FrequencyAction::Increment => "increment",
                FrequencyAction::Decrement => "decrement",
                FrequencyAction::Check => "check",
                FrequencyAction::Compare => "compare",
                FrequencyAction::Insert => "insert",
                FrequencyAction::Collect => "collect",
                FrequencyAction::Mismatch => "mismatch",
                FrequencyAction::Duplicate => "duplicate",
                FrequencyAction::Verify => "verify",
                FrequencyAction::Complete => "complete",
            },
            Action::Pair(a) => match a {
                PairAction::Initialize => "initialize",
                PairAction::CheckComplement => "check-complement",
                PairAction::Compare => "compare",
                PairAction::Store => "store",
                PairAction::PairFound => "found-pair",
                PairAction::Complete => "complete",
            },
            Action::List(a) => match a {
                ListAction::Initialize => "initialize",
                ListAction::Visit => "visit",
                ListAction::Decide => "decide",
                ListAction::Collect => "collect",
                ListAction::Relink => "relink",
                ListAction::Advance => "advance",
                ListAction::Call => "call",
                ListAction::BaseCase => "base-case",
                ListAction::Recurse => "recurse",
                ListAction::Combine => "combine",
                ListAction::Found => "found",
                ListAction::Complete => "complete",
            },
            Action::Traversal(a) => match a {
                TraversalAction::Initialize => "initialize",
                TraversalAction::Dequeue => "dequeue",
                TraversalAction::Visit => "visit",
                TraversalAction::Collect => "add-to-result",
                TraversalAction::Enqueue => "add-children",
                TraversalAction::Complete => "complete",
            },
            Action::Path(a) => match a {
                PathAction::Initialize => "initialize",
                PathAction::Call => "call",
                PathAction::BaseCase => "base-case",
                PathAction::Leaf => "leaf",
                PathAction::ComparePaths => "compare-paths",
                PathAction::Combine => "combine",
                PathAction::Complete => "complete",
            },
        }
    }

    pub fn is_initialize(&self) -> bool {
        matches!(
            self,
            Action::Frequency(FrequencyAction::Initialize)
                | Action::Pair(PairAction::Initialize)
                | Action::List(ListAction::Initialize)
                | Action::Traversal(TraversalAction::Initialize)
                | Action::Path(PathAction::Initialize)
        )
    }

    /// Whether a trace is allowed to end on this tag
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Action::Frequency(
                FrequencyAction::Mismatch | FrequencyAction::Duplicate | FrequencyAction::Complete
            ) | Action::Pair(PairAction::PairFound | PairAction::Complete)
                | Action::List(ListAction::Found | ListAction::Complete)
                | Action::Traversal(TraversalAction::Complete)
                | Action::Path(PathAction::Complete)
        )
    }

    /// Whether this tag marks entry into a recursive call
    pub fn is_call_entry(&self) -> bool {
        matches!(
            self,
            Action::List(ListAction::Call) | Action::Path(PathAction::Call)
        )
    }

    pub fn tone(&self) -> Tone {
        match self {
            Action::Frequency(FrequencyAction::Mismatch | FrequencyAction::Duplicate) => {
                Tone::Failure
            }
            Action::Frequency(FrequencyAction::Collect | FrequencyAction::Complete)
            | Action::Pair(PairAction::PairFound)
            | Action::List(ListAction::Found | ListAction::Complete)
            | Action::Traversal(TraversalAction::Complete)
            | Action::Path(PathAction::Complete) => Tone::Success,
            _ => Tone::Neutral,
        }
    }
}

impl From<FrequencyAction> for Action {
    fn from(a: FrequencyAction) -> Self {
        Action::Frequency(a)
    }
}

impl From<PairAction> for Action {
    fn from(a: PairAction) -> Self {
        Action::Pair(a)
    }
}

impl From<ListAction> for Action {
    fn from(a: ListAction) -> Self {
        Action::List(a)
    }
}

impl From<TraversalAction> for Action {
    fn from(a: TraversalAction) -> Self {
        Action::Traversal(a)
    }
}

impl From<PathAction> for Action {
    fn from(a: PathAction) -> Self {
        Action::Path(a)
    }
}

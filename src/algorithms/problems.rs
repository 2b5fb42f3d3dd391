//! Problem catalogue and run dispatch
//!
//! A [`RunRequest`] names a [`Problem`], an optional [`Approach`] and typed
//! [`RunInput`]. [`run`] executes it eagerly and returns an [`AlgorithmRun`]
//! holding the whole trace. Runs are independent: starting a new one simply
//! replaces the previous value.

use super::errors::RunError;
use super::{frequency, linked_list, pairs, path, traversal, Strategy, Style};
use crate::snapshot::{Snapshot, Traced};
use crate::structures::list::LinkedList;
use crate::structures::tree::BinaryTree;
use crate::structures::value::Value;
use log::debug;
use std::fmt;
use std::time::{Duration, Instant};

/// The fixed set of traceable problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    Anagrams,
    MostFrequentChar,
    AllUnique,
    Intersection,
    ExclusiveItems,
    IntersectionWithDupes,
    PairSum,
    PairProduct,
    LinkedListValues,
    SumList,
    LinkedListFind,
    GetNodeValue,
    ReverseList,
    BreadthFirstValues,
    MaxPathSum,
}

/// An algorithmic strategy offered by a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approach {
    BruteForce,
    SetOptimized,
    Iterative,
    Recursive,
}

/// Shape of the input a problem consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    TwoStrings,
    Text,
    Items,
    TwoItemLists,
    NumbersWithTarget,
    List,
    ListWithTarget,
    ListWithIndex,
    NumberList,
    Tree,
    NumberTree,
}

/// Typed, already validated input
#[derive(Debug, Clone, PartialEq)]
pub enum RunInput {
    TwoStrings(String, String),
    Text(String),
    Items(Vec<Value>),
    TwoItemLists(Vec<Value>, Vec<Value>),
    NumbersWithTarget(Vec<i64>, i64),
    List(Vec<Value>),
    ListWithTarget(Vec<Value>, Value),
    ListWithIndex(Vec<Value>, usize),
    NumberList(Vec<i64>),
    Tree(Vec<Option<Value>>),
    NumberTree(Vec<Option<i64>>),
}

const SEARCH: &[Approach] = &[Approach::BruteForce, Approach::SetOptimized];
const TRAVERSAL: &[Approach] = &[Approach::Iterative, Approach::Recursive];

impl Problem {
    pub const ALL: [Problem; 15] = [
        Problem::Anagrams,
        Problem::MostFrequentChar,
        Problem::AllUnique,
        Problem::Intersection,
        Problem::ExclusiveItems,
        Problem::IntersectionWithDupes,
        Problem::PairSum,
        Problem::PairProduct,
        Problem::LinkedListValues,
        Problem::SumList,
        Problem::LinkedListFind,
        Problem::GetNodeValue,
        Problem::ReverseList,
        Problem::BreadthFirstValues,
        Problem::MaxPathSum,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Problem::Anagrams => "anagrams",
            Problem::MostFrequentChar => "most-frequent-char",
            Problem::AllUnique => "all-unique",
            Problem::Intersection => "intersection",
            Problem::ExclusiveItems => "exclusive-items",
            Problem::IntersectionWithDupes => "intersection-with-dupes",
            Problem::PairSum => "pair-sum",
            Problem::PairProduct => "pair-product",
            Problem::LinkedListValues => "linked-list-values",
            Problem::SumList => "sum-list",
            Problem::LinkedListFind => "linked-list-find",
            Problem::GetNodeValue => "get-node-value",
            Problem::ReverseList => "reverse-list",
            Problem::BreadthFirstValues => "breadth-first-values",
            Problem::MaxPathSum => "max-path-sum",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Problem> {
        Problem::ALL.iter().copied().find(|p| p.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Problem::Anagrams => "Anagrams",
            Problem::MostFrequentChar => "Most Frequent Character",
            Problem::AllUnique => "All Unique",
            Problem::Intersection => "Intersection",
            Problem::ExclusiveItems => "Exclusive Items",
            Problem::IntersectionWithDupes => "Intersection With Dupes",
            Problem::PairSum => "Pair Sum",
            Problem::PairProduct => "Pair Product",
            Problem::LinkedListValues => "Linked List Values",
            Problem::SumList => "Sum List",
            Problem::LinkedListFind => "Linked List Find",
            Problem::GetNodeValue => "Get Node Value",
            Problem::ReverseList => "Reverse List",
            Problem::BreadthFirstValues => "Breadth First Values",
            Problem::MaxPathSum => "Max Root To Leaf Path Sum",
        }
    }

    /// Approaches this problem offers; empty when there is only one way
    pub fn approaches(&self) -> &'static [Approach] {
        match self {
            Problem::AllUnique
            | Problem::Intersection
            | Problem::ExclusiveItems
            | Problem::PairSum
            | Problem::PairProduct => SEARCH,
            Problem::LinkedListValues
            | Problem::SumList
            | Problem::LinkedListFind
            | Problem::GetNodeValue
            | Problem::ReverseList => TRAVERSAL,
            Problem::Anagrams
            | Problem::MostFrequentChar
            | Problem::IntersectionWithDupes
            | Problem::BreadthFirstValues
            | Problem::MaxPathSum => &[],
        }
    }

    pub fn default_approach(&self) -> Option<Approach> {
        self.approaches().first().copied()
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Problem::Anagrams => InputKind::TwoStrings,
            Problem::MostFrequentChar => InputKind::Text,
            Problem::AllUnique => InputKind::Items,
            Problem::Intersection | Problem::ExclusiveItems | Problem::IntersectionWithDupes => {
                InputKind::TwoItemLists
            }
            Problem::PairSum | Problem::PairProduct => InputKind::NumbersWithTarget,
            Problem::LinkedListValues | Problem::ReverseList => InputKind::List,
            Problem::SumList => InputKind::NumberList,
            Problem::LinkedListFind => InputKind::ListWithTarget,
            Problem::GetNodeValue => InputKind::ListWithIndex,
            Problem::BreadthFirstValues => InputKind::Tree,
            Problem::MaxPathSum => InputKind::NumberTree,
        }
    }

    /// Built-in example input, used when none is supplied
    pub fn sample_input(&self) -> RunInput {
        fn strs(items: &[&str]) -> Vec<Value> {
            items.iter().map(|&s| Value::from(s)).collect()
        }
        fn nums(items: &[i64]) -> Vec<Value> {
            items.iter().map(|&n| Value::Int(n)).collect()
        }

        match self {
            Problem::Anagrams => RunInput::TwoStrings("restful".into(), "fluster".into()),
            Problem::MostFrequentChar => RunInput::Text("bookeeper".into()),
            Problem::AllUnique => RunInput::Items(strs(&["q", "r", "s", "a", "r"])),
            Problem::Intersection | Problem::ExclusiveItems => {
                RunInput::TwoItemLists(nums(&[4, 2, 1, 6]), nums(&[3, 6, 9, 2, 10]))
            }
            Problem::IntersectionWithDupes => RunInput::TwoItemLists(
                strs(&["a", "b", "c", "b"]),
                strs(&["x", "y", "b", "b"]),
            ),
            Problem::PairSum => RunInput::NumbersWithTarget(vec![3, 2, 5, 4, 1], 8),
            Problem::PairProduct => RunInput::NumbersWithTarget(vec![3, 2, 5, 4, 1], 8),
            Problem::LinkedListValues => RunInput::List(strs(&["a", "b", "c", "d"])),
            Problem::SumList => RunInput::NumberList(vec![2, 8, 3, -1, 7]),
            Problem::LinkedListFind => {
                RunInput::ListWithTarget(strs(&["a", "b", "c", "d"]), Value::from("c"))
            }
            Problem::GetNodeValue => RunInput::ListWithIndex(strs(&["a", "b", "c", "d"]), 2),
            Problem::ReverseList => RunInput::List(strs(&["a", "b", "c", "d", "e", "f"])),
            Problem::BreadthFirstValues => RunInput::Tree(
                ["a", "b", "c", "d", "e", "", "f"]
                    .iter()
                    .map(|&s| if s.is_empty() { None } else { Some(Value::from(s)) })
                    .collect(),
            ),
            Problem::MaxPathSum => RunInput::NumberTree(vec![
                Some(3),
                Some(11),
                Some(4),
                Some(4),
                Some(-2),
                None,
                Some(1),
            ]),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl Approach {
    pub const ALL: [Approach; 4] = [
        Approach::BruteForce,
        Approach::SetOptimized,
        Approach::Iterative,
        Approach::Recursive,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Approach::BruteForce => "brute-force",
            Approach::SetOptimized => "set",
            Approach::Iterative => "iterative",
            Approach::Recursive => "recursive",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Approach> {
        Approach::ALL.iter().copied().find(|a| a.slug() == slug)
    }

    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Approach::BruteForce => Some(Strategy::BruteForce),
            Approach::SetOptimized => Some(Strategy::SetOptimized),
            _ => None,
        }
    }

    pub fn style(&self) -> Option<Style> {
        match self {
            Approach::Iterative => Some(Style::Iterative),
            Approach::Recursive => Some(Style::Recursive),
            _ => None,
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl InputKind {
    /// Human-readable argument shape, shown in usage errors
    pub fn usage(&self) -> &'static str {
        match self {
            InputKind::TwoStrings => "two strings",
            InputKind::Text => "one string",
            InputKind::Items => "a JSON array",
            InputKind::TwoItemLists => "two JSON arrays",
            InputKind::NumbersWithTarget => "a JSON array of integers and an integer target",
            InputKind::List => "a JSON array of list values",
            InputKind::ListWithTarget => "a JSON array of list values and a JSON target value",
            InputKind::ListWithIndex => "a JSON array of list values and a non-negative index",
            InputKind::NumberList => "a JSON array of integers",
            InputKind::Tree => "a level-order JSON array with null for absent nodes",
            InputKind::NumberTree => {
                "a level-order JSON array of integers with null for absent nodes"
            }
        }
    }
}

impl RunInput {
    pub fn kind(&self) -> InputKind {
        match self {
            RunInput::TwoStrings(..) => InputKind::TwoStrings,
            RunInput::Text(_) => InputKind::Text,
            RunInput::Items(_) => InputKind::Items,
            RunInput::TwoItemLists(..) => InputKind::TwoItemLists,
            RunInput::NumbersWithTarget(..) => InputKind::NumbersWithTarget,
            RunInput::List(_) => InputKind::List,
            RunInput::ListWithTarget(..) => InputKind::ListWithTarget,
            RunInput::ListWithIndex(..) => InputKind::ListWithIndex,
            RunInput::NumberList(_) => InputKind::NumberList,
            RunInput::Tree(_) => InputKind::Tree,
            RunInput::NumberTree(_) => InputKind::NumberTree,
        }
    }
}

/// One user action: run a problem on an input with an approach
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub problem: Problem,
    /// `None` picks the problem's default approach
    pub approach: Option<Approach>,
    pub input: RunInput,
}

impl RunRequest {
    pub fn new(problem: Problem, approach: Option<Approach>, input: RunInput) -> Self {
        RunRequest {
            problem,
            approach,
            input,
        }
    }

    /// Request the problem's built-in example
    pub fn sample(problem: Problem) -> Self {
        RunRequest::new(problem, None, problem.sample_input())
    }
}

/// A finished run, ready for playback
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    pub problem: Problem,
    pub approach: Option<Approach>,
    pub input: RunInput,
    pub result: Value,
    pub snapshots: Vec<Snapshot>,
    pub elapsed: Duration,
}

impl AlgorithmRun {
    /// Re-run the same input with a different approach
    pub fn rerun_with(&self, approach: Approach) -> Result<AlgorithmRun, RunError> {
        run(RunRequest::new(self.problem, Some(approach), self.input.clone()))
    }

    /// The approach offered after this one, wrapping around
    pub fn next_approach(&self) -> Option<Approach> {
        let offered = self.problem.approaches();
        let current = self.approach?;
        let at = offered.iter().position(|a| *a == current)?;
        offered.get((at + 1) % offered.len()).copied()
    }
}

fn resolve_approach(
    problem: Problem,
    approach: Option<Approach>,
) -> Result<Option<Approach>, RunError> {
    match approach {
        None => Ok(problem.default_approach()),
        Some(a) if problem.approaches().contains(&a) => Ok(Some(a)),
        Some(a) => Err(RunError::UnsupportedApproach {
            problem: problem.slug(),
            approach: a.slug(),
        }),
    }
}

fn erase<R: Into<Value>>(traced: Traced<R>) -> (Value, Vec<Snapshot>) {
    (traced.result.into(), traced.snapshots)
}

/// Execute a request to completion and collect its trace
pub fn run(request: RunRequest) -> Result<AlgorithmRun, RunError> {
    let RunRequest {
        problem,
        approach,
        input,
    } = request;
    let approach = resolve_approach(problem, approach)?;
    debug!("running {} ({:?}) on {:?}", problem, approach, input);

    let strategy = approach.and_then(|a| a.strategy()).unwrap_or(Strategy::SetOptimized);
    let style = approach.and_then(|a| a.style()).unwrap_or(Style::Iterative);
    let mismatch = || RunError::InputMismatch {
        problem: problem.slug(),
        expected: problem.input_kind().usage(),
    };

    let started = Instant::now();
    let (result, snapshots) = match (problem, &input) {
        (Problem::Anagrams, RunInput::TwoStrings(a, b)) => erase(frequency::anagrams(a, b)?),
        (Problem::MostFrequentChar, RunInput::Text(s)) => erase(frequency::most_frequent_char(s)?),
        (Problem::AllUnique, RunInput::Items(items)) => {
            erase(frequency::all_unique(items, strategy)?)
        }
        (Problem::Intersection, RunInput::TwoItemLists(a, b)) => {
            erase(frequency::intersection(a, b, strategy)?)
        }
        (Problem::ExclusiveItems, RunInput::TwoItemLists(a, b)) => {
            erase(frequency::exclusive_items(a, b, strategy)?)
        }
        (Problem::IntersectionWithDupes, RunInput::TwoItemLists(a, b)) => {
            erase(frequency::intersection_with_dupes(a, b)?)
        }
        (Problem::PairSum, RunInput::NumbersWithTarget(nums, target)) => {
            erase(pairs::pair_sum(nums, *target, strategy)?)
        }
        (Problem::PairProduct, RunInput::NumbersWithTarget(nums, target)) => {
            erase(pairs::pair_product(nums, *target, strategy)?)
        }
        (Problem::LinkedListValues, RunInput::List(values)) => {
            let list = LinkedList::from_values(values);
            erase(linked_list::linked_list_values(&list, style)?)
        }
        (Problem::SumList, RunInput::NumberList(values)) => {
            let list = LinkedList::from_values(values);
            erase(linked_list::sum_list(&list, style)?)
        }
        (Problem::LinkedListFind, RunInput::ListWithTarget(values, target)) => {
            let list = LinkedList::from_values(values);
            erase(linked_list::linked_list_find(&list, target, style)?)
        }
        (Problem::GetNodeValue, RunInput::ListWithIndex(values, index)) => {
            let list = LinkedList::from_values(values);
            erase(linked_list::get_node_value(&list, *index, style)?)
        }
        (Problem::ReverseList, RunInput::List(values)) => {
            let list = LinkedList::from_values(values);
            erase(linked_list::reverse_list(&list, style)?)
        }
        (Problem::BreadthFirstValues, RunInput::Tree(slots)) => {
            let tree = BinaryTree::from_level_order(slots)?;
            erase(traversal::breadth_first_values(&tree)?)
        }
        (Problem::MaxPathSum, RunInput::NumberTree(slots)) => {
            let tree = BinaryTree::from_level_order(slots)?;
            erase(path::max_path_sum(&tree)?)
        }
        _ => return Err(mismatch()),
    };
    let elapsed = started.elapsed();

    debug!(
        "{} produced {} snapshot(s) in {:?}",
        problem,
        snapshots.len(),
        elapsed
    );

    Ok(AlgorithmRun {
        problem,
        approach,
        input,
        result,
        snapshots,
        elapsed,
    })
}

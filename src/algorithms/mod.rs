//! Traced algorithm library
//!
//! Every entry is a pure function from typed input to a [`Traced`] result:
//! the return value plus the snapshots that explain how it was reached.
//!
//! - [`frequency`]: anagrams, most frequent character, uniqueness, set
//!   intersection and exclusive items
//! - [`pairs`]: pair sum and pair product
//! - [`linked_list`]: list traversal problems, iterative and recursive
//! - [`traversal`]: breadth-first tree values
//! - [`path`]: maximum root-to-leaf path sum
//! - [`problems`]: the problem catalogue and the run dispatcher
//! - [`errors`]: [`errors::RunError`]
//!
//! # Approaches
//!
//! Problems with two strategies return the same answer for the same input
//! whichever strategy runs. Only the trace narrative differs.
//!
//! [`Traced`]: crate::snapshot::Traced

pub mod errors;
pub mod frequency;
pub mod linked_list;
pub mod pairs;
pub mod path;
pub mod problems;
pub mod traversal;

/// Search strategy for membership and pair problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Nested scans, constant extra space
    BruteForce,
    /// One pass with a hash set or map
    SetOptimized,
}

/// Control-flow style for linked-structure traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Iterative,
    Recursive,
}

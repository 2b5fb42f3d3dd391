//! Data model shared by the algorithms and the snapshots they record
//!
//! - [`value`]: display values carried inside snapshots, plus [`value::PathSum`]
//! - [`list`]: arena linked list
//! - [`tree`]: arena binary tree built from a level-order array
//!
//! # Arenas
//!
//! Linked structures are stored as `Vec`s of nodes whose links are integer
//! [`NodeId`]s. Snapshots can therefore refer to "the current node" by id
//! without borrowing the structure, and copying a structure is a plain clone.

pub mod list;
pub mod tree;
pub mod value;

use thiserror::Error;

/// Index of a node inside its arena
pub type NodeId = usize;

/// Errors raised while building a structure from its flat encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("level-order slot {index} holds a node whose parent is null")]
    OrphanNode { index: usize },
}

//! Errors raised while dispatching a run
//!
//! Malformed text never gets this far; see [`crate::input`]. What remains is a
//! request whose typed input does not fit the chosen problem, an approach the
//! problem does not offer, or a defect caught by trace validation.

use crate::snapshot::InvariantViolation;
use crate::structures::StructureError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    #[error("{problem} expects {expected}")]
    InputMismatch {
        problem: &'static str,
        expected: &'static str,
    },

    #[error("{problem} has no {approach} approach")]
    UnsupportedApproach {
        problem: &'static str,
        approach: &'static str,
    },

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

//! Snapshot recording
//!
//! - [`action`]: per-family tag enums wrapped by [`Action`]
//! - [`state`]: per-family state bags wrapped by [`State`]
//!
//! Algorithms create a [`Recorder`], call [`Recorder::emit`] at every
//! meaningful moment, and finally call [`Recorder::finish`] with their return
//! value. `finish` checks the trace's structural invariants and hands back a
//! [`Traced`] result, or an [`InvariantViolation`] if the algorithm misbehaved.

pub mod action;
pub mod state;

pub use action::{
    Action, FrequencyAction, ListAction, PairAction, PathAction, Tone, TraversalAction,
};
pub use state::{FrequencyState, ListState, PairState, PathState, State, TraversalState};

use crate::structures::value::Value;
use thiserror::Error;

/// One immutable recorded moment of an algorithm's execution
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// 0-based position in the trace
    pub index: usize,
    pub action: Action,
    pub description: String,
    pub detail: String,
    pub state: State,
    /// Populated once the algorithm knows its answer
    pub result: Option<Value>,
}

impl Snapshot {
    /// 1-based step number shown to the learner
    pub fn step_number(&self) -> usize {
        self.index + 1
    }
}

/// A finished run: the returned value and the trace that led to it
#[derive(Debug, Clone, PartialEq)]
pub struct Traced<R> {
    pub result: R,
    pub snapshots: Vec<Snapshot>,
}

/// A trace that breaks its own structural rules. These indicate a defect in
/// an algorithm, never bad user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("trace is empty")]
    EmptyTrace,

    #[error("trace starts with '{action}' instead of an initialize step")]
    MissingInitialize { action: &'static str },

    #[error("trace ends with non-terminal step '{action}'")]
    NotTerminal { action: &'static str },

    #[error("final step records result {recorded:?} but the algorithm returned {returned}")]
    ResultMismatch {
        returned: Value,
        recorded: Option<Value>,
    },

    #[error("step {index} enters a call at depth {depth} after depth {previous:?}")]
    DepthJump {
        index: usize,
        depth: usize,
        previous: Option<usize>,
    },
}

/// Append-only snapshot recorder
#[derive(Debug, Default)]
pub struct Recorder {
    snapshots: Vec<Snapshot>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder {
            snapshots: Vec::new(),
        }
    }

    /// Append a snapshot. The state bag is taken by value so the recorded
    /// copy is owned by the trace alone.
    pub fn emit(
        &mut self,
        action: impl Into<Action>,
        description: impl Into<String>,
        detail: impl Into<String>,
        state: impl Into<State>,
    ) {
        self.push(action.into(), description.into(), detail.into(), state.into(), None);
    }

    /// Append a snapshot that also carries the algorithm's result
    pub fn emit_result(
        &mut self,
        action: impl Into<Action>,
        description: impl Into<String>,
        detail: impl Into<String>,
        state: impl Into<State>,
        result: impl Into<Value>,
    ) {
        self.push(
            action.into(),
            description.into(),
            detail.into(),
            state.into(),
            Some(result.into()),
        );
    }

    fn push(
        &mut self,
        action: Action,
        description: String,
        detail: String,
        state: State,
        result: Option<Value>,
    ) {
        let index = self.snapshots.len();
        self.snapshots.push(Snapshot {
            index,
            action,
            description,
            detail,
            state,
            result,
        });
    }

    /// Close the trace with the algorithm's return value
    pub fn finish<R>(self, result: R) -> Result<Traced<R>, InvariantViolation>
    where
        R: Clone + Into<Value>,
    {
        let returned: Value = result.clone().into();
        let checked = validate(&self.snapshots, &returned);
        debug_assert!(checked.is_ok(), "invalid trace: {:?}", checked);
        checked?;

        Ok(Traced {
            result,
            snapshots: self.snapshots,
        })
    }
}

/// Check the structural invariants every finished trace must satisfy
pub fn validate(snapshots: &[Snapshot], returned: &Value) -> Result<(), InvariantViolation> {
    let first = snapshots.first().ok_or(InvariantViolation::EmptyTrace)?;
    if !first.action.is_initialize() {
        return Err(InvariantViolation::MissingInitialize {
            action: first.action.label(),
        });
    }

    let mut previous: Option<usize> = None;
    for snapshot in snapshots.iter().filter(|s| s.action.is_call_entry()) {
        let Some(depth) = snapshot.state.depth() else {
            continue;
        };
        let allowed = previous.map_or(0, |d| d + 1);
        if depth > allowed {
            return Err(InvariantViolation::DepthJump {
                index: snapshot.index,
                depth,
                previous,
            });
        }
        previous = Some(depth);
    }

    // `first` exists, so `last` does too
    let last = &snapshots[snapshots.len() - 1];
    if !last.action.is_terminal() {
        return Err(InvariantViolation::NotTerminal {
            action: last.action.label(),
        });
    }
    if last.result.as_ref() != Some(returned) {
        return Err(InvariantViolation::ResultMismatch {
            returned: returned.clone(),
            recorded: last.result.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_accepts_well_formed_trace() {
        let mut rec = Recorder::new();
        rec.emit(
            TraversalAction::Initialize,
            "start",
            "",
            TraversalState::default(),
        );
        rec.emit_result(
            TraversalAction::Complete,
            "done",
            "",
            TraversalState::default(),
            Value::List(vec![]),
        );

        let traced = rec.finish(Value::List(vec![])).expect("valid trace");
        assert_eq!(traced.snapshots.len(), 2);
        assert_eq!(traced.snapshots[1].step_number(), 2);
    }

    #[test]
    fn test_validate_rejects_missing_terminal() {
        let mut rec = Recorder::new();
        rec.emit(PathAction::Initialize, "start", "", PathState::default());
        rec.emit(PathAction::Call, "call", "", PathState::default());

        let err = validate(&rec.snapshots, &Value::NoPath).unwrap_err();
        assert_eq!(err, InvariantViolation::NotTerminal { action: "call" });
    }

    #[test]
    fn test_validate_rejects_depth_jump() {
        let mut rec = Recorder::new();
        rec.emit(PathAction::Initialize, "start", "", PathState::default());
        let deep = PathState {
            depth: 2,
            ..PathState::default()
        };
        rec.emit(PathAction::Call, "call", "", deep);
        rec.emit_result(
            PathAction::Complete,
            "done",
            "",
            PathState::default(),
            Value::NoPath,
        );

        let err = validate(&rec.snapshots, &Value::NoPath).unwrap_err();
        assert!(matches!(err, InvariantViolation::DepthJump { depth: 2, .. }));
    }

    #[test]
    fn test_validate_rejects_result_mismatch() {
        let mut rec = Recorder::new();
        rec.emit(PairAction::Initialize, "start", "", PairState::default());
        rec.emit_result(
            PairAction::Complete,
            "done",
            "",
            PairState::default(),
            Value::Null,
        );

        let err = validate(&rec.snapshots, &Value::Bool(true)).unwrap_err();
        assert!(matches!(err, InvariantViolation::ResultMismatch { .. }));
    }
}

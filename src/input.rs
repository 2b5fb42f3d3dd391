//! Command-line input parsing
//!
//! Turns raw argument strings into the typed [`RunInput`] a problem expects.
//! Plain text problems take their arguments verbatim. Everything else is
//! JSON: arrays for lists and item collections, integers for targets and
//! indices, and level-order arrays with `null` for absent tree nodes.
//!
//! Trees are checked for orphans here so a bad shape is reported as an input
//! problem rather than surfacing later from a run.

use crate::algorithms::problems::{InputKind, Problem, RunInput};
use crate::structures::tree::BinaryTree;
use crate::structures::value::Value;
use crate::structures::StructureError;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{problem} takes {expected}, got {given} argument(s)")]
    WrongArity {
        problem: &'static str,
        expected: &'static str,
        given: usize,
    },

    #[error("argument {position} is not valid JSON: {source}")]
    Json {
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("argument {position} must be a JSON array")]
    NotAnArray { position: usize },

    #[error("argument {position} must be an integer, found {found}")]
    NotAnInteger { position: usize, found: String },

    #[error("index must be non-negative, found {0}")]
    NegativeIndex(i64),

    #[error("level-order slot {index} holds a node whose parent is null")]
    OrphanNode { index: usize },
}

impl From<StructureError> for InputError {
    fn from(err: StructureError) -> Self {
        match err {
            StructureError::OrphanNode { index } => InputError::OrphanNode { index },
        }
    }
}

/// Parse `args` into the input shape `problem` consumes
pub fn parse_input(problem: Problem, args: &[String]) -> Result<RunInput, InputError> {
    let kind = problem.input_kind();
    let wanted = arity(kind);
    if args.len() != wanted {
        return Err(InputError::WrongArity {
            problem: problem.slug(),
            expected: kind.usage(),
            given: args.len(),
        });
    }

    let input = match kind {
        InputKind::TwoStrings => RunInput::TwoStrings(args[0].clone(), args[1].clone()),
        InputKind::Text => RunInput::Text(args[0].clone()),
        InputKind::Items => RunInput::Items(values(&args[0], 1)?),
        InputKind::TwoItemLists => {
            RunInput::TwoItemLists(values(&args[0], 1)?, values(&args[1], 2)?)
        }
        InputKind::NumbersWithTarget => {
            RunInput::NumbersWithTarget(integers(&args[0], 1)?, integer(&args[1], 2)?)
        }
        InputKind::List => RunInput::List(values(&args[0], 1)?),
        InputKind::ListWithTarget => {
            RunInput::ListWithTarget(values(&args[0], 1)?, target(&args[1]))
        }
        InputKind::ListWithIndex => {
            let index = integer(&args[1], 2)?;
            let index = usize::try_from(index).map_err(|_| InputError::NegativeIndex(index))?;
            RunInput::ListWithIndex(values(&args[0], 1)?, index)
        }
        InputKind::NumberList => RunInput::NumberList(integers(&args[0], 1)?),
        InputKind::Tree => {
            let slots: Vec<Option<Value>> = array(&args[0], 1)?
                .iter()
                .map(|slot| (!slot.is_null()).then(|| convert(slot, 1)).transpose())
                .collect::<Result<_, _>>()?;
            BinaryTree::from_level_order(&slots)?;
            RunInput::Tree(slots)
        }
        InputKind::NumberTree => {
            let slots: Vec<Option<i64>> = array(&args[0], 1)?
                .iter()
                .map(|slot| (!slot.is_null()).then(|| as_integer(slot, 1)).transpose())
                .collect::<Result<_, _>>()?;
            BinaryTree::from_level_order(&slots)?;
            RunInput::NumberTree(slots)
        }
    };
    Ok(input)
}

/// Number of arguments each input shape takes
pub fn arity(kind: InputKind) -> usize {
    match kind {
        InputKind::TwoStrings
        | InputKind::TwoItemLists
        | InputKind::NumbersWithTarget
        | InputKind::ListWithTarget
        | InputKind::ListWithIndex => 2,
        InputKind::Text
        | InputKind::Items
        | InputKind::List
        | InputKind::NumberList
        | InputKind::Tree
        | InputKind::NumberTree => 1,
    }
}

fn json(arg: &str, position: usize) -> Result<Json, InputError> {
    serde_json::from_str(arg).map_err(|source| InputError::Json { position, source })
}

fn array(arg: &str, position: usize) -> Result<Vec<Json>, InputError> {
    match json(arg, position)? {
        Json::Array(items) => Ok(items),
        _ => Err(InputError::NotAnArray { position }),
    }
}

fn values(arg: &str, position: usize) -> Result<Vec<Value>, InputError> {
    array(arg, position)?
        .iter()
        .map(|item| convert(item, position))
        .collect()
}

fn integers(arg: &str, position: usize) -> Result<Vec<i64>, InputError> {
    array(arg, position)?
        .iter()
        .map(|item| as_integer(item, position))
        .collect()
}

fn integer(arg: &str, position: usize) -> Result<i64, InputError> {
    as_integer(&json(arg, position)?, position)
}

/// A search target is JSON when it parses, otherwise the bare string
fn target(arg: &str) -> Value {
    serde_json::from_str::<Json>(arg)
        .ok()
        .and_then(|parsed| convert(&parsed, 2).ok())
        .unwrap_or_else(|| Value::Str(arg.to_string()))
}

fn as_integer(item: &Json, position: usize) -> Result<i64, InputError> {
    item.as_i64().ok_or_else(|| InputError::NotAnInteger {
        position,
        found: item.to_string(),
    })
}

fn convert(item: &Json, position: usize) -> Result<Value, InputError> {
    Ok(match item {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(_) => Value::Int(as_integer(item, position)?),
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => Value::List(
            items
                .iter()
                .map(|i| convert(i, position))
                .collect::<Result<_, _>>()?,
        ),
        Json::Object(map) => {
            let entries = map
                .iter()
                .map(|(k, v)| Ok((Value::Str(k.clone()), convert(v, position)?)))
                .collect::<Result<Vec<_>, InputError>>()?;
            Value::sorted_map(entries)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strings_are_taken_verbatim() {
        let input = parse_input(Problem::Anagrams, &args(&["[1]", "x y"])).unwrap();
        assert_eq!(input, RunInput::TwoStrings("[1]".into(), "x y".into()));
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse_input(Problem::PairSum, &args(&["[1,2]"])).unwrap_err();
        assert!(matches!(err, InputError::WrongArity { given: 1, .. }));
    }

    #[test]
    fn test_numbers_with_target() {
        let input = parse_input(Problem::PairSum, &args(&["[3, 2, 5]", "7"])).unwrap();
        assert_eq!(input, RunInput::NumbersWithTarget(vec![3, 2, 5], 7));
    }

    #[test]
    fn test_non_integer_rejected() {
        let err = parse_input(Problem::SumList, &args(&["[1, 2.5]"])).unwrap_err();
        assert!(matches!(err, InputError::NotAnInteger { position: 1, .. }));
    }

    #[test]
    fn test_not_an_array() {
        let err = parse_input(Problem::AllUnique, &args(&["{\"a\": 1}"])).unwrap_err();
        assert!(matches!(err, InputError::NotAnArray { position: 1 }));
    }

    #[test]
    fn test_bad_json() {
        let err = parse_input(Problem::AllUnique, &args(&["[1, "])).unwrap_err();
        assert!(matches!(err, InputError::Json { position: 1, .. }));
    }

    #[test]
    fn test_negative_index() {
        let err = parse_input(Problem::GetNodeValue, &args(&["[\"a\"]", "-1"])).unwrap_err();
        assert!(matches!(err, InputError::NegativeIndex(-1)));
    }

    #[test]
    fn test_bare_target_falls_back_to_string() {
        let input = parse_input(Problem::LinkedListFind, &args(&["[\"a\", \"c\"]", "c"])).unwrap();
        assert_eq!(
            input,
            RunInput::ListWithTarget(vec![Value::from("a"), Value::from("c")], Value::from("c"))
        );
    }

    #[test]
    fn test_tree_with_nulls() {
        let input = parse_input(Problem::MaxPathSum, &args(&["[3, 11, 4, null, 2]"])).unwrap();
        assert_eq!(
            input,
            RunInput::NumberTree(vec![Some(3), Some(11), Some(4), None, Some(2)])
        );
    }

    #[test]
    fn test_orphan_tree_rejected() {
        let err =
            parse_input(Problem::BreadthFirstValues, &args(&["[\"a\", null, \"b\", \"c\"]"]))
                .unwrap_err();
        assert!(matches!(err, InputError::OrphanNode { index: 3 }));
    }
}

//! Non-interactive output of a finished run
//!
//! - [`text`]: one block per step, for `--print`
//! - [`json`]: the whole run as a JSON document, for `--json`

use crate::algorithms::problems::{AlgorithmRun, RunInput};
use crate::snapshot::{Snapshot, Tone};
use crate::structures::value::Value;
use serde_json::{json, Map, Value as Json};

/// Render every step of `run` as plain text
pub fn text(run: &AlgorithmRun) -> String {
    let approach = run.approach.map(|a| format!(" ({})", a)).unwrap_or_default();
    let mut lines = vec![
        format!("{}{}", run.problem.title(), approach),
        format!("input: {}", describe_input(&run.input)),
        String::new(),
    ];

    for snapshot in &run.snapshots {
        lines.push(format!(
            "[{:>3}/{}] {:<16} {}",
            snapshot.step_number(),
            run.snapshots.len(),
            snapshot.action.label(),
            snapshot.description
        ));
        if !snapshot.detail.is_empty() {
            lines.push(format!("          {}", snapshot.detail));
        }
        let fields: Vec<String> = snapshot
            .state
            .fields()
            .iter()
            .map(|(name, value)| format!("{} = {}", name, value))
            .collect();
        if !fields.is_empty() {
            lines.push(format!("          {}", fields.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push(format!("result: {}", run.result));
    lines.push(String::new());
    lines.join("\n")
}

/// The whole run as JSON
pub fn json(run: &AlgorithmRun) -> Json {
    json!({
        "problem": run.problem.slug(),
        "approach": run.approach.map(|a| a.slug()),
        "input": input_json(&run.input),
        "result": value_json(&run.result),
        "elapsed_us": u64::try_from(run.elapsed.as_micros()).unwrap_or(u64::MAX),
        "snapshots": run.snapshots.iter().map(snapshot_json).collect::<Vec<_>>(),
    })
}

fn snapshot_json(snapshot: &Snapshot) -> Json {
    let state: Map<String, Json> = snapshot
        .state
        .fields()
        .iter()
        .map(|(name, value)| (name.to_string(), value_json(value)))
        .collect();
    let tone = match snapshot.action.tone() {
        Tone::Neutral => "neutral",
        Tone::Success => "success",
        Tone::Failure => "failure",
    };
    json!({
        "index": snapshot.index,
        "action": snapshot.action.label(),
        "tone": tone,
        "description": snapshot.description,
        "detail": snapshot.detail,
        "state": state,
        "result": snapshot.result.as_ref().map(value_json),
    })
}

/// Convert a display value to JSON. Map keys use their display form unless
/// they are already strings; the `-∞` sentinel becomes the string "-∞".
pub fn value_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => json!(b),
        Value::Int(n) => json!(n),
        Value::Char(c) => json!(c.to_string()),
        Value::Str(s) => json!(s),
        Value::List(items) => Json::Array(items.iter().map(value_json).collect()),
        Value::Map(entries) => Json::Object(
            entries
                .iter()
                .map(|(k, v)| {
                    let key = match k {
                        Value::Str(s) => s.clone(),
                        Value::Char(c) => c.to_string(),
                        other => other.to_string(),
                    };
                    (key, value_json(v))
                })
                .collect(),
        ),
        Value::NoPath => json!(value.to_string()),
    }
}

fn input_json(input: &RunInput) -> Json {
    fn list(items: &[Value]) -> Json {
        Json::Array(items.iter().map(value_json).collect())
    }
    fn slots<T: Clone + Into<Value>>(slots: &[Option<T>]) -> Json {
        Json::Array(
            slots
                .iter()
                .map(|slot| slot.clone().map_or(Json::Null, |v| value_json(&v.into())))
                .collect(),
        )
    }

    match input {
        RunInput::TwoStrings(a, b) => json!([a, b]),
        RunInput::Text(s) => json!([s]),
        RunInput::Items(items) | RunInput::List(items) => json!([list(items)]),
        RunInput::TwoItemLists(a, b) => json!([list(a), list(b)]),
        RunInput::NumbersWithTarget(nums, target) => json!([nums, target]),
        RunInput::ListWithTarget(items, target) => json!([list(items), value_json(target)]),
        RunInput::ListWithIndex(items, index) => json!([list(items), index]),
        RunInput::NumberList(nums) => json!([nums]),
        RunInput::Tree(nodes) => json!([slots(nodes)]),
        RunInput::NumberTree(nodes) => json!([slots(nodes)]),
    }
}

fn describe_input(input: &RunInput) -> String {
    match input_json(input) {
        Json::Array(args) => args
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::problems::{run, Problem, RunRequest};

    #[test]
    fn test_json_carries_every_snapshot() {
        let run = run(RunRequest::sample(Problem::SumList)).expect("sample runs");
        let doc = json(&run);
        assert_eq!(doc["problem"], "sum-list");
        assert_eq!(doc["approach"], "iterative");
        assert_eq!(doc["result"], 19);
        assert_eq!(
            doc["snapshots"].as_array().map(|s| s.len()),
            Some(run.snapshots.len())
        );
        assert_eq!(doc["snapshots"][0]["index"], 0);
    }

    #[test]
    fn test_no_path_sentinel_in_json() {
        assert_eq!(value_json(&Value::NoPath), json!("-∞"));
    }

    #[test]
    fn test_text_ends_with_result() {
        let run = run(RunRequest::sample(Problem::Anagrams)).expect("sample runs");
        let out = text(&run);
        assert!(out.starts_with("Anagrams"));
        assert!(out.trim_end().ends_with("result: true"));
    }

    #[test]
    fn test_text_lists_every_step() {
        let run = run(RunRequest::sample(Problem::SumList)).expect("sample runs");
        let out = text(&run);
        let total = run.snapshots.len();
        let step_lines = out.lines().filter(|line| line.starts_with('[')).count();
        assert_eq!(step_lines, total);
        assert!(out.contains(&format!("[  1/{}] initialize", total)));
        assert!(out.ends_with("result: 19\n"));
    }
}

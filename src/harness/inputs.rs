//! Test-input synthesis for dry runs
//!
//! Produces a `{display, value}` pair for every entry-point parameter. A
//! caller-supplied override map (typically sourced from an external
//! suggestion service as JSON) takes precedence; otherwise a fixed per-type
//! default applies. Deterministic and total: every parameter receives a
//! value, and malformed overrides degrade to defaults rather than failing.

use crate::detect::entry::Parameter;
use crate::state::value::format_number;
use serde::Deserialize;
use std::collections::HashMap;

/// A concrete input value for one parameter.
///
/// Deserializes untagged, so a suggestion service's plain JSON
/// (`{"nums": [2, 7, 11, 15], "target": 9}`) maps directly onto the
/// override map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    IntList(Vec<i64>),
}

/// A synthesized input: human-readable literal plus the concrete value.
#[derive(Debug, Clone, PartialEq)]
pub struct TestInput {
    pub display: String,
    pub value: InputValue,
}

/// Synthesize inputs for all parameters.
///
/// Overrides display as their literal form (arrays as a bracketed list);
/// defaults use fixed per-type samples: 3 for the integer family, true for
/// booleans (stored as 1), `[1, 2, 3]` for numeric arrays, `"abc"` for text,
/// `[1, 0, 1]` for boolean arrays.
pub fn generate_test_inputs(
    parameters: &[Parameter],
    custom: Option<&HashMap<String, InputValue>>,
) -> HashMap<String, TestInput> {
    let mut inputs = HashMap::new();

    for param in parameters {
        if let Some(value) = custom.and_then(|m| m.get(&param.name)) {
            inputs.insert(
                param.name.clone(),
                TestInput {
                    display: display_override(value),
                    value: value.clone(),
                },
            );
            continue;
        }

        let mut t = param.param_type.clone();
        t.retain(|c| !c.is_whitespace());
        let t = t.to_lowercase();

        let input = match t.as_str() {
            "int" | "long" => TestInput {
                display: "3".to_string(),
                value: InputValue::Int(3),
            },
            // Booleans run as 1/0 in the interpreter
            "boolean" | "bool" => TestInput {
                display: "true".to_string(),
                value: InputValue::Int(1),
            },
            "int[]" | "vector<int>" | "long[]" => TestInput {
                display: "[1, 2, 3]".to_string(),
                value: InputValue::IntList(vec![1, 2, 3]),
            },
            "string" => TestInput {
                display: "\"abc\"".to_string(),
                value: InputValue::Str("abc".to_string()),
            },
            "boolean[]" | "bool[]" => TestInput {
                display: "[1, 0, 1]".to_string(),
                value: InputValue::IntList(vec![1, 0, 1]),
            },
            _ => TestInput {
                display: "3".to_string(),
                value: InputValue::Int(3),
            },
        };
        inputs.insert(param.name.clone(), input);
    }

    inputs
}

fn display_override(value: &InputValue) -> String {
    match value {
        InputValue::Int(n) => n.to_string(),
        InputValue::Float(x) => format_number(*x),
        InputValue::Bool(b) => b.to_string(),
        InputValue::Str(s) => s.clone(),
        InputValue::IntList(items) => {
            let body: Vec<String> = items.iter().map(|n| n.to_string()).collect();
            format!("[{}]", body.join(","))
        }
    }
}

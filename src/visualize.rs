//! Unified visualization entry point
//!
//! [`visualize_snippet`] runs the whole pipeline (language detection, entry
//! point detection, input synthesis, harness construction, interpretation)
//! and always returns a structured [`Visualization`], never an error. The
//! three failure tiers map onto the result shape:
//!
//! 1. Unsupported dialect: empty steps, `language` is `unsupported`, and the
//!    sentinel error string.
//! 2. Known dialect but no executable trace: empty steps with an explanatory
//!    message.
//! 3. A breached execution bound: empty steps, `language` is `unknown`, and
//!    the generic cannot-visualize message; the partial trace is discarded
//!    rather than returned truncated.
//!
//! [`visualize_java`] and [`visualize_cpp`] expose direct per-dialect
//! interpretation for already-complete source.

use crate::detect::entry::detect_entry_function;
use crate::detect::language::{detect_language, Language};
use crate::harness::builder::build_harness;
use crate::harness::inputs::{generate_test_inputs, InputValue};
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::InterpretError;
use crate::step::Step;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Sentinel error for a snippet in neither supported dialect.
pub const UNSUPPORTED_SENTINEL: &str = "__unsupported__";

/// Shown when a known-dialect snippet produced no executable steps.
pub const NO_STEPS_MESSAGE: &str =
    "No executable steps found. Try a snippet with int variables, loops, or if/else.";

/// Shown when a run breached a fatal bound.
pub const CANNOT_VISUALIZE_MESSAGE: &str = "This snippet cannot be visualized yet.";

/// The structured result every call returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    pub steps: Vec<Step>,
    pub language: Language,
    /// Display form of the synthesized inputs, present only when an entry
    /// point with parameters was detected and a harness was built
    pub dry_run_inputs: Option<BTreeMap<String, String>>,
    pub error: Option<String>,
}

/// Visualize a snippet end to end.
///
/// `custom_inputs` overrides the per-type input defaults by parameter name;
/// callers typically populate it from an external suggestion service and
/// re-invoke for a more meaningful dry run. Malformed overrides degrade to
/// best-effort defaults, never to a failure.
pub fn visualize_snippet(
    code: &str,
    custom_inputs: Option<&HashMap<String, InputValue>>,
) -> Visualization {
    let language = detect_language(code);
    if language == Language::Unsupported {
        return Visualization {
            steps: Vec::new(),
            language,
            dry_run_inputs: None,
            error: Some(UNSUPPORTED_SENTINEL.to_string()),
        };
    }

    let mut dry_run_inputs = None;
    let mut harness_lines = None;

    if let Some(signature) = detect_entry_function(code, language) {
        if !signature.parameters.is_empty() {
            let inputs = generate_test_inputs(&signature.parameters, custom_inputs);
            if let Some(lines) = build_harness(code, &signature, &inputs, language) {
                dry_run_inputs = Some(
                    inputs
                        .iter()
                        .map(|(name, input)| (name.clone(), input.display.clone()))
                        .collect(),
                );
                harness_lines = Some(lines);
            }
        }
    }

    let run = match harness_lines {
        Some(lines) => Interpreter::from_lines(lines, language).run(),
        None => Interpreter::from_source(code, language).run(),
    };

    match run {
        Ok(steps) if steps.is_empty() => Visualization {
            steps,
            language,
            dry_run_inputs,
            error: Some(NO_STEPS_MESSAGE.to_string()),
        },
        Ok(steps) => Visualization {
            steps,
            language,
            dry_run_inputs,
            error: None,
        },
        Err(err) => {
            eprintln!("[visualizer] {}", err);
            Visualization {
                steps: Vec::new(),
                language: Language::Unknown,
                dry_run_inputs: None,
                error: Some(CANNOT_VISUALIZE_MESSAGE.to_string()),
            }
        }
    }
}

/// Interpret already-complete Java source directly.
pub fn visualize_java(code: &str) -> Result<Vec<Step>, InterpretError> {
    Interpreter::from_source(code, Language::Java).run()
}

/// Interpret already-complete C++ source directly.
pub fn visualize_cpp(code: &str) -> Result<Vec<Step>, InterpretError> {
    Interpreter::from_source(code, Language::Cpp).run()
}

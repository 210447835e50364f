//! Synthetic harness construction
//!
//! Locates the entry point's body as a line range by brace-depth scanning,
//! then emits the runnable program as a list of statement lines: one
//! dialect-correct declaration per parameter followed by the verbatim body.
//! The interpreter walks that line list directly; there is no second parse of
//! spliced text. Step line numbers are relative to the synthesized list, not
//! the original source.

use crate::detect::entry::{FunctionSignature, Parameter};
use crate::detect::language::Language;
use crate::harness::inputs::{InputValue, TestInput};
use crate::state::value::format_number;
use std::collections::HashMap;

/// Build the synthetic program for `signature`, or `None` when the function
/// body cannot be located (no opening brace in the signature region). The
/// caller then runs the raw source unmodified.
pub fn build_harness(
    code: &str,
    signature: &FunctionSignature,
    inputs: &HashMap<String, TestInput>,
    language: Language,
) -> Option<Vec<String>> {
    let lines: Vec<&str> = code.lines().collect();

    let (body_start, brace_depth) = find_body_start(&lines, &signature.name)?;
    let body_end = find_body_end(&lines, body_start, brace_depth);

    let mut program = Vec::new();
    for param in &signature.parameters {
        let Some(input) = inputs.get(&param.name) else {
            continue;
        };
        program.push(render_declaration(param, input, language));
    }
    for line in &lines[body_start..=body_end] {
        program.push((*line).to_string());
    }

    Some(program)
}

/// Scan forward from the signature line for the body's first line, tracking
/// how many braces opened on the way in.
fn find_body_start(lines: &[&str], name: &str) -> Option<(usize, i32)> {
    let with_paren = format!("{}(", name);
    let with_space = format!("{} (", name);

    let mut signature_idx = None;
    let mut brace_depth = 0;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if signature_idx.is_none() {
            if trimmed.contains(&with_paren) || trimmed.contains(&with_space) {
                signature_idx = Some(i);
                brace_depth = trimmed.matches('{').count() as i32;
                if brace_depth > 0 {
                    return Some((i + 1, brace_depth));
                }
            }
        } else if trimmed.contains('{') {
            return Some((i + 1, brace_depth + 1));
        }
    }

    None
}

/// Find the last body line: scan until brace depth returns to zero.
fn find_body_end(lines: &[&str], body_start: usize, brace_depth: i32) -> usize {
    let mut depth = brace_depth;
    for (i, line) in lines.iter().enumerate().skip(body_start) {
        for c in line.chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return i.saturating_sub(1);
                    }
                }
                _ => {}
            }
        }
    }
    lines.len() - 1
}

/// Render one parameter as a dialect-correct declaration statement.
fn render_declaration(param: &Parameter, input: &TestInput, language: Language) -> String {
    let mut t = param.param_type.clone();
    t.retain(|c| !c.is_whitespace());
    let t = t.to_lowercase();

    if let InputValue::IntList(items) = &input.value {
        let body: Vec<String> = items.iter().map(|n| n.to_string()).collect();
        let joined = body.join(", ");
        let use_vector = t == "vector<int>" || (t != "int[]" && language == Language::Cpp);
        return if use_vector {
            format!("vector<int> {} = {{{}}};", param.name, joined)
        } else {
            format!("int[] {} = {{{}}};", param.name, joined)
        };
    }

    // Scalars keep an int declaration; string values carry their quotes so
    // the declaration initializer evaluates back to the same text
    let literal = match &input.value {
        InputValue::Int(n) => n.to_string(),
        InputValue::Float(x) => format_number(*x),
        InputValue::Bool(b) => b.to_string(),
        InputValue::Str(s) => format!("\"{}\"", s),
        InputValue::IntList(_) => unreachable!("handled above"),
    };
    format!("int {} = {};", param.name, literal)
}

//! Constrained expression and condition evaluation
//!
//! The evaluator resolves right-hand-side expressions and loop/branch
//! conditions against the current execution state. It runs in three stages:
//!
//! 1. [`normalize`] — rewrite dialect accessor idioms (`x.size()`,
//!    `x.length()` → `x.length`) and strip numeric literal suffixes
//!    (`100L`, `3.14f`).
//! 2. [`lexer`] + [`parser`] — tokenize and parse the normalized text into a
//!    small expression AST restricted to arithmetic, comparison, and boolean
//!    operators plus variable/array/length lookups.
//! 3. [`eval`] — walk the AST against the state.
//!
//! Evaluation failures are local: they carry the offending expression text
//! and are caught by the statement executor, which skips the line. If the
//! raw text is a plain numeric literal, it is accepted even when parsing
//! fails elsewhere.

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;

use crate::state::value::Value;
use crate::state::ExecutionState;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// A local expression-evaluation failure carrying the offending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
    pub expr: String,
    pub message: String,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot evaluate \"{}\" ({})", self.expr, self.message)
    }
}

impl std::error::Error for EvalError {}

lazy_static! {
    static ref LENGTH_CALL: Regex = Regex::new(r"(\w+)\.length\(\)").unwrap();
    static ref SIZE_CALL: Regex = Regex::new(r"(\w+)\.size\(\)").unwrap();
    static ref LONG_SUFFIX: Regex = Regex::new(r"(\d+)L\b").unwrap();
    static ref FLOAT_SUFFIX: Regex = Regex::new(r"\b(\d*\.\d+)[fF]\b").unwrap();
}

/// Rewrite dialect idioms into the evaluator's surface form.
pub fn normalize(expr: &str) -> String {
    let expr = LENGTH_CALL.replace_all(expr.trim(), "$1.length");
    let expr = SIZE_CALL.replace_all(&expr, "$1.length");
    let expr = LONG_SUFFIX.replace_all(&expr, "$1");
    let expr = FLOAT_SUFFIX.replace_all(&expr, "$1");
    expr.into_owned()
}

/// Evaluate an expression against the current state.
///
/// An empty expression evaluates to 0, so a missing initializer reads as
/// zero.
pub fn evaluate_expression(expr: &str, state: &ExecutionState) -> Result<Value, EvalError> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Ok(Value::Num(0.0));
    }

    let normalized = normalize(trimmed);
    let parsed = lexer::tokenize(&normalized).and_then(|tokens| parser::ExprParser::new(tokens).parse());

    match parsed.and_then(|node| eval::evaluate(&node, state)) {
        Ok(value) => Ok(value),
        Err(message) => {
            // Plain numeric literals survive an otherwise failed evaluation
            if let Ok(n) = trimmed.parse::<f64>() {
                return Ok(Value::Num(n));
            }
            Err(EvalError {
                expr: trimmed.to_string(),
                message,
            })
        }
    }
}

/// Evaluate a boolean condition: an expression coerced to truthiness.
pub fn evaluate_condition(cond: &str, state: &ExecutionState) -> Result<bool, EvalError> {
    match evaluate_expression(cond, state) {
        Ok(value) => Ok(value.is_truthy()),
        Err(err) => match cond.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(err),
        },
    }
}

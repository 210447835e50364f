//! Leaf statement executors
//!
//! Execution methods for every statement kind that mutates state in place:
//! declarations, assignments, increment/decrement, compound assignment, the
//! three array declaration forms, indexed writes, print, and return. All are
//! `pub(crate)` methods on [`Interpreter`] so they share the run's state and
//! step recorder.
//!
//! Each successful mutation records exactly one step; a plain reassignment
//! records one only when the value actually changed. Evaluation failures are
//! logged and the line is skipped, since partial traces are still useful.

use crate::eval::eval::add_values;
use crate::eval::{evaluate_expression, EvalError};
use crate::interpreter::classify::{CompoundOp, Statement};
use crate::interpreter::constants::MAX_ARRAY_LEN;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::InterpretError;
use crate::interpreter::warn_skip;
use crate::state::value::Value;
use crate::state::{DeclaredType, ExecutionState, VarSlot};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref JAVA_PRINT: Regex =
        Regex::new(r#"^System\.out\.(?:println|print)\s*\((.*)\)\s*;?$"#).unwrap();
    static ref COUT_PRINT: Regex = Regex::new(r"^cout\s*<<\s*(.+?)\s*;?$").unwrap();
    static ref PRINTF_PRINT: Regex = Regex::new(r"^printf\s*\((.*)\)\s*;?$").unwrap();
    static ref QUOTED: Regex = Regex::new(r#"^"(.*)"$"#).unwrap();
    static ref SIGNATURE_ARRAY_PARAM: Regex = Regex::new(r"int\[\]\s+(\w+)").unwrap();
}

impl Interpreter {
    /// Execute one leaf statement and record its step. Evaluation failures
    /// are swallowed here (warn + skip); only recorder bound errors escape.
    pub(crate) fn exec_leaf(
        &mut self,
        stmt: &Statement,
        line: usize,
    ) -> Result<(), InterpretError> {
        let outcome = match stmt {
            Statement::VarDecl {
                declared_type,
                name,
                init,
            } => self
                .apply_var_decl(*declared_type, name, init.as_deref())
                .map(|_| true),
            Statement::IncDec { name, delta } => {
                self.apply_inc_dec(name, *delta);
                Ok(true)
            }
            Statement::CompoundAssign { name, op, expr } => {
                self.apply_compound(name, *op, expr).map(|_| true)
            }
            Statement::Assign { name, expr } => self.apply_assign(name, expr),
            Statement::ArrayLiteralDecl { name, elements } => {
                self.apply_array_literal(name, elements).map(|_| true)
            }
            Statement::ArraySizedDecl { name, size } => {
                self.apply_array_sized(name, size).map(|_| true)
            }
            Statement::IndexedAssign { name, index, expr } => {
                self.apply_indexed_assign(name, index, expr).map(|_| true)
            }
            _ => Ok(false),
        };

        match outcome {
            Ok(true) => self.recorder.record(line, &self.state),
            Ok(false) => Ok(()),
            Err(err) => {
                warn_skip(line, err);
                Ok(())
            }
        }
    }

    /// Declare a variable, defaulting to 0 when no initializer is present.
    pub(crate) fn apply_var_decl(
        &mut self,
        declared_type: DeclaredType,
        name: &str,
        init: Option<&str>,
    ) -> Result<(), EvalError> {
        let value = match init {
            Some(expr) => evaluate_expression(expr, &self.state)?,
            None => Value::Num(0.0),
        };
        let value = ExecutionState::coerce_for_type(declared_type, value);
        self.state.variables.insert(
            name.to_string(),
            VarSlot {
                declared_type,
                value,
            },
        );
        Ok(())
    }

    /// Reassign a variable; returns whether the stored value changed.
    /// An assignment to an undeclared name creates an unknown-typed slot.
    pub(crate) fn apply_assign(&mut self, name: &str, expr: &str) -> Result<bool, EvalError> {
        let value = evaluate_expression(expr, &self.state)?;
        if let Some(slot) = self.state.variables.get_mut(name) {
            let value = ExecutionState::coerce_for_type(slot.declared_type, value);
            let changed = slot.value != value;
            slot.value = value;
            Ok(changed)
        } else {
            self.state.variables.insert(
                name.to_string(),
                VarSlot {
                    declared_type: DeclaredType::Unknown,
                    value,
                },
            );
            Ok(true)
        }
    }

    /// `x++` / `x--` / `++x` / `--x`; an undeclared name starts from 0 as int.
    pub(crate) fn apply_inc_dec(&mut self, name: &str, delta: f64) {
        let (declared_type, current) = match self.state.variables.get(name) {
            Some(slot) => (slot.declared_type, slot.value.as_number()),
            None => (DeclaredType::Int, 0.0),
        };
        let value = ExecutionState::coerce_for_type(declared_type, Value::Num(current + delta));
        self.state.variables.insert(
            name.to_string(),
            VarSlot {
                declared_type,
                value,
            },
        );
    }

    pub(crate) fn apply_compound(
        &mut self,
        name: &str,
        op: CompoundOp,
        expr: &str,
    ) -> Result<(), EvalError> {
        let right = evaluate_expression(expr, &self.state)?;
        let (declared_type, current) = match self.state.variables.get(name) {
            Some(slot) => (slot.declared_type, slot.value.clone()),
            None => (DeclaredType::Unknown, Value::Num(0.0)),
        };

        let value = match op {
            CompoundOp::Add => add_values(&current, &right),
            CompoundOp::Sub => Value::Num(current.as_number() - right.as_number()),
            CompoundOp::Mul => Value::Num(current.as_number() * right.as_number()),
            // `/=` truncates regardless of the declared type
            CompoundOp::Div => Value::Num((current.as_number() / right.as_number()).trunc()),
            CompoundOp::Mod => Value::Num(current.as_number() % right.as_number()),
        };
        let value = ExecutionState::coerce_for_type(declared_type, value);
        self.state.variables.insert(
            name.to_string(),
            VarSlot {
                declared_type,
                value,
            },
        );
        Ok(())
    }

    /// `int[] xs = {…}` / `vector<int> xs = {…}` — create the array fresh.
    pub(crate) fn apply_array_literal(
        &mut self,
        name: &str,
        elements: &[String],
    ) -> Result<(), EvalError> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(evaluate_expression(element, &self.state)?.as_number());
        }
        self.state.arrays.insert(name.to_string(), values);
        Ok(())
    }

    /// `int[] xs = new int[n]` — created zero-filled.
    pub(crate) fn apply_array_sized(&mut self, name: &str, size: &str) -> Result<(), EvalError> {
        let n = evaluate_expression(size, &self.state)?.as_number();
        if !n.is_finite() || n < 0.0 || n.trunc() as usize > MAX_ARRAY_LEN {
            return Err(EvalError {
                expr: size.to_string(),
                message: format!("invalid array size {}", n),
            });
        }
        self.state
            .arrays
            .insert(name.to_string(), vec![0.0; n.trunc() as usize]);
        Ok(())
    }

    /// `xs[i] = expr` — the array must already exist; writes past the end
    /// grow it zero-filled up to the array bound.
    pub(crate) fn apply_indexed_assign(
        &mut self,
        name: &str,
        index: &str,
        expr: &str,
    ) -> Result<(), EvalError> {
        if !self.state.arrays.contains_key(name) {
            return Err(EvalError {
                expr: format!("{}[{}]", name, index),
                message: format!("unknown array '{}'", name),
            });
        }

        let idx = evaluate_expression(index, &self.state)?.as_number();
        if !idx.is_finite() || idx < 0.0 || idx.trunc() as usize >= MAX_ARRAY_LEN {
            return Err(EvalError {
                expr: index.to_string(),
                message: format!("invalid array index {}", idx),
            });
        }
        let idx = idx.trunc() as usize;

        let value = evaluate_expression(expr, &self.state)?.as_number();

        if let Some(values) = self.state.arrays.get_mut(name) {
            if idx >= values.len() {
                values.resize(idx + 1, 0.0);
            }
            values[idx] = value;
        }
        Ok(())
    }

    /// Resolve and capture a print statement's output, recording one step.
    /// Lines that look like prints but match no known form are no-ops.
    pub(crate) fn exec_print(&mut self, raw: &str, line: usize) -> Result<(), InterpretError> {
        let text = if let Some(captures) = JAVA_PRINT.captures(raw) {
            Some(self.resolve_print_content(&captures[1]))
        } else if let Some(captures) = COUT_PRINT.captures(raw) {
            let parts: Vec<&str> = captures[1]
                .split("<<")
                .map(str::trim)
                .filter(|p| *p != "endl" && *p != "'\\n'" && *p != "\"\\n\"")
                .collect();
            Some(
                parts
                    .iter()
                    .map(|p| self.resolve_print_content(p))
                    .collect::<Vec<_>>()
                    .join(""),
            )
        } else if let Some(captures) = PRINTF_PRINT.captures(raw) {
            Some(self.resolve_print_content(&captures[1]))
        } else {
            None
        };

        if let Some(text) = text {
            self.state.output.push(text);
            self.recorder.record(line, &self.state)?;
        }
        Ok(())
    }

    /// Resolve mixed literal/expression print content. Quoted text passes
    /// through; anything else is evaluated, falling back to per-part
    /// resolution of `+`-concatenations.
    fn resolve_print_content(&self, expr: &str) -> String {
        let expr = expr.trim();
        if let Some(captures) = QUOTED.captures(expr) {
            return captures[1].to_string();
        }
        match evaluate_expression(expr, &self.state) {
            Ok(value) => value.display_string(),
            Err(_) => expr
                .split('+')
                .map(|part| {
                    let part = part.trim();
                    if let Some(captures) = QUOTED.captures(part) {
                        captures[1].to_string()
                    } else {
                        match evaluate_expression(part, &self.state) {
                            Ok(value) => value.display_string(),
                            Err(_) => part.to_string(),
                        }
                    }
                })
                .collect::<Vec<_>>()
                .join(""),
        }
    }

    /// Execute a return statement: evaluate, emit a labeled output line, and
    /// terminate the run. When evaluation fails the evaluator's error text is
    /// shown as the returned value (constructed values are not representable).
    pub(crate) fn exec_return(&mut self, expr: &str, line: usize) -> Result<(), InterpretError> {
        if !expr.is_empty() {
            let rendered = match evaluate_expression(expr, &self.state) {
                Ok(value) => value.display_string(),
                Err(err) => err.to_string(),
            };
            self.state.output.push(format!("Return: {}", rendered));
            self.recorder.record(line, &self.state)?;
        }
        self.finished = true;
        self.frames.clear();
        Ok(())
    }

    /// Register `int[]` parameters of an unmatched method signature as empty
    /// arrays so the body's array accesses resolve.
    pub(crate) fn register_signature_arrays(&mut self, raw: &str) {
        for captures in SIGNATURE_ARRAY_PARAM.captures_iter(raw) {
            self.state
                .arrays
                .entry(captures[1].to_string())
                .or_default();
        }
    }
}

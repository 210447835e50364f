//! Tree-walking evaluation of parsed expressions
//!
//! Evaluates an [`ExprNode`] against the current [`ExecutionState`],
//! unwrapping variable slots to their current values and resolving array
//! index/length lookups. Coercions are loose: booleans count as 1/0 in
//! arithmetic, `+` concatenates when either side is a string, and
//! out-of-range array reads degrade to NaN instead of failing.

use crate::eval::ast::{BinaryOp, ExprNode, UnaryOp};
use crate::state::value::Value;
use crate::state::ExecutionState;

/// Evaluate `node` against `state`.
pub fn evaluate(node: &ExprNode, state: &ExecutionState) -> Result<Value, String> {
    match node {
        ExprNode::Num(n) => Ok(Value::Num(*n)),
        ExprNode::Str(s) => Ok(Value::Str(s.clone())),
        ExprNode::Bool(b) => Ok(Value::Bool(*b)),

        ExprNode::Var(name) => {
            if let Some(value) = state.var_value(name) {
                Ok(value.clone())
            } else if state.arrays.contains_key(name) {
                Err(format!("array '{}' used in scalar context", name))
            } else {
                Err(format!("'{}' is not defined", name))
            }
        }

        ExprNode::Index { name, index } => {
            let values = state
                .arrays
                .get(name)
                .ok_or_else(|| format!("'{}' is not an array", name))?;
            let idx = evaluate(index, state)?.as_number();
            if idx.is_nan() || idx < 0.0 {
                return Ok(Value::Num(f64::NAN));
            }
            let idx = idx.trunc() as usize;
            // Reads past the end degrade to NaN, like undefined arithmetic
            Ok(Value::Num(values.get(idx).copied().unwrap_or(f64::NAN)))
        }

        ExprNode::Length { name } => {
            if let Some(values) = state.arrays.get(name) {
                Ok(Value::Num(values.len() as f64))
            } else if let Some(Value::Str(s)) = state.var_value(name) {
                Ok(Value::Num(s.chars().count() as f64))
            } else {
                Err(format!("'{}' has no length", name))
            }
        }

        ExprNode::Unary { op, operand } => {
            let value = evaluate(operand, state)?;
            Ok(match op {
                UnaryOp::Neg => Value::Num(-value.as_number()),
                UnaryOp::Not => Value::Bool(!value.is_truthy()),
            })
        }

        ExprNode::Binary { op, left, right } => {
            let lhs = evaluate(left, state)?;
            // Short-circuit the logical operators
            match op {
                BinaryOp::And => {
                    if !lhs.is_truthy() {
                        return Ok(Value::Bool(false));
                    }
                    let rhs = evaluate(right, state)?;
                    return Ok(Value::Bool(rhs.is_truthy()));
                }
                BinaryOp::Or => {
                    if lhs.is_truthy() {
                        return Ok(Value::Bool(true));
                    }
                    let rhs = evaluate(right, state)?;
                    return Ok(Value::Bool(rhs.is_truthy()));
                }
                _ => {}
            }
            let rhs = evaluate(right, state)?;
            apply_binary(*op, &lhs, &rhs)
        }
    }
}

fn apply_binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, String> {
    Ok(match op {
        BinaryOp::Add => add_values(lhs, rhs),
        BinaryOp::Sub => Value::Num(lhs.as_number() - rhs.as_number()),
        BinaryOp::Mul => Value::Num(lhs.as_number() * rhs.as_number()),
        BinaryOp::Div => Value::Num(lhs.as_number() / rhs.as_number()),
        BinaryOp::Mod => Value::Num(lhs.as_number() % rhs.as_number()),
        BinaryOp::Lt => compare(lhs, rhs, |o| o == std::cmp::Ordering::Less),
        BinaryOp::Le => compare(lhs, rhs, |o| o != std::cmp::Ordering::Greater),
        BinaryOp::Gt => compare(lhs, rhs, |o| o == std::cmp::Ordering::Greater),
        BinaryOp::Ge => compare(lhs, rhs, |o| o != std::cmp::Ordering::Less),
        BinaryOp::Eq => Value::Bool(values_equal(lhs, rhs)),
        BinaryOp::Ne => Value::Bool(!values_equal(lhs, rhs)),
        BinaryOp::And | BinaryOp::Or => unreachable!("handled with short-circuit"),
    })
}

/// `+` concatenates when either operand is a string, otherwise adds.
pub(crate) fn add_values(lhs: &Value, rhs: &Value) -> Value {
    match (lhs, rhs) {
        (Value::Str(_), _) | (_, Value::Str(_)) => {
            Value::Str(format!("{}{}", lhs.display_string(), rhs.display_string()))
        }
        _ => Value::Num(lhs.as_number() + rhs.as_number()),
    }
}

fn compare(lhs: &Value, rhs: &Value, pick: fn(std::cmp::Ordering) -> bool) -> Value {
    if let (Value::Str(a), Value::Str(b)) = (lhs, rhs) {
        return Value::Bool(pick(a.cmp(b)));
    }
    let (a, b) = (lhs.as_number(), rhs.as_number());
    match a.partial_cmp(&b) {
        Some(ordering) => Value::Bool(pick(ordering)),
        // NaN comparisons are always false
        None => Value::Bool(false),
    }
}

fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => a == b,
        _ => {
            let (a, b) = (lhs.as_number(), rhs.as_number());
            !a.is_nan() && !b.is_nan() && a == b
        }
    }
}

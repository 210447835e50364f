//! Execution state for one interpretation run
//!
//! This module provides the mutable state a single run owns:
//! - [`value`]: scalar runtime values
//! - [`ExecutionState`]: typed variable slots, arrays, and captured output
//!
//! Every variable carries the type it was declared with for the lifetime of
//! the run. Writes to integer-family variables are truncated at the write
//! site, so any value observed in a snapshot is already integral.
//!
//! The state is allocated fresh for each call and never shared, so concurrent
//! interpretation runs cannot interfere with each other.

pub mod value;

use rustc_hash::FxHashMap;
use serde::Serialize;
use self::value::Value;

/// Declared type of a variable, as written in the snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    Int,
    Long,
    Double,
    Float,
    Char,
    Boolean,
    Text,
    Unknown,
}

impl DeclaredType {
    /// Map a surface-syntax type keyword to a declared type.
    pub fn from_keyword(keyword: &str) -> DeclaredType {
        match keyword {
            "int" => DeclaredType::Int,
            "long" => DeclaredType::Long,
            "double" => DeclaredType::Double,
            "float" => DeclaredType::Float,
            "char" => DeclaredType::Char,
            "boolean" | "bool" => DeclaredType::Boolean,
            "string" | "String" => DeclaredType::Text,
            _ => DeclaredType::Unknown,
        }
    }

    /// Integer-family types are truncated on every write.
    pub fn is_integer_family(&self) -> bool {
        matches!(
            self,
            DeclaredType::Int | DeclaredType::Long | DeclaredType::Char
        )
    }
}

/// A variable's declared type together with its current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarSlot {
    #[serde(rename = "type")]
    pub declared_type: DeclaredType,
    pub value: Value,
}

/// All mutable state owned by one interpretation run.
#[derive(Debug, Default)]
pub struct ExecutionState {
    /// Scalar variables by name.
    pub variables: FxHashMap<String, VarSlot>,
    /// Arrays by name; elements follow the host's double semantics.
    pub arrays: FxHashMap<String, Vec<f64>>,
    /// Output lines captured from print and return statements.
    pub output: Vec<String>,
}

impl ExecutionState {
    pub fn new() -> Self {
        ExecutionState::default()
    }

    /// Current value of a scalar variable, if declared.
    pub fn var_value(&self, name: &str) -> Option<&Value> {
        self.variables.get(name).map(|slot| &slot.value)
    }

    /// Truncate `value` if `declared_type` is integer-family and the value is
    /// numeric. Strings and booleans pass through unchanged; only numbers
    /// truncate.
    pub fn coerce_for_type(declared_type: DeclaredType, value: Value) -> Value {
        match value {
            Value::Num(n) if declared_type.is_integer_family() => Value::Num(n.trunc()),
            other => other,
        }
    }
}

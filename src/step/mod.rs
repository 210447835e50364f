// Step snapshots and the bounded recorder

use crate::interpreter::constants::MAX_STEPS;
use crate::interpreter::errors::InterpretError;
use crate::state::{ExecutionState, VarSlot};
use serde::Serialize;
use std::collections::BTreeMap;

/// One immutable snapshot of execution state tied to a source line.
///
/// Captured by deep-copying the run's state; once recorded it is never
/// mutated. Maps are sorted so serialized steps are stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// 1-based line number in the interpreted (possibly synthesized) source
    pub line: usize,
    pub variables: BTreeMap<String, VarSlot>,
    pub arrays: BTreeMap<String, Vec<f64>>,
    pub output: Vec<String>,
}

impl Step {
    /// Deep-copy the current state into a snapshot for `line`.
    pub fn capture(line: usize, state: &ExecutionState) -> Self {
        Step {
            line,
            variables: state
                .variables
                .iter()
                .map(|(name, slot)| (name.clone(), slot.clone()))
                .collect(),
            arrays: state
                .arrays
                .iter()
                .map(|(name, values)| (name.clone(), values.clone()))
                .collect(),
            output: state.output.clone(),
        }
    }
}

/// Append-only step history with a hard ceiling.
#[derive(Debug)]
pub struct StepRecorder {
    steps: Vec<Step>,
    limit: usize,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder {
            steps: Vec::new(),
            limit: MAX_STEPS,
        }
    }

    /// Record a snapshot of `state` at `line`.
    ///
    /// Exceeding the step ceiling is fatal for the whole run, not a partial
    /// result: the caller discards everything recorded so far.
    pub fn record(&mut self, line: usize, state: &ExecutionState) -> Result<(), InterpretError> {
        self.steps.push(Step::capture(line, state));
        if self.steps.len() > self.limit {
            return Err(InterpretError::StepLimitExceeded { limit: self.limit });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl Default for StepRecorder {
    fn default() -> Self {
        Self::new()
    }
}

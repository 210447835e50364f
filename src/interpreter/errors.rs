//! Fatal error types for the snippet interpreter
//!
//! [`InterpretError`] covers the run-fatal bounds only. Per-statement
//! failures (expression errors, malformed lines, unknown arrays) never reach
//! this type: they are logged at the statement executor and the line is
//! skipped. A fatal bound, by contrast, aborts the entire call and discards
//! the partial trace.

use std::fmt;

/// Run-fatal errors raised from inside the interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// The step recorder exceeded its hard bound
    StepLimitExceeded { limit: usize },

    /// A single loop exceeded its iteration bound
    LoopLimitExceeded { line: usize, limit: u32 },
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpretError::StepLimitExceeded { limit } => {
                write!(
                    f,
                    "visualization stopped: possible infinite loop (more than {} steps)",
                    limit
                )
            }
            InterpretError::LoopLimitExceeded { line, limit } => {
                write!(
                    f,
                    "visualization stopped: possible infinite loop at line {} (more than {} iterations)",
                    line, limit
                )
            }
        }
    }
}

impl std::error::Error for InterpretError {}

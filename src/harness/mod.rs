//! Dry-run harness construction
//!
//! When a snippet is a bare function with parameters, nothing drives it. The
//! harness stage makes it runnable:
//!
//! - [`inputs`]: synthesize a concrete value for every typed parameter
//!   (caller-supplied overrides win over per-type defaults).
//! - [`builder`]: locate the function body by brace-depth scanning and emit a
//!   synthetic program (one declaration line per parameter followed by the
//!   verbatim body lines) as a list of statement lines the interpreter
//!   consumes directly.

pub mod builder;
pub mod inputs;

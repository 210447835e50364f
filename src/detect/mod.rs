//! Surface-syntax detection
//!
//! - [`language`]: classify raw source as Java, C++, or unsupported using
//!   weighted syntactic marker counts.
//! - [`entry`]: find the callable entry point (skipping `main`) and parse its
//!   parameter list into typed pairs.
//!
//! Both passes are heuristic by design: they look at trimmed lines and
//! regex-shaped markers, never a full parse tree, and they never fail. The
//! worst case is "unsupported" or "no entry point found".

pub mod entry;
pub mod language;

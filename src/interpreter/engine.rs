// Execution engine for the snippet interpreter

use crate::detect::language::Language;
use crate::interpreter::classify::{classify, Statement};
use crate::interpreter::errors::InterpretError;
use crate::interpreter::warn_skip;
use crate::state::ExecutionState;
use crate::step::{Step, StepRecorder};

/// The main interpreter: walks source lines and records step snapshots
pub struct Interpreter {
    /// The lines being interpreted (raw source or a synthesized harness)
    pub(crate) lines: Vec<String>,

    /// Dialect the lines are written in
    pub(crate) language: Language,

    /// Variables, arrays, and captured output for this run
    pub(crate) state: ExecutionState,

    /// Bounded step history
    pub(crate) recorder: StepRecorder,

    /// Explicit control stack: innermost block/loop context on top
    pub(crate) frames: Vec<Frame>,

    /// Set by a return statement; ends the run
    pub(crate) finished: bool,
}

/// One pending block context on the control stack.
pub(crate) enum Frame {
    /// A straight-line region: the whole program or a taken branch body
    Block(BlockFrame),
    /// A loop in progress, re-entered after every body pass
    Loop(LoopFrame),
}

pub(crate) struct BlockFrame {
    pub cursor: usize,
    /// Exclusive end of the region
    pub end: usize,
}

pub(crate) enum LoopKind {
    /// Counted loop; the update clause runs after every body pass
    For { update: String },
    While,
}

pub(crate) struct LoopFrame {
    pub kind: LoopKind,
    /// Line index of the loop header (steps are recorded against it)
    pub header: usize,
    pub cond: String,
    pub body_start: usize,
    /// Exclusive end of the body
    pub body_end: usize,
    pub cursor: usize,
    pub iterations: u32,
}

impl Interpreter {
    /// Create an interpreter over raw source text.
    pub fn from_source(code: &str, language: Language) -> Self {
        Self::from_lines(code.lines().map(str::to_string).collect(), language)
    }

    /// Create an interpreter over an already-synthesized line list.
    pub fn from_lines(lines: Vec<String>, language: Language) -> Self {
        Interpreter {
            lines,
            language,
            state: ExecutionState::new(),
            recorder: StepRecorder::new(),
            frames: Vec::new(),
            finished: false,
        }
    }

    /// Run to completion and return the recorded steps.
    ///
    /// Per-statement failures are logged and skipped; only a breached
    /// execution bound surfaces as an error, in which case the partial trace
    /// is discarded by the caller.
    pub fn run(mut self) -> Result<Vec<Step>, InterpretError> {
        let end = self.lines.len();
        self.frames.push(Frame::Block(BlockFrame { cursor: 0, end }));

        while !self.finished && !self.frames.is_empty() {
            self.advance()?;
        }

        Ok(self.recorder.into_steps())
    }

    /// Perform one transition: execute the line under the top frame's cursor,
    /// or retire the frame when its region is exhausted.
    fn advance(&mut self) -> Result<(), InterpretError> {
        let top = self.frames.len() - 1;
        match &self.frames[top] {
            Frame::Block(block) => {
                if block.cursor >= block.end {
                    self.frames.pop();
                    Ok(())
                } else {
                    let cursor = block.cursor;
                    self.execute_line(cursor)
                }
            }
            Frame::Loop(looped) => {
                if looped.cursor >= looped.body_end {
                    self.finish_loop_pass()
                } else {
                    let cursor = looped.cursor;
                    self.execute_line(cursor)
                }
            }
        }
    }

    /// Classify and execute the line at `cursor`, advancing the current
    /// frame's cursor (and possibly pushing a new frame).
    fn execute_line(&mut self, cursor: usize) -> Result<(), InterpretError> {
        let raw = self.lines[cursor].trim().to_string();
        let line = cursor + 1;

        match classify(&raw, self.language) {
            Statement::MethodSignature => {
                self.register_signature_arrays(&raw);
                self.set_cursor(cursor + 1);
                Ok(())
            }
            Statement::Print => {
                self.exec_print(&raw, line)?;
                self.set_cursor(cursor + 1);
                Ok(())
            }
            Statement::Return { expr } => self.exec_return(&expr, line),
            Statement::Skip | Statement::Unrecognized => {
                self.set_cursor(cursor + 1);
                Ok(())
            }
            Statement::Malformed { reason } => {
                warn_skip(line, reason);
                self.set_cursor(cursor + 1);
                Ok(())
            }
            Statement::ForHeader { init, cond, update } => {
                self.enter_for(cursor, &init, &cond, update)
            }
            Statement::WhileHeader { cond } => self.enter_while(cursor, &cond),
            Statement::IfHeader { .. } | Statement::ElseIfHeader { .. } => {
                self.run_branch_chain(cursor)
            }
            Statement::ElseHeader => {
                // A dangling else whose chain already executed: skip its block
                let end = find_block_end(&self.lines, cursor);
                self.set_cursor(end + 1);
                Ok(())
            }
            leaf => {
                self.exec_leaf(&leaf, line)?;
                self.set_cursor(cursor + 1);
                Ok(())
            }
        }
    }

    /// Move the current frame's cursor.
    pub(crate) fn set_cursor(&mut self, value: usize) {
        if let Some(frame) = self.frames.last_mut() {
            match frame {
                Frame::Block(block) => block.cursor = value,
                Frame::Loop(looped) => looped.cursor = value,
            }
        }
    }

    pub(crate) fn push_block(&mut self, start: usize, end: usize) {
        self.frames.push(Frame::Block(BlockFrame { cursor: start, end }));
    }
}

/// Find the line index where the block opened at `start` closes: the line on
/// which brace depth returns to zero. Falls back to the last line.
pub(crate) fn find_block_end(lines: &[String], start: usize) -> usize {
    let mut depth = 0i32;
    for (i, line) in lines.iter().enumerate().skip(start) {
        for c in line.trim().chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return i;
                    }
                }
                _ => {}
            }
        }
    }
    lines.len().saturating_sub(1)
}

/// Body range of the construct headed at `header`: the closing line of the
/// block, the first body line, and the exclusive body end (a bare `}` line
/// is excluded from the body).
pub(crate) fn body_range(lines: &[String], header: usize) -> (usize, usize, usize) {
    let block_end = find_block_end(lines, header);
    let body_start = header + 1;
    let body_end = if lines[block_end].trim() == "}" {
        block_end
    } else {
        block_end + 1
    };
    (block_end, body_start, body_end)
}

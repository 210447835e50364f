//! Loop execution (`for`, `while`)
//!
//! Adds `impl Interpreter` methods for entering a loop and completing one
//! body pass. A loop lives on the control stack as a [`LoopFrame`]; the
//! engine calls [`Interpreter::finish_loop_pass`] whenever the frame's cursor
//! runs past the body.
//!
//! Step cadence: a counted loop records a step for its initializer and after
//! every update-clause execution; a conditioned loop records a step at the
//! header on entry and after every body pass. All steps are recorded against
//! the header line.
//!
//! A loop that re-enters its body more than the iteration bound is a fatal
//! "possible infinite loop" for the entire run.

use crate::eval::evaluate_condition;
use crate::interpreter::classify::{classify_loop_init, classify_loop_update, clean_line, Statement};
use crate::interpreter::constants::MAX_LOOP_ITERATIONS;
use crate::interpreter::engine::{body_range, Frame, Interpreter, LoopFrame, LoopKind};
use crate::interpreter::errors::InterpretError;
use crate::interpreter::warn_skip;

impl Interpreter {
    /// Enter a `for (init; condition; update)` loop at `header`.
    ///
    /// The initializer runs once, and only when it is a variable declaration.
    /// If the condition holds, a loop frame is pushed; otherwise the cursor
    /// stays past the loop's closing boundary. A failed initializer or
    /// condition falls through to the next line, like any bad statement.
    pub(crate) fn enter_for(
        &mut self,
        header: usize,
        init: &str,
        cond: &str,
        update: String,
    ) -> Result<(), InterpretError> {
        let (block_end, body_start, body_end) = body_range(&self.lines, header);
        let line = header + 1;
        self.set_cursor(block_end + 1);

        let init_cleaned = clean_line(init);
        if let Some(Statement::VarDecl {
            declared_type,
            name,
            init: init_expr,
        }) = classify_loop_init(&init_cleaned)
        {
            match self.apply_var_decl(declared_type, &name, init_expr.as_deref()) {
                Ok(()) => self.recorder.record(line, &self.state)?,
                Err(err) => {
                    warn_skip(line, err);
                    self.set_cursor(header + 1);
                    return Ok(());
                }
            }
        }

        match evaluate_condition(cond, &self.state) {
            Err(err) => {
                warn_skip(line, err);
                self.set_cursor(header + 1);
            }
            Ok(false) => {}
            Ok(true) => self.frames.push(Frame::Loop(LoopFrame {
                kind: LoopKind::For { update },
                header,
                cond: cond.to_string(),
                body_start,
                body_end,
                cursor: body_start,
                iterations: 1,
            })),
        }
        Ok(())
    }

    /// Enter a `while (condition)` loop at `header`. A step is recorded at
    /// the header before the first condition check.
    pub(crate) fn enter_while(&mut self, header: usize, cond: &str) -> Result<(), InterpretError> {
        let (block_end, body_start, body_end) = body_range(&self.lines, header);
        let line = header + 1;
        self.set_cursor(block_end + 1);

        self.recorder.record(line, &self.state)?;

        match evaluate_condition(cond, &self.state) {
            Err(err) => {
                warn_skip(line, err);
                self.set_cursor(header + 1);
            }
            Ok(false) => {}
            Ok(true) => self.frames.push(Frame::Loop(LoopFrame {
                kind: LoopKind::While,
                header,
                cond: cond.to_string(),
                body_start,
                body_end,
                cursor: body_start,
                iterations: 1,
            })),
        }
        Ok(())
    }

    /// One body pass finished: run the update clause (counted loop) or record
    /// the header step (conditioned loop), re-check the condition, and either
    /// rewind the cursor to the body start or retire the frame.
    pub(crate) fn finish_loop_pass(&mut self) -> Result<(), InterpretError> {
        let (header, cond, update) = match self.frames.last() {
            Some(Frame::Loop(looped)) => (
                looped.header,
                looped.cond.clone(),
                match &looped.kind {
                    LoopKind::For { update } => Some(update.clone()),
                    LoopKind::While => None,
                },
            ),
            _ => return Ok(()),
        };
        let line = header + 1;

        match update {
            Some(update) => {
                let cleaned = clean_line(&update);
                if let Some(stmt) = classify_loop_update(&cleaned) {
                    let applied = match &stmt {
                        Statement::IncDec { name, delta } => {
                            self.apply_inc_dec(name, *delta);
                            Ok(())
                        }
                        Statement::CompoundAssign { name, op, expr } => {
                            self.apply_compound(name, *op, expr)
                        }
                        Statement::Assign { name, expr } => {
                            self.apply_assign(name, expr).map(|_| ())
                        }
                        _ => Ok(()),
                    };
                    match applied {
                        Ok(()) => self.recorder.record(line, &self.state)?,
                        Err(err) => {
                            // A broken update clause ends the loop rather
                            // than spinning on an unchanged condition
                            warn_skip(line, err);
                            self.frames.pop();
                            return Ok(());
                        }
                    }
                }
            }
            None => self.recorder.record(line, &self.state)?,
        }

        match evaluate_condition(&cond, &self.state) {
            Err(err) => {
                warn_skip(line, err);
                self.frames.pop();
            }
            Ok(false) => {
                self.frames.pop();
            }
            Ok(true) => {
                if let Some(Frame::Loop(looped)) = self.frames.last_mut() {
                    looped.iterations += 1;
                    if looped.iterations > MAX_LOOP_ITERATIONS {
                        return Err(InterpretError::LoopLimitExceeded {
                            line,
                            limit: MAX_LOOP_ITERATIONS,
                        });
                    }
                    looped.cursor = looped.body_start;
                }
            }
        }
        Ok(())
    }
}

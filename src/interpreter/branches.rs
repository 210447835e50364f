//! Branch-chain execution (`if` / `else if` / `else`)
//!
//! Walks a whole chain in source order: every condition evaluation records a
//! step, taken or not. The first true condition pushes its body as a block
//! frame and jumps the parent cursor past the remaining chain members; a
//! trailing `else` runs when nothing matched. A failed condition evaluation
//! abandons the chain and falls through to the line after its head.

use crate::eval::evaluate_condition;
use crate::interpreter::classify::{clean_line, extract_if_condition, is_else, is_else_if};
use crate::interpreter::engine::{body_range, find_block_end, Interpreter};
use crate::interpreter::errors::InterpretError;
use crate::interpreter::warn_skip;

impl Interpreter {
    pub(crate) fn run_branch_chain(&mut self, chain_start: usize) -> Result<(), InterpretError> {
        let mut idx = chain_start;

        loop {
            if idx >= self.lines.len() {
                self.set_cursor(idx);
                return Ok(());
            }
            let cleaned = clean_line(&self.lines[idx]);

            if let Some(cond) = extract_if_condition(&cleaned) {
                let result = match evaluate_condition(&cond, &self.state) {
                    Ok(result) => result,
                    Err(err) => {
                        warn_skip(idx + 1, err);
                        self.set_cursor(chain_start + 1);
                        return Ok(());
                    }
                };
                self.recorder.record(idx + 1, &self.state)?;

                let (block_end, body_start, body_end) = body_range(&self.lines, idx);
                if result {
                    // Skip every later else-if/else block in this chain
                    let mut resume = block_end + 1;
                    while resume < self.lines.len() {
                        let next = clean_line(&self.lines[resume]);
                        if is_else_if(&next) || is_else(&next) {
                            resume = find_block_end(&self.lines, resume) + 1;
                        } else {
                            break;
                        }
                    }
                    self.set_cursor(resume);
                    self.push_block(body_start, body_end);
                    return Ok(());
                }
                idx = block_end + 1;
            } else if is_else(&cleaned) {
                self.recorder.record(idx + 1, &self.state)?;
                let (block_end, body_start, body_end) = body_range(&self.lines, idx);
                self.set_cursor(block_end + 1);
                self.push_block(body_start, body_end);
                return Ok(());
            } else {
                // Chain exhausted without a taken branch
                self.set_cursor(idx);
                return Ok(());
            }
        }
    }
}

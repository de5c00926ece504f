//! Call stack tracking for the evaluator.
//!
//! - `CallStack`: active closure calls, with the depth limit check
//! - `CallFrame`: per-call metadata
//!
//! `CallStack` captures backtraces at error sites. The backtrace is stored on
//! `EvalError` as `EvalBacktrace`.

use cinder_ir::{Name, StringLookup};

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// A single frame in the live call stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Identifier in operator position, or `None` when the operator was an
    /// arbitrary expression (e.g. an immediately applied `Lambda`).
    pub name: Option<Name>,
}

/// Live call stack for the interpreter.
///
/// Each closure call pushes a frame; return pops it. The depth check is
/// integrated into `push()`.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// Create a new empty call stack with the given depth limit.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// Returns a `StackOverflow` error if the limit is reached. The frame is
    /// NOT pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent call frame.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    /// Current call depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Snapshot the current call stack, most recent call first.
    pub fn capture<L: StringLookup + ?Sized>(&self, names: &L) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f
                    .name
                    .map_or_else(|| "<lambda>".to_string(), |n| names.lookup(n).to_string()),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace to `err` unless it already carries one or the
    /// stack is empty.
    ///
    /// The first (innermost) attachment wins as the error unwinds.
    pub fn attach_backtrace<L: StringLookup + ?Sized>(
        &self,
        err: EvalError,
        names: &L,
    ) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture(names))
    }
}

impl Default for CallStack {
    /// Creates an unlimited call stack.
    fn default() -> Self {
        Self::new(None)
    }
}

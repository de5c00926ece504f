//! `InterpreterBuilder` for creating Interpreter instances.

use cinder_ir::{NodeArena, StringInterner};

use super::Interpreter;
use crate::config::{EvalConfig, ScopingMode};
use crate::diagnostics::CallStack;

/// Builder for [`Interpreter`].
///
/// The default configuration is lexical scoping with
/// [`DEFAULT_MAX_CALL_DEPTH`](crate::DEFAULT_MAX_CALL_DEPTH).
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a NodeArena,
    config: EvalConfig,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a NodeArena) -> Self {
        Self {
            interner,
            arena,
            config: EvalConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn scoping(mut self, scoping: ScopingMode) -> Self {
        self.config.scoping = scoping;
        self
    }

    /// `None` disables the closure call depth limit.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.config.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let call_stack = CallStack::new(self.config.max_call_depth);
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            config: self.config,
            call_stack,
        }
    }
}

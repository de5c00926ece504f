//! Tree-walking interpreter for Cinder.
//!
//! # Architecture
//!
//! All evaluation goes through [`Interpreter::eval`], which takes the node
//! and the environment explicitly. The environment is threaded, not stored:
//! a call picks its base frame from the closure (lexical mode) or from the
//! call site (dynamic mode), and that choice needs both in hand.
//!
//! - `control.rs` - `Block`, `Cond`, `Let`, `Assign`, `Lambda`
//! - `function_call.rs` - `Apply`, native and closure calls
//!
//! # Borrow Pattern
//!
//! `NodeKind` is `Copy`, so the kind is copied out of the arena before
//! dispatching. The arena is held as `&'a NodeArena`, so child lists borrowed
//! from it stay valid across recursive `eval` calls on `&mut self`.

mod builder;
mod control;
mod function_call;

pub use builder::InterpreterBuilder;

use cinder_ir::{NodeArena, NodeId, NodeKind, StringInterner};
use cinder_stack::ensure_sufficient_stack;

use crate::config::EvalConfig;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::errors::{unknown_form, EvalResult};
use crate::exec::expr;
use crate::value::Value;

/// Tree-walking interpreter over one program arena.
pub struct Interpreter<'a> {
    /// String interner for name lookup.
    pub(crate) interner: &'a StringInterner,
    /// Program nodes.
    pub(crate) arena: &'a NodeArena,
    /// Scoping mode and limits, fixed for the interpreter's lifetime.
    pub(crate) config: EvalConfig,
    /// Live closure calls, for the depth limit and backtraces.
    pub(crate) call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Start building an interpreter for `arena`.
    pub fn builder(interner: &'a StringInterner, arena: &'a NodeArena) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(interner, arena)
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Number of closure calls currently active.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Evaluate a whole program rooted at `root`.
    #[tracing::instrument(level = "debug", skip(self, env), fields(scoping = %self.config.scoping, max_depth = ?self.call_stack.max_depth()))]
    pub fn run(&mut self, root: NodeId, env: &Environment) -> EvalResult {
        let result = self.eval(root, env);
        debug_assert_eq!(self.call_depth(), 0, "call stack left unbalanced");
        result
    }

    /// Evaluate one node in `env`, growing the native stack if needed.
    pub fn eval(&mut self, id: NodeId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: NodeId, env: &Environment) -> EvalResult {
        let Some(&kind) = self.arena.get(id) else {
            return Err(unknown_form(&format!("{id:?}")));
        };

        match kind {
            NodeKind::Int(n) => expr::eval_int_literal(n),
            NodeKind::Str(s) => Ok(Value::string(self.interner.lookup(s))),
            NodeKind::Ident(name) => expr::eval_ident(name, env, self.interner),
            NodeKind::Apply { func, args } => self.eval_apply(func, args, env),
            NodeKind::Lambda { params, body } => Ok(self.make_lambda(params, body, env)),
            NodeKind::Block(items) => self.eval_block(items, env),
            NodeKind::Cond(clauses) => self.eval_cond(clauses, env),
            NodeKind::Let { name, init, body } => self.eval_let(name, init, body, env),
            NodeKind::Assign { name, value } => self.eval_assign(name, value, env),
            NodeKind::Unknown { tag } => Err(unknown_form(self.interner.lookup(tag))),
        }
    }
}

//! Special forms: `Block`, `Cond`, `Let`, `Assign`, `Lambda`.
//!
//! `Block` and `Cond` iterate over their ranges; only child evaluation
//! recurses, so a long sequence costs no native stack.

use cinder_ir::{ClauseRange, Name, NodeId, NodeRange, ParamRange};

use super::Interpreter;
use crate::environment::Bindings;
use crate::errors::{unassigned_variable, EvalResult};
use crate::exec::control::expect_test;
use crate::{Environment, Value};

impl Interpreter<'_> {
    /// Evaluate every element in order; the last one is the result.
    /// An empty block is `false`.
    pub(super) fn eval_block(&mut self, items: NodeRange, env: &Environment) -> EvalResult {
        let arena = self.arena;
        let Some((&last, rest)) = arena.node_list(items).split_last() else {
            return Ok(Value::Bool(false));
        };
        for &id in rest {
            self.eval(id, env)?;
        }
        self.eval(last, env)
    }

    /// First clause whose test is `true` wins. No match is `false`.
    pub(super) fn eval_cond(&mut self, clauses: ClauseRange, env: &Environment) -> EvalResult {
        let arena = self.arena;
        for clause in arena.clauses(clauses) {
            let test = self.eval(clause.test, env)?;
            if expect_test(&test)? {
                return self.eval(clause.consequence, env);
            }
        }
        Ok(Value::Bool(false))
    }

    /// `init` is evaluated in the enclosing frame, so the new name is not
    /// visible to it. `body` runs in a one-binding extension that is dropped
    /// afterwards.
    pub(super) fn eval_let(
        &mut self,
        name: Name,
        init: NodeId,
        body: NodeId,
        env: &Environment,
    ) -> EvalResult {
        let value = self.eval(init, env)?;
        let mut bindings = Bindings::default();
        bindings.insert(name, value);
        let scope = env.extend(bindings);
        self.eval(body, &scope)
    }

    /// Overwrite an existing binding of `env` itself and return the value.
    pub(super) fn eval_assign(&mut self, name: Name, rhs: NodeId, env: &Environment) -> EvalResult {
        let value = self.eval(rhs, env)?;
        env.assign(name, value.clone())
            .map_err(|_| unassigned_variable(self.interner.lookup(name)))?;
        Ok(value)
    }

    /// Capture parameters, body, and the current frame.
    pub(super) fn make_lambda(&self, params: ParamRange, body: NodeId, env: &Environment) -> Value {
        Value::closure(self.arena.params(params).to_vec(), body, env.clone())
    }
}

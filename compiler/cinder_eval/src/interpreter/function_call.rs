//! Application: operator, then operands left to right, then the call.

use cinder_ir::{Name, NodeId, NodeKind, NodeRange};
use smallvec::SmallVec;

use super::Interpreter;
use crate::config::ScopingMode;
use crate::diagnostics::CallFrame;
use crate::errors::{not_callable, EvalResult};
use crate::exec::call::{bind_parameters, check_arg_count, unwrap_arguments};
use crate::value::{Closure, NativeFn};
use crate::{Environment, Value};

impl Interpreter<'_> {
    pub(super) fn eval_apply(
        &mut self,
        func: NodeId,
        args: NodeRange,
        env: &Environment,
    ) -> EvalResult {
        let callee = self.eval(func, env)?;
        if !callee.is_callable() {
            return Err(not_callable(callee.type_name()));
        }

        let arena = self.arena;
        let mut values: SmallVec<[Value; 4]> = SmallVec::with_capacity(args.len());
        for &id in arena.node_list(args) {
            values.push(self.eval(id, env)?);
        }

        // Name the frame after the operator when it is a plain identifier.
        let name = match arena.get(func) {
            Some(NodeKind::Ident(name)) => Some(*name),
            _ => None,
        };
        self.eval_call(&callee, &values, env, name)
    }

    /// Apply a callable to evaluated arguments.
    ///
    /// `caller_env` is the frame active at the call site; it becomes the
    /// call's base frame in dynamic mode.
    #[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
    pub fn eval_call(
        &mut self,
        callee: &Value,
        args: &[Value],
        caller_env: &Environment,
        name: Option<Name>,
    ) -> EvalResult {
        match callee {
            Value::Native(native) => Self::call_native(native, args),
            Value::Closure(closure) => self.call_closure(closure, args, caller_env, name),
            other => Err(not_callable(other.type_name())),
        }
    }

    fn call_native(native: &NativeFn, args: &[Value]) -> EvalResult {
        let prims = unwrap_arguments(native, args)?;
        native.call(&prims).map(Value::from)
    }

    fn call_closure(
        &mut self,
        closure: &Closure,
        args: &[Value],
        caller_env: &Environment,
        name: Option<Name>,
    ) -> EvalResult {
        check_arg_count(closure, args, name, self.interner)?;
        let bindings = bind_parameters(closure, args, self.interner)?;

        let base = match self.config.scoping {
            ScopingMode::Lexical => &closure.env,
            ScopingMode::Dynamic => caller_env,
        };
        let frame = base.extend(bindings);

        self.call_stack
            .push(CallFrame { name })
            .map_err(|e| self.call_stack.attach_backtrace(e, self.interner))?;
        let result = self
            .eval(closure.body, &frame)
            .map_err(|e| self.call_stack.attach_backtrace(e, self.interner));
        self.call_stack.pop();
        result
    }
}

//! Cinder Eval - tree-walking interpreter for the Cinder expression language.
//!
//! A program is a flat [`NodeArena`](cinder_ir::NodeArena) plus a root
//! [`NodeId`](cinder_ir::NodeId). Evaluation threads an [`Environment`]
//! through every node and produces a [`Value`].
//!
//! # Scoping
//!
//! [`ScopingMode`] is fixed per [`Interpreter`]. Lexical calls extend the
//! frame a closure captured; dynamic calls extend the caller's frame.
//!
//! # Example
//!
//! ```
//! use cinder_eval::{Interpreter, Prelude, Value};
//! use cinder_ir::{NodeArena, StringInterner};
//!
//! let interner = StringInterner::new();
//! let mut arena = NodeArena::new();
//! let add = arena.ident(interner.intern("add"));
//! let one = arena.int(1);
//! let two = arena.int(2);
//! let root = arena.apply(add, [one, two]);
//!
//! let env = Prelude::environment(&interner);
//! let mut interp = Interpreter::builder(&interner, &arena).build();
//! assert_eq!(interp.run(root, &env).ok(), Some(Value::Int(3)));
//! ```

#![deny(clippy::arithmetic_side_effects)]

mod builtins;
mod config;
mod diagnostics;
mod environment;
pub mod errors;
pub mod exec;
pub mod interpreter;
mod value;

pub use builtins::Prelude;
pub use config::{EvalConfig, ScopingMode, UnknownScopingMode, DEFAULT_MAX_CALL_DEPTH};
pub use diagnostics::{CallFrame, CallStack};
pub use environment::{AssignError, Bindings, Environment};
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use value::{Closure, NativeFn, NativeFnPtr, Primitive, Value};

#[cfg(test)]
mod tests;

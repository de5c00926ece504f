//! Whole-program evaluation tests.
//!
//! Each test builds a small program in a [`Harness`] arena and runs it
//! against the prelude.

mod literal_tests;

use cinder_ir::{Name, NodeArena, NodeId, StringInterner};

use crate::{
    EvalConfig, EvalError, EvalErrorKind, EvalResult, Interpreter, Prelude, ScopingMode, Value,
};

/// Interner plus arena, with shorthand constructors keyed by `&str`.
pub(crate) struct Harness {
    pub interner: StringInterner,
    pub arena: NodeArena,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            interner: StringInterner::new(),
            arena: NodeArena::new(),
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub fn int(&mut self, n: i128) -> NodeId {
        self.arena.int(n)
    }

    pub fn string(&mut self, s: &str) -> NodeId {
        let name = self.name(s);
        self.arena.string(name)
    }

    pub fn ident(&mut self, s: &str) -> NodeId {
        let name = self.name(s);
        self.arena.ident(name)
    }

    /// `op(args...)` where `op` is an identifier.
    pub fn call(&mut self, op: &str, args: &[NodeId]) -> NodeId {
        let func = self.ident(op);
        self.arena.apply(func, args.iter().copied())
    }

    pub fn lambda(&mut self, params: &[&str], body: NodeId) -> NodeId {
        let names: Vec<Name> = params.iter().map(|p| self.name(p)).collect();
        self.arena.lambda(names, body)
    }

    pub fn let_in(&mut self, name: &str, init: NodeId, body: NodeId) -> NodeId {
        let name = self.name(name);
        self.arena.let_in(name, init, body)
    }

    pub fn assign(&mut self, name: &str, value: NodeId) -> NodeId {
        let name = self.name(name);
        self.arena.assign(name, value)
    }

    pub fn unknown(&mut self, tag: &str) -> NodeId {
        let tag = self.name(tag);
        self.arena.unknown(tag)
    }

    /// `Let name = 0 in Block[Assign(name, Lambda(params, body)), then...]`.
    ///
    /// The placeholder binding lets the closure see itself once assigned.
    pub fn recursive(
        &mut self,
        name: &str,
        params: &[&str],
        body: NodeId,
        then: &[NodeId],
    ) -> NodeId {
        let placeholder = self.int(0);
        let lambda = self.lambda(params, body);
        let assign = self.assign(name, lambda);
        let items: Vec<NodeId> = std::iter::once(assign).chain(then.iter().copied()).collect();
        let block = self.arena.block(items);
        self.let_in(name, placeholder, block)
    }

    pub fn run_with(&self, root: NodeId, config: EvalConfig) -> EvalResult {
        let env = Prelude::environment(&self.interner);
        let mut interp = Interpreter::builder(&self.interner, &self.arena)
            .config(config)
            .build();
        interp.run(root, &env)
    }

    pub fn run(&self, root: NodeId) -> EvalResult {
        self.run_with(root, EvalConfig::lexical())
    }

    pub fn run_in(&self, root: NodeId, scoping: ScopingMode) -> EvalResult {
        self.run_with(
            root,
            EvalConfig {
                scoping,
                ..EvalConfig::default()
            },
        )
    }
}

#[track_caller]
pub(crate) fn ok(result: EvalResult) -> Value {
    match result {
        Ok(v) => v,
        Err(e) => panic!("expected a value, got error: {e}"),
    }
}

#[track_caller]
pub(crate) fn err(result: EvalResult) -> EvalError {
    match result {
        Ok(v) => panic!("expected an error, got {v}"),
        Err(e) => e,
    }
}

#[track_caller]
pub(crate) fn err_kind(result: EvalResult) -> EvalErrorKind {
    err(result).kind
}

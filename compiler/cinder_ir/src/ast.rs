//! Node kinds of the Cinder syntax tree.

use crate::{ClauseRange, Name, NodeId, NodeRange, ParamRange};

/// One syntactic construct.
///
/// `NodeKind` is `Copy`: the evaluator copies the kind out of the arena
/// before dispatching, so recursive evaluation never holds an arena borrow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Integer literal as written by the front end.
    ///
    /// Wider than `i64` so the evaluator can reject out-of-range literals
    /// instead of the front end silently truncating them.
    Int(i128),
    /// String literal.
    Str(Name),
    /// Identifier reference.
    Ident(Name),
    /// Call `func(args...)`.
    Apply { func: NodeId, args: NodeRange },
    /// Function literal.
    Lambda { params: ParamRange, body: NodeId },
    /// Sequence whose value is the last element.
    Block(NodeRange),
    /// First-match conditional.
    Cond(ClauseRange),
    /// Local binding scoped to `body`.
    Let {
        name: Name,
        init: NodeId,
        body: NodeId,
    },
    /// Overwrite of an existing binding.
    Assign { name: Name, value: NodeId },
    /// Form the front end did not recognize; fails only when evaluated.
    Unknown { tag: Name },
}

/// One `Cond` arm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    pub test: NodeId,
    pub consequence: NodeId,
}

//! Cinder IR - the syntax tree handed to the evaluator.
//!
//! The front end produces a flat, append-only [`NodeArena`]. Children are
//! referenced by [`NodeId`] indices and sequences by ranges into side tables,
//! so the evaluator can walk a `Block` or `Cond` with a plain index loop.
//!
//! Identifiers and string literals are interned into [`Name`] handles via
//! [`StringInterner`].

mod arena;
mod ast;
mod interner;
mod name;
mod node_id;

pub use arena::NodeArena;
pub use ast::{Clause, NodeKind};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use node_id::{ClauseRange, NodeId, NodeRange, ParamRange};

//! Cinder JSON - decodes the tagged-tree program encoding into a
//! [`NodeArena`].
//!
//! Each node is one JSON value:
//!
//! | JSON | Node |
//! |------|------|
//! | number | integer literal |
//! | string | string literal |
//! | `{"Identifier": "x"}` | identifier |
//! | `{"Application": [op, arg...]}` | application |
//! | `{"Lambda": [{"Parameters": [ident...]}, body]}` | lambda |
//! | `{"Block": [expr...]}` | block |
//! | `{"Cond": [{"Clause": [test, consequence]}...]}` | conditional |
//! | `{"Let": [ident, init, body]}` | let |
//! | `{"Assignment": [ident, value]}` | assignment |
//!
//! Unrecognized object keys, JSON booleans and `null` decode to
//! [`NodeKind::Unknown`](cinder_ir::NodeKind::Unknown); the evaluator rejects
//! them only if they are reached.

mod decode;
mod error;

pub use decode::{decode_str, decode_value, Program};
pub use error::DecodeError;

//! Evaluation helpers shared by the interpreter.
//!
//! These are free functions that do not recurse into `eval`:
//! - `expr` - literals and identifier resolution
//! - `call` - argument checking, parameter binding, native argument unwrapping
//! - `control` - conditional test checking

pub mod call;
pub mod control;
pub mod expr;

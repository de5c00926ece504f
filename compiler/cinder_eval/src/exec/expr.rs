//! Literal and identifier evaluation.

use cinder_ir::{Name, StringInterner};

use crate::environment::Environment;
use crate::errors::{integer_out_of_range, unbound_identifier, EvalResult};
use crate::value::Value;

/// Validate an integer literal.
///
/// The accepted range is open: `i64::MIN < n < i64::MAX`. The two extreme
/// values are rejected along with everything wider.
pub fn eval_int_literal(literal: i128) -> EvalResult {
    match i64::try_from(literal) {
        Ok(n) if n != i64::MIN && n != i64::MAX => Ok(Value::Int(n)),
        _ => Err(integer_out_of_range(literal)),
    }
}

/// Resolve an identifier in the current frame.
pub fn eval_ident(name: Name, env: &Environment, interner: &StringInterner) -> EvalResult {
    tracing::trace!(name = interner.lookup(name), "lookup");
    env.lookup(name)
        .ok_or_else(|| unbound_identifier(interner.lookup(name)))
}

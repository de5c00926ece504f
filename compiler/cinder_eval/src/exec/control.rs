//! Conditional helpers.

use crate::errors::{non_boolean_test, EvalError};
use crate::value::Value;

/// A `Cond` test must produce a boolean.
#[inline]
pub fn expect_test(value: &Value) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(non_boolean_test(other.type_name())),
    }
}

//! Front-end errors.

use cinder_ir::InternError;
use thiserror::Error;

/// A program that cannot be turned into a syntax tree.
///
/// These are structural problems in the encoding. Unknown forms are not
/// errors here; they are deferred to evaluation.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{form} expects {expected} elements, got {got}")]
    Arity {
        form: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("{form} payload must be {expected}")]
    Payload {
        form: &'static str,
        expected: &'static str,
    },

    #[error("expected {{\"Identifier\": <string>}} in {form}")]
    MalformedIdentifier { form: &'static str },

    #[error("expected {{\"{wrapper}\": [...]}} in {form}")]
    MissingWrapper {
        form: &'static str,
        wrapper: &'static str,
    },

    #[error("expression object must have exactly one key, found {keys}")]
    ObjectShape { keys: usize },

    #[error(transparent)]
    Intern(#[from] InternError),
}

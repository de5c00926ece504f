//! Driver errors and their exit statuses.

use cinder_eval::EvalError;
use cinder_json::DecodeError;
use thiserror::Error;

use crate::UsageError;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl DriverError {
    /// Process exit status: 1 for evaluation errors, 2 for anything that
    /// prevented evaluation from starting.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Eval(_) => 1,
            DriverError::Usage(_) | DriverError::Io { .. } | DriverError::Decode(_) => 2,
        }
    }
}

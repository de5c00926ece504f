//! Evaluation configuration.
//!
//! The scoping mode is the defining semantic axis of the language. It is
//! bound into an [`Interpreter`](crate::Interpreter) once, at build time, and
//! stays fixed for the whole run.

use std::fmt;
use std::str::FromStr;

/// Default closure call depth limit.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Which environment a closure body is evaluated in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScopingMode {
    /// Free identifiers resolve in the frame captured when the `Lambda` ran.
    #[default]
    Lexical,
    /// Free identifiers resolve in the caller's frame at the call site.
    Dynamic,
}

impl ScopingMode {
    #[inline]
    pub fn is_lexical(self) -> bool {
        matches!(self, Self::Lexical)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for ScopingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ScopingMode`] from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownScopingMode(pub String);

impl fmt::Display for UnknownScopingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scoping mode `{}` (expected `lexical` or `dynamic`)",
            self.0
        )
    }
}

impl std::error::Error for UnknownScopingMode {}

impl FromStr for ScopingMode {
    type Err = UnknownScopingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexical" => Ok(Self::Lexical),
            "dynamic" => Ok(Self::Dynamic),
            _ => Err(UnknownScopingMode(s.to_string())),
        }
    }
}

/// Configuration for one evaluation run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    pub scoping: ScopingMode,
    /// Maximum number of active closure calls, or `None` for unlimited
    /// (native stack growth still applies).
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    pub fn lexical() -> Self {
        Self::default()
    }

    pub fn dynamic() -> Self {
        Self {
            scoping: ScopingMode::Dynamic,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            scoping: ScopingMode::Lexical,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

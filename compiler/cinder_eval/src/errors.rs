//! Error types for evaluation.
//!
//! `EvalErrorKind` provides typed error categories. Factory functions
//! (e.g. `unbound_identifier()`) are the public API: they populate both
//! `kind` and `message`.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// Every failure the evaluator can produce is one of these. None of them
/// terminate the process; the driver decides presentation and exit status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Integer literal outside `i64::MIN < n < i64::MAX`.
    IntegerRange { literal: i128 },
    /// Identifier absent from the current frame.
    UnboundIdentifier { name: String },
    /// Assignment target absent from the current frame.
    UnassignedVariable { name: String },
    /// Unrecognized AST form.
    UnknownForm { tag: String },
    /// Value of the wrong kind where a specific kind is required.
    TypeMismatch {
        context: String,
        expected: String,
        got: String,
    },
    /// Application operator is neither native nor closure.
    NotCallable { type_name: String },
    /// Argument count does not match the callee.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
        /// `expected` is a minimum rather than an exact count.
        at_least: bool,
    },
    /// A lambda lists the same parameter name more than once.
    DuplicateParameter { name: String },
    /// Closure call depth exceeded the configured limit.
    StackOverflow { depth: usize },
    /// Checked arithmetic in a native failed.
    IntegerOverflow { operation: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegerRange { literal } => {
                write!(f, "improper number {literal}: not a 64-bit integer")
            }
            Self::UnboundIdentifier { name } => write!(f, "unbound identifier: {name}"),
            Self::UnassignedVariable { name } => {
                write!(f, "cannot assign to {name}: no existing binding")
            }
            Self::UnknownForm { tag } => write!(f, "unknown expression type: {tag}"),
            Self::TypeMismatch {
                context,
                expected,
                got,
            } => write!(f, "{context}: expected {expected}, got {got}"),
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::ArityMismatch {
                name,
                expected,
                got,
                at_least,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                let bound = if *at_least { "at least " } else { "" };
                if name.is_empty() {
                    write!(f, "expected {bound}{expected} {arg_word}, got {got}")
                } else {
                    write!(f, "{name} expects {bound}{expected} {arg_word}, got {got}")
                }
            }
            Self::DuplicateParameter { name } => {
                write!(f, "duplicate parameter name: {name}")
            }
            Self::StackOverflow { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Callee name, or `<lambda>` for an anonymous operator.
    pub name: String,
}

/// Immutable snapshot of the call stack at an error site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    /// Create a backtrace from a list of frames, most recent call first.
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
    /// Call stack backtrace at the error site, innermost call first.
    ///
    /// Set by the interpreter when the error escapes a closure body.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        tracing::debug!(%message, "evaluation error");
        Self {
            kind,
            message,
            backtrace: None,
        }
    }

    /// Attach a backtrace to this error.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

// Literal Errors

/// Integer literal outside the supported 64-bit range.
#[cold]
pub fn integer_out_of_range(literal: i128) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerRange { literal })
}

/// Node with an unrecognized tag.
#[cold]
pub fn unknown_form(tag: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownForm {
        tag: tag.to_string(),
    })
}

// Binding Errors

/// Identifier not bound in the current frame.
#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    })
}

/// Assignment to a name with no existing binding.
#[cold]
pub fn unassigned_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnassignedVariable {
        name: name.to_string(),
    })
}

// Type Errors

/// A value of the wrong kind was supplied.
#[cold]
pub fn type_mismatch(context: &str, expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        context: context.to_string(),
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// `Cond` test evaluated to something other than a boolean.
#[cold]
pub fn non_boolean_test(got: &str) -> EvalError {
    type_mismatch("conditional test must be boolean", "bool", got)
}

// Call Errors

/// Application of a value that is neither native nor closure.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

/// Wrong number of arguments.
#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
        at_least: false,
    })
}

/// Too few arguments for a variadic native.
#[cold]
pub fn arity_at_least(name: &str, minimum: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected: minimum,
        got,
        at_least: true,
    })
}

/// Lambda parameter list binds the same name twice.
#[cold]
pub fn duplicate_parameter(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateParameter {
        name: name.to_string(),
    })
}

/// Closure call depth limit exceeded.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

/// Checked integer arithmetic failed.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

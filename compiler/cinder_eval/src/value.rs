//! Runtime values.
//!
//! A `Value` is immutable once constructed. Strings and closures are
//! reference counted (`Rc`) since evaluation is single-threaded and values
//! are freely aliased between environment frames.

use std::fmt;
use std::rc::Rc;

use cinder_ir::{Name, NodeId};

use crate::environment::Environment;
use crate::errors::EvalError;

/// Native calling convention: unwrapped payloads in, one payload out.
pub type NativeFnPtr = fn(&[Primitive]) -> Result<Primitive, EvalError>;

/// Primitive payload of a value, as seen by native functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
}

impl Primitive {
    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Int(_) => "int",
            Primitive::Str(_) => "str",
            Primitive::Bool(_) => "bool",
        }
    }
}

/// A built-in callable identified by name.
#[derive(Clone, Copy)]
pub struct NativeFn {
    pub name: &'static str,
    pub func: NativeFnPtr,
}

impl NativeFn {
    pub const fn new(name: &'static str, func: NativeFnPtr) -> Self {
        Self { name, func }
    }

    /// Invoke the native on already-unwrapped arguments.
    #[inline]
    pub fn call(&self, args: &[Primitive]) -> Result<Primitive, EvalError> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFn").field(&self.name).finish()
    }
}

/// A user-defined function and the environment it was created in.
#[derive(Debug)]
pub struct Closure {
    pub params: Vec<Name>,
    pub body: NodeId,
    /// Frame active when the `Lambda` was evaluated; the call base in
    /// lexical mode.
    pub env: Environment,
}

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    Native(NativeFn),
    Closure(Rc<Closure>),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// Create a closure value.
    pub fn closure(params: Vec<Name>, body: NodeId, env: Environment) -> Self {
        Value::Closure(Rc::new(Closure { params, body, env }))
    }

    /// Whether this value can appear in operator position.
    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Native(_) | Value::Closure(_))
    }

    /// The primitive payload, or `None` for callables.
    pub fn to_primitive(&self) -> Option<Primitive> {
        match self {
            Value::Int(n) => Some(Primitive::Int(*n)),
            Value::Str(s) => Some(Primitive::Str(Rc::clone(s))),
            Value::Bool(b) => Some(Primitive::Bool(*b)),
            Value::Native(_) | Value::Closure(_) => None,
        }
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::Native(_) => "native",
            Value::Closure(_) => "closure",
        }
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::Int(n) => Value::Int(n),
            Primitive::Str(s) => Value::Str(s),
            Primitive::Bool(b) => Value::Bool(b),
        }
    }
}

/// Callables compare by identity; everything else by payload.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => a.name == b.name,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Native(n) => write!(f, "Native({})", n.name),
            Value::Closure(c) => write!(f, "Closure(params={}, body={:?})", c.params.len(), c.body),
        }
    }
}

/// Renders the primitive payload, which is what the driver prints.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Native(n) => write!(f, "<native {}>", n.name),
            Value::Closure(c) => write!(f, "<closure/{}>", c.params.len()),
        }
    }
}

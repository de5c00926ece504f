//! Builtin registry.
//!
//! Natives receive unwrapped [`Primitive`] payloads and do their own arity
//! and type checks. Integer arithmetic is checked: overflow is an error,
//! never a wrap.

use cinder_ir::StringInterner;

use crate::environment::Environment;
use crate::errors::{arity_at_least, arity_mismatch, integer_overflow, type_mismatch, EvalError};
use crate::value::{NativeFn, Primitive, Value};

/// Unwrap exactly `N` integer arguments.
fn expect_ints<const N: usize>(name: &str, args: &[Primitive]) -> Result<[i64; N], EvalError> {
    if args.len() != N {
        return Err(arity_mismatch(name, N, args.len()));
    }
    let mut out = [0i64; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = expect_int(name, arg)?;
    }
    Ok(out)
}

fn expect_int(name: &str, arg: &Primitive) -> Result<i64, EvalError> {
    match arg {
        Primitive::Int(n) => Ok(*n),
        other => Err(type_mismatch(name, "int", other.type_name())),
    }
}

fn add(args: &[Primitive]) -> Result<Primitive, EvalError> {
    let [a, b] = expect_ints::<2>("add", args)?;
    a.checked_add(b)
        .map(Primitive::Int)
        .ok_or_else(|| integer_overflow("add"))
}

fn sub(args: &[Primitive]) -> Result<Primitive, EvalError> {
    let [a, b] = expect_ints::<2>("sub", args)?;
    a.checked_sub(b)
        .map(Primitive::Int)
        .ok_or_else(|| integer_overflow("sub"))
}

/// Product of one or more integers.
fn mul(args: &[Primitive]) -> Result<Primitive, EvalError> {
    if args.is_empty() {
        return Err(arity_at_least("mul", 1, 0));
    }
    args.iter()
        .try_fold(1i64, |acc, arg| {
            let n = expect_int("mul", arg)?;
            acc.checked_mul(n).ok_or_else(|| integer_overflow("mul"))
        })
        .map(Primitive::Int)
}

fn eq(args: &[Primitive]) -> Result<Primitive, EvalError> {
    let [a, b] = expect_ints::<2>("eq", args)?;
    Ok(Primitive::Bool(a == b))
}

fn is_zero(args: &[Primitive]) -> Result<Primitive, EvalError> {
    let [n] = expect_ints::<1>("zero?", args)?;
    Ok(Primitive::Bool(n == 0))
}

/// The builtin bindings every program starts with.
pub struct Prelude;

impl Prelude {
    /// Native functions, bound under their own names.
    pub const NATIVES: &'static [NativeFn] = &[
        NativeFn::new("add", add),
        NativeFn::new("sub", sub),
        NativeFn::new("mul", mul),
        NativeFn::new("eq", eq),
        NativeFn::new("zero?", is_zero),
    ];

    /// Boolean constants.
    pub const CONSTANTS: &'static [(&'static str, bool)] = &[("true", true), ("false", false)];

    /// Bind every builtin into `env`.
    pub fn seed(interner: &StringInterner, env: &Environment) {
        for native in Self::NATIVES {
            env.define(interner.intern(native.name), Value::Native(*native));
        }
        for &(name, value) in Self::CONSTANTS {
            env.define(interner.intern(name), Value::Bool(value));
        }
    }

    /// A fresh root frame holding only the builtins.
    pub fn environment(interner: &StringInterner) -> Environment {
        let env = Environment::new();
        Self::seed(interner, &env);
        env
    }
}

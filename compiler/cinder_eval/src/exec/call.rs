//! Function call helpers.

use cinder_ir::{Name, StringInterner};
use smallvec::SmallVec;

use crate::environment::Bindings;
use crate::errors::{arity_mismatch, duplicate_parameter, type_mismatch, EvalError};
use crate::value::{Closure, NativeFn, Primitive, Value};

/// Display name for a callee in diagnostics.
pub fn callee_name(name: Option<Name>, interner: &StringInterner) -> &str {
    name.map_or("", |n| interner.lookup(n))
}

/// Check that a closure was called with exactly as many arguments as it
/// has parameters.
pub fn check_arg_count(
    closure: &Closure,
    args: &[Value],
    name: Option<Name>,
    interner: &StringInterner,
) -> Result<(), EvalError> {
    if closure.params.len() != args.len() {
        return Err(arity_mismatch(
            callee_name(name, interner),
            closure.params.len(),
            args.len(),
        ));
    }
    Ok(())
}

/// Pair each parameter with its argument, in order.
///
/// A parameter list naming the same identifier twice is rejected here, on
/// the first call, rather than letting the later argument silently win.
pub fn bind_parameters(
    closure: &Closure,
    args: &[Value],
    interner: &StringInterner,
) -> Result<Bindings, EvalError> {
    let mut bindings = Bindings::default();
    bindings.reserve(args.len());
    for (&param, arg) in closure.params.iter().zip(args) {
        if bindings.insert(param, arg.clone()).is_some() {
            return Err(duplicate_parameter(interner.lookup(param)));
        }
    }
    Ok(bindings)
}

/// Unwrap argument values to the payloads a native operates on.
///
/// Callables have no primitive payload; passing one to a native is a type
/// error.
pub fn unwrap_arguments(
    native: &NativeFn,
    args: &[Value],
) -> Result<SmallVec<[Primitive; 4]>, EvalError> {
    args.iter()
        .map(|arg| {
            arg.to_primitive()
                .ok_or_else(|| type_mismatch(native.name, "primitive", arg.type_name()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::errors::EvalErrorKind;
    use cinder_ir::NodeId;

    fn closure(params: Vec<Name>) -> Closure {
        Closure {
            params,
            body: NodeId::new(0),
            env: Environment::new(),
        }
    }

    fn first(args: &[Primitive]) -> Result<Primitive, EvalError> {
        Ok(args[0].clone())
    }

    #[test]
    fn arg_count_mismatch_names_callee() {
        let interner = StringInterner::new();
        let f = interner.intern("f");
        let c = closure(vec![interner.intern("a")]);
        let err = check_arg_count(&c, &[], Some(f), &interner)
            .err()
            .map(|e| e.message);
        assert_eq!(err.as_deref(), Some("f expects 1 argument, got 0"));
        assert!(check_arg_count(&c, &[Value::Int(1)], Some(f), &interner).is_ok());
    }

    #[test]
    fn bind_in_order() {
        let interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let c = closure(vec![a, b]);
        let bindings = bind_parameters(&c, &[Value::Int(1), Value::Int(2)], &interner)
            .ok()
            .unwrap_or_default();
        assert_eq!(bindings.get(&a), Some(&Value::Int(1)));
        assert_eq!(bindings.get(&b), Some(&Value::Int(2)));
    }

    #[test]
    fn duplicate_parameter_rejected() {
        let interner = StringInterner::new();
        let a = interner.intern("a");
        let c = closure(vec![a, a]);
        let err = bind_parameters(&c, &[Value::Int(1), Value::Int(2)], &interner)
            .err()
            .map(|e| e.kind);
        assert_eq!(
            err,
            Some(EvalErrorKind::DuplicateParameter {
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn unwrap_rejects_callables() {
        let native = NativeFn::new("first", first);
        let args = [Value::Int(1), Value::Native(native)];
        let err = unwrap_arguments(&native, &args).err().map(|e| e.kind);
        assert_eq!(
            err,
            Some(EvalErrorKind::TypeMismatch {
                context: "first".to_string(),
                expected: "primitive".to_string(),
                got: "native".to_string(),
            })
        );
    }

    #[test]
    fn unwrap_preserves_order() {
        let native = NativeFn::new("first", first);
        let args = [Value::Int(1), Value::string("s"), Value::Bool(true)];
        let prims = unwrap_arguments(&native, &args).ok().unwrap_or_default();
        assert_eq!(prims.len(), 3);
        assert_eq!(prims[0], Primitive::Int(1));
        assert_eq!(prims[2], Primitive::Bool(true));
    }
}

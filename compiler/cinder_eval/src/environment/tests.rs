use super::*;
use cinder_ir::StringInterner;

fn single(name: Name, value: Value) -> Bindings {
    let mut bindings = Bindings::default();
    bindings.insert(name, value);
    bindings
}

#[test]
fn test_define_lookup() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let env = Environment::new();
    env.define(x, Value::Int(42));
    assert_eq!(env.lookup(x), Some(Value::Int(42)));
    assert!(env.contains(x));
}

#[test]
fn test_lookup_missing() {
    let interner = StringInterner::new();
    let env = Environment::new();
    assert_eq!(env.lookup(interner.intern("missing")), None);
}

#[test]
fn test_extend_empty_returns_same_frame() {
    let env = Environment::new();
    let extended = env.extend(Bindings::default());
    assert!(Environment::ptr_eq(&env, &extended));
    assert!(env.latest_extension().is_none());
}

#[test]
fn test_extend_copies_and_overlays() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let base = Environment::new();
    base.define(x, Value::Int(1));
    base.define(y, Value::Int(2));

    let extended = base.extend(single(x, Value::Int(10)));
    assert!(!Environment::ptr_eq(&base, &extended));
    assert_eq!(extended.lookup(x), Some(Value::Int(10)));
    assert_eq!(extended.lookup(y), Some(Value::Int(2)));
    assert_eq!(extended.len(), 2);

    // Base is untouched
    assert_eq!(base.lookup(x), Some(Value::Int(1)));
}

#[test]
fn test_extend_records_forward_link() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let base = Environment::new();
    let extended = base.extend(single(x, Value::Int(1)));
    let link = base.latest_extension();
    assert!(link.is_some_and(|e| Environment::ptr_eq(&e, &extended)));

    drop(extended);
    assert!(base.latest_extension().is_none());
}

#[test]
fn test_assign_existing_in_place() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let env = Environment::new();
    env.define(x, Value::Int(1));
    let alias = env.clone();

    assert_eq!(env.assign(x, Value::Int(2)), Ok(()));
    assert_eq!(alias.lookup(x), Some(Value::Int(2)));
}

#[test]
fn test_assign_unbound_fails() {
    let interner = StringInterner::new();
    let env = Environment::new();
    let x = interner.intern("x");
    assert_eq!(env.assign(x, Value::Int(1)), Err(AssignError::Unbound));
    assert!(!env.contains(x));
}

#[test]
fn test_branches_are_independent_after_divergence() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let a = interner.intern("a");
    let b = interner.intern("b");

    let root = Environment::new();
    root.define(x, Value::Int(1));

    let left = root.extend(single(a, Value::Int(0)));
    let right = root.extend(single(b, Value::Int(0)));

    assert_eq!(left.assign(x, Value::Int(99)), Ok(()));
    assert_eq!(left.lookup(x), Some(Value::Int(99)));
    assert_eq!(right.lookup(x), Some(Value::Int(1)));
    assert_eq!(root.lookup(x), Some(Value::Int(1)));
}

#[test]
fn test_assign_on_base_not_visible_in_earlier_extension() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let base = Environment::new();
    base.define(x, Value::Int(1));
    let extended = base.extend(single(y, Value::Int(0)));

    assert_eq!(base.assign(x, Value::Int(2)), Ok(()));
    assert_eq!(extended.lookup(x), Some(Value::Int(1)));
}

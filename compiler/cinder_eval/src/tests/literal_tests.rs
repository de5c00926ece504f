//! Literals and identifier lookup.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{err_kind, ok, Harness};
use crate::{EvalErrorKind, Value};

#[test]
fn integer_literal() {
    let mut h = Harness::new();
    let root = h.int(42);
    assert_eq!(ok(h.run(root)), Value::Int(42));
}

#[test]
fn string_literal_has_no_escape_processing() {
    let mut h = Harness::new();
    let root = h.string("a\\nb");
    assert_eq!(ok(h.run(root)), Value::string("a\\nb"));
}

#[test]
fn boundary_literals_rejected() {
    for literal in [i128::from(i64::MAX), i128::from(i64::MIN), i128::MAX] {
        let mut h = Harness::new();
        let root = h.int(literal);
        assert_eq!(err_kind(h.run(root)), EvalErrorKind::IntegerRange { literal });
    }
}

#[test]
fn out_of_range_literal_fails_only_when_evaluated() {
    let mut h = Harness::new();
    let bad = h.int(i128::from(i64::MAX));
    let root = h.lambda(&[], bad);
    assert!(ok(h.run(root)).is_callable());

    let f = h.lambda(&[], bad);
    let root = h.arena.apply(f, []);
    assert!(matches!(
        err_kind(h.run(root)),
        EvalErrorKind::IntegerRange { .. }
    ));
}

#[test]
fn prelude_identifiers_resolve() {
    let mut h = Harness::new();
    let t = h.ident("true");
    let f = h.ident("false");
    let add = h.ident("add");
    assert_eq!(ok(h.run(t)), Value::Bool(true));
    assert_eq!(ok(h.run(f)), Value::Bool(false));
    assert_eq!(ok(h.run(add)).type_name(), "native");
}

#[test]
fn unbound_identifier() {
    let mut h = Harness::new();
    let root = h.ident("nope");
    let e = super::err(h.run(root));
    assert_eq!(e.message, "unbound identifier: nope");
    assert!(e.backtrace.is_none());
}

#[test]
fn unknown_form_reports_tag() {
    let mut h = Harness::new();
    let root = h.unknown("While");
    assert_eq!(
        err_kind(h.run(root)),
        EvalErrorKind::UnknownForm {
            tag: "While".to_string()
        }
    );
}

proptest! {
    #[test]
    fn in_range_literals_evaluate_to_themselves(n in (i64::MIN + 1)..i64::MAX) {
        let mut h = Harness::new();
        let root = h.int(i128::from(n));
        prop_assert_eq!(ok(h.run(root)), Value::Int(n));
    }
}

use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(empty, Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert!(interner.is_empty());
}

#[test]
fn test_len_counts_distinct_strings() {
    let interner = StringInterner::new();
    interner.intern("zero?");
    interner.intern("add");
    interner.intern("zero?");
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_lookup_static_outlives_guard() {
    let interner = StringInterner::new();
    let name = interner.intern("captured");
    let s: &'static str = interner.lookup_static(name);
    interner.intern("another");
    assert_eq!(s, "captured");
}

#[test]
fn test_string_lookup_trait() {
    fn render<L: StringLookup>(lookup: &L, name: Name) -> String {
        lookup.lookup(name).to_uppercase()
    }

    let interner = StringInterner::new();
    let name = interner.intern("sub");
    assert_eq!(render(&interner, name), "SUB");
}

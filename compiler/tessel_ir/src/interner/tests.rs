use super::*;

#[test]
fn test_intern_is_stable() {
    let interner = StringInterner::new();
    let a = interner.intern("_domain_1d");
    let b = interner.intern("_domain_1d");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "_domain_1d");
}

#[test]
fn test_distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let a = interner.intern("_tuple_Int32_Bool");
    let b = interner.intern("_tuple_Bool_Int32");
    assert_ne!(a, b);
}

#[test]
fn test_empty_is_preinterned() {
    let interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(empty.index(), 0);
    assert_eq!(interner.lookup(empty), "");
}

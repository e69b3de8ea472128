use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_alloc_starts_anonymous() {
    let mut arena = TypeArena::new();
    let id = arena.alloc(TypeKind::Primitive(Primitive::Int32));
    assert!(!arena.get(id).is_named());
    assert_eq!(arena.shape(id), TypeShape::Primitive);
}

#[test]
fn test_array_children_include_recorded_domain() {
    let mut arena = TypeArena::new();
    let elem = arena.alloc(TypeKind::Primitive(Primitive::Float64));
    let dom = arena.alloc(TypeKind::Domain {
        rank: 2,
        parent: None,
        index: None,
    });
    let arr = arena.alloc(TypeKind::Array {
        elem,
        domain_expr: ExprId::new(0),
        domain: None,
    });
    assert_eq!(arena.kind(arr).children().as_slice(), &[elem]);

    if let TypeKind::Array { domain, .. } = &mut arena.get_mut(arr).kind {
        *domain = Some(dom);
    }
    assert_eq!(arena.kind(arr).children().as_slice(), &[elem, dom]);
}

#[test]
fn test_domain_children_parent_then_index() {
    let mut arena = TypeArena::new();
    let base = arena.alloc(TypeKind::Domain {
        rank: 1,
        parent: None,
        index: None,
    });
    let idx = arena.alloc(TypeKind::Index {
        expr: ExprId::new(0),
    });
    let derived = arena.alloc(TypeKind::Domain {
        rank: 1,
        parent: Some(base),
        index: Some(idx),
    });
    assert_eq!(arena.kind(derived).children().as_slice(), &[base, idx]);
}

#[test]
fn test_tuple_children_keep_order() {
    let mut arena = TypeArena::new();
    let a = arena.alloc(TypeKind::Primitive(Primitive::Int32));
    let b = arena.alloc(TypeKind::Primitive(Primitive::Bool));
    let tup = arena.alloc(TypeKind::Tuple(SmallVec::from_slice(&[b, a])));
    assert_eq!(arena.kind(tup).children().as_slice(), &[b, a]);
    assert_eq!(arena.shape(tup).to_string(), "tuple");
}

use super::*;
use pretty_assertions::assert_eq;

fn expr_stmt(arena: &mut StmtArena, n: u32) -> StmtId {
    arena.alloc(Stmt::new(StmtKind::Expr(ExprId::new(n)), Span::new(n, n + 1)))
}

fn order(arena: &StmtArena, container: ContainerId) -> Vec<StmtId> {
    arena.iter(container).collect()
}

#[test]
fn test_push_back_and_front() {
    let mut arena = StmtArena::new();
    let c = arena.new_container(ScopeId::new(0));
    let a = expr_stmt(&mut arena, 1);
    let b = expr_stmt(&mut arena, 2);
    let z = expr_stmt(&mut arena, 3);
    arena.push_back(c, a);
    arena.push_back(c, b);
    arena.push_front(c, z);

    assert_eq!(order(&arena, c), vec![z, a, b]);
    assert_eq!(arena.next(b), None);
}

#[test]
fn test_insert_after_tail_moves_tail() {
    let mut arena = StmtArena::new();
    let c = arena.new_container(ScopeId::new(0));
    let a = expr_stmt(&mut arena, 1);
    let b = expr_stmt(&mut arena, 2);
    let tail = expr_stmt(&mut arena, 3);
    arena.push_back(c, a);
    arena.insert_after(a, b);
    arena.push_back(c, tail);

    assert_eq!(order(&arena, c), vec![a, b, tail]);
}

#[test]
fn test_insert_before_middle() {
    let mut arena = StmtArena::new();
    let c = arena.new_container(ScopeId::new(0));
    let a = expr_stmt(&mut arena, 1);
    let b = expr_stmt(&mut arena, 2);
    let m = expr_stmt(&mut arena, 3);
    arena.push_back(c, a);
    arena.push_back(c, b);
    arena.insert_before(b, m);

    assert_eq!(order(&arena, c), vec![a, m, b]);
    assert_eq!(arena.next(a), Some(m));
    assert_eq!(arena.next(m), Some(b));
    assert_eq!(arena.container_of(m), Some(c));
}

#[test]
fn test_push_synthesized_keeps_creation_order_ahead_of_source() {
    let mut arena = StmtArena::new();
    let c = arena.new_container(ScopeId::new(0));
    let src = expr_stmt(&mut arena, 1);
    arena.push_back(c, src);

    let first = arena.alloc(Stmt::synthesized(StmtKind::TypeDef(SymbolId::new(0))));
    let second = arena.alloc(Stmt::synthesized(StmtKind::TypeDef(SymbolId::new(1))));
    arena.push_synthesized(c, first);
    arena.push_synthesized(c, second);

    assert_eq!(order(&arena, c), vec![first, second, src]);
    assert!(arena.get(first).synthesized);
}

#[test]
#[should_panic(expected = "already linked")]
fn test_double_link_panics() {
    let mut arena = StmtArena::new();
    let c = arena.new_container(ScopeId::new(0));
    let a = expr_stmt(&mut arena, 1);
    arena.push_back(c, a);
    arena.push_back(c, a);
}

#[test]
fn test_preorder_descends_into_blocks() {
    let mut arena = StmtArena::new();
    let outer = arena.new_container(ScopeId::new(0));
    let inner = arena.new_container(ScopeId::new(1));
    let a = expr_stmt(&mut arena, 1);
    let block = arena.alloc(Stmt::new(StmtKind::Block(inner), Span::DUMMY));
    let b = expr_stmt(&mut arena, 2);
    let c = expr_stmt(&mut arena, 3);
    arena.push_back(outer, a);
    arena.push_back(outer, block);
    arena.push_back(outer, c);
    arena.push_back(inner, b);

    assert_eq!(arena.preorder(&[outer]), vec![a, block, b, c]);
}

//! Statement arena with ordered containers.
//!
//! Statements are allocated once and addressed by `StmtId` for their whole
//! life. Order lives in per-container doubly linked lists threaded through
//! the arena slots, so inserting next to a known statement is O(1) and never
//! invalidates other handles.
//!
//! A statement is linked into at most one container at a time.

use crate::{ContainerId, ExprId, ScopeId, Span, StmtId, SymbolId};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    /// Type declaration.
    TypeDef(SymbolId),
    /// Variable declaration.
    VarDef(SymbolId),
    /// Expression statement. Opaque to the structural passes.
    Expr(ExprId),
    /// Nested block with its own container.
    Block(ContainerId),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    /// Inserted by a compiler pass rather than written in source.
    pub synthesized: bool,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt {
            kind,
            span,
            synthesized: false,
        }
    }

    /// A compiler-generated declaration with no source location.
    pub fn synthesized(kind: StmtKind) -> Self {
        Stmt {
            kind,
            span: Span::DUMMY,
            synthesized: true,
        }
    }

    /// Symbol declared by this statement, if it is a declaration.
    pub fn declared_symbol(&self) -> Option<SymbolId> {
        match self.kind {
            StmtKind::TypeDef(sym) | StmtKind::VarDef(sym) => Some(sym),
            StmtKind::Expr(_) | StmtKind::Block(_) => None,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    stmt: Stmt,
    container: Option<ContainerId>,
    prev: Option<StmtId>,
    next: Option<StmtId>,
}

/// An ordered statement list: a module body or a block.
#[derive(Clone, Debug)]
pub struct Container {
    /// Scope that declarations in this container bind into.
    pub scope: ScopeId,
    head: Option<StmtId>,
    tail: Option<StmtId>,
    /// Last statement placed by [`StmtArena::push_synthesized`].
    synth_tail: Option<StmtId>,
}

#[derive(Clone, Default, Debug)]
pub struct StmtArena {
    slots: Vec<Slot>,
    containers: Vec<Container>,
}

impl StmtArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_container(&mut self, scope: ScopeId) -> ContainerId {
        let id = ContainerId::from_len(self.containers.len());
        self.containers.push(Container {
            scope,
            head: None,
            tail: None,
            synth_tail: None,
        });
        id
    }

    #[inline]
    pub fn container(&self, id: ContainerId) -> &Container {
        &self.containers[id.index()]
    }

    /// Allocate a statement without linking it anywhere.
    pub fn alloc(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::from_len(self.slots.len());
        self.slots.push(Slot {
            stmt,
            container: None,
            prev: None,
            next: None,
        });
        id
    }

    #[inline]
    pub fn get(&self, id: StmtId) -> &Stmt {
        &self.slots[id.index()].stmt
    }

    /// Container the statement is currently linked into.
    #[inline]
    pub fn container_of(&self, id: StmtId) -> Option<ContainerId> {
        self.slots[id.index()].container
    }

    pub fn next(&self, id: StmtId) -> Option<StmtId> {
        self.slots[id.index()].next
    }

    fn claim(&mut self, id: StmtId, container: ContainerId) {
        let slot = &mut self.slots[id.index()];
        assert!(
            slot.container.is_none(),
            "{id:?} is already linked into {:?}",
            slot.container
        );
        slot.container = Some(container);
    }

    fn anchor_container(&self, anchor: StmtId) -> ContainerId {
        self.container_of(anchor)
            .unwrap_or_else(|| panic!("anchor {anchor:?} is not linked into a container"))
    }

    /// Append `id` at the end of `container`.
    pub fn push_back(&mut self, container: ContainerId, id: StmtId) {
        match self.containers[container.index()].tail {
            Some(tail) => self.insert_after(tail, id),
            None => {
                self.claim(id, container);
                let c = &mut self.containers[container.index()];
                c.head = Some(id);
                c.tail = Some(id);
            }
        }
    }

    /// Prepend `id` at the start of `container`.
    pub fn push_front(&mut self, container: ContainerId, id: StmtId) {
        match self.containers[container.index()].head {
            Some(head) => self.insert_before(head, id),
            None => self.push_back(container, id),
        }
    }

    /// Link `id` immediately after `anchor`, in `anchor`'s container.
    ///
    /// # Panics
    /// Panics if `anchor` is unlinked or `id` is already linked.
    pub fn insert_after(&mut self, anchor: StmtId, id: StmtId) {
        let container = self.anchor_container(anchor);
        self.claim(id, container);

        let next = self.slots[anchor.index()].next;
        self.slots[id.index()].prev = Some(anchor);
        self.slots[id.index()].next = next;
        self.slots[anchor.index()].next = Some(id);
        match next {
            Some(next) => self.slots[next.index()].prev = Some(id),
            None => self.containers[container.index()].tail = Some(id),
        }
    }

    /// Link `id` immediately before `anchor`, in `anchor`'s container.
    ///
    /// # Panics
    /// Panics if `anchor` is unlinked or `id` is already linked.
    pub fn insert_before(&mut self, anchor: StmtId, id: StmtId) {
        let container = self.anchor_container(anchor);
        self.claim(id, container);

        let prev = self.slots[anchor.index()].prev;
        self.slots[id.index()].next = Some(anchor);
        self.slots[id.index()].prev = prev;
        self.slots[anchor.index()].prev = Some(id);
        match prev {
            Some(prev) => self.slots[prev.index()].next = Some(id),
            None => self.containers[container.index()].head = Some(id),
        }
    }

    /// Place a synthesized declaration after the previous one placed in
    /// `container`, or at the front if it is the first.
    ///
    /// Successive calls therefore keep creation order, ahead of any source
    /// statements of the container.
    pub fn push_synthesized(&mut self, container: ContainerId, id: StmtId) {
        match self.containers[container.index()].synth_tail {
            Some(last) => self.insert_after(last, id),
            None => self.push_front(container, id),
        }
        self.containers[container.index()].synth_tail = Some(id);
    }

    /// Statements of `container` in order.
    pub fn iter(&self, container: ContainerId) -> StmtIter<'_> {
        StmtIter {
            arena: self,
            cursor: self.container(container).head,
        }
    }

    /// All statements reachable from `roots`, in source order, descending
    /// into nested blocks right after the block statement itself.
    pub fn preorder(&self, roots: &[ContainerId]) -> Vec<StmtId> {
        let mut out = Vec::with_capacity(self.slots.len());
        for &root in roots {
            self.collect_preorder(root, &mut out);
        }
        out
    }

    fn collect_preorder(&self, container: ContainerId, out: &mut Vec<StmtId>) {
        for id in self.iter(container) {
            out.push(id);
            if let StmtKind::Block(inner) = self.get(id).kind {
                self.collect_preorder(inner, out);
            }
        }
    }
}

/// Iterator over one container's statements.
pub struct StmtIter<'a> {
    arena: &'a StmtArena,
    cursor: Option<StmtId>,
}

impl Iterator for StmtIter<'_> {
    type Item = StmtId;

    fn next(&mut self) -> Option<StmtId> {
        let current = self.cursor?;
        self.cursor = self.arena.next(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests;

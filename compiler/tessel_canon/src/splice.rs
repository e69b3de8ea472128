//! Interning and declaration splicing.
//!
//! [`intern`] is the one place canonical declarations are created. It looks
//! the mangled name up in the context's current scope only. A hit returns
//! the existing canonical type and the freshly built node is dropped. A
//! miss names the fresh node, binds it, and links a synthesized type
//! declaration into the statement order at the requested anchor.

use tessel_ir::{DefPoint, Stmt, StmtId, StmtKind, Symbol, SymbolId, SymbolKind, TypeId};

use crate::{CanonCx, CanonError};

/// Where a newly created declaration is linked.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Anchor {
    /// Shared declarations container, after the previous synthesized
    /// declaration there.
    SharedTail,
    /// Right after the statement that declares this element symbol.
    AfterDefOf(SymbolId),
    /// Right before this statement.
    Before(StmtId),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Interned {
    Reused(TypeId),
    Created(TypeId),
}

impl Interned {
    #[inline]
    pub(crate) fn ty(self) -> TypeId {
        match self {
            Interned::Reused(ty) | Interned::Created(ty) => ty,
        }
    }
}

enum Position {
    SharedTail,
    After(StmtId),
    Before(StmtId),
}

/// Return the canonical type named `name` in the current scope, creating
/// it from `fresh` if there is none yet.
pub(crate) fn intern(
    cx: &mut CanonCx<'_>,
    name: &str,
    fresh: TypeId,
    anchor: Anchor,
) -> Result<Interned, CanonError> {
    let scope = cx.scope();
    let name_id = cx.program.interner.intern(name);

    if let Some(existing) = cx.program.scopes.lookup_local(scope, name_id) {
        tracing::trace!(name, ?scope, "reusing canonical declaration");
        cx.stats.reused += 1;
        return Ok(Interned::Reused(cx.program.symbols.get(existing).ty));
    }

    // Resolve the anchor before touching the program so a failure leaves
    // nothing half-declared.
    let position = match anchor {
        Anchor::SharedTail => Position::SharedTail,
        Anchor::Before(stmt) => Position::Before(stmt),
        Anchor::AfterDefOf(element) => {
            let def = cx.program.symbols.get(element).def_point;
            match def {
                DefPoint::Stmt(stmt) if cx.program.stmts.container_of(stmt).is_some() => {
                    Position::After(stmt)
                }
                DefPoint::Stmt(_) | DefPoint::Detached | DefPoint::None => {
                    return Err(CanonError::MissingAnchor {
                        stmt: cx.stmt(),
                        shape: cx.program.types.shape(fresh),
                        element: cx.program.symbol_name(element).to_owned(),
                    });
                }
            }
        }
    };

    let program = &mut *cx.program;
    let sym = program.symbols.alloc(Symbol {
        name: name_id,
        kind: SymbolKind::Type,
        ty: fresh,
        scope,
        def_point: DefPoint::None,
    });
    program.types.get_mut(fresh).symbol = Some(sym);
    let decl = program
        .stmts
        .alloc(Stmt::synthesized(StmtKind::TypeDef(sym)));
    program.symbols.get_mut(sym).def_point = DefPoint::Stmt(decl);
    program.scopes.bind(scope, name_id, sym);

    match position {
        Position::SharedTail => {
            let container = program.shared_container();
            program.stmts.push_synthesized(container, decl);
        }
        Position::After(anchor) => program.stmts.insert_after(anchor, decl),
        Position::Before(anchor) => program.stmts.insert_before(anchor, decl),
    }

    let shape = program.types.shape(fresh);
    cx.stats.record_created(shape);
    tracing::debug!(name, %shape, ?scope, ?decl, "synthesized canonical declaration");
    Ok(Interned::Created(fresh))
}

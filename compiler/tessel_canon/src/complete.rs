//! Index-type completion.
//!
//! Runs after anonymous-type resolution. Every domain reached from a
//! declaration whose index companion is still anonymous gets a canonical
//! `_index_<domain>` type from the shared scope, created right before the
//! statement that reached it when it does not exist yet.

use tessel_ir::{Program, ScopeId, StmtId, Traversal, TypeId, TypeKind, TypeShape};

use crate::mangle;
use crate::splice::{intern, Anchor};
use crate::{CanonCx, CanonError, CanonStats, NoopMaterializer, Unsupported};

pub struct IndexTypeCompleter<'a> {
    stats: &'a mut CanonStats,
    /// Statement being visited and the scope it declares into. `None`
    /// outside declarations.
    current: Option<(StmtId, ScopeId)>,
}

impl<'a> IndexTypeCompleter<'a> {
    pub fn new(stats: &'a mut CanonStats) -> Self {
        IndexTypeCompleter {
            stats,
            current: None,
        }
    }
}

impl Traversal for IndexTypeCompleter<'_> {
    type Error = CanonError;

    fn pre_process_stmt(&mut self, program: &mut Program, stmt: StmtId) -> Result<(), CanonError> {
        self.current = program.stmt_scope(stmt).map(|scope| (stmt, scope));
        Ok(())
    }

    fn pre_process_type(&mut self, program: &mut Program, ty: TypeId) -> Result<(), CanonError> {
        let Some((stmt, scope)) = self.current else {
            return Ok(());
        };
        let TypeKind::Domain {
            index: Some(index), ..
        } = *program.types.kind(ty)
        else {
            return Ok(());
        };

        let mut noop = NoopMaterializer;
        let mut cx = CanonCx::new(program, &mut noop, &mut *self.stats, stmt, scope);
        if cx.program.types.shape(index) != TypeShape::Index {
            return Err(cx.shape_mismatch(TypeShape::Index, index));
        }
        if cx.program.types.get(index).is_named() {
            return Ok(());
        }
        let Some(domain_name) = cx.program.type_name(ty) else {
            return Err(cx.unsupported(Unsupported::UnresolvedDomain));
        };

        let name = mangle::index_of_domain(domain_name);
        let shared = cx.program.shared_scope();
        let resolved = cx
            .in_scope(shared, |cx| intern(cx, &name, index, Anchor::Before(stmt)))?
            .ty();

        if let TypeKind::Domain { index: slot, .. } = &mut program.types.get_mut(ty).kind {
            *slot = Some(resolved);
        }
        Ok(())
    }

    fn post_process_stmt(&mut self, _: &mut Program, _: StmtId) -> Result<(), CanonError> {
        self.current = None;
        Ok(())
    }
}

//! Per-statement canonicalization context.

use tessel_ir::{Program, ScopeId, StmtId, TypeId, TypeShape};

use crate::{CanonError, CanonStats, SeqMaterializer, Unsupported};

/// Everything a builder needs while canonicalizing the types of one
/// statement.
///
/// `scope` is the scope interning lookups and new bindings go to. Builders
/// switch it with [`CanonCx::in_scope`], which restores the previous scope
/// however the closure returns.
pub struct CanonCx<'a> {
    pub program: &'a mut Program,
    pub(crate) hook: &'a mut dyn SeqMaterializer,
    pub(crate) stats: &'a mut CanonStats,
    scope: ScopeId,
    stmt: StmtId,
}

impl<'a> CanonCx<'a> {
    pub fn new(
        program: &'a mut Program,
        hook: &'a mut dyn SeqMaterializer,
        stats: &'a mut CanonStats,
        stmt: StmtId,
        scope: ScopeId,
    ) -> Self {
        CanonCx {
            program,
            hook,
            stats,
            scope,
            stmt,
        }
    }

    /// Scope that interning lookups currently target.
    #[inline]
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Statement whose types are being canonicalized.
    #[inline]
    pub fn stmt(&self) -> StmtId {
        self.stmt
    }

    /// Run `f` with `scope` as the current scope.
    pub fn in_scope<R>(&mut self, scope: ScopeId, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = saved;
        result
    }

    // === Error constructors ===

    pub(crate) fn shape_mismatch(&self, expected: TypeShape, ty: TypeId) -> CanonError {
        CanonError::ShapeMismatch {
            stmt: self.stmt,
            expected,
            found: self.program.types.shape(ty),
        }
    }

    /// Fails if `ty` already has a canonical declaration.
    pub(crate) fn expect_unresolved(&self, ty: TypeId) -> Result<(), CanonError> {
        match self.program.type_name(ty) {
            Some(name) => Err(CanonError::AlreadyResolved {
                stmt: self.stmt,
                shape: self.program.types.shape(ty),
                name: name.to_owned(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn unsupported(&self, what: Unsupported) -> CanonError {
        CanonError::UnsupportedConstruct {
            stmt: self.stmt,
            what,
        }
    }
}

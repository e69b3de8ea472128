//! Anonymous-type resolution driver.

use tessel_ir::{Program, StmtId, StmtKind, Traversal};

use crate::build::{resolve_composite, resolve_index};
use crate::{CanonCx, CanonError, CanonStats, SeqMaterializer};

/// Rewrites the declared type of every variable to its canonical type.
///
/// Each variable's type goes through the composite dispatcher (arrays,
/// domains, tuples, sequences) and then the index dispatcher, which looks
/// index variables up in the variable's own scope. The canonical result is
/// stored back into the variable's symbol.
///
/// The declared type is dispatched even when it is already named, so
/// running the resolver twice over the same program fails with
/// `AlreadyResolved` rather than silently doing nothing.
pub struct AnonymousTypeResolver<'a> {
    hook: &'a mut dyn SeqMaterializer,
    stats: &'a mut CanonStats,
}

impl<'a> AnonymousTypeResolver<'a> {
    pub fn new(hook: &'a mut dyn SeqMaterializer, stats: &'a mut CanonStats) -> Self {
        AnonymousTypeResolver { hook, stats }
    }
}

impl Traversal for AnonymousTypeResolver<'_> {
    type Error = CanonError;

    #[tracing::instrument(level = "debug", skip(self, program))]
    fn pre_process_stmt(&mut self, program: &mut Program, stmt: StmtId) -> Result<(), CanonError> {
        let StmtKind::VarDef(var) = program.stmts.get(stmt).kind else {
            return Ok(());
        };
        let scope = program.symbols.get(var).scope;
        let declared = program.symbols.get(var).ty;

        let mut cx = CanonCx::new(program, &mut *self.hook, &mut *self.stats, stmt, scope);
        let ty = resolve_composite(&mut cx, declared)?;
        let ty = resolve_index(&mut cx, ty, scope)?;

        if ty != declared {
            tracing::trace!(
                var = program.symbol_name(var),
                canonical = program.display_type(ty),
                "rebound to canonical type"
            );
        }
        program.symbols.get_mut(var).ty = ty;
        Ok(())
    }
}

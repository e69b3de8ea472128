//! Statement and type traversal.
//!
//! A [`Traversal`] gets three hooks per statement:
//!
//! 1. `pre_process_stmt` once, before anything under the statement
//! 2. `pre_process_type` for every type reachable from the statement's
//!    declared symbol, parents before children
//! 3. `post_process_stmt` once, after the types
//!
//! Hooks receive the program mutably. The statement order is fixed when the
//! walk starts, so declarations a hook splices into the program are not
//! themselves visited during the same walk. Type children are read after
//! `pre_process_type` returns, so a hook may rewrite a node's slots and
//! the walk follows the rewritten ones.

use crate::stack::ensure_sufficient_stack;
use crate::{Program, StmtId, TypeId};

pub trait Traversal {
    type Error;

    fn pre_process_stmt(&mut self, program: &mut Program, stmt: StmtId) -> Result<(), Self::Error>;

    fn pre_process_type(&mut self, program: &mut Program, ty: TypeId) -> Result<(), Self::Error> {
        let _ = (program, ty);
        Ok(())
    }

    fn post_process_stmt(&mut self, program: &mut Program, stmt: StmtId) -> Result<(), Self::Error> {
        let _ = (program, stmt);
        Ok(())
    }
}

/// Run `traversal` over every statement of the program, stopping at the
/// first error.
pub fn walk_program<T: Traversal + ?Sized>(
    traversal: &mut T,
    program: &mut Program,
) -> Result<(), T::Error> {
    let order = program.stmts.preorder(program.roots());
    for stmt in order {
        walk_stmt(traversal, program, stmt)?;
    }
    Ok(())
}

pub fn walk_stmt<T: Traversal + ?Sized>(
    traversal: &mut T,
    program: &mut Program,
    stmt: StmtId,
) -> Result<(), T::Error> {
    traversal.pre_process_stmt(program, stmt)?;
    if let Some(sym) = program.stmts.get(stmt).declared_symbol() {
        // Read after the hook: it may have rebound the symbol's type.
        let ty = program.symbols.get(sym).ty;
        walk_type(traversal, program, ty)?;
    }
    traversal.post_process_stmt(program, stmt)
}

pub fn walk_type<T: Traversal + ?Sized>(
    traversal: &mut T,
    program: &mut Program,
    ty: TypeId,
) -> Result<(), T::Error> {
    ensure_sufficient_stack(|| {
        traversal.pre_process_type(program, ty)?;
        for child in program.types.kind(ty).children() {
            walk_type(traversal, program, child)?;
        }
        Ok(())
    })
}

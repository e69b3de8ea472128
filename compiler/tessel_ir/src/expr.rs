//! Expressions that appear inside type constructors.
//!
//! The structural passes only inspect the expression forms used to build
//! array domains and index types; everything else about expressions belongs
//! to the general AST and is not modeled here.

use crate::{ExprId, Span, SymbolId};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),
    /// Reference to a declared variable.
    Variable(SymbolId),
    /// `[i in D]` style domain construction. One entry per bound domain.
    Forall { domains: Vec<ExprId> },
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::from_len(self.exprs.len());
        self.exprs.push(expr);
        id
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()].kind
    }}

//! Symbols and their def points.

use crate::{Name, ScopeId, StmtId, SymbolId, TypeId};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    /// Declares a type (`type T = ...` or a synthesized canonical type).
    Type,
    /// Declares a variable.
    Var,
}

/// Where a symbol's declaration node lives.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DefPoint {
    /// No declaration node at all (built-ins and other synthesized entities).
    None,
    /// Declared by a node that is not part of any statement, such as a
    /// forall index variable or a formal parameter.
    Detached,
    /// Declared by this statement.
    Stmt(StmtId),
}

impl DefPoint {
    pub fn stmt(self) -> Option<StmtId> {
        match self {
            DefPoint::Stmt(stmt) => Some(stmt),
            DefPoint::None | DefPoint::Detached => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Symbol {
    pub name: Name,
    pub kind: SymbolKind,
    pub ty: TypeId,
    /// Scope that binds this symbol.
    pub scope: ScopeId,
    pub def_point: DefPoint,
}

#[derive(Clone, Default, Debug)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId::from_len(self.symbols.len());
        self.symbols.push(symbol);
        id
    }

    #[inline]
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, sym)| (SymbolId::from_len(i), sym))
    }
}

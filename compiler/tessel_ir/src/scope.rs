//! Lexical scope tree.
//!
//! Scopes only own name → symbol bindings. Which scope is "current" is not
//! tracked here; callers pass the scope they mean explicitly.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use crate::{Name, ScopeId, SymbolId};

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ScopeFlags: u8 {
        /// Compiler-provided scope holding built-in declarations.
        const INTRINSIC = 1 << 0;
        /// The shared declarations scope, home of canonical types with no
        /// natural lexical owner.
        const SHARED = 1 << 1;
    }
}

#[derive(Clone, Debug)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub flags: ScopeFlags,
    bindings: FxHashMap<Name, SymbolId>,
}

impl Scope {
    pub fn is_intrinsic(&self) -> bool {
        self.flags.contains(ScopeFlags::INTRINSIC)
    }
}

#[derive(Clone, Default, Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, parent: Option<ScopeId>, flags: ScopeFlags) -> ScopeId {
        let id = ScopeId::from_len(self.scopes.len());
        self.scopes.push(Scope {
            parent,
            flags,
            bindings: FxHashMap::default(),
        });
        id
    }

    #[inline]
    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn is_intrinsic(&self, id: ScopeId) -> bool {
        self.get(id).is_intrinsic()
    }

    /// Bind `name` in `scope`, returning the symbol it shadows in that
    /// scope, if any.
    pub fn bind(&mut self, scope: ScopeId, name: Name, symbol: SymbolId) -> Option<SymbolId> {
        self.scopes[scope.index()].bindings.insert(name, symbol)
    }

    /// Look up `name` in `scope` only.
    pub fn lookup_local(&self, scope: ScopeId, name: Name) -> Option<SymbolId> {
        self.get(scope).bindings.get(&name).copied()
    }
}

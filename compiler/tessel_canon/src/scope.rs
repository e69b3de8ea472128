//! Owner scope selection for synthesized declarations.
//!
//! Domains, tuples and index types always live in the shared declarations
//! scope. An array or sequence lives next to its element type when the
//! element was declared by user code, so a locally declared element never
//! drags the dependent declaration into global visibility.

use tessel_ir::{DefPoint, Program, ScopeId, SymbolId};

/// Where a synthesized declaration belongs.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Owner {
    /// The shared declarations scope.
    Shared,
    /// The scope of the element type, right after its declaration.
    Local { scope: ScopeId, element: SymbolId },
}

impl Owner {
    pub(crate) fn scope(self, program: &Program) -> ScopeId {
        match self {
            Owner::Shared => program.shared_scope(),
            Owner::Local { scope, .. } => scope,
        }
    }
}

/// Owner of an array or sequence whose element type is declared by
/// `element`.
///
/// Built-in elements and elements without any declaration node are not
/// lexical, so their dependents go to the shared scope. An element that
/// already lives in the shared scope keeps its dependents there too.
pub(crate) fn element_owner(program: &Program, element: SymbolId) -> Owner {
    let sym = program.symbols.get(element);
    if program.scopes.is_intrinsic(sym.scope)
        || sym.def_point == DefPoint::None
        || sym.scope == program.shared_scope()
    {
        Owner::Shared
    } else {
        Owner::Local {
            scope: sym.scope,
            element,
        }
    }
}

//! Post-pass validation of canonical declaration invariants.
//!
//! Checks, after both passes:
//! - Every variable reachable from the program roots has a named type
//! - Every synthesized declaration is linked into a container
//! - Every synthesized symbol is what its scope binds its name to, and no
//!   scope holds two synthesized declarations with the same name
//! - Every synthesized type is named by the mangling of its structure
//!
//! Index types are exempt from the last check: the completer names them
//! after the domain they belong to rather than after their own expression.

use std::fmt;

use rustc_hash::FxHashSet;
use tessel_ir::{DefPoint, Program, StmtKind, SymbolKind, TypeShape};

use crate::mangle::mangled_name;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Violation {
    UnnamedVarType { var: String, ty: String },
    UnlinkedDeclaration { name: String },
    UnboundSymbol { name: String },
    DuplicateDeclaration { name: String },
    TypeNotLinked { name: String },
    NameMismatch { name: String, expected: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnnamedVarType { var, ty } => {
                write!(f, "variable `{var}` has anonymous type `{ty}`")
            }
            Violation::UnlinkedDeclaration { name } => {
                write!(f, "declaration of `{name}` is not linked into any container")
            }
            Violation::UnboundSymbol { name } => {
                write!(f, "`{name}` is not bound to its symbol in its own scope")
            }
            Violation::DuplicateDeclaration { name } => {
                write!(f, "`{name}` is declared more than once in one scope")
            }
            Violation::TypeNotLinked { name } => {
                write!(f, "type of `{name}` does not point back to its symbol")
            }
            Violation::NameMismatch { name, expected } => {
                write!(f, "`{name}` should be named `{expected}`")
            }
        }
    }
}

/// Collect every invariant violation in `program`. Empty when the program
/// is fully canonical.
pub fn validate(program: &Program) -> Vec<Violation> {
    let mut violations = Vec::new();

    for stmt in program.stmts.preorder(program.roots()) {
        if let StmtKind::VarDef(var) = program.stmts.get(stmt).kind {
            let ty = program.symbols.get(var).ty;
            if program.types.symbol(ty).is_none() {
                violations.push(Violation::UnnamedVarType {
                    var: program.symbol_name(var).to_owned(),
                    ty: program.display_type(ty),
                });
            }
        }
    }

    let mut seen = FxHashSet::default();
    for (id, sym) in program.symbols.iter() {
        let DefPoint::Stmt(decl) = sym.def_point else {
            continue;
        };
        if sym.kind != SymbolKind::Type || !program.stmts.get(decl).synthesized {
            continue;
        }
        let name = program.name_str(sym.name);

        if program.stmts.container_of(decl).is_none() {
            violations.push(Violation::UnlinkedDeclaration {
                name: name.to_owned(),
            });
        }
        if program.scopes.lookup_local(sym.scope, sym.name) != Some(id) {
            violations.push(Violation::UnboundSymbol {
                name: name.to_owned(),
            });
        }
        if !seen.insert((sym.scope, sym.name)) {
            violations.push(Violation::DuplicateDeclaration {
                name: name.to_owned(),
            });
        }
        if program.types.symbol(sym.ty) != Some(id) {
            violations.push(Violation::TypeNotLinked {
                name: name.to_owned(),
            });
        }
        if program.types.shape(sym.ty) != TypeShape::Index {
            if let Some(expected) = mangled_name(program, sym.ty) {
                if expected != name {
                    violations.push(Violation::NameMismatch {
                        name: name.to_owned(),
                        expected,
                    });
                }
            }
        }
    }

    violations
}

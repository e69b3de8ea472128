//! Tessel IR - program representation consumed by the canonicalization passes.
//!
//! This crate contains the data structures the front end hands to the
//! structural-type passes:
//! - Spans and interned names
//! - Types (`TypeKind`, `TypeArena`), addressed by `TypeId`
//! - Expressions used by type constructors (`ExprArena`)
//! - Symbols, def points and the scope tree
//! - Statement containers with O(1) positional insertion
//! - The `Program` aggregate and the statement/type `Traversal` driver
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → `Name(u32)`
//! - **Flatten Everything**: No `Box<Type>`, children are `TypeId(u32)` indices
//! - **Stable Handles**: Statements never move; insertion relinks neighbors

mod expr;
mod ids;
mod interner;
mod name;
mod program;
mod scope;
mod span;
pub mod stack;
mod stmt;
mod symbol;
mod ty;
pub mod visitor;

pub use expr::{Expr, ExprArena, ExprKind};
pub use ids::{ContainerId, ExprId, ScopeId, StmtId, SymbolId, TypeId};
pub use interner::StringInterner;
pub use name::Name;
pub use program::Program;
pub use scope::{Scope, ScopeFlags, ScopeTree};
pub use span::Span;
pub use stmt::{Container, Stmt, StmtArena, StmtKind};
pub use symbol::{DefPoint, Symbol, SymbolKind, SymbolTable};
pub use ty::{Primitive, Type, TypeArena, TypeKind, TypeShape};
pub use visitor::{walk_program, Traversal};

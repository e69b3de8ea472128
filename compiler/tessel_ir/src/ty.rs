//! Types and the type arena.
//!
//! Types form a closed set of shapes. Composite shapes reference their parts
//! by `TypeId`, so the arena is a DAG: several slots may point at the same
//! canonical type once the structural passes have interned it.

use std::fmt;

use smallvec::SmallVec;

use crate::{ExprId, SymbolId, TypeId};

/// Built-in scalar types. Their symbols live in the intrinsic scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Bool,
    Int32,
    Int64,
    UInt8,
    Float64,
    Complex128,
    String,
}

impl Primitive {
    pub const ALL: [Primitive; 7] = [
        Primitive::Bool,
        Primitive::Int32,
        Primitive::Int64,
        Primitive::UInt8,
        Primitive::Float64,
        Primitive::Complex128,
        Primitive::String,
    ];

    /// Name of the intrinsic type symbol.
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "Bool",
            Primitive::Int32 => "Int32",
            Primitive::Int64 => "Int64",
            Primitive::UInt8 => "UInt8",
            Primitive::Float64 => "Float64",
            Primitive::Complex128 => "Complex128",
            Primitive::String => "String",
        }
    }
}

/// Structural shape of a type.
///
/// Every `TypeKind` maps to exactly one shape. Used in diagnostics and for
/// per-shape bookkeeping.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeShape {
    Primitive,
    Nominal,
    Array,
    Domain,
    Tuple,
    Sequence,
    Index,
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeShape::Primitive => "primitive",
            TypeShape::Nominal => "nominal",
            TypeShape::Array => "array",
            TypeShape::Domain => "domain",
            TypeShape::Tuple => "tuple",
            TypeShape::Sequence => "sequence",
            TypeShape::Index => "index",
        };
        f.write_str(s)
    }
}

/// The shape-specific payload of a type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeKind {
    /// Built-in scalar.
    Primitive(Primitive),
    /// User-declared record or class. Named by its own declaration.
    Nominal,
    /// `[dom] elem`.
    Array {
        elem: TypeId,
        /// Domain-construction expression; a single-variable forall in the
        /// supported case.
        domain_expr: ExprId,
        /// Domain type the array ranges over, recorded when canonicalized.
        domain: Option<TypeId>,
    },
    /// Index set description.
    Domain {
        /// Declared dimensionality. Zero is shorthand for one dimension.
        rank: u32,
        /// Base domain for derived domains. Only `None` (arithmetic) is
        /// supported by the structural passes.
        parent: Option<TypeId>,
        /// Companion index type, completed after the domain is named.
        index: Option<TypeId>,
    },
    /// `(a, b, ...)`. Component order is significant.
    Tuple(SmallVec<[TypeId; 4]>),
    /// `seq(elem)`.
    Sequence { elem: TypeId },
    /// `index(expr)` where `expr` is an integer literal or a variable bound
    /// to a domain.
    Index { expr: ExprId },
}

impl TypeKind {
    pub fn shape(&self) -> TypeShape {
        match self {
            TypeKind::Primitive(_) => TypeShape::Primitive,
            TypeKind::Nominal => TypeShape::Nominal,
            TypeKind::Array { .. } => TypeShape::Array,
            TypeKind::Domain { .. } => TypeShape::Domain,
            TypeKind::Tuple(_) => TypeShape::Tuple,
            TypeKind::Sequence { .. } => TypeShape::Sequence,
            TypeKind::Index { .. } => TypeShape::Index,
        }
    }

    /// Type children, in declaration order.
    pub fn children(&self) -> SmallVec<[TypeId; 4]> {
        match self {
            TypeKind::Primitive(_) | TypeKind::Nominal | TypeKind::Index { .. } => SmallVec::new(),
            TypeKind::Array { elem, domain, .. } => {
                let mut out = SmallVec::new();
                out.push(*elem);
                out.extend(*domain);
                out
            }
            TypeKind::Domain { parent, index, .. } => parent.iter().chain(index).copied().collect(),
            TypeKind::Tuple(components) => components.clone(),
            TypeKind::Sequence { elem } => SmallVec::from_slice(&[*elem]),
        }
    }
}

/// A type node. `symbol` is set once the type has a canonical declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Type {
    pub kind: TypeKind,
    pub symbol: Option<SymbolId>,
}

impl Type {
    pub fn anonymous(kind: TypeKind) -> Self {
        Type { kind, symbol: None }
    }

    #[inline]
    pub fn is_named(&self) -> bool {
        self.symbol.is_some()
    }
}

/// Arena owning every type in a program.
#[derive(Clone, Default, Debug)]
pub struct TypeArena {
    types: Vec<Type>,
}

impl TypeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: TypeKind) -> TypeId {
        let id = TypeId::from_len(self.types.len());
        self.types.push(Type::anonymous(kind));
        id
    }

    #[inline]
    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.types[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: TypeId) -> &TypeKind {
        &self.types[id.index()].kind
    }

    #[inline]
    pub fn symbol(&self, id: TypeId) -> Option<SymbolId> {
        self.types[id.index()].symbol
    }

    #[inline]
    pub fn shape(&self, id: TypeId) -> TypeShape {
        self.kind(id).shape()
    }
}

#[cfg(test)]
mod tests;

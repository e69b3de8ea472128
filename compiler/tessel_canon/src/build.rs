//! Per-shape builders and the dispatchers that select them.
//!
//! Every builder takes an anonymous type and returns its canonical
//! equivalent: either the same node, now named by a fresh declaration, or
//! the existing canonical node it was found equal to. Callers substitute
//! the returned id into the slot they read the type from.
//!
//! Builders reject types that already carry a canonical symbol. Resolving
//! a type twice means a driver bug, not a duplicate occurrence: duplicates
//! are separate anonymous nodes that intern to the same declaration.

mod array;
mod domain;
mod index;
mod sequence;
mod tuple;

pub use array::build_array;
pub use domain::build_domain;
pub use index::build_index;
pub use sequence::build_sequence;
pub use tuple::build_tuple;

use tessel_ir::stack::ensure_sufficient_stack;
use tessel_ir::{ScopeId, TypeId, TypeShape};

use crate::{CanonCx, CanonError};

/// Canonicalize an array, domain, tuple or sequence type. Other shapes are
/// returned unchanged.
pub fn resolve_composite(cx: &mut CanonCx<'_>, ty: TypeId) -> Result<TypeId, CanonError> {
    ensure_sufficient_stack(|| resolve_composite_inner(cx, ty))
}

fn resolve_composite_inner(cx: &mut CanonCx<'_>, ty: TypeId) -> Result<TypeId, CanonError> {
    match cx.program.types.shape(ty) {
        TypeShape::Array => build_array(cx, ty),
        TypeShape::Domain => build_domain(cx, ty),
        TypeShape::Tuple => build_tuple(cx, ty),
        TypeShape::Sequence => build_sequence(cx, ty),
        TypeShape::Primitive | TypeShape::Nominal | TypeShape::Index => Ok(ty),
    }
}

/// Canonicalize an index type, looking index variables up in
/// `lookup_scope`. Other shapes are returned unchanged.
pub fn resolve_index(
    cx: &mut CanonCx<'_>,
    ty: TypeId,
    lookup_scope: ScopeId,
) -> Result<TypeId, CanonError> {
    match cx.program.types.shape(ty) {
        TypeShape::Index => build_index(cx, ty, lookup_scope),
        TypeShape::Primitive
        | TypeShape::Nominal
        | TypeShape::Array
        | TypeShape::Domain
        | TypeShape::Tuple
        | TypeShape::Sequence => Ok(ty),
    }
}

/// Element types of arrays and sequences are resolved before their
/// container. Elements that are already named are kept as they are.
///
/// Runs before the container switches scope, so an index element looks its
/// variable up in the scope of the declaration being resolved.
fn resolve_element(cx: &mut CanonCx<'_>, elem: TypeId) -> Result<TypeId, CanonError> {
    if cx.program.types.get(elem).is_named() {
        return Ok(elem);
    }
    match cx.program.types.shape(elem) {
        TypeShape::Index => {
            let lookup_scope = cx.scope();
            build_index(cx, elem, lookup_scope)
        }
        _ => resolve_composite(cx, elem),
    }
}

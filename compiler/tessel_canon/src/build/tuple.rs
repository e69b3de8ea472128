//! Tuple types.

use tessel_ir::{TypeId, TypeKind, TypeShape};

use crate::mangle;
use crate::splice::{intern, Anchor, Interned};
use crate::{CanonCx, CanonError, Unsupported};

/// Canonicalize a tuple into the shared scope.
///
/// Components are not resolved here: each one must already have a
/// canonical name. Component order is part of the mangled name.
#[tracing::instrument(level = "trace", skip(cx))]
pub fn build_tuple(cx: &mut CanonCx<'_>, ty: TypeId) -> Result<TypeId, CanonError> {
    let components = match cx.program.types.kind(ty) {
        TypeKind::Tuple(components) => components.clone(),
        _ => return Err(cx.shape_mismatch(TypeShape::Tuple, ty)),
    };
    cx.expect_unresolved(ty)?;

    let mut names = Vec::with_capacity(components.len());
    for (index, component) in components.iter().enumerate() {
        match cx.program.type_name(*component) {
            Some(name) => names.push(name),
            None => return Err(cx.unsupported(Unsupported::AnonymousComponent { index })),
        }
    }

    let name = mangle::tuple(names);
    let shared = cx.program.shared_scope();
    cx.in_scope(shared, |cx| intern(cx, &name, ty, Anchor::SharedTail))
        .map(Interned::ty)
}

//! Arithmetic domain types.

use tessel_ir::{TypeId, TypeKind, TypeShape};

use crate::mangle;
use crate::splice::{intern, Anchor, Interned};
use crate::{CanonCx, CanonError, Unsupported};

/// Canonicalize an arithmetic domain into the shared scope.
///
/// Rank zero is rewritten to one on the node itself before mangling.
/// Domains derived from a parent domain are not supported.
#[tracing::instrument(level = "trace", skip(cx))]
pub fn build_domain(cx: &mut CanonCx<'_>, ty: TypeId) -> Result<TypeId, CanonError> {
    let (rank, parent) = match cx.program.types.kind(ty) {
        TypeKind::Domain { rank, parent, .. } => (*rank, *parent),
        _ => return Err(cx.shape_mismatch(TypeShape::Domain, ty)),
    };
    cx.expect_unresolved(ty)?;
    if parent.is_some() {
        return Err(cx.unsupported(Unsupported::ParentDomain));
    }

    let rank = mangle::normalize_rank(rank);
    if let TypeKind::Domain { rank: slot, .. } = &mut cx.program.types.get_mut(ty).kind {
        *slot = rank;
    }

    let name = mangle::domain(rank);
    let shared = cx.program.shared_scope();
    cx.in_scope(shared, |cx| intern(cx, &name, ty, Anchor::SharedTail))
        .map(Interned::ty)
}

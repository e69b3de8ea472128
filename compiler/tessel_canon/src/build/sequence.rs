//! Sequence types.

use tessel_ir::{TypeId, TypeKind, TypeShape};

use super::resolve_element;
use crate::mangle;
use crate::scope::{element_owner, Owner};
use crate::splice::{intern, Anchor, Interned};
use crate::{CanonCx, CanonError, Unsupported};

/// Canonicalize a sequence type.
///
/// Placement follows the element exactly as for arrays. The first time a
/// sequence declaration is created, the code-generation hook is asked to
/// materialize its backing implementation.
#[tracing::instrument(level = "trace", skip(cx))]
pub fn build_sequence(cx: &mut CanonCx<'_>, ty: TypeId) -> Result<TypeId, CanonError> {
    let elem = match cx.program.types.kind(ty) {
        TypeKind::Sequence { elem } => *elem,
        _ => return Err(cx.shape_mismatch(TypeShape::Sequence, ty)),
    };
    cx.expect_unresolved(ty)?;

    let elem = resolve_element(cx, elem)?;
    if let TypeKind::Sequence { elem: slot } = &mut cx.program.types.get_mut(ty).kind {
        *slot = elem;
    }
    let Some(elem_sym) = cx.program.types.symbol(elem) else {
        return Err(cx.unsupported(Unsupported::AnonymousElement {
            shape: TypeShape::Sequence,
            element: cx.program.types.shape(elem),
        }));
    };

    let owner = element_owner(cx.program, elem_sym);
    let scope = owner.scope(cx.program);
    let interned = cx.in_scope(scope, |cx| {
        let name = mangle::sequence(cx.program.symbol_name(elem_sym));
        let anchor = match owner {
            Owner::Shared => Anchor::SharedTail,
            Owner::Local { element, .. } => Anchor::AfterDefOf(element),
        };
        intern(cx, &name, ty, anchor)
    })?;

    if let Interned::Created(seq) = interned {
        cx.hook.materialize(cx.program, seq);
    }
    Ok(interned.ty())
}

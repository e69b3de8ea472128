//! Array types: `[forall d in D] elem`.

use tessel_ir::{ExprId, ExprKind, TypeId, TypeKind, TypeShape};

use super::resolve_element;
use crate::mangle;
use crate::scope::{element_owner, Owner};
use crate::splice::{intern, Anchor, Interned};
use crate::{CanonCx, CanonError, Unsupported};

/// Canonicalize an array type.
///
/// The element is resolved first. The domain-construction expression must
/// be a forall over exactly one domain variable; the rank of that
/// variable's domain type goes into the mangled name. A newly created
/// canonical array records that domain type.
#[tracing::instrument(level = "trace", skip(cx))]
pub fn build_array(cx: &mut CanonCx<'_>, ty: TypeId) -> Result<TypeId, CanonError> {
    let (elem, domain_expr) = match cx.program.types.kind(ty) {
        TypeKind::Array {
            elem, domain_expr, ..
        } => (*elem, *domain_expr),
        _ => return Err(cx.shape_mismatch(TypeShape::Array, ty)),
    };
    cx.expect_unresolved(ty)?;

    let elem = resolve_element(cx, elem)?;
    if let TypeKind::Array { elem: slot, .. } = &mut cx.program.types.get_mut(ty).kind {
        *slot = elem;
    }
    let Some(elem_sym) = cx.program.types.symbol(elem) else {
        return Err(cx.unsupported(Unsupported::AnonymousElement {
            shape: TypeShape::Array,
            element: cx.program.types.shape(elem),
        }));
    };

    let owner = element_owner(cx.program, elem_sym);
    let scope = owner.scope(cx.program);
    cx.in_scope(scope, |cx| {
        let (domain, rank) = forall_domain(cx, domain_expr)?;
        let name = mangle::array(cx.program.symbol_name(elem_sym), rank);
        let anchor = match owner {
            Owner::Shared => Anchor::SharedTail,
            Owner::Local { element, .. } => Anchor::AfterDefOf(element),
        };
        let interned = intern(cx, &name, ty, anchor)?;
        if let Interned::Created(created) = interned {
            if let TypeKind::Array { domain: slot, .. } =
                &mut cx.program.types.get_mut(created).kind
            {
                *slot = Some(domain);
            }
        }
        Ok(interned.ty())
    })
}

/// Domain type and rank of the single variable a forall ranges over.
fn forall_domain(cx: &CanonCx<'_>, expr: ExprId) -> Result<(TypeId, u32), CanonError> {
    let domains = match cx.program.exprs.kind(expr) {
        ExprKind::Forall { domains } => domains,
        _ => return Err(cx.unsupported(Unsupported::DomainNotForall)),
    };
    let single = match domains.as_slice() {
        [single] => *single,
        _ => {
            return Err(cx.unsupported(Unsupported::MultipleDomains {
                count: domains.len(),
            }))
        }
    };
    let ExprKind::Variable(var) = *cx.program.exprs.kind(single) else {
        return Err(cx.unsupported(Unsupported::DomainNotVariable));
    };

    let domain = cx.program.symbols.get(var).ty;
    match cx.program.types.kind(domain) {
        TypeKind::Domain { rank, .. } => Ok((domain, *rank)),
        _ => Err(cx.unsupported(Unsupported::NotDomainTyped {
            name: cx.program.symbol_name(var).to_owned(),
        })),
    }
}

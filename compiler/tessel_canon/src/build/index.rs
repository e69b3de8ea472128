//! Index types.

use tessel_ir::{ExprKind, ScopeId, TypeId, TypeKind, TypeShape};

use crate::mangle;
use crate::splice::{intern, Anchor, Interned};
use crate::{CanonCx, CanonError, Unsupported};

/// Canonicalize an index type into the shared scope.
///
/// An index over an integer literal `n` is named `_index_<n>_d`. An index
/// over a variable looks the variable up in `lookup_scope` only; it must
/// be bound to a named domain, and the index is named after that domain.
#[tracing::instrument(level = "trace", skip(cx))]
pub fn build_index(
    cx: &mut CanonCx<'_>,
    ty: TypeId,
    lookup_scope: ScopeId,
) -> Result<TypeId, CanonError> {
    let expr = match cx.program.types.kind(ty) {
        TypeKind::Index { expr } => *expr,
        _ => return Err(cx.shape_mismatch(TypeShape::Index, ty)),
    };
    cx.expect_unresolved(ty)?;

    let name = match *cx.program.exprs.kind(expr) {
        ExprKind::Int(value) => mangle::index_of_literal(value),
        ExprKind::Variable(var) => {
            let var_name = cx.program.symbols.get(var).name;
            let Some(found) = cx.program.scopes.lookup_local(lookup_scope, var_name) else {
                return Err(CanonError::LookupFailure {
                    stmt: cx.stmt(),
                    name: cx.program.name_str(var_name).to_owned(),
                });
            };
            let domain = cx.program.symbols.get(found).ty;
            if cx.program.types.shape(domain) != TypeShape::Domain {
                return Err(cx.unsupported(Unsupported::NotDomainTyped {
                    name: cx.program.name_str(var_name).to_owned(),
                }));
            }
            match cx.program.type_name(domain) {
                Some(domain_name) => mangle::index_of_domain(domain_name),
                None => return Err(cx.unsupported(Unsupported::UnresolvedDomain)),
            }
        }
        ExprKind::Forall { .. } => {
            return Err(cx.unsupported(Unsupported::IndexExpression))
        }
    };

    let shared = cx.program.shared_scope();
    cx.in_scope(shared, |cx| intern(cx, &name, ty, Anchor::SharedTail))
        .map(Interned::ty)
}

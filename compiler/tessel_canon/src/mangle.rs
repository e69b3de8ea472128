//! Canonical names for structural types.
//!
//! A mangled name is the interning key of a structural type: two types get
//! the same declaration exactly when they mangle to the same string. Names
//! are built only from the canonical names of sub-parts plus fixed
//! separators, so the mapping is stable across runs.
//!
//! | shape | name |
//! |---|---|
//! | array | `_array_<elem>_<rank>d` |
//! | sequence | `_seq_<elem>` |
//! | tuple | `_tuple_<c0>_<c1>...` |
//! | domain | `_domain_<rank>d` |
//! | index over a literal | `_index_<n>_d` |
//! | index over a domain | `_index_<domain>` |

use tessel_ir::{ExprKind, Program, TypeId, TypeKind};

/// Rank zero is shorthand for a one-dimensional domain.
#[inline]
pub fn normalize_rank(rank: u32) -> u32 {
    rank.max(1)
}

pub fn array(elem: &str, rank: u32) -> String {
    format!("_array_{elem}_{}d", normalize_rank(rank))
}

pub fn sequence(elem: &str) -> String {
    format!("_seq_{elem}")
}

pub fn tuple<'a>(components: impl IntoIterator<Item = &'a str>) -> String {
    let mut name = String::from("_tuple");
    for component in components {
        name.push('_');
        name.push_str(component);
    }
    name
}

pub fn domain(rank: u32) -> String {
    format!("_domain_{}d", normalize_rank(rank))
}

pub fn index_of_literal(value: i64) -> String {
    format!("_index_{value}_d")
}

pub fn index_of_domain(domain: &str) -> String {
    format!("_index_{domain}")
}

/// Mangled name of `ty` computed from its current structure, or `None` if
/// a part it depends on has no canonical name yet.
///
/// Arrays use the domain recorded on the array, so this only answers for
/// arrays that have been canonicalized. Index types over a variable use the
/// canonical name of the variable's domain type.
pub fn mangled_name(program: &Program, ty: TypeId) -> Option<String> {
    match program.types.kind(ty) {
        TypeKind::Primitive(_) | TypeKind::Nominal => None,
        TypeKind::Array { elem, domain, .. } => {
            let rank = match program.types.kind((*domain)?) {
                TypeKind::Domain { rank, .. } => *rank,
                _ => return None,
            };
            Some(array(program.type_name(*elem)?, rank))
        }
        TypeKind::Domain { rank, parent, .. } => match parent {
            Some(_) => None,
            None => Some(domain(*rank)),
        },
        TypeKind::Tuple(components) => {
            let names: Option<Vec<&str>> =
                components.iter().map(|c| program.type_name(*c)).collect();
            Some(tuple(names?))
        }
        TypeKind::Sequence { elem } => Some(sequence(program.type_name(*elem)?)),
        TypeKind::Index { expr } => match program.exprs.kind(*expr) {
            ExprKind::Int(value) => Some(index_of_literal(*value)),
            ExprKind::Variable(sym) => {
                let domain_ty = program.symbols.get(*sym).ty;
                Some(index_of_domain(program.type_name(domain_ty)?))
            }
            ExprKind::Forall { .. } => None,
        },
    }
}

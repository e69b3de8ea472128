//! Index newtypes for the program arenas.
//!
//! Each arena gets its own index space so a `TypeId` can never be used to
//! address a statement. All ids are `Copy` and compare as a single integer.

use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Build an id from an arena length.
            ///
            /// # Panics
            /// Panics if the arena outgrew `u32`.
            #[inline]
            pub(crate) fn from_len(len: usize) -> Self {
                Self(
                    u32::try_from(len)
                        .unwrap_or_else(|_| panic!(concat!(stringify!($name), " overflow"))),
                )
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index into the [`TypeArena`](crate::TypeArena).
    TypeId
);
define_id!(
    /// Index into the [`ExprArena`](crate::ExprArena).
    ExprId
);
define_id!(
    /// Index into the [`SymbolTable`](crate::SymbolTable).
    SymbolId
);
define_id!(
    /// Index into the [`ScopeTree`](crate::ScopeTree).
    ScopeId
);
define_id!(
    /// Stable handle to a statement; survives insertions around it.
    StmtId
);
define_id!(
    /// Handle to an ordered statement list (module body or block).
    ContainerId
);

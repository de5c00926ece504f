//! Node IDs and ranges for the flat AST.
//!
//! - `NodeId(u32)` instead of `Box<Node>` for child references
//! - Range types for sequences stored in the arena's side tables

use std::fmt;

/// Index into the node arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Invalid node ID (sentinel value).
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.raw())
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Define range types for arena-allocated sequences.
///
/// Each generated type has `start`/`len` fields, an `EMPTY` constant,
/// `new()`, `is_empty()`, `len()`, `indices()` and a `TypeName(start..end)`
/// `Debug` implementation.
macro_rules! define_range {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Exclusive end index in the side table.
            #[inline]
            pub const fn end(&self) -> u32 {
                self.start + self.len
            }

            /// Iterator over side-table indices in this range.
            #[inline]
            pub fn indices(&self) -> impl Iterator<Item = usize> {
                (self.start as usize)..(self.end() as usize)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.end())
            }
        }
    )* };
}

define_range!(
    /// Range of child nodes (application operands, block elements).
    NodeRange,
    /// Range of `Cond` clauses.
    ClauseRange,
    /// Range of lambda parameter names.
    ParamRange,
);

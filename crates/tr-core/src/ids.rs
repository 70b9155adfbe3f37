//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into arena `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a `u32` arena index.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a stop in the catalogue's stop arena.
    pub struct StopId;
}

typed_id! {
    /// Index of a bus line in the catalogue's bus arena.
    pub struct BusId;
}

typed_id! {
    /// Index of a routing-graph vertex.  Reachable stop `i` owns the pair
    /// `2i` (waiting at the stop) and `2i + 1` (on board, ready to ride).
    pub struct VertexId;
}

typed_id! {
    /// Index of a directed routing-graph edge.  Equal to the edge's
    /// insertion position, which is stable across rebuilds and therefore
    /// safe to persist.
    pub struct EdgeId;
}

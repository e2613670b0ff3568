//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing where needed, but callers should prefer the helpers.
//!
//! `MatrixPos` is the one deliberate exception to the 0-based convention:
//! skim matrices in the source data are addressed with 1-based dense
//! positions, so `MatrixPos` keeps the 1-based number and exposes
//! [`MatrixPos::index`] for 0-based array access.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id! {
    /// External zone identifier (`AREANR` in the source data).  Arbitrary
    /// positive integer, possibly sparse; supra-zones use synthesized numbers
    /// near 100 million.
    pub struct ZoneNum(u32);
}

typed_id! {
    /// Depot (parcel node) identifier from the depot table.
    pub struct DepotId(u32);
}

typed_id! {
    /// Dense 1-based parcel record identifier, assigned by the synthesizer
    /// and renumbered after UCC rerouting.
    pub struct ParcelId(u32);
}

typed_id! {
    /// Index of a courier in the registry's sorted-by-code order.
    pub struct CourierId(u16);
}

typed_id! {
    /// Index of a logistic segment in the configured segment tables.
    /// The parcels segment is [`SegmentId::PARCELS`].
    pub struct SegmentId(u8);
}

impl SegmentId {
    /// The parcels segment — the only one this model generates demand for.
    pub const PARCELS: SegmentId = SegmentId(6);
}

// ── MatrixPos ─────────────────────────────────────────────────────────────────

/// Dense **1-based** position in the skim matrix.
///
/// Position 1 is the first detailed zone (lowest external ID); supra-zones
/// occupy the positions after the last detailed zone.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct MatrixPos(pub u32);

impl MatrixPos {
    /// 0-based array index for this position.
    ///
    /// # Panics
    /// Panics in debug mode if the position is 0 (positions start at 1).
    #[inline(always)]
    pub fn index(self) -> usize {
        debug_assert!(self.0 >= 1, "MatrixPos is 1-based");
        self.0 as usize - 1
    }

    /// Position for a 0-based array index.
    #[inline(always)]
    pub fn from_index(i: usize) -> MatrixPos {
        MatrixPos(i as u32 + 1)
    }
}

impl fmt::Display for MatrixPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

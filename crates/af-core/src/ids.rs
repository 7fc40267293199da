//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `RoomId`, `LinkId` and `RouteId` are
//! 0-based positions in their owning `Vec`; `UnitId` is 1-based because unit
//! numbers appear verbatim in the move log (`L1-room`).

use std::fmt;

use crate::{CoreError, CoreResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) as $what:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Build an id from a `Vec` position, failing if it overflows.
            pub fn from_index(index: usize) -> CoreResult<$name> {
                <$inner>::try_from(index)
                    .ok()
                    .filter(|&n| n != <$inner>::MAX)
                    .map($name)
                    .ok_or(CoreError::IdOverflow { what: $what, index })
            }
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
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a room in colony storage.
    pub struct RoomId(u32) as "room";
}

typed_id! {
    /// Index of an undirected link, in input order.
    pub struct LinkId(u32) as "link";
}

typed_id! {
    /// Index of an extracted route, in discovery order.
    pub struct RouteId(u32) as "route";
}

typed_id! {
    /// Unit ("ant") number.  Valid units are `1..=unit_count`.
    pub struct UnitId(u32) as "unit";
}

impl UnitId {
    /// The first unit admitted by every schedule.
    pub const FIRST: UnitId = UnitId(1);

    /// Iterate `UnitId(1) ..= UnitId(count)` in increasing order.
    pub fn range(count: u32) -> impl Iterator<Item = UnitId> {
        (1..=count).map(UnitId)
    }

    /// Zero-based slot for per-unit `Vec` storage.
    #[inline(always)]
    pub fn slot(self) -> usize {
        debug_assert!(self.0 >= 1, "unit ids are 1-based");
        (self.0 - 1) as usize
    }
}

//! Discrete turn counter.
//!
//! Every move in a schedule happens on some `Turn`.  Turns are 1-based: the
//! first batch of moves is emitted on `Turn::FIRST`, and a schedule that takes
//! `n` turns ends on `Turn(n)`.  `Turn::ZERO` marks "before the first turn" and
//! is what an empty schedule reports as its final turn.

use std::fmt;

/// A 1-based turn number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);
    pub const FIRST: Turn = Turn(1);

    /// The turn directly after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

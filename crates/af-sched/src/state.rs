//! Per-unit route position.

use af_core::RouteId;

/// The movement state of one placed unit.
///
/// Created when the unit is admitted onto position 1 of its route.  The
/// unit is **active** while `!finished`; it becomes finished on the turn it
/// reaches the route's last position and never moves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub route:    RouteId,
    /// Index into the route's rooms; 1 is the first room after start.
    pub position: usize,
    pub finished: bool,
}

impl UnitState {
    /// State right after admission onto `route`, finished immediately when
    /// the route is a single hop.
    #[inline]
    pub fn admitted(route: RouteId, last_position: usize) -> Self {
        Self { route, position: 1, finished: last_position <= 1 }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.finished
    }
}

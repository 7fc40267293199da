//! Slot occupancy bookkeeping for the turn loop.
//!
//! Every route has one slot per position.  A slot holds at most one active
//! unit.  With [`Occupancy::Room`] a second table, indexed by `RoomId`,
//! additionally holds at most one unit per intermediate room across all
//! routes.  Lookups are O(1); the tables are updated incrementally as units
//! move rather than rescanning every active unit.

use af_core::{RoomId, RouteId, UnitId};
use af_graph::Route;

use crate::Occupancy;

/// Who currently holds each route slot (and, optionally, each room).
#[derive(Debug, Clone)]
pub struct OccupancyTable {
    /// `slots[route][position]`.
    slots: Vec<Vec<Option<UnitId>>>,
    /// `rooms[room]`; empty unless tracking per room.
    rooms: Vec<Option<UnitId>>,
}

impl OccupancyTable {
    pub fn new(routes: &[Route], mode: Occupancy) -> Self {
        let slots = routes.iter().map(|r| vec![None; r.rooms.len()]).collect();
        let rooms = match mode {
            Occupancy::PerRoute => Vec::new(),
            Occupancy::Room => {
                let max_room = routes
                    .iter()
                    .flat_map(|r| r.rooms.iter())
                    .map(|room| room.index())
                    .max();
                vec![None; max_room.map_or(0, |m| m + 1)]
            }
        };
        Self { slots, rooms }
    }

    /// Unit holding `position` on `route`, if any.
    #[inline]
    pub fn holder(&self, route: RouteId, position: usize) -> Option<UnitId> {
        self.slots
            .get(route.index())
            .and_then(|s| s.get(position))
            .copied()
            .flatten()
    }

    /// Unit holding `room` across all routes.  Always `None` when tracking
    /// per route only.
    #[inline]
    pub fn room_holder(&self, room: RoomId) -> Option<UnitId> {
        self.rooms.get(room.index()).copied().flatten()
    }

    /// Whether a unit may move into `position` / `room` of `route`.
    ///
    /// `arriving` marks the route's last position: the end room takes any
    /// number of units and is never held.
    #[inline]
    pub fn is_free(&self, route: RouteId, position: usize, room: RoomId, arriving: bool) -> bool {
        if arriving {
            return true;
        }
        self.holder(route, position).is_none() && self.room_holder(room).is_none()
    }

    pub fn enter(&mut self, unit: UnitId, route: RouteId, position: usize, room: RoomId) {
        if let Some(slot) = self.slots.get_mut(route.index()).and_then(|s| s.get_mut(position)) {
            debug_assert!(slot.is_none(), "slot {position} of {route} already held");
            *slot = Some(unit);
        }
        if let Some(holder) = self.rooms.get_mut(room.index()) {
            *holder = Some(unit);
        }
    }

    pub fn leave(&mut self, route: RouteId, position: usize, room: RoomId) {
        if let Some(slot) = self.slots.get_mut(route.index()).and_then(|s| s.get_mut(position)) {
            *slot = None;
        }
        if let Some(holder) = self.rooms.get_mut(room.index()) {
            *holder = None;
        }
    }
}

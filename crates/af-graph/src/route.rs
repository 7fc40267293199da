//! Extracted routes and their structural check.

use af_core::{LinkId, RoomId, RouteId};

use crate::{Colony, GraphError, GraphResult};

/// A start → end walk produced by a [`RouteExtractor`][crate::RouteExtractor].
///
/// `rooms[0]` is the start room and `rooms[hop_len()]` the end room.
/// `links[i]` is the link walked between `rooms[i]` and `rooms[i + 1]`, so
/// `links.len() == rooms.len() - 1`.  Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub rooms: Vec<RoomId>,
    pub links: Vec<LinkId>,
}

impl Route {
    pub fn new(rooms: Vec<RoomId>, links: Vec<LinkId>) -> Self {
        debug_assert_eq!(rooms.len(), links.len() + 1);
        Self { rooms, links }
    }

    /// Number of links walked (rooms minus one).
    #[inline]
    pub fn hop_len(&self) -> usize {
        self.links.len()
    }

    /// Position index of the end room.  A unit at this position is finished.
    #[inline]
    pub fn last_position(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    /// Room at `position` (0 = start room).
    #[inline]
    pub fn room_at(&self, position: usize) -> Option<RoomId> {
        self.rooms.get(position).copied()
    }

    pub fn start(&self) -> Option<RoomId> {
        self.rooms.first().copied()
    }

    pub fn end(&self) -> Option<RoomId> {
        self.rooms.last().copied()
    }

    /// Room names joined by `->`, for diagnostics.
    pub fn describe(&self, colony: &Colony) -> String {
        self.rooms
            .iter()
            .map(|&r| colony.room_name(r))
            .collect::<Vec<_>>()
            .join("->")
    }
}

/// Check that `route` runs from `start` to `end` and that each consecutive
/// room pair is joined by the link it claims to have walked.
///
/// A failure here means the extractor is broken; callers treat it as fatal.
pub fn validate_route(
    colony: &Colony,
    id:     RouteId,
    route:  &Route,
    start:  RoomId,
    end:    RoomId,
) -> GraphResult<()> {
    let malformed = |position, reason| GraphError::MalformedRoute { route: id, position, reason };

    if route.rooms.len() < 2 || route.links.len() + 1 != route.rooms.len() {
        return Err(malformed(0, "route must walk at least one link"));
    }
    if route.start() != Some(start) {
        return Err(malformed(0, "first room is not the start room"));
    }
    if route.end() != Some(end) {
        return Err(malformed(route.last_position(), "last room is not the end room"));
    }

    for (i, pair) in route.rooms.windows(2).enumerate() {
        let joined = colony
            .link(route.links[i])
            .is_some_and(|link| link.joins(pair[0], pair[1]));
        if !joined {
            return Err(malformed(i, "consecutive rooms are not joined by the recorded link"));
        }
    }
    Ok(())
}

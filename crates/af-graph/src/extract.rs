//! Route extraction trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! The orchestrator calls extraction through the [`RouteExtractor`] trait so
//! applications can swap in a different strategy (e.g. a true max-flow
//! search) without touching the scheduler.  The default [`BfsExtractor`]
//! repeats an unweighted shortest-path search, consuming every link each
//! found route walks, until start and end are disconnected.  It is greedy:
//! it does not guarantee the largest possible set of edge-disjoint routes.
//!
//! # Link availability
//!
//! The colony is never mutated.  Consumed links are tracked in a [`LinkMask`]
//! threaded through every search, so extraction over the same colony always
//! starts from a clean slate and yields the same routes.

use std::collections::VecDeque;

use af_core::{LinkId, RoomId};

use crate::{Colony, Route};

// ── LinkMask ──────────────────────────────────────────────────────────────────

/// One availability flag per link.  A cleared flag is never set again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMask {
    available: Vec<bool>,
}

impl LinkMask {
    /// Every link of `colony` available.
    pub fn all_available(colony: &Colony) -> Self {
        Self { available: vec![true; colony.link_count()] }
    }

    /// `false` for consumed links and for ids outside the mask.
    #[inline]
    pub fn is_available(&self, link: LinkId) -> bool {
        self.available.get(link.index()).copied().unwrap_or(false)
    }

    /// Mark `link` as used by a route.
    #[inline]
    pub fn consume(&mut self, link: LinkId) {
        if let Some(flag) = self.available.get_mut(link.index()) {
            *flag = false;
        }
    }

    pub fn available_count(&self) -> usize {
        self.available.iter().filter(|&&a| a).count()
    }
}

// ── RouteExtractor trait ──────────────────────────────────────────────────────

/// Pluggable route-extraction strategy.
///
/// Implementations must return routes that are pairwise link-disjoint, each
/// running from `start` to `end`, and must consume the links they use from
/// `mask`.  Routes come back in discovery order; that order is observable
/// because it breaks ties during unit assignment.
pub trait RouteExtractor: Send + Sync {
    fn extract(
        &self,
        colony: &Colony,
        start:  RoomId,
        end:    RoomId,
        mask:   &mut LinkMask,
    ) -> Vec<Route>;
}

/// Extract routes between the colony's own start and end rooms.
///
/// Returns an empty list, not an error, when either role is unassigned or
/// both roles sit on the same room.
pub fn extract_routes<E: RouteExtractor + ?Sized>(colony: &Colony, extractor: &E) -> Vec<Route> {
    let (Some(start), Some(end)) = (colony.start(), colony.end()) else {
        tracing::debug!(
            has_start = colony.start().is_some(),
            has_end = colony.end().is_some(),
            "colony lacks a start or end room; no routes"
        );
        return Vec::new();
    };
    let mut mask = LinkMask::all_available(colony);
    extractor.extract(colony, start, end, &mut mask)
}

/// Like [`extract_routes`] but searches only links still available in
/// `mask`, consuming the ones the returned routes walk.
pub fn extract_with_mask<E: RouteExtractor + ?Sized>(
    colony:    &Colony,
    extractor: &E,
    mask:      &mut LinkMask,
) -> Vec<Route> {
    match (colony.start(), colony.end()) {
        (Some(start), Some(end)) => extractor.extract(colony, start, end, mask),
        _ => Vec::new(),
    }
}

// ── BfsExtractor ──────────────────────────────────────────────────────────────

/// Repeated unweighted breadth-first search over available links.
///
/// Each search finds a fewest-hops path; among equal-length paths the one
/// reached first through link input order wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct BfsExtractor;

impl RouteExtractor for BfsExtractor {
    fn extract(
        &self,
        colony: &Colony,
        start:  RoomId,
        end:    RoomId,
        mask:   &mut LinkMask,
    ) -> Vec<Route> {
        let mut routes = Vec::new();
        if start == end {
            return routes;
        }

        while let Some(route) = shortest_path(colony, start, end, mask) {
            for &link in &route.links {
                mask.consume(link);
            }
            tracing::debug!(
                index = routes.len(),
                hops = route.hop_len(),
                route = %route.describe(colony),
                "extracted route"
            );
            routes.push(route);
        }

        tracing::debug!(count = routes.len(), "route extraction exhausted");
        routes
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn shortest_path(colony: &Colony, start: RoomId, end: RoomId, mask: &LinkMask) -> Option<Route> {
    let n = colony.room_count();
    if start.index() >= n || end.index() >= n {
        return None;
    }

    let mut visited = vec![false; n];
    // parent[v] = (room we came from, link walked); INVALID for unreached rooms.
    let mut parent = vec![(RoomId::INVALID, LinkId::INVALID); n];
    let mut queue = VecDeque::from([start]);
    visited[start.index()] = true;

    while let Some(room) = queue.pop_front() {
        if room == end {
            return Some(reconstruct(&parent, start, end));
        }
        for (link, next) in colony.neighbours(room) {
            if !mask.is_available(link) || visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            parent[next.index()] = (room, link);
            queue.push_back(next);
        }
    }
    None
}

fn reconstruct(parent: &[(RoomId, LinkId)], start: RoomId, end: RoomId) -> Route {
    let mut rooms = vec![end];
    let mut links = Vec::new();
    let mut cur = end;
    while cur != start {
        let (prev, link) = parent[cur.index()];
        links.push(link);
        rooms.push(prev);
        cur = prev;
    }
    rooms.reverse();
    links.reverse();
    Route::new(rooms, links)
}

//! Colony representation and builder.
//!
//! # Data layout
//!
//! Rooms and links are stored in input order and addressed by `RoomId` /
//! `LinkId`.  Links are undirected, so each one is entered into the adjacency
//! table twice — once per endpoint.  Adjacency uses a **Compressed Sparse
//! Row (CSR)** layout: the neighbours of room `r` occupy
//!
//! ```text
//! adj[ adj_start[r] .. adj_start[r+1] ]
//! ```
//!
//! Within one room the entries keep link input order.  Breadth-first search
//! explores neighbours in exactly that order, which is what makes route
//! discovery reproducible.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as NameMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as NameMap;

use af_core::{LinkId, RoomId, RoomRole};

use crate::{GraphError, GraphResult};

// ── Room / Link ───────────────────────────────────────────────────────────────

/// A colony vertex.  Coordinates are carried for output fidelity only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name: String,
    pub x:    i64,
    pub y:    i64,
    pub role: RoomRole,
}

/// An undirected link.  `from` / `to` only record the declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub from: RoomId,
    pub to:   RoomId,
}

impl Link {
    /// The endpoint opposite `room`, or `None` if `room` is not on this link.
    #[inline]
    pub fn other(self, room: RoomId) -> Option<RoomId> {
        if self.from == room {
            Some(self.to)
        } else if self.to == room {
            Some(self.from)
        } else {
            None
        }
    }

    /// `true` if this link joins `a` and `b` in either direction.
    #[inline]
    pub fn joins(self, a: RoomId, b: RoomId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

// ── Colony ────────────────────────────────────────────────────────────────────

/// Immutable undirected room graph with designated start and end rooms.
///
/// Do not construct directly; use [`ColonyBuilder`].
#[derive(Debug, Clone)]
pub struct Colony {
    rooms: Vec<Room>,
    links: Vec<Link>,

    /// CSR row pointer.  Length = `room_count + 1`.
    adj_start: Vec<u32>,
    /// `(link, neighbour)` pairs, grouped by room, link order within a room.
    adj: Vec<(LinkId, RoomId)>,

    names: NameMap<String, RoomId>,
    start: Option<RoomId>,
    end:   Option<RoomId>,
}

impl Colony {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Name of `id`, or `"?"` for ids outside this colony.
    pub fn room_name(&self, id: RoomId) -> &str {
        self.room(id).map_or("?", |r| r.name.as_str())
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.names.get(name).copied()
    }

    pub fn link(&self, id: LinkId) -> Option<Link> {
        self.links.get(id.index()).copied()
    }

    pub fn start(&self) -> Option<RoomId> {
        self.start
    }

    pub fn end(&self) -> Option<RoomId> {
        self.end
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `(LinkId, neighbour)` for every link touching `room`, in link input
    /// order.  Empty for ids outside the colony.
    #[inline]
    pub fn neighbours(&self, room: RoomId) -> impl Iterator<Item = (LinkId, RoomId)> + '_ {
        let (start, end) = self.adj_range(room);
        self.adj[start..end].iter().copied()
    }

    #[inline]
    fn adj_range(&self, room: RoomId) -> (usize, usize) {
        if room.index() >= self.rooms.len() {
            return (0, 0);
        }
        (
            self.adj_start[room.index()] as usize,
            self.adj_start[room.index() + 1] as usize,
        )
    }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// Rooms must have unique names.  Links are recorded by name and resolved in
/// `build()`, so they may be added before the rooms they mention.
///
/// # Example
///
/// ```
/// use af_core::RoomRole;
/// use af_graph::ColonyBuilder;
///
/// let mut b = ColonyBuilder::new();
/// b.add_room("s", 0, 0, RoomRole::Start).unwrap();
/// b.add_room("e", 1, 0, RoomRole::End).unwrap();
/// b.add_link("s", "e");
/// let colony = b.build().unwrap();
/// assert_eq!(colony.room_count(), 2);
/// assert_eq!(colony.neighbours(colony.start().unwrap()).count(), 1);
/// ```
#[derive(Default)]
pub struct ColonyBuilder {
    rooms:     Vec<Room>,
    names:     NameMap<String, RoomId>,
    raw_links: Vec<(String, String)>,
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        x:    i64,
        y:    i64,
        role: RoomRole,
    ) -> GraphResult<RoomId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(GraphError::DuplicateRoom(name));
        }
        let id = RoomId::from_index(self.rooms.len())?;
        self.names.insert(name.clone(), id);
        self.rooms.push(Room { name, x, y, role });
        Ok(id)
    }

    /// Record an undirected link between two rooms, by name.
    pub fn add_link(&mut self, a: impl Into<String>, b: impl Into<String>) {
        self.raw_links.push((a.into(), b.into()));
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn link_count(&self) -> usize { self.raw_links.len() }

    /// Consume the builder and produce a [`Colony`].
    ///
    /// When several rooms carry the start (or end) role, the last one
    /// declared is used.
    pub fn build(self) -> GraphResult<Colony> {
        let room_count = self.rooms.len();

        // Resolve link endpoints, recording both directions of every link.
        let mut links = Vec::with_capacity(self.raw_links.len());
        let mut half_edges: Vec<(RoomId, LinkId, RoomId)> =
            Vec::with_capacity(self.raw_links.len() * 2);
        for (from, to) in self.raw_links {
            let resolve = |name: &str| {
                self.names.get(name).copied().ok_or_else(|| GraphError::UnknownRoom {
                    from:    from.clone(),
                    to:      to.clone(),
                    missing: name.to_owned(),
                })
            };
            let link = Link { from: resolve(&from)?, to: resolve(&to)? };
            let id = LinkId::from_index(links.len())?;
            half_edges.push((link.from, id, link.to));
            half_edges.push((link.to, id, link.from));
            links.push(link);
        }

        // Stable sort by source room keeps each room's entries in link order.
        half_edges.sort_by_key(|&(room, _, _)| room);

        let mut adj_start = vec![0u32; room_count + 1];
        for &(room, _, _) in &half_edges {
            adj_start[room.index() + 1] += 1;
        }
        for i in 1..=room_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[room_count] as usize, half_edges.len());

        let adj = half_edges.into_iter().map(|(_, link, to)| (link, to)).collect();

        let start = last_with_role(&self.rooms, RoomRole::Start);
        let end   = last_with_role(&self.rooms, RoomRole::End);

        Ok(Colony {
            rooms: self.rooms,
            links,
            adj_start,
            adj,
            names: self.names,
            start,
            end,
        })
    }
}

fn last_with_role(rooms: &[Room], role: RoomRole) -> Option<RoomId> {
    let mut found = rooms
        .iter()
        .enumerate()
        .filter(|(_, r)| r.role == role)
        .map(|(i, _)| RoomId(i as u32));
    let first = found.next();
    let last = found.last();
    if let Some(chosen) = last {
        tracing::warn!(role = role.as_str(), "several rooms marked {role}; using the last one");
        return Some(chosen);
    }
    first
}

// ── Farm ──────────────────────────────────────────────────────────────────────

/// A parsed input: how many units to move and the colony to move them through.
#[derive(Debug, Clone)]
pub struct Farm {
    pub unit_count: u32,
    pub colony:     Colony,
}

impl Farm {
    pub fn new(unit_count: u32, colony: Colony) -> Self {
        Self { unit_count, colony }
    }
}

//! Unit tests for af-graph.
//!
//! All colonies are hand-built so each test states its topology inline.

#[cfg(test)]
mod helpers {
    use af_core::RoomRole;

    use crate::{Colony, ColonyBuilder};

    /// Build a colony from `(name, role)` rooms and `a-b` links.
    pub fn colony(rooms: &[(&str, RoomRole)], links: &[(&str, &str)]) -> Colony {
        let mut b = ColonyBuilder::new();
        for (i, &(name, role)) in rooms.iter().enumerate() {
            b.add_room(name, i as i64, 0, role).unwrap();
        }
        for &(a, c) in links {
            b.add_link(a, c);
        }
        b.build().unwrap()
    }

    /// S - A - E
    pub fn line() -> Colony {
        colony(
            &[("S", RoomRole::Start), ("A", RoomRole::Normal), ("E", RoomRole::End)],
            &[("S", "A"), ("A", "E")],
        )
    }

    /// Diamond: S-A, S-B, A-E, B-E.
    pub fn diamond() -> Colony {
        colony(
            &[
                ("S", RoomRole::Start),
                ("A", RoomRole::Normal),
                ("B", RoomRole::Normal),
                ("E", RoomRole::End),
            ],
            &[("S", "A"), ("S", "B"), ("A", "E"), ("B", "E")],
        )
    }

    /// Two routes forced through the shared room M:
    ///   S-A-M-C-E and S-B-M-D-E
    pub fn hourglass() -> Colony {
        colony(
            &[
                ("S", RoomRole::Start),
                ("A", RoomRole::Normal),
                ("B", RoomRole::Normal),
                ("M", RoomRole::Normal),
                ("C", RoomRole::Normal),
                ("D", RoomRole::Normal),
                ("E", RoomRole::End),
            ],
            &[
                ("S", "A"), ("S", "B"), ("A", "M"), ("B", "M"),
                ("M", "C"), ("M", "D"), ("C", "E"), ("D", "E"),
            ],
        )
    }

    pub fn names(colony: &Colony, route: &crate::Route) -> Vec<String> {
        route.rooms.iter().map(|&r| colony.room_name(r).to_owned()).collect()
    }
}

// ── Builder & colony structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use af_core::{LinkId, RoomId, RoomRole};

    use crate::{ColonyBuilder, GraphError};

    #[test]
    fn empty_build() {
        let colony = ColonyBuilder::new().build().unwrap();
        assert!(colony.is_empty());
        assert_eq!(colony.link_count(), 0);
        assert_eq!(colony.start(), None);
        assert_eq!(colony.end(), None);
    }

    #[test]
    fn ids_follow_input_order() {
        let colony = super::helpers::diamond();
        assert_eq!(colony.room_id("S"), Some(RoomId(0)));
        assert_eq!(colony.room_id("E"), Some(RoomId(3)));
        assert_eq!(colony.room_id("Z"), None);
        assert_eq!(colony.start(), Some(RoomId(0)));
        assert_eq!(colony.end(), Some(RoomId(3)));
        assert_eq!(colony.room_name(RoomId(1)), "A");
        assert_eq!(colony.room_name(RoomId(99)), "?");
    }

    #[test]
    fn adjacency_keeps_link_order() {
        let colony = super::helpers::diamond();
        let s = colony.room_id("S").unwrap();
        let e = colony.room_id("E").unwrap();

        let from_s: Vec<_> = colony.neighbours(s).collect();
        assert_eq!(from_s, [(LinkId(0), RoomId(1)), (LinkId(1), RoomId(2))]);

        // E is the `to` end of links 2 and 3; neighbours resolve the far side.
        let from_e: Vec<_> = colony.neighbours(e).collect();
        assert_eq!(from_e, [(LinkId(2), RoomId(1)), (LinkId(3), RoomId(2))]);

        assert_eq!(colony.neighbours(RoomId(1)).count(), 2);
        assert_eq!(colony.neighbours(RoomId(42)).count(), 0);
    }

    #[test]
    fn duplicate_room_rejected() {
        let mut b = ColonyBuilder::new();
        b.add_room("A", 0, 0, RoomRole::Normal).unwrap();
        let err = b.add_room("A", 1, 1, RoomRole::Normal).unwrap_err();
        assert_eq!(err, GraphError::DuplicateRoom("A".into()));
    }

    #[test]
    fn unknown_link_endpoint_rejected() {
        let mut b = ColonyBuilder::new();
        b.add_room("A", 0, 0, RoomRole::Normal).unwrap();
        b.add_link("A", "ghost");
        match b.build() {
            Err(GraphError::UnknownRoom { missing, .. }) => assert_eq!(missing, "ghost"),
            other => panic!("expected UnknownRoom, got {other:?}"),
        }
    }

    #[test]
    fn links_may_precede_rooms() {
        let mut b = ColonyBuilder::new();
        b.add_link("x", "y");
        b.add_room("x", 0, 0, RoomRole::Start).unwrap();
        b.add_room("y", 0, 1, RoomRole::End).unwrap();
        let colony = b.build().unwrap();
        assert_eq!(colony.link_count(), 1);
    }

    #[test]
    fn last_start_marker_wins() {
        let colony = super::helpers::colony(
            &[("a", RoomRole::Start), ("b", RoomRole::Start), ("c", RoomRole::End)],
            &[],
        );
        assert_eq!(colony.start(), colony.room_id("b"));
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod extract {
    use std::collections::HashSet;

    use af_core::{LinkId, RoomId, RoomRole};

    use super::helpers::{colony, diamond, hourglass, line, names};
    use crate::{BfsExtractor, LinkMask, RouteExtractor, extract_routes, extract_with_mask};

    #[test]
    fn single_line_route() {
        let colony = line();
        let routes = extract_routes(&colony, &BfsExtractor);
        assert_eq!(routes.len(), 1);
        assert_eq!(names(&colony, &routes[0]), ["S", "A", "E"]);
        assert_eq!(routes[0].hop_len(), 2);
    }

    #[test]
    fn diamond_yields_two_disjoint_routes_in_link_order() {
        let colony = diamond();
        let routes = extract_routes(&colony, &BfsExtractor);
        assert_eq!(routes.len(), 2);
        assert_eq!(names(&colony, &routes[0]), ["S", "A", "E"]);
        assert_eq!(names(&colony, &routes[1]), ["S", "B", "E"]);
    }

    #[test]
    fn shortest_route_found_first() {
        // S-A-B-E (3 hops) declared before S-C-E (2 hops).
        let colony = colony(
            &[
                ("S", RoomRole::Start),
                ("A", RoomRole::Normal),
                ("B", RoomRole::Normal),
                ("C", RoomRole::Normal),
                ("E", RoomRole::End),
            ],
            &[("S", "A"), ("A", "B"), ("B", "E"), ("S", "C"), ("C", "E")],
        );
        let routes = extract_routes(&colony, &BfsExtractor);
        assert_eq!(names(&colony, &routes[0]), ["S", "C", "E"]);
        assert_eq!(names(&colony, &routes[1]), ["S", "A", "B", "E"]);
    }

    #[test]
    fn routes_are_link_disjoint() {
        let colony = hourglass();
        let routes = extract_routes(&colony, &BfsExtractor);
        assert_eq!(routes.len(), 2);

        let mut seen = HashSet::new();
        for route in &routes {
            for &link in &route.links {
                assert!(seen.insert(link), "link {link} used twice");
            }
        }
        // The shared room is allowed: only links are exclusive.
        let m = colony.room_id("M").unwrap();
        assert!(routes.iter().all(|r| r.rooms[1..r.last_position()].contains(&m)));
    }

    #[test]
    fn every_route_runs_start_to_end_over_real_links() {
        let colony = hourglass();
        for route in extract_routes(&colony, &BfsExtractor) {
            assert_eq!(route.start(), colony.start());
            assert_eq!(route.end(), colony.end());
            for (i, pair) in route.rooms.windows(2).enumerate() {
                let link = colony.link(route.links[i]).unwrap();
                assert!(link.joins(pair[0], pair[1]));
            }
        }
    }

    #[test]
    fn parallel_links_each_carry_a_route() {
        let colony = colony(
            &[("S", RoomRole::Start), ("E", RoomRole::End)],
            &[("S", "E"), ("E", "S")],
        );
        let routes = extract_routes(&colony, &BfsExtractor);
        assert_eq!(routes.len(), 2);
        assert_ne!(routes[0].links, routes[1].links);
    }

    #[test]
    fn missing_start_or_end_yields_nothing() {
        let no_end = colony(&[("S", RoomRole::Start), ("A", RoomRole::Normal)], &[("S", "A")]);
        assert!(extract_routes(&no_end, &BfsExtractor).is_empty());

        let no_start = colony(&[("A", RoomRole::Normal), ("E", RoomRole::End)], &[("A", "E")]);
        assert!(extract_routes(&no_start, &BfsExtractor).is_empty());
    }

    #[test]
    fn disconnected_yields_nothing() {
        let colony = colony(
            &[("S", RoomRole::Start), ("A", RoomRole::Normal), ("E", RoomRole::End)],
            &[("S", "A")],
        );
        assert!(extract_routes(&colony, &BfsExtractor).is_empty());
    }

    #[test]
    fn start_equal_to_end_yields_nothing() {
        let colony = line();
        let s = colony.start().unwrap();
        let mut mask = LinkMask::all_available(&colony);
        assert!(BfsExtractor.extract(&colony, s, s, &mut mask).is_empty());
        assert_eq!(mask.available_count(), colony.link_count());
    }

    #[test]
    fn out_of_range_rooms_yield_nothing() {
        let colony = line();
        let mut mask = LinkMask::all_available(&colony);
        let routes = BfsExtractor.extract(&colony, RoomId(0), RoomId(50), &mut mask);
        assert!(routes.is_empty());
    }

    #[test]
    fn pre_consumed_links_are_avoided() {
        let colony = diamond();
        let mut mask = LinkMask::all_available(&colony);
        // Link 0 is S-A.
        mask.consume(LinkId(0));

        let routes = extract_with_mask(&colony, &BfsExtractor, &mut mask);
        assert_eq!(routes.len(), 1);
        assert_eq!(names(&colony, &routes[0]), ["S", "B", "E"]);
        // S-A was pre-consumed, S-B and B-E by the route; only A-E remains.
        assert_eq!(mask.available_count(), 1);
    }

    #[test]
    fn extraction_is_repeatable() {
        let colony = hourglass();
        let first = extract_routes(&colony, &BfsExtractor);
        let second = extract_routes(&colony, &BfsExtractor);
        assert_eq!(first, second);
    }
}

// ── Route helpers & validation ────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use af_core::{LinkId, RoomId, RouteId};

    use super::helpers::{diamond, line};
    use crate::{BfsExtractor, GraphError, Route, extract_routes, validate_route};

    #[test]
    fn positions() {
        let route = Route::new(vec![RoomId(0), RoomId(1), RoomId(2)], vec![LinkId(0), LinkId(1)]);
        assert_eq!(route.hop_len(), 2);
        assert_eq!(route.last_position(), 2);
        assert_eq!(route.room_at(1), Some(RoomId(1)));
        assert_eq!(route.room_at(3), None);
        assert_eq!(route.start(), Some(RoomId(0)));
        assert_eq!(route.end(), Some(RoomId(2)));
    }

    #[test]
    fn one_hop_route() {
        let route = Route::new(vec![RoomId(0), RoomId(1)], vec![LinkId(0)]);
        assert_eq!(route.hop_len(), 1);
        assert_eq!(route.last_position(), 1);
    }

    #[test]
    fn extracted_routes_validate() {
        let colony = diamond();
        let (s, e) = (colony.start().unwrap(), colony.end().unwrap());
        for (i, route) in extract_routes(&colony, &BfsExtractor).iter().enumerate() {
            validate_route(&colony, RouteId(i as u32), route, s, e).unwrap();
        }
    }

    #[test]
    fn wrong_link_is_malformed() {
        let colony = line();
        let (s, e) = (colony.start().unwrap(), colony.end().unwrap());
        // S-A-E but claims link 0 for both hops.
        let route = Route { rooms: vec![s, RoomId(1), e], links: vec![LinkId(0), LinkId(0)] };
        let err = validate_route(&colony, RouteId(3), &route, s, e).unwrap_err();
        assert!(matches!(
            err,
            GraphError::MalformedRoute { route: RouteId(3), position: 1, .. }
        ));
    }

    #[test]
    fn wrong_endpoints_are_malformed() {
        let colony = line();
        let (s, e) = (colony.start().unwrap(), colony.end().unwrap());
        let backwards = Route::new(vec![e, RoomId(1), s], vec![LinkId(1), LinkId(0)]);
        assert!(validate_route(&colony, RouteId(0), &backwards, s, e).is_err());

        let empty = Route { rooms: vec![s], links: vec![] };
        assert!(validate_route(&colony, RouteId(0), &empty, s, e).is_err());
    }

    #[test]
    fn describe_uses_names() {
        let colony = line();
        let routes = extract_routes(&colony, &BfsExtractor);
        assert_eq!(routes[0].describe(&colony), "S->A->E");
    }
}

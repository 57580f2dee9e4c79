//! Unit tests for mt-spatial.
//!
//! Most tests use hand-placed points so that adjacency under a given
//! threshold is obvious from the coordinates (1° of latitude ≈ 111 km).

#[cfg(test)]
mod helpers {
    use mt_core::LocationId;

    use crate::{Geography, GeographyBuilder};

    /// `n` locations strung north along the prime meridian, 1° apart.
    /// With a 150 km threshold only consecutive locations are neighbours.
    pub fn chain(n: usize) -> (Geography, Vec<LocationId>) {
        let mut b = GeographyBuilder::new();
        let ids = (0..n)
            .map(|i| {
                let key = format!("n{i}");
                b.add_location(&key, &key.to_uppercase(), i as f64, 0.0, None).unwrap()
            })
            .collect();
        (b.build(), ids)
    }

    /// A:(0,0)  B:(0.1,0.1)  C:(10,10).  A and B are ~16 km apart, C is
    /// more than 1,500 km from both.
    pub fn isolated_c() -> (Geography, [LocationId; 3]) {
        let mut b = GeographyBuilder::new();
        let a = b.add_location("a", "A", 0.0, 0.0, None).unwrap();
        let bb = b.add_location("b", "B", 0.1, 0.1, None).unwrap();
        let c = b.add_location("c", "C", 10.0, 10.0, None).unwrap();
        (b.build(), [a, bb, c])
    }
}

// ── Geography table ───────────────────────────────────────────────────────────

#[cfg(test)]
mod geography {
    use mt_core::LocationId;

    use crate::{DEFAULT_ICON, GeographyBuilder, Route, SpatialError};

    #[test]
    fn ids_assigned_in_order() {
        let mut b = GeographyBuilder::new();
        let a = b.add_location("a", "A", 0.0, 0.0, None).unwrap();
        let c = b.add_location("c", "C", 1.0, 1.0, Some("images/c.jpeg")).unwrap();
        let geo = b.build();

        assert_eq!(a, LocationId(0));
        assert_eq!(c, LocationId(1));
        assert_eq!(geo.id_of("c"), Some(c));
        assert_eq!(geo.id_of("missing"), None);
        assert_eq!(geo.location(a).unwrap().icon, DEFAULT_ICON);
        assert_eq!(geo.location(c).unwrap().icon, "images/c.jpeg");
        assert_eq!(geo.ids().collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut b = GeographyBuilder::new();
        b.add_location("a", "A", 0.0, 0.0, None).unwrap();
        let err = b.add_location("a", "Again", 1.0, 1.0, None).unwrap_err();
        assert!(matches!(err, SpatialError::DuplicateLocation(k) if k == "a"));
    }

    #[test]
    fn unknown_id_errors() {
        let (geo, _) = super::helpers::chain(2);
        assert!(!geo.contains(LocationId(9)));
        assert!(matches!(
            geo.distance_km(LocationId(0), LocationId(9)),
            Err(SpatialError::LocationNotFound(LocationId(9)))
        ));
    }

    #[test]
    fn describe_uses_names() {
        let (geo, ids) = super::helpers::chain(3);
        let route = Route::new(vec![ids[0], ids[1], LocationId(42)]);
        assert_eq!(geo.describe(&route), "N0 → N1 → Unknown");
    }

    #[test]
    fn india_preset() {
        let geo = crate::presets::india_metros().unwrap();
        assert_eq!(geo.len(), 11);
        let delhi = geo.id_of("delhi").unwrap();
        assert_eq!(geo.location(delhi).unwrap().name, "Delhi");
        assert_eq!(geo.location(delhi).unwrap().icon, "images/delhi.jpeg");
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use mt_core::LocationId;

    use crate::Route;

    #[test]
    fn segments_and_endpoints() {
        let r = Route::new(vec![LocationId(0), LocationId(2), LocationId(1)]);
        assert_eq!(r.origin(), Some(LocationId(0)));
        assert_eq!(r.destination(), Some(LocationId(1)));
        let segs: Vec<_> = r.segments().collect();
        assert_eq!(segs, vec![(LocationId(0), LocationId(2)), (LocationId(2), LocationId(1))]);
    }

    #[test]
    fn simplicity() {
        assert!(Route::direct(LocationId(0), LocationId(1)).is_simple());
        assert!(!Route::new(vec![LocationId(0), LocationId(1), LocationId(0)]).is_simple());
    }
}

// ── Proximity graph ───────────────────────────────────────────────────────────

#[cfg(test)]
mod proximity {
    use crate::ProximityGraph;

    #[test]
    fn chain_neighbours() {
        let (geo, ids) = super::helpers::chain(4);
        let graph = ProximityGraph::new(&geo, 150.0);
        assert_eq!(graph.neighbors(ids[0]).unwrap(), vec![ids[1]]);
        assert_eq!(graph.neighbors(ids[1]).unwrap(), vec![ids[0], ids[2]]);
        assert!(graph.is_adjacent(ids[2], ids[3]).unwrap());
        assert!(!graph.is_adjacent(ids[0], ids[2]).unwrap());
        assert!(!graph.is_adjacent(ids[0], ids[0]).unwrap());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let geo = crate::presets::india_metros().unwrap();
        let graph = ProximityGraph::with_default_threshold(&geo);
        for a in geo.ids() {
            for b in geo.ids() {
                assert_eq!(graph.is_adjacent(a, b).unwrap(), graph.is_adjacent(b, a).unwrap());
            }
        }
    }

    #[test]
    fn mumbai_neighbours() {
        let geo = crate::presets::india_metros().unwrap();
        let graph = ProximityGraph::with_default_threshold(&geo);
        let n = graph.neighbors(geo.id_of("mumbai").unwrap()).unwrap();
        assert!(n.contains(&geo.id_of("pune").unwrap()));
        assert!(n.contains(&geo.id_of("surat").unwrap()));
        assert!(!n.contains(&geo.id_of("delhi").unwrap()));
        assert!(!n.contains(&geo.id_of("mumbai").unwrap()));
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod enumerate {
    use mt_core::{LocationId, MAX_ROUTE_NODES};

    use crate::{DEFAULT_MAX_PATH_NODES, ProximityGraph, Route, SpatialError, enumerate_routes};

    #[test_log::test]
    fn unreachable_destination_is_empty() {
        let (geo, [a, _, c]) = super::helpers::isolated_c();
        let graph = ProximityGraph::new(&geo, 100.0);
        assert!(enumerate_routes(&graph, a, c, DEFAULT_MAX_PATH_NODES).unwrap().is_empty());
    }

    #[test]
    fn start_equals_end_is_empty() {
        let (geo, ids) = super::helpers::chain(3);
        let graph = ProximityGraph::new(&geo, 150.0);
        assert!(enumerate_routes(&graph, ids[1], ids[1], 5).unwrap().is_empty());
    }

    #[test]
    fn unknown_endpoint_errors() {
        let (geo, ids) = super::helpers::chain(3);
        let graph = ProximityGraph::new(&geo, 150.0);
        let err = enumerate_routes(&graph, ids[0], LocationId(99), 5).unwrap_err();
        assert!(matches!(err, SpatialError::LocationNotFound(LocationId(99))));
    }

    #[test]
    fn depth_first_discovery_order() {
        // A:(0,0) B:(1,0) C:(2,0) all mutually within 300 km.
        let (geo, ids) = super::helpers::chain(3);
        let graph = ProximityGraph::new(&geo, 300.0);
        let routes = enumerate_routes(&graph, ids[0], ids[2], 5).unwrap();
        assert_eq!(
            routes,
            vec![
                Route::new(vec![ids[0], ids[1], ids[2]]),
                Route::direct(ids[0], ids[2]),
            ]
        );
    }

    #[test]
    fn path_cap_is_inclusive() {
        let (geo, ids) = super::helpers::chain(7);
        let graph = ProximityGraph::new(&geo, 150.0);

        // Five locations fit under the default cap.
        let routes = enumerate_routes(&graph, ids[0], ids[4], 5).unwrap();
        assert_eq!(routes, vec![Route::new(ids[..5].to_vec())]);

        // Six do not, unless the cap is raised.
        assert!(enumerate_routes(&graph, ids[0], ids[5], 5).unwrap().is_empty());
        assert_eq!(enumerate_routes(&graph, ids[0], ids[5], 6).unwrap().len(), 1);
    }

    #[test]
    fn oversized_cap_is_lowered_to_six_nodes() {
        let (geo, ids) = super::helpers::chain(9);
        let graph = ProximityGraph::new(&geo, 150.0);

        assert!(enumerate_routes(&graph, ids[0], ids[8], 9).unwrap().is_empty());
        let routes = enumerate_routes(&graph, ids[0], ids[5], 9).unwrap();
        assert_eq!(routes, vec![Route::new(ids[..6].to_vec())]);
        assert!(routes.iter().all(|r| r.len() <= MAX_ROUTE_NODES));
    }

    #[test]
    fn india_routes_are_simple_bounded_and_connected() {
        let geo = crate::presets::india_metros().unwrap();
        let graph = ProximityGraph::with_default_threshold(&geo);

        for start in geo.ids() {
            for end in geo.ids() {
                if start == end {
                    continue;
                }
                for route in enumerate_routes(&graph, start, end, DEFAULT_MAX_PATH_NODES).unwrap() {
                    assert!(route.len() >= 2 && route.len() <= DEFAULT_MAX_PATH_NODES);
                    assert!(route.is_simple(), "{route:?} repeats a location");
                    assert_eq!(route.origin(), Some(start));
                    assert_eq!(route.destination(), Some(end));
                    for (a, b) in route.segments() {
                        assert!(graph.is_adjacent(a, b).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn mumbai_to_pune_includes_direct_hop() {
        let geo = crate::presets::india_metros().unwrap();
        let graph = ProximityGraph::with_default_threshold(&geo);
        let mumbai = geo.id_of("mumbai").unwrap();
        let pune = geo.id_of("pune").unwrap();
        let routes = enumerate_routes(&graph, mumbai, pune, DEFAULT_MAX_PATH_NODES).unwrap();
        assert!(routes.contains(&Route::direct(mumbai, pune)));
    }
}

//! Bounded enumeration of simple paths over the proximity graph.
//!
//! # Search order
//!
//! The search is a depth-first walk driven by an explicit stack of owned
//! partial paths.  Every branch extends its own copy of the path, so no
//! buffer is shared between siblings.  Children are pushed in reverse
//! neighbour order, which makes the pop order identical to a recursive
//! DFS that visits neighbours in geography order.  Selection ties are
//! broken by this order, so it is part of the contract.
//!
//! # Bounds
//!
//! A branch is abandoned once its path holds more than `max_path_nodes`
//! locations (never more than six), and a branch stops as soon as it reaches the destination.
//! A location already on the current path is never revisited, so every
//! recorded route is simple.

use log::debug;

use mt_core::{LocationId, MAX_ROUTE_NODES};

use crate::{ProximityGraph, SpatialError, SpatialResult};

/// Default cap on recorded route length, endpoints included.
pub const DEFAULT_MAX_PATH_NODES: usize = 5;

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered list of locations from origin to destination.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    stops: Vec<LocationId>,
}

impl Route {
    pub fn new(stops: Vec<LocationId>) -> Self {
        Self { stops }
    }

    /// The two-point route `[from, to]`, whether or not the two are
    /// neighbours.
    pub fn direct(from: LocationId, to: LocationId) -> Self {
        Self { stops: vec![from, to] }
    }

    pub fn stops(&self) -> &[LocationId] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn origin(&self) -> Option<LocationId> {
        self.stops.first().copied()
    }

    pub fn destination(&self) -> Option<LocationId> {
        self.stops.last().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (LocationId, LocationId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// `true` if no location appears twice.
    pub fn is_simple(&self) -> bool {
        self.stops
            .iter()
            .enumerate()
            .all(|(i, id)| !self.stops[..i].contains(id))
    }
}

impl From<Vec<LocationId>> for Route {
    fn from(stops: Vec<LocationId>) -> Self {
        Self::new(stops)
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

/// Every simple path from `start` to `end` of at most `max_path_nodes`
/// locations, in depth-first discovery order.  Caps above
/// [`MAX_ROUTE_NODES`] are lowered to it.
///
/// Returns an empty list when `end` is unreachable within the cap and when
/// `start == end`; callers reject the latter before asking.
pub fn enumerate_routes(
    graph:          &ProximityGraph<'_>,
    start:          LocationId,
    end:            LocationId,
    max_path_nodes: usize,
) -> SpatialResult<Vec<Route>> {
    let geo = graph.geography();
    for id in [start, end] {
        if !geo.contains(id) {
            return Err(SpatialError::LocationNotFound(id));
        }
    }
    if start == end {
        debug!("enumerate_routes: start and end are both {start}; nothing to enumerate");
        return Ok(Vec::new());
    }

    let max_path_nodes = max_path_nodes.min(MAX_ROUTE_NODES);
    let mut routes = Vec::new();
    let mut stack: Vec<Vec<LocationId>> = vec![vec![start]];
    let mut expanded = 0usize;

    while let Some(path) = stack.pop() {
        if path.len() > max_path_nodes {
            continue;
        }
        // Paths are never empty: the root holds `start` and children extend it.
        let Some(&current) = path.last() else { continue };
        if current == end {
            routes.push(Route::new(path));
            continue;
        }

        expanded += 1;
        let neighbors = graph.neighbors(current)?;
        for &next in neighbors.iter().rev() {
            if path.contains(&next) {
                continue;
            }
            let mut child = Vec::with_capacity(path.len() + 1);
            child.extend_from_slice(&path);
            child.push(next);
            stack.push(child);
        }
    }

    debug!(
        "enumerate_routes {start} → {end}: {} route(s), {expanded} node expansion(s), cap {max_path_nodes}",
        routes.len()
    );
    Ok(routes)
}

//! Implicit proximity graph.
//!
//! No adjacency is stored.  Two distinct locations are neighbours when their
//! haversine distance is at most the configured threshold, and neighbours
//! are computed on demand every time they are asked for.  The same formula
//! is used in both directions, so the graph is undirected.

use mt_core::LocationId;

use crate::{Geography, SpatialResult};

/// Default neighbour threshold in kilometres.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 500.0;

/// A view over a [`Geography`] that connects nearby locations.
#[derive(Clone, Copy, Debug)]
pub struct ProximityGraph<'a> {
    geography:       &'a Geography,
    max_distance_km: f64,
}

impl<'a> ProximityGraph<'a> {
    pub fn new(geography: &'a Geography, max_distance_km: f64) -> Self {
        Self { geography, max_distance_km }
    }

    /// Graph with the [`DEFAULT_MAX_DISTANCE_KM`] threshold.
    pub fn with_default_threshold(geography: &'a Geography) -> Self {
        Self::new(geography, DEFAULT_MAX_DISTANCE_KM)
    }

    pub fn geography(&self) -> &'a Geography {
        self.geography
    }

    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    /// Every other location within the threshold, in geography order.
    pub fn neighbors(&self, id: LocationId) -> SpatialResult<Vec<LocationId>> {
        let origin = self.geography.try_location(id)?.pos;
        Ok(self
            .geography
            .iter()
            .filter(|&(other, loc)| other != id && origin.distance_km(loc.pos) <= self.max_distance_km)
            .map(|(other, _)| other)
            .collect())
    }

    /// `true` if `a` and `b` are distinct and within the threshold.
    pub fn is_adjacent(&self, a: LocationId, b: LocationId) -> SpatialResult<bool> {
        Ok(a != b && self.geography.distance_km(a, b)? <= self.max_distance_km)
    }
}

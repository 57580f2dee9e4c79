//! The static location registry.
//!
//! Locations are immutable once the table is built.  Each one receives a
//! dense [`LocationId`] in insertion order, so the table doubles as the
//! vertex set of the proximity graph and neighbour iteration order is the
//! order in which locations were added.

use std::collections::HashMap;

use mt_core::{GeoPoint, LocationId};

use crate::{Route, SpatialError, SpatialResult};

/// Icon used when a location does not name its own.
pub const DEFAULT_ICON: &str = "images/city.jpeg";

/// One named point on the map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Stable string key supplied by callers (e.g. `"mumbai"`).
    pub key: String,
    /// Display name; also the key into historical baseline data.
    pub name: String,
    pub pos: GeoPoint,
    /// Reference to the marker image shown by a renderer.
    pub icon: String,
}

// ── Geography ─────────────────────────────────────────────────────────────────

/// Read-only location table.  Build with [`GeographyBuilder`].
#[derive(Clone, Debug, Default)]
pub struct Geography {
    locations: Vec<Location>,
    by_key: HashMap<String, LocationId>,
}

impl Geography {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// `true` if `id` names a location in this table.
    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.locations.len()
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Like [`location`](Self::location) but with an error for unknown ids.
    pub fn try_location(&self, id: LocationId) -> SpatialResult<&Location> {
        self.location(id).ok_or(SpatialError::LocationNotFound(id))
    }

    /// Resolve a caller-supplied key to its id.
    pub fn id_of(&self, key: &str) -> Option<LocationId> {
        self.by_key.get(key).copied()
    }

    /// All ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.locations.len()).map(|i| LocationId(i as u16))
    }

    /// `(id, location)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId(i as u16), loc))
    }

    /// Great-circle distance between two locations in kilometres.
    pub fn distance_km(&self, a: LocationId, b: LocationId) -> SpatialResult<f64> {
        let pa = self.try_location(a)?.pos;
        let pb = self.try_location(b)?.pos;
        Ok(pa.distance_km(pb))
    }

    /// Human-readable stop list, e.g. `"Mumbai → Pune"`.  Unknown ids render
    /// as `"Unknown"`.
    pub fn describe(&self, route: &Route) -> String {
        route
            .stops()
            .iter()
            .map(|&id| self.location(id).map_or("Unknown", |l| l.name.as_str()))
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

// ── GeographyBuilder ──────────────────────────────────────────────────────────

/// Construct a [`Geography`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use mt_spatial::GeographyBuilder;
///
/// let mut b = GeographyBuilder::new();
/// let mumbai = b.add_location("mumbai", "Mumbai", 19.0760, 72.8777, None).unwrap();
/// let pune = b.add_location("pune", "Pune", 18.5204, 73.8567, None).unwrap();
/// let geo = b.build();
/// assert_eq!(geo.len(), 2);
/// assert!(geo.distance_km(mumbai, pune).unwrap() < 500.0);
/// ```
#[derive(Default)]
pub struct GeographyBuilder {
    geo: Geography,
}

impl GeographyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location and return its id.
    ///
    /// `icon` falls back to [`DEFAULT_ICON`].  Keys must be unique.
    pub fn add_location(
        &mut self,
        key:  &str,
        name: &str,
        lat:  f64,
        lng:  f64,
        icon: Option<&str>,
    ) -> SpatialResult<LocationId> {
        if self.geo.by_key.contains_key(key) {
            return Err(SpatialError::DuplicateLocation(key.to_owned()));
        }
        // u16::MAX is reserved for LocationId::INVALID.
        let max = u16::MAX as usize;
        let id = LocationId::try_from(self.geo.locations.len())
            .ok()
            .filter(|id| *id != LocationId::INVALID)
            .ok_or(SpatialError::TooManyLocations { max })?;

        self.geo.locations.push(Location {
            key:  key.to_owned(),
            name: name.to_owned(),
            pos:  GeoPoint::new(lat, lng),
            icon: icon.unwrap_or(DEFAULT_ICON).to_owned(),
        });
        self.geo.by_key.insert(key.to_owned(), id);
        Ok(id)
    }

    pub fn build(self) -> Geography {
        self.geo
    }
}

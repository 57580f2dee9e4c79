//! Travel-time estimate and qualitative traffic description.

use mt_spatial::{Geography, Route};
use mt_traffic::{DEFAULT_LEVEL, TrafficSnapshot};

use crate::RouteResult;

/// Minutes per 100 km of free-flowing travel.
pub const BASE_SEGMENT_MINUTES: f64 = 30.0;

/// Estimated journey time in whole minutes.
///
/// Each segment costs `30 * km / 100`, scaled by `1 + level / 100` where
/// `level` is the traffic at the segment's starting stop (50 if unsampled).
/// A sampled level of 0 is used as is, so empty roads are faster than
/// unknown ones.
pub fn estimate_minutes(
    route:     &Route,
    geography: &Geography,
    traffic:   &TrafficSnapshot,
) -> RouteResult<u32> {
    let mut total = 0.0;
    for (from, to) in route.segments() {
        let km = geography.distance_km(from, to)?;
        let level = traffic.level(from).unwrap_or(DEFAULT_LEVEL);
        total += BASE_SEGMENT_MINUTES * (km / 100.0) * (1.0 + level / 100.0);
    }
    Ok(total.round() as u32)
}

/// Overall congestion along a route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TrafficDescription {
    Light,
    Moderate,
    Heavy,
}

impl TrafficDescription {
    /// Average the level at every stop (50 if unsampled, 0 kept as 0) and
    /// band it: `>= 70` heavy, `>= 40` moderate, otherwise light.  An empty
    /// route is light.
    pub fn for_route(route: &Route, traffic: &TrafficSnapshot) -> Self {
        if route.is_empty() {
            return TrafficDescription::Light;
        }
        let sum: f64 = route
            .stops()
            .iter()
            .map(|&id| traffic.level(id).unwrap_or(DEFAULT_LEVEL))
            .sum();
        Self::from_average(sum / route.len() as f64)
    }

    pub fn from_average(avg: f64) -> Self {
        if avg >= 70.0 {
            TrafficDescription::Heavy
        } else if avg >= 40.0 {
            TrafficDescription::Moderate
        } else {
            TrafficDescription::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrafficDescription::Light    => "Light Traffic",
            TrafficDescription::Moderate => "Moderate Traffic",
            TrafficDescription::Heavy    => "Heavy Traffic",
        }
    }
}

impl std::fmt::Display for TrafficDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

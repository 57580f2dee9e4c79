use mt_spatial::Route;

use crate::TrafficDescription;

/// A selected route with the figures shown next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan {
    pub route: Route,
    pub score: f64,
    pub estimated_minutes: u32,
    pub description: TrafficDescription,
    /// `true` when the route is the synthesised direct fallback.
    pub fallback: bool,
    pub candidates: usize,
}

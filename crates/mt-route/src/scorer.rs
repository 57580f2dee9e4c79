//! Route scoring.
//!
//! # Pluggability
//!
//! [`RouteSelector`](crate::RouteSelector) scores candidates through the
//! [`RouteScorer`] trait, so alternative cost models can be swapped in
//! without touching enumeration or selection.
//!
//! # Default model
//!
//! [`HistoryWeightedScorer`] charges every stop except the destination:
//!
//! ```text
//! segment = clamp(0.7 * current + 0.3 * historical, 0, 100)
//! score   = Σ segment over route[..len-1]
//! ```
//!
//! A missing current sample or historical level counts as 50.  Lower is
//! better.  Invalid routes score [`INVALID_ROUTE_SCORE`].

use log::{debug, warn};

use mt_spatial::Route;
use mt_traffic::{DEFAULT_LEVEL, clamp_level};

use crate::RouteContext;

/// Weight of the live sample in a segment score.
pub const CURRENT_WEIGHT: f64 = 0.7;
/// Weight of the historical baseline in a segment score.
pub const HISTORICAL_WEIGHT: f64 = 0.3;
/// Score of a route that cannot be evaluated.  Worse than any real score.
pub const INVALID_ROUTE_SCORE: f64 = f64::INFINITY;

/// Pluggable route cost model.  Lower scores are better.
pub trait RouteScorer {
    /// Cost of `route` under `ctx`.  Must not panic on malformed routes;
    /// return [`INVALID_ROUTE_SCORE`] instead.
    fn score(&self, route: &Route, ctx: &RouteContext<'_>) -> f64;
}

/// Blend of current traffic and the historical baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryWeightedScorer;

impl HistoryWeightedScorer {
    /// Historical level for `name`, defaulting to 50 whatever goes wrong.
    fn historical(name: &str, ctx: &RouteContext<'_>) -> f64 {
        let Some(year) = ctx.year else {
            return DEFAULT_LEVEL;
        };
        match ctx.baseline.level(name, year) {
            Ok(Some(level)) => level,
            Ok(None) => DEFAULT_LEVEL,
            Err(e) => {
                warn!("ignoring historical data for {name}: {e}");
                DEFAULT_LEVEL
            }
        }
    }
}

impl RouteScorer for HistoryWeightedScorer {
    fn score(&self, route: &Route, ctx: &RouteContext<'_>) -> f64 {
        if route.len() < 2 {
            debug!("scoring {route:?}: fewer than two stops");
            return INVALID_ROUTE_SCORE;
        }
        if let Some(unknown) = route.stops().iter().find(|&&id| !ctx.geography.contains(id)) {
            warn!("scoring {route:?}: {unknown} is not in the geography");
            return INVALID_ROUTE_SCORE;
        }

        let mut total = 0.0;
        // The destination has no outgoing segment and is not charged.
        for &id in &route.stops()[..route.len() - 1] {
            let Some(location) = ctx.geography.location(id) else {
                return INVALID_ROUTE_SCORE;
            };
            let current = ctx.traffic.level(id).unwrap_or(DEFAULT_LEVEL);
            let historical = Self::historical(&location.name, ctx);
            total += clamp_level(current * CURRENT_WEIGHT + historical * HISTORICAL_WEIGHT);
        }
        total
    }
}

//! Best-route selection with a direct-route fallback.

use log::{debug, error, info};

use mt_core::LocationId;
use mt_spatial::{DEFAULT_MAX_DISTANCE_KM, DEFAULT_MAX_PATH_NODES, ProximityGraph, Route, enumerate_routes};

use crate::{
    HistoryWeightedScorer, RouteContext, RoutePlan, RouteRequest, RouteResult, RouteScorer,
    TrafficDescription, estimate_minutes,
};

/// Outcome of [`RouteSelector::select_best`].
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub route: Route,
    pub score: f64,
    /// `true` when no candidate existed and `[start, end]` was synthesised.
    pub fallback: bool,
    /// Number of candidates the enumerator produced.
    pub candidates: usize,
}

/// Enumerates candidates over the proximity graph and keeps the cheapest.
pub struct RouteSelector<S: RouteScorer = HistoryWeightedScorer> {
    scorer:          S,
    max_distance_km: f64,
    max_path_nodes:  usize,
}

impl Default for RouteSelector<HistoryWeightedScorer> {
    fn default() -> Self {
        Self::new(HistoryWeightedScorer, DEFAULT_MAX_DISTANCE_KM, DEFAULT_MAX_PATH_NODES)
    }
}

impl<S: RouteScorer> RouteSelector<S> {
    pub fn new(scorer: S, max_distance_km: f64, max_path_nodes: usize) -> Self {
        Self { scorer, max_distance_km, max_path_nodes }
    }

    /// The lowest-scoring route from `start` to `end`.
    ///
    /// Candidates are compared in discovery order and only a strictly lower
    /// score replaces the current best, so the first minimum wins.  If the
    /// enumerator finds nothing (or fails), the direct route is returned.
    pub fn select_best(
        &self,
        ctx:   &RouteContext<'_>,
        start: LocationId,
        end:   LocationId,
    ) -> Selection {
        let graph = ProximityGraph::new(ctx.geography, self.max_distance_km);
        let candidates = match enumerate_routes(&graph, start, end, self.max_path_nodes) {
            Ok(routes) => routes,
            Err(e) => {
                error!("route enumeration {start} → {end} failed: {e}");
                Vec::new()
            }
        };
        let count = candidates.len();

        let best = candidates
            .into_iter()
            .map(|route| {
                let score = self.scorer.score(&route, ctx);
                debug!("candidate {route:?} scored {score:.2}");
                (route, score)
            })
            .fold(None, |best: Option<(Route, f64)>, (route, score)| match best {
                Some(kept) if score >= kept.1 => Some(kept),
                _ => Some((route, score)),
            });

        match best {
            Some((route, score)) => Selection { route, score, fallback: false, candidates: count },
            None => {
                info!("no route {start} → {end} within the proximity graph; using direct route");
                let route = Route::direct(start, end);
                let score = self.scorer.score(&route, ctx);
                Selection { route, score, fallback: true, candidates: 0 }
            }
        }
    }

    /// Select a route for `request` and attach the figures a renderer shows.
    pub fn plan(&self, ctx: &RouteContext<'_>, request: RouteRequest) -> RouteResult<RoutePlan> {
        let selection = self.select_best(ctx, request.start, request.end);
        let estimated_minutes = estimate_minutes(&selection.route, ctx.geography, ctx.traffic)?;
        let description = TrafficDescription::for_route(&selection.route, ctx.traffic);
        Ok(RoutePlan {
            route: selection.route,
            score: selection.score,
            estimated_minutes,
            description,
            fallback: selection.fallback,
            candidates: selection.candidates,
        })
    }
}

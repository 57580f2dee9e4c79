//! Unit tests for mt-route.

#[cfg(test)]
mod helpers {
    use mt_core::{LocationId, Tick};
    use mt_spatial::{Geography, GeographyBuilder};
    use mt_traffic::{TrafficBaseline, TrafficSample, TrafficSnapshot};

    pub const YEAR: i32 = 2024;

    pub fn snapshot(levels: &[(LocationId, f64)]) -> TrafficSnapshot {
        let mut snap = TrafficSnapshot::new(Tick(0));
        for &(id, level) in levels {
            snap.insert(id, TrafficSample { level, captured_at_unix_secs: 0 });
        }
        snap
    }

    /// Diamond: A:(0,0)  B:(1,0.5)  C:(1,-0.5)  D:(2,0).
    ///
    /// Under a 200 km threshold A–B, A–C, B–C, B–D and C–D are edges but
    /// A–D (~222 km) is not, so every route from A to D passes B or C.
    pub fn diamond() -> (Geography, [LocationId; 4]) {
        let mut b = GeographyBuilder::new();
        let a = b.add_location("a", "A", 0.0, 0.0, None).unwrap();
        let bb = b.add_location("b", "B", 1.0, 0.5, None).unwrap();
        let c = b.add_location("c", "C", 1.0, -0.5, None).unwrap();
        let d = b.add_location("d", "D", 2.0, 0.0, None).unwrap();
        (b.build(), [a, bb, c, d])
    }

    /// Baseline with the same level for every named location.
    pub fn flat_baseline(entries: &[(&str, f64)]) -> TrafficBaseline {
        entries
            .iter()
            .fold(TrafficBaseline::new(), |b, &(name, level)| b.with(name, YEAR, level))
    }
}

// ── Request validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod request {
    use crate::{RouteError, RouteRequest};

    #[test]
    fn resolves_known_keys() {
        let (geo, [a, _, _, d]) = super::helpers::diamond();
        let req = RouteRequest::resolve(Some("a"), Some(" d "), &geo).unwrap();
        assert_eq!(req, RouteRequest { start: a, end: d });
    }

    #[test]
    fn missing_or_blank_endpoint() {
        let (geo, _) = super::helpers::diamond();
        assert!(matches!(RouteRequest::resolve(None, Some("a"), &geo), Err(RouteError::MissingEndpoint)));
        assert!(matches!(RouteRequest::resolve(Some("a"), Some("  "), &geo), Err(RouteError::MissingEndpoint)));
    }

    #[test]
    fn identical_endpoints() {
        let (geo, _) = super::helpers::diamond();
        let err = RouteRequest::resolve(Some("b"), Some("b"), &geo).unwrap_err();
        assert!(matches!(err, RouteError::SameEndpoints(k) if k == "b"));
    }

    #[test]
    fn unknown_key() {
        let (geo, _) = super::helpers::diamond();
        let err = RouteRequest::resolve(Some("a"), Some("zanzibar"), &geo).unwrap_err();
        assert!(matches!(err, RouteError::UnknownLocation(k) if k == "zanzibar"));
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scorer {
    use mt_core::LocationId;
    use mt_spatial::Route;
    use mt_traffic::TrafficBaseline;

    use super::helpers::{YEAR, diamond, flat_baseline, snapshot};
    use crate::{HistoryWeightedScorer, INVALID_ROUTE_SCORE, RouteContext, RouteScorer};

    #[test]
    fn degenerate_routes_score_sentinel() {
        let (geo, [a, ..]) = diamond();
        let traffic = snapshot(&[]);
        let baseline = TrafficBaseline::new();
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };
        let scorer = HistoryWeightedScorer;

        assert_eq!(scorer.score(&Route::new(vec![]), &ctx), INVALID_ROUTE_SCORE);
        assert_eq!(scorer.score(&Route::new(vec![a]), &ctx), INVALID_ROUTE_SCORE);
        assert_eq!(scorer.score(&Route::direct(a, LocationId(40)), &ctx), INVALID_ROUTE_SCORE);
        assert_eq!(scorer.score(&Route::direct(LocationId(40), a), &ctx), INVALID_ROUTE_SCORE);
    }

    #[test]
    fn weighted_blend_skips_destination() {
        let (geo, [a, b, _, d]) = diamond();
        let traffic = snapshot(&[(a, 20.0), (b, 40.0), (d, 100.0)]);
        let baseline = flat_baseline(&[("A", 50.0), ("B", 10.0), ("D", 100.0)]);
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };

        // A: 0.7*20 + 0.3*50 = 29   B: 0.7*40 + 0.3*10 = 31   D: not charged
        let score = HistoryWeightedScorer.score(&Route::new(vec![a, b, d]), &ctx);
        assert!((score - 60.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn missing_data_defaults_to_fifty() {
        let (geo, [a, b, ..]) = diamond();
        let traffic = snapshot(&[]);
        let baseline = TrafficBaseline::new();
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };
        let score = HistoryWeightedScorer.score(&Route::direct(a, b), &ctx);
        assert!((score - 50.0).abs() < 1e-9);
    }

    #[test_log::test]
    fn malformed_history_falls_back_locally() {
        let (geo, [a, b, ..]) = diamond();
        let traffic = snapshot(&[(a, 10.0)]);
        let baseline = flat_baseline(&[("A", 400.0)]);
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };
        // 0.7*10 + 0.3*50
        let score = HistoryWeightedScorer.score(&Route::direct(a, b), &ctx);
        assert!((score - 22.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn no_calendar_year_uses_fifty_for_history() {
        let (geo, [a, b, ..]) = diamond();
        let traffic = snapshot(&[(a, 10.0)]);
        let baseline = flat_baseline(&[("A", 90.0)]);
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: None };
        // 0.7*10 + 0.3*50, the 90 on record is not consulted
        let score = HistoryWeightedScorer.score(&Route::direct(a, b), &ctx);
        assert!((score - 22.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn monotonic_in_current_traffic() {
        let (geo, [a, b, c, d]) = diamond();
        let baseline = flat_baseline(&[("A", 60.0), ("B", 30.0), ("C", 80.0)]);
        let route = Route::new(vec![a, b, c, d]);

        for stop in [a, b, c] {
            let mut previous = f64::NEG_INFINITY;
            for step in 0..=20 {
                let level = step as f64 * 5.0;
                let mut levels = vec![(a, 35.0), (b, 35.0), (c, 35.0), (d, 35.0)];
                levels.iter_mut().filter(|(id, _)| *id == stop).for_each(|e| e.1 = level);
                let traffic = snapshot(&levels);
                let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };
                let score = HistoryWeightedScorer.score(&route, &ctx);
                assert!(score >= previous, "score fell from {previous} to {score} at {stop}");
                previous = score;
            }
        }
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selector {
    use mt_spatial::{GeographyBuilder, Route};
    use mt_traffic::TrafficBaseline;

    use super::helpers::{YEAR, diamond, flat_baseline, snapshot};
    use crate::{HistoryWeightedScorer, RouteContext, RouteSelector};

    #[test_log::test]
    fn unreachable_falls_back_to_direct_route() {
        let mut b = GeographyBuilder::new();
        let a = b.add_location("a", "A", 0.0, 0.0, None).unwrap();
        b.add_location("b", "B", 0.1, 0.1, None).unwrap();
        let c = b.add_location("c", "C", 10.0, 10.0, None).unwrap();
        let geo = b.build();

        let traffic = snapshot(&[]);
        let baseline = TrafficBaseline::new();
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };

        let selector = RouteSelector::new(HistoryWeightedScorer, 100.0, 5);
        let selection = selector.select_best(&ctx, a, c);
        assert_eq!(selection.route, Route::direct(a, c));
        assert!(selection.fallback);
        assert_eq!(selection.candidates, 0);
    }

    #[test]
    fn prefers_light_traffic() {
        let (geo, [a, b, c, d]) = diamond();
        let traffic = snapshot(&[(a, 20.0), (b, 20.0), (c, 90.0), (d, 90.0)]);
        let baseline = flat_baseline(&[("A", 20.0), ("B", 20.0), ("C", 90.0), ("D", 90.0)]);
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };

        let selector = RouteSelector::new(HistoryWeightedScorer, 200.0, 5);
        let selection = selector.select_best(&ctx, a, d);
        assert_eq!(selection.route, Route::new(vec![a, b, d]));
        assert!(!selection.fallback);
        assert_eq!(selection.candidates, 4);
        assert!((selection.score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn first_minimum_wins_ties() {
        // A:(0,0) B:(1,0) C:(2,0); with a 300 km threshold the candidates
        // are [A,B,C] then [A,C].  B costs nothing, so both score the same.
        let mut gb = GeographyBuilder::new();
        let a = gb.add_location("a", "A", 0.0, 0.0, None).unwrap();
        let b = gb.add_location("b", "B", 1.0, 0.0, None).unwrap();
        let c = gb.add_location("c", "C", 2.0, 0.0, None).unwrap();
        let geo = gb.build();

        let traffic = snapshot(&[(a, 50.0), (b, 0.0), (c, 50.0)]);
        let baseline = flat_baseline(&[("A", 50.0), ("B", 0.0)]);
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };

        let selector = RouteSelector::new(HistoryWeightedScorer, 300.0, 5);
        let selection = selector.select_best(&ctx, a, c);
        assert_eq!(selection.candidates, 2);
        assert_eq!(selection.route, Route::new(vec![a, b, c]));
    }

    #[test]
    fn india_plan_mumbai_to_pune() {
        let geo = mt_spatial::presets::india_metros().unwrap();
        let baseline = mt_traffic::presets::india_2024();
        let mumbai = geo.id_of("mumbai").unwrap();
        let pune = geo.id_of("pune").unwrap();
        let levels: Vec<_> = geo.ids().map(|id| (id, 60.0)).collect();
        let traffic = snapshot(&levels);
        let ctx = RouteContext { geography: &geo, traffic: &traffic, baseline: &baseline, year: Some(YEAR) };

        let plan = RouteSelector::default()
            .plan(&ctx, crate::RouteRequest { start: mumbai, end: pune })
            .unwrap();
        // The direct hop charges one stop; every detour charges at least two.
        assert_eq!(plan.route, Route::direct(mumbai, pune));
        assert!(!plan.fallback);
        assert!(plan.estimated_minutes > 0);
        assert_eq!(plan.description, crate::TrafficDescription::Moderate);
    }
}

// ── Estimates ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimate {
    use mt_core::geo::EARTH_RADIUS_KM;
    use mt_core::LocationId;
    use mt_spatial::{GeographyBuilder, Route};

    use super::helpers::snapshot;
    use crate::{TrafficDescription, estimate_minutes};

    /// Two locations exactly 100 km apart along a meridian.
    fn hundred_km() -> (mt_spatial::Geography, LocationId, LocationId) {
        let deg = 100.0 / (EARTH_RADIUS_KM * std::f64::consts::PI / 180.0);
        let mut b = GeographyBuilder::new();
        let a = b.add_location("a", "A", 0.0, 0.0, None).unwrap();
        let bb = b.add_location("b", "B", deg, 0.0, None).unwrap();
        (b.build(), a, bb)
    }

    #[test]
    fn hundred_km_at_fifty_is_forty_five_minutes() {
        let (geo, a, b) = hundred_km();
        let traffic = snapshot(&[(a, 50.0)]);
        assert_eq!(estimate_minutes(&Route::direct(a, b), &geo, &traffic).unwrap(), 45);
    }

    #[test]
    fn unsampled_start_counts_as_fifty() {
        let (geo, a, b) = hundred_km();
        let traffic = snapshot(&[(b, 100.0)]);
        assert_eq!(estimate_minutes(&Route::direct(a, b), &geo, &traffic).unwrap(), 45);
    }

    #[test]
    fn zero_traffic_is_honoured() {
        let (geo, a, b) = hundred_km();
        let traffic = snapshot(&[(a, 0.0)]);
        assert_eq!(estimate_minutes(&Route::direct(a, b), &geo, &traffic).unwrap(), 30);
    }

    #[test]
    fn unknown_stop_errors() {
        let (geo, a, _) = hundred_km();
        let traffic = snapshot(&[]);
        assert!(estimate_minutes(&Route::direct(a, LocationId(9)), &geo, &traffic).is_err());
    }

    #[test]
    fn description_bands() {
        let (_, a, b) = hundred_km();
        let route = Route::direct(a, b);
        assert_eq!(
            TrafficDescription::for_route(&route, &snapshot(&[(a, 80.0), (b, 60.0)])),
            TrafficDescription::Heavy
        );
        assert_eq!(
            TrafficDescription::for_route(&route, &snapshot(&[(a, 10.0)])),
            TrafficDescription::Light,
            "average of 10 and a defaulted 50 is 30"
        );
        assert_eq!(TrafficDescription::for_route(&route, &snapshot(&[])), TrafficDescription::Moderate);
        assert_eq!(
            TrafficDescription::for_route(&route, &snapshot(&[(a, 0.0), (b, 0.0)])),
            TrafficDescription::Light,
            "recorded zeros are not replaced by 50"
        );
        assert_eq!(TrafficDescription::Heavy.to_string(), "Heavy Traffic");
    }
}

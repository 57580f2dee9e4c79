//! Fluent builder for constructing a [`Sim`].

use mt_core::{SimConfig, SimRng};
use mt_route::{HistoryWeightedScorer, RouteScorer, RouteSelector};
use mt_spatial::Geography;
use mt_traffic::{TrafficBaseline, TrafficState};

use crate::{Phase, RefreshTimer, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.scorer(s)`    | [`HistoryWeightedScorer`]                |
/// | `.rng(r)`       | `SimRng::new(config.seed)`               |
pub struct SimBuilder<S: RouteScorer = HistoryWeightedScorer> {
    config:    SimConfig,
    geography: Geography,
    baseline:  TrafficBaseline,
    scorer:    S,
    rng:       Option<SimRng>,
}

impl SimBuilder<HistoryWeightedScorer> {
    pub fn new(config: SimConfig, geography: Geography, baseline: TrafficBaseline) -> Self {
        Self {
            config,
            geography,
            baseline,
            scorer: HistoryWeightedScorer,
            rng: None,
        }
    }
}

impl<S: RouteScorer> SimBuilder<S> {
    /// Replace the route cost model.
    pub fn scorer<T: RouteScorer>(self, scorer: T) -> SimBuilder<T> {
        SimBuilder {
            config:    self.config,
            geography: self.geography,
            baseline:  self.baseline,
            scorer,
            rng:       self.rng,
        }
    }

    /// Supply the RNG instead of seeding from `config.seed`, e.g.
    /// [`SimRng::from_entropy`] for non-reproducible runs.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        if self.geography.is_empty() {
            return Err(SimError::Config("geography has no locations".into()));
        }

        let selector = RouteSelector::new(
            self.scorer,
            self.config.max_distance_km,
            self.config.max_path_nodes,
        );

        Ok(Sim {
            clock:       self.config.make_clock(),
            rng:         self.rng.unwrap_or_else(|| SimRng::new(self.config.seed)),
            timer:       RefreshTimer::new(self.config.refresh_interval_ticks),
            config:      self.config,
            geography:   self.geography,
            baseline:    self.baseline,
            traffic:     TrafficState::new(),
            selector,
            phase:       Phase::Pending,
            last_error:  None,
        })
    }
}

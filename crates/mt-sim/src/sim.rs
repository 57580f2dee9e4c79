//! The `Sim` struct and its tick loop.

use log::{debug, error, info, warn};

use mt_core::{SimClock, SimConfig, SimRng, Tick};
use mt_route::{RouteContext, RoutePlan, RouteRequest, RouteScorer, RouteSelector};
use mt_spatial::Geography;
use mt_traffic::{TrafficBaseline, TrafficState, initial_snapshot, refreshed_snapshot};

use crate::{RefreshTimer, SimError, SimResult, TrafficObserver};

/// Lifecycle of the traffic state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Built but not yet initialized; the next tick initializes.
    Pending,
    /// Traffic is populated.
    Running,
    /// Torn down; ticks advance the clock and nothing else.
    TornDown,
}

/// The simulation runner.
///
/// Owns the static tables, the current traffic, and the refresh timer.
/// Everything runs on the caller's thread; a refresh always completes and
/// swaps in a whole snapshot before any route request can read it.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: RouteScorer> {
    pub config: SimConfig,

    /// Simulation clock; tracks the current tick and maps to wall time.
    pub clock: SimClock,

    pub geography: Geography,

    pub baseline: TrafficBaseline,

    /// Current traffic.  Replaced wholesale by initialize/refresh.
    pub traffic: TrafficState,

    pub(crate) rng:         SimRng,
    pub(crate) selector:    RouteSelector<S>,
    pub(crate) timer:       RefreshTimer,
    pub(crate) phase:       Phase,
    pub(crate) last_error:  Option<SimError>,
}

impl<S: RouteScorer> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Refresh failures never stop the loop; they are reported through
    /// [`TrafficObserver::on_refresh_failed`] and kept for
    /// [`take_error`](Self::take_error).
    pub fn run<O: TrafficObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: TrafficObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Seed traffic with uniform random levels and arm the refresh timer.
    ///
    /// Fails only when the clock has left the representable time range; the
    /// state and the timer are then left as they were.
    pub fn initialize<O: TrafficObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        let snapshot = initial_snapshot(
            &self.geography,
            now,
            self.clock.current_unix_secs()?,
            &mut self.rng,
        );
        self.traffic.replace(snapshot);
        self.phase = Phase::Running;
        self.timer.arm(now);
        observer.on_traffic_update(self.traffic.snapshot(), &self.geography);
        Ok(())
    }

    /// Rebuild traffic from the baseline for the clock's current year.
    ///
    /// On error the current snapshot is left untouched.  The timer is not
    /// touched here; the tick loop decides what a failure means.
    pub fn refresh<O: TrafficObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let year = self.clock.current_year()?;
        let snapshot = refreshed_snapshot(
            &self.geography,
            &self.baseline,
            year,
            self.clock.current_tick,
            self.clock.current_unix_secs()?,
            &mut self.rng,
        )?;
        self.traffic.replace(snapshot);
        observer.on_traffic_update(self.traffic.snapshot(), &self.geography);
        Ok(())
    }

    /// Answer a route request against the current snapshot.
    ///
    /// Only endpoint validation can fail; a valid request always yields a
    /// plan, falling back to the direct route when nothing else exists.  If
    /// the clock has no calendar year, historical levels all count as 50.
    pub fn find_route<O: TrafficObserver>(
        &self,
        start:    Option<&str>,
        end:      Option<&str>,
        observer: &mut O,
    ) -> SimResult<RoutePlan> {
        let request = RouteRequest::resolve(start, end, &self.geography)?;
        let year = match self.clock.current_year() {
            Ok(year) => Some(year),
            Err(e) => {
                warn!("route request at {}: {e}; ignoring historical data", self.clock.current_tick);
                None
            }
        };
        let ctx = RouteContext {
            geography: &self.geography,
            traffic:   self.traffic.snapshot(),
            baseline:  &self.baseline,
            year,
        };
        let plan = self.selector.plan(&ctx, request)?;
        info!(
            "route {}: {} min, {}{}",
            self.geography.describe(&plan.route),
            plan.estimated_minutes,
            plan.description,
            if plan.fallback { " (direct fallback)" } else { "" },
        );
        observer.on_route_selected(&plan, self.traffic.snapshot(), &self.geography);
        Ok(plan)
    }

    /// Cancel the timer and drop all traffic.  Safe to call repeatedly.
    pub fn teardown<O: TrafficObserver>(&mut self, observer: &mut O) {
        self.timer.cancel();
        self.traffic.clear();
        self.phase = Phase::TornDown;
        info!("teardown at {}", self.clock.current_tick);
        observer.on_teardown(self.clock.current_tick);
    }

    /// `true` while the recurring refresh is scheduled.
    pub fn refresh_active(&self) -> bool {
        self.timer.is_active()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Take the error that cancelled the refresh timer, if any.
    pub fn take_error(&mut self) -> Option<SimError> {
        self.last_error.take()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: TrafficObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        match self.phase {
            Phase::Pending => {
                if let Err(e) = self.initialize(observer) {
                    // Traffic stays empty and no timer is armed.
                    self.phase = Phase::Running;
                    self.report_failure(now, e, observer);
                }
            }
            Phase::Running if self.timer.is_due(now) => self.fire_refresh(now, observer),
            Phase::Running | Phase::TornDown => {}
        }

        observer.on_tick_end(now);
        self.clock.advance();
    }

    fn fire_refresh<O: TrafficObserver>(&mut self, now: Tick, observer: &mut O) {
        match self.refresh(observer) {
            Ok(()) => {
                self.timer.reschedule(now);
                if let Some(due) = self.timer.next_due() {
                    debug!("next traffic refresh due at {due}");
                }
            }
            Err(e) => {
                // No retry: the timer stays off until `initialize` re-arms it.
                self.timer.cancel();
                self.report_failure(now, e, observer);
            }
        }
    }

    fn report_failure<O: TrafficObserver>(&mut self, now: Tick, e: SimError, observer: &mut O) {
        error!("traffic update at {now} failed, refresh timer off: {e}");
        observer.on_refresh_failed(now, &e);
        self.last_error = Some(e);
    }
}

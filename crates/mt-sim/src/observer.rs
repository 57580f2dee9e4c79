//! Observer trait through which renderers receive simulation output.

use mt_core::Tick;
use mt_route::RoutePlan;
use mt_spatial::Geography;
use mt_traffic::TrafficSnapshot;

use crate::SimError;

/// Callbacks invoked by [`Sim`][crate::Sim].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: traffic card printer
///
/// ```rust,ignore
/// struct CardPrinter;
///
/// impl TrafficObserver for CardPrinter {
///     fn on_traffic_update(&mut self, snapshot: &TrafficSnapshot, geo: &Geography) {
///         for (id, sample) in snapshot.sorted() {
///             println!("{}: {:.0}%", geo.location(id).unwrap().name, sample.level);
///         }
///     }
/// }
/// ```
pub trait TrafficObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called with the full snapshot after every initialize or refresh.
    fn on_traffic_update(&mut self, _snapshot: &TrafficSnapshot, _geography: &Geography) {}

    /// Called after a route request has been answered.
    fn on_route_selected(
        &mut self,
        _plan:      &RoutePlan,
        _snapshot:  &TrafficSnapshot,
        _geography: &Geography,
    ) {}

    /// Called once when a refresh fails and the timer is cancelled.
    fn on_refresh_failed(&mut self, _tick: Tick, _error: &SimError) {}

    /// Called when the simulation is torn down.
    fn on_teardown(&mut self, _tick: Tick) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`TrafficObserver`] that does nothing.
pub struct NoopObserver;

impl TrafficObserver for NoopObserver {}

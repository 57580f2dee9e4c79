//! Synthetic traffic generation.
//!
//! Both generators are pure with respect to everything except the supplied
//! RNG: they read the geography and baseline and return a new snapshot.
//!
//! - [`initial_snapshot`] draws an integer level uniformly from `0..100` for
//!   every location, ignoring history.
//! - [`refreshed_snapshot`] anchors on the historical level for the given
//!   year (50 when absent) and adds uniform jitter in `[-10, 10)`.  A
//!   malformed baseline entry aborts the whole cycle; there is no
//!   per-location fallback here.

use log::{debug, info};

use mt_core::{SimRng, Tick};
use mt_spatial::Geography;

use crate::{
    DEFAULT_LEVEL, TrafficBaseline, TrafficResult, TrafficSample, TrafficSnapshot, clamp_level,
};

/// Half-width of the uniform noise added on refresh.
pub const REFRESH_JITTER: f64 = 10.0;

/// Baseline-free starting levels for every location.
pub fn initial_snapshot(
    geography: &Geography,
    tick:      Tick,
    now_unix:  i64,
    rng:       &mut SimRng,
) -> TrafficSnapshot {
    let mut snapshot = TrafficSnapshot::with_capacity(tick, geography.len());
    for id in geography.ids() {
        let level = clamp_level(rng.gen_range(0u32..100) as f64);
        snapshot.insert(id, TrafficSample { level, captured_at_unix_secs: now_unix });
    }
    info!("initialized traffic for {} location(s) at {tick}", snapshot.len());
    snapshot
}

/// Baseline-anchored levels for every location.
pub fn refreshed_snapshot(
    geography: &Geography,
    baseline:  &TrafficBaseline,
    year:      i32,
    tick:      Tick,
    now_unix:  i64,
    rng:       &mut SimRng,
) -> TrafficResult<TrafficSnapshot> {
    let mut snapshot = TrafficSnapshot::with_capacity(tick, geography.len());
    let mut anchored = 0usize;

    for (id, location) in geography.iter() {
        let base = match baseline.level(&location.name, year)? {
            Some(level) => {
                anchored += 1;
                level
            }
            None => DEFAULT_LEVEL,
        };
        let jitter = rng.gen_range(-REFRESH_JITTER..REFRESH_JITTER);
        let level = clamp_level(base + jitter);
        snapshot.insert(id, TrafficSample { level, captured_at_unix_secs: now_unix });
    }

    debug!(
        "refresh {tick}: {anchored} of {} location(s) anchored on {year} baseline",
        snapshot.len()
    );
    info!("refreshed traffic for {} location(s) at {tick}", snapshot.len());
    Ok(snapshot)
}

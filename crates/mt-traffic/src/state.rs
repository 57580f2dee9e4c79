//! Current traffic: per-location samples grouped into immutable snapshots.

use rustc_hash::FxHashMap;

use mt_core::{LocationId, Tick};

/// One location's synthetic traffic reading.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficSample {
    /// Congestion in `[0, 100]`.
    pub level: f64,
    /// Simulated Unix time the sample was taken.
    pub captured_at_unix_secs: i64,
}

// ── TrafficSnapshot ───────────────────────────────────────────────────────────

/// A complete set of samples produced by one initialize or refresh cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrafficSnapshot {
    /// Tick at which the cycle ran.
    pub tick: Tick,
    samples: FxHashMap<LocationId, TrafficSample>,
}

impl TrafficSnapshot {
    pub fn new(tick: Tick) -> Self {
        Self { tick, samples: FxHashMap::default() }
    }

    pub fn with_capacity(tick: Tick, n: usize) -> Self {
        let mut samples = FxHashMap::default();
        samples.reserve(n);
        Self { tick, samples }
    }

    /// Overwrites any earlier sample for `id`.
    pub fn insert(&mut self, id: LocationId, sample: TrafficSample) {
        self.samples.insert(id, sample);
    }

    pub fn get(&self, id: LocationId) -> Option<&TrafficSample> {
        self.samples.get(&id)
    }

    pub fn level(&self, id: LocationId) -> Option<f64> {
        self.samples.get(&id).map(|s| s.level)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples ordered by `LocationId`, for stable rendering.
    pub fn sorted(&self) -> Vec<(LocationId, TrafficSample)> {
        let mut rows: Vec<_> = self.samples.iter().map(|(&id, &s)| (id, s)).collect();
        rows.sort_unstable_by_key(|&(id, _)| id);
        rows
    }
}

// ── TrafficState ──────────────────────────────────────────────────────────────

/// Owner of the current snapshot.
///
/// The only mutations are a wholesale [`replace`](Self::replace) and
/// [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct TrafficState {
    current: TrafficSnapshot,
}

impl TrafficState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly computed snapshot, returning the previous one.
    pub fn replace(&mut self, snapshot: TrafficSnapshot) -> TrafficSnapshot {
        std::mem::replace(&mut self.current, snapshot)
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.current = TrafficSnapshot::default();
    }

    pub fn snapshot(&self) -> &TrafficSnapshot {
        &self.current
    }

    /// Current level at `id`, or `None` if it has no sample.
    pub fn level(&self, id: LocationId) -> Option<f64> {
        self.current.level(id)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to wall-clock time is held in `SimClock`:
//!
//!   wall_time = start_unix_secs + tick * tick_duration_secs
//!
//! The default tick duration is 3,600 s (1 simulated hour), which is also the
//! default traffic refresh cadence.  The calendar year of the simulated
//! wall-clock selects which historical baseline year is consulted.

use std::fmt;

use chrono::{DateTime, Datelike};

use crate::{MtError, MtResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and Unix wall-clock seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of tick 0.
    pub start_unix_secs: i64,
    /// How many real seconds one tick represents.  Default: 3600 (1 hour).
    pub tick_duration_secs: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self {
            start_unix_secs,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    ///
    /// Fails with [`MtError::Timestamp`] once the product no longer fits in
    /// an `i64`.
    pub fn elapsed_secs(&self) -> MtResult<i64> {
        i64::try_from(self.current_tick.0)
            .ok()
            .and_then(|t| t.checked_mul(i64::from(self.tick_duration_secs)))
            .ok_or(MtError::Timestamp(self.start_unix_secs))
    }

    /// Current Unix timestamp corresponding to `current_tick`.
    pub fn current_unix_secs(&self) -> MtResult<i64> {
        let elapsed = self.elapsed_secs()?;
        self.start_unix_secs
            .checked_add(elapsed)
            .ok_or(MtError::Timestamp(self.start_unix_secs))
    }

    /// Calendar year (UTC) of the current simulated instant.
    pub fn current_year(&self) -> MtResult<i32> {
        let secs = self.current_unix_secs()?;
        DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.year())
            .ok_or(MtError::Timestamp(secs))
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .current_unix_secs()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
        match date {
            Some(dt) => write!(f, "{} ({})", self.current_tick, dt.format("%Y-%m-%d %H:%M")),
            None => write!(f, "{}", self.current_tick),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Hard ceiling on route length in locations (five segments).
pub const MAX_ROUTE_NODES: usize = 6;

/// Top-level simulation configuration.
///
/// Loaded from a JSON file by the application crate, or built from
/// [`SimConfig::default`] and adjusted field by field.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Unix timestamp for tick 0.
    pub start_unix_secs: i64,

    /// Seconds per tick.  Default: 3600.
    pub tick_duration_secs: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical snapshots.
    pub seed: u64,

    /// Refresh traffic every N ticks.  1 = every simulated hour at the
    /// default tick duration.
    pub refresh_interval_ticks: u64,

    /// Two locations are neighbours when they are at most this far apart.
    pub max_distance_km: f64,

    /// Longest route (in locations, endpoints included) the enumerator
    /// will record.  At most [`MAX_ROUTE_NODES`].
    pub max_path_nodes: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_secs:        1_704_067_200, // 2024-01-01 00:00 UTC
            tick_duration_secs:     3_600,
            total_ticks:            24,
            seed:                   42,
            refresh_interval_ticks: 1,
            max_distance_km:        500.0,
            max_path_nodes:         5,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }

    /// Reject values that would make the tick loop or the enumerator
    /// meaningless.
    pub fn validate(&self) -> MtResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(MtError::Config("tick_duration_secs must be positive".into()));
        }
        if self.refresh_interval_ticks == 0 {
            return Err(MtError::Config("refresh_interval_ticks must be positive".into()));
        }
        if !(self.max_distance_km.is_finite() && self.max_distance_km > 0.0) {
            return Err(MtError::Config(format!(
                "max_distance_km must be a positive number, got {}",
                self.max_distance_km
            )));
        }
        if !(2..=MAX_ROUTE_NODES).contains(&self.max_path_nodes) {
            return Err(MtError::Config(format!(
                "max_path_nodes must be between 2 and {MAX_ROUTE_NODES}, got {}",
                self.max_path_nodes
            )));
        }
        Ok(())
    }
}

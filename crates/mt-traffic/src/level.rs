//! Traffic level scale shared by baselines, samples and scoring.
//!
//! Levels are `f64` congestion percentages on a closed `[0, 100]` scale.

/// Lowest representable level.
pub const MIN_LEVEL: f64 = 0.0;
/// Highest representable level.
pub const MAX_LEVEL: f64 = 100.0;
/// Stand-in for any level that is missing.
pub const DEFAULT_LEVEL: f64 = 50.0;

/// Clamp into `[MIN_LEVEL, MAX_LEVEL]`.  NaN maps to `MIN_LEVEL`.
#[inline]
pub fn clamp_level(level: f64) -> f64 {
    if level.is_nan() {
        return MIN_LEVEL;
    }
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Congestion band of a single location, as shown on traffic cards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficClass {
    Low,
    Medium,
    High,
}

impl TrafficClass {
    /// `>= 70` is high, `>= 40` is medium, anything else is low.
    pub fn from_level(level: f64) -> Self {
        if level >= 70.0 {
            TrafficClass::High
        } else if level >= 40.0 {
            TrafficClass::Medium
        } else {
            TrafficClass::Low
        }
    }

    /// Stable label, usable as a CSS class or CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficClass::Low    => "low-traffic",
            TrafficClass::Medium => "medium-traffic",
            TrafficClass::High   => "high-traffic",
        }
    }
}

impl std::fmt::Display for TrafficClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

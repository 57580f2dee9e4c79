//! Reference baseline matching the `mt_spatial::presets::india_metros`
//! geography.  Only 2024 is populated.

use crate::TrafficBaseline;

/// Year covered by [`india_2024`].
pub const INDIA_BASELINE_YEAR: i32 = 2024;

const INDIA_2024: [(&str, f64); 11] = [
    ("Mumbai",    85.0),
    ("Delhi",     88.0),
    ("Bengaluru", 82.0),
    ("Hyderabad", 78.0),
    ("Chennai",   75.0),
    ("Ahmedabad", 72.0),
    ("Kolkata",   80.0),
    ("Surat",     70.0),
    ("Pune",      76.0),
    ("Jaipur",    71.0),
    ("Lucknow",   73.0),
];

pub fn india_2024() -> TrafficBaseline {
    let mut baseline = TrafficBaseline::new();
    for (name, level) in INDIA_2024 {
        baseline.insert(name, INDIA_BASELINE_YEAR, Some(level));
    }
    baseline
}

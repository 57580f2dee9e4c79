//! Plain data row types written by output backends.

/// One location's traffic in a published snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficRow {
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub location_key:   String,
    pub location_name:  String,
    pub level:          f64,
    /// `low-traffic`, `medium-traffic` or `high-traffic`.
    pub class:          &'static str,
}

/// A selected route as shown in a route summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRow {
    /// Tick of the snapshot the route was computed against.
    pub tick:              u64,
    /// Display names joined with `" → "`.
    pub path:              String,
    /// Location keys joined with `|`.
    pub stops:             String,
    pub estimated_minutes: u32,
    pub description:       &'static str,
    pub score:             f64,
    pub fallback:          bool,
}

use mt_spatial::Geography;
use mt_traffic::{TrafficBaseline, TrafficSnapshot};

/// Everything a route computation reads, borrowed for one request.
#[derive(Clone, Copy)]
pub struct RouteContext<'a> {
    pub geography: &'a Geography,
    pub traffic:   &'a TrafficSnapshot,
    pub baseline:  &'a TrafficBaseline,
    /// Baseline year consulted for historical levels.  `None` when the
    /// clock has no calendar year; every historical level is then 50.
    pub year:      Option<i32>,
}

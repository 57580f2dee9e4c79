//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RouteRow, TrafficRow};

/// Sink for rendered rows.
///
/// Errors are stored by [`OutputObserver`](crate::OutputObserver) and
/// retrieved with [`take_error`](crate::OutputObserver::take_error).
pub trait OutputWriter {
    /// Write every location of one snapshot.
    fn write_traffic(&mut self, rows: &[TrafficRow]) -> OutputResult<()>;

    /// Write one route summary.
    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

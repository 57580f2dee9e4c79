//! `OutputObserver<W>`: bridges `TrafficObserver` to an `OutputWriter`.

use log::warn;

use mt_core::Tick;
use mt_route::RoutePlan;
use mt_sim::TrafficObserver;
use mt_spatial::Geography;
use mt_traffic::{TrafficClass, TrafficSnapshot};

use crate::row::{RouteRow, TrafficRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TrafficObserver`] that renders snapshots and route summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check with [`take_error`][Self::take_error].
/// Files are flushed on teardown or by an explicit [`finish`][Self::finish].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, recording any error.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TrafficObserver for OutputObserver<W> {
    fn on_traffic_update(&mut self, snapshot: &TrafficSnapshot, geography: &Geography) {
        let rows: Vec<TrafficRow> = snapshot
            .sorted()
            .into_iter()
            .filter_map(|(id, sample)| {
                let location = geography.location(id)?;
                Some(TrafficRow {
                    tick:           snapshot.tick.0,
                    unix_time_secs: sample.captured_at_unix_secs,
                    location_key:   location.key.clone(),
                    location_name:  location.name.clone(),
                    level:          sample.level,
                    class:          TrafficClass::from_level(sample.level).as_str(),
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_traffic(&rows);
            self.store_err(result);
        }
    }

    fn on_route_selected(
        &mut self,
        plan:      &RoutePlan,
        snapshot:  &TrafficSnapshot,
        geography: &Geography,
    ) {
        let stops = plan
            .route
            .stops()
            .iter()
            .map(|&id| geography.location(id).map_or("?", |l| l.key.as_str()))
            .collect::<Vec<_>>()
            .join("|");
        let row = RouteRow {
            tick:              snapshot.tick.0,
            path:              geography.describe(&plan.route),
            stops,
            estimated_minutes: plan.estimated_minutes,
            description:       plan.description.as_str(),
            score:             plan.score,
            fallback:          plan.fallback,
        };
        let result = self.writer.write_route(&row);
        self.store_err(result);
    }

    fn on_teardown(&mut self, _tick: Tick) {
        self.finish();
    }
}

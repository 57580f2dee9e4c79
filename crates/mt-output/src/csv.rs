//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RouteRow, TrafficRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    traffic:  Writer<File>,
    routes:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut traffic = Writer::from_path(dir.join("traffic_snapshots.csv"))?;
        traffic.write_record(["tick", "unix_time_secs", "location_key", "location_name", "level", "class"])?;

        let mut routes = Writer::from_path(dir.join("routes.csv"))?;
        routes.write_record(["tick", "path", "stops", "estimated_minutes", "description", "score", "fallback"])?;

        Ok(Self { traffic, routes, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_traffic(&mut self, rows: &[TrafficRow]) -> OutputResult<()> {
        for row in rows {
            self.traffic.write_record(&[
                row.tick.to_string(),
                row.unix_time_secs.to_string(),
                row.location_key.clone(),
                row.location_name.clone(),
                format!("{:.1}", row.level),
                row.class.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_route(&mut self, row: &RouteRow) -> OutputResult<()> {
        self.routes.write_record(&[
            row.tick.to_string(),
            row.path.clone(),
            row.stops.clone(),
            row.estimated_minutes.to_string(),
            row.description.to_owned(),
            format!("{:.2}", row.score),
            (row.fallback as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.traffic.flush()?;
        self.routes.flush()?;
        Ok(())
    }
}

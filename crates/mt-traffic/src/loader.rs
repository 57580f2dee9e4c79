//! CSV baseline loader.
//!
//! # CSV format
//!
//! One row per location-year.  An empty `traffic_level` records the year
//! with no level.
//!
//! ```csv
//! name,year,traffic_level
//! Mumbai,2024,85
//! Delhi,2024,88
//! Pune,2023,
//! ```
//!
//! Range checking is left to [`TrafficBaseline::level`]; the loader only
//! rejects rows that do not parse.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{TrafficBaseline, TrafficError, TrafficResult};

#[derive(Deserialize)]
struct BaselineRecord {
    name:          String,
    year:          i32,
    traffic_level: Option<f64>,
}

/// Load a [`TrafficBaseline`] from a CSV file.
pub fn load_baseline_csv(path: &Path) -> TrafficResult<TrafficBaseline> {
    let file = std::fs::File::open(path).map_err(TrafficError::Io)?;
    load_baseline_reader(file)
}

/// Like [`load_baseline_csv`] but accepts any `Read` source.
pub fn load_baseline_reader<R: Read>(reader: R) -> TrafficResult<TrafficBaseline> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut baseline = TrafficBaseline::new();

    for result in csv_reader.deserialize::<BaselineRecord>() {
        let row = result.map_err(|e| TrafficError::Parse(e.to_string()))?;
        baseline.insert(row.name.trim(), row.year, row.traffic_level);
    }

    log::debug!("loaded traffic baseline for {} location(s)", baseline.len());
    Ok(baseline)
}

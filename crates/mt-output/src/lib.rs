//! `mt-output`: CSV rendering of simulation output.
//!
//! Creates two files in the output directory:
//!
//! | File                    | One row per                                  |
//! |-------------------------|----------------------------------------------|
//! | `traffic_snapshots.csv` | location per published snapshot              |
//! | `routes.csv`            | answered route request                       |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`OutputObserver`], which implements `mt_sim::TrafficObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mt_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{RouteRow, TrafficRow};
pub use writer::OutputWriter;

//! `mt-core`: foundational types for the `metro_traffic` route simulator.
//!
//! This crate is a dependency of every other `mt-*` crate.  It intentionally
//! has no `mt-*` dependencies and minimal external ones (`rand`, `chrono`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`                                          |
//! | [`geo`]         | `GeoPoint`, haversine distance in kilometres          |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (seeded, reproducible)                       |
//! | [`error`]       | `MtError`, `MtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MtError, MtResult};
pub use geo::GeoPoint;
pub use ids::LocationId;
pub use rng::SimRng;
pub use time::{MAX_ROUTE_NODES, SimClock, SimConfig, Tick};

//! `mt-route`: scoring and choosing among candidate routes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`context`]  | `RouteContext`: the read-only inputs of one request        |
//! | [`request`]  | `RouteRequest`: endpoint validation                        |
//! | [`scorer`]   | `RouteScorer` trait, `HistoryWeightedScorer`                |
//! | [`selector`] | `RouteSelector`, `Selection`                                |
//! | [`estimate`] | `estimate_minutes`, `TrafficDescription`                    |
//! | [`plan`]     | `RoutePlan`: what a renderer receives                      |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                              |
//!
//! # Pipeline
//!
//! ```text
//! RouteRequest ─► enumerate_routes ─► score each ─► first minimum
//!                        │ (none)
//!                        └─► direct [start, end] fallback
//! ```
//!
//! Selection never fails once the request is valid.

pub mod context;
pub mod error;
pub mod estimate;
pub mod plan;
pub mod request;
pub mod scorer;
pub mod selector;

#[cfg(test)]
mod tests;

pub use context::RouteContext;
pub use error::{RouteError, RouteResult};
pub use estimate::{BASE_SEGMENT_MINUTES, TrafficDescription, estimate_minutes};
pub use plan::RoutePlan;
pub use request::RouteRequest;
pub use scorer::{CURRENT_WEIGHT, HISTORICAL_WEIGHT, HistoryWeightedScorer, INVALID_ROUTE_SCORE, RouteScorer};
pub use selector::{RouteSelector, Selection};

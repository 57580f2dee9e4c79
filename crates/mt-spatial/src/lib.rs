//! `mt-spatial`: geography table, proximity graph, and route enumeration.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`geography`] | `Location`, `Geography`, `GeographyBuilder`               |
//! | [`proximity`] | `ProximityGraph` (implicit edges within a distance)       |
//! | [`enumerate`] | `Route`, `enumerate_routes`                               |
//! | [`presets`]   | `india_metros`: the eleven-city reference geography      |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod enumerate;
pub mod error;
pub mod geography;
pub mod presets;
pub mod proximity;

#[cfg(test)]
mod tests;

pub use enumerate::{DEFAULT_MAX_PATH_NODES, Route, enumerate_routes};
pub use error::{SpatialError, SpatialResult};
pub use geography::{DEFAULT_ICON, Geography, GeographyBuilder, Location};
pub use proximity::{DEFAULT_MAX_DISTANCE_KM, ProximityGraph};

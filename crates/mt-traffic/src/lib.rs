//! `mt-traffic`: historical baselines and synthetic current traffic.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`level`]    | level clamping, `DEFAULT_LEVEL`, `TrafficClass`            |
//! | [`baseline`] | `TrafficBaseline` (name → year → level)                    |
//! | [`loader`]   | `load_baseline_csv`, `load_baseline_reader`                |
//! | [`state`]    | `TrafficSample`, `TrafficSnapshot`, `TrafficState`         |
//! | [`model`]    | `initial_snapshot`, `refreshed_snapshot`                   |
//! | [`presets`]  | `india_2024` reference baseline                            |
//! | [`error`]    | `TrafficError`, `TrafficResult<T>`                         |
//!
//! # Snapshot model
//!
//! Traffic is never edited in place.  Each cycle builds a complete
//! [`TrafficSnapshot`] and [`TrafficState::replace`] swaps it in, so a
//! reader sees either the previous cycle or the new one, never a mix.

pub mod baseline;
pub mod error;
pub mod level;
pub mod loader;
pub mod model;
pub mod presets;
pub mod state;


pub use baseline::TrafficBaseline;
pub use error::{TrafficError, TrafficResult};
pub use level::{DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL, TrafficClass, clamp_level};
pub use loader::{load_baseline_csv, load_baseline_reader};
pub use model::{REFRESH_JITTER, initial_snapshot, refreshed_snapshot};
pub use state::{TrafficSample, TrafficSnapshot, TrafficState};

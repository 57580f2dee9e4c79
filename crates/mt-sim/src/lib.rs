//! `mt-sim`: tick loop driver for the metro_traffic route simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① first tick  : initialize traffic with uniform random levels,
//!                    arm the refresh timer.
//!   ② timer due   : rebuild traffic from baseline + jitter and swap it in.
//!                    A failed refresh cancels the timer for good.
//!   ③ observers   : every new snapshot is pushed to the TrafficObserver.
//! ```
//!
//! Route requests ([`Sim::find_route`]) run synchronously between ticks
//! against whatever snapshot is current.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mt_core::SimConfig;
//! use mt_sim::{NoopObserver, SimBuilder};
//!
//! let geo = mt_spatial::presets::india_metros()?;
//! let baseline = mt_traffic::presets::india_2024();
//! let mut sim = SimBuilder::new(SimConfig::default(), geo, baseline).build()?;
//! sim.run(&mut NoopObserver);
//! let plan = sim.find_route(Some("mumbai"), Some("hyderabad"), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod timer;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TrafficObserver};
pub use sim::{Phase, Sim};
pub use timer::RefreshTimer;

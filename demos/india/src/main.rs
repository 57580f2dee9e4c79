//! india: traffic snapshots and a route pick across eleven Indian metros.
//!
//! Generates a day of synthetic hourly traffic anchored on the 2024
//! baseline, prints a card per city for the final snapshot, then answers
//! one route request and writes everything to `./output`.
//!
//! Run with:
//!   cargo run -p india -- [start] [end]
//!
//! `start` and `end` are location keys (default `mumbai` → `ahmedabad`).
//! Set `MT_CONFIG` to a JSON `SimConfig` and `MT_BASELINE` to a
//! `name,year,traffic_level` CSV to override the presets.  Set
//! `MT_UNSEEDED` to draw traffic from OS entropy instead of the config seed.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use mt_core::{SimConfig, SimRng, Tick};
use mt_output::{CsvWriter, OutputObserver};
use mt_route::RoutePlan;
use mt_sim::{SimBuilder, SimError, TrafficObserver};
use mt_spatial::Geography;
use mt_traffic::{TrafficBaseline, TrafficClass, TrafficSnapshot};

const DEFAULT_START: &str = "mumbai";
const DEFAULT_END:   &str = "ahmedabad";
const OUTPUT_DIR:    &str = "output";

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints city cards and route summaries, and forwards everything to the
/// CSV observer.
struct ConsoleObserver {
    csv:     OutputObserver<CsvWriter>,
    updates: u64,
    last:    Option<TrafficSnapshot>,
}

impl ConsoleObserver {
    fn print_cards(&self, geography: &Geography) {
        let Some(snapshot) = &self.last else { return };
        println!("{:<12} {:>7}  {:<15}", "City", "Level", "Class");
        println!("{}", "-".repeat(36));
        for (id, sample) in snapshot.sorted() {
            let Some(loc) = geography.location(id) else { continue };
            println!(
                "{:<12} {:>6.1}%  {:<15}",
                loc.name,
                sample.level,
                TrafficClass::from_level(sample.level).as_str(),
            );
        }
    }
}

impl TrafficObserver for ConsoleObserver {
    fn on_traffic_update(&mut self, snapshot: &TrafficSnapshot, geography: &Geography) {
        self.updates += 1;
        self.last = Some(snapshot.clone());
        self.csv.on_traffic_update(snapshot, geography);
    }

    fn on_route_selected(&mut self, plan: &RoutePlan, snapshot: &TrafficSnapshot, geography: &Geography) {
        println!("Best route:      {}", geography.describe(&plan.route));
        println!("Estimated time:  {} minutes", plan.estimated_minutes);
        println!("Traffic:         {}", plan.description);
        println!("Score:           {:.2}  ({} candidates)", plan.score, plan.candidates);
        if plan.fallback {
            println!("(no connected route within range; showing the direct hop)");
        }
        self.csv.on_route_selected(plan, snapshot, geography);
    }

    fn on_refresh_failed(&mut self, tick: Tick, error: &SimError) {
        eprintln!("refresh stopped at {tick}: {error}");
    }

    fn on_teardown(&mut self, tick: Tick) {
        self.csv.on_teardown(tick);
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_config() -> Result<SimConfig> {
    match std::env::var("MT_CONFIG") {
        Ok(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
        }
        Err(_) => Ok(SimConfig::default()),
    }
}

fn load_baseline() -> Result<TrafficBaseline> {
    match std::env::var("MT_BASELINE") {
        Ok(path) => mt_traffic::load_baseline_csv(Path::new(&path))
            .with_context(|| format!("loading baseline {path}")),
        Err(_) => Ok(mt_traffic::presets::india_2024()),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let start = args.next().unwrap_or_else(|| DEFAULT_START.to_owned());
    let end = args.next().unwrap_or_else(|| DEFAULT_END.to_owned());

    let config = load_config()?;
    let geography = mt_spatial::presets::india_metros()?;
    let baseline = load_baseline()?;

    println!("=== india - metro traffic route finder ===");
    println!(
        "Cities: {}  |  Ticks: {}  |  Seed: {}",
        geography.len(),
        config.total_ticks,
        config.seed,
    );
    println!();

    let mut builder = SimBuilder::new(config, geography, baseline);
    if std::env::var_os("MT_UNSEEDED").is_some() {
        builder = builder.rng(SimRng::from_entropy());
    }
    let mut sim = builder.build()?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ConsoleObserver {
        csv:     OutputObserver::new(writer),
        updates: 0,
        last:    None,
    };

    let t0 = Instant::now();
    sim.run(&mut obs);
    info!("simulation finished in {:.3} s", t0.elapsed().as_secs_f64());

    println!("Traffic at {} ({} snapshots published)", sim.clock, obs.updates);
    obs.print_cards(&sim.geography);
    println!();

    if let Err(e) = sim.find_route(Some(&start), Some(&end), &mut obs) {
        eprintln!("route request rejected: {e}");
    }

    sim.teardown(&mut obs);
    if let Some(e) = obs.csv.take_error() {
        eprintln!("output error: {e}");
    }
    println!();
    println!("Output written to ./{OUTPUT_DIR}/");
    Ok(())
}

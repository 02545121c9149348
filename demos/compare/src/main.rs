//! compare — run all three checkout routing policies over one store setup.
//!
//! Simulates a two-hour shift at a five-station store (one arrival every
//! 30 s) three times — single shared line, shortest line, random line —
//! prints the per-policy summaries, and writes `policy_comparison.csv` for
//! side-by-side analysis.  Pass a JSON file path to override the defaults:
//!
//! ```json
//! { "station_count": 8, "total_ticks": 14400, "arrival_interval_ticks": 20, "seed": 7 }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use ck_core::{SimConfig, SimRng};
use ck_report::{CsvReportWriter, PolicyRunRow, TextReport};
use ck_sim::{
    EngineBuilder, LeastCustomers, NoopObserver, RandomLine, RoutingPolicy, RunStats, SingleLine,
};

// ── Default experiment ────────────────────────────────────────────────────────

const STATION_COUNT:          u32 = 5;
const DURATION_SECS:          u64 = 7_200; // a two-hour shift
const ARRIVAL_INTERVAL_SECS:  u64 = 30;    // one customer every 30 seconds
const MASTER_SEED:            u64 = 42;

const COMPARISON_CSV: &str = "policy_comparison.csv";

// ── Experiment file ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Experiment {
    station_count:          u32,
    total_ticks:            u64,
    arrival_interval_ticks: u64,
    seed:                   u64,
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            station_count:          STATION_COUNT,
            total_ticks:            DURATION_SECS,
            arrival_interval_ticks: ARRIVAL_INTERVAL_SECS,
            seed:                   MASTER_SEED,
        }
    }
}

impl Experiment {
    fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading experiment file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing experiment file {}", path.display()))
    }

    /// Per-policy config: same experiment, independently derived seed so the
    /// three runs draw from statistically independent streams.
    fn config_for_stream(&self, stream: u64) -> SimConfig {
        SimConfig {
            station_count:          self.station_count,
            total_ticks:            self.total_ticks,
            arrival_interval_ticks: self.arrival_interval_ticks,
            seed:                   SimRng::derive_seed(self.seed, stream),
        }
    }
}

// ── Runs ──────────────────────────────────────────────────────────────────────

fn run_policy<P: RoutingPolicy>(config: SimConfig, policy: P) -> Result<(&'static str, RunStats)> {
    let name = policy.name();
    let mut engine = EngineBuilder::new(config, policy).build()?;
    engine.run(&mut NoopObserver)?;
    Ok((name, engine.stats()))
}

fn main() -> Result<()> {
    let experiment = match std::env::args().nth(1) {
        Some(path) => Experiment::load(Path::new(&path))?,
        None => Experiment::default(),
    };

    println!("=== checkout policy comparison ===");
    println!(
        "{} stations, {} s, one arrival per {} s, master seed {}\n",
        experiment.station_count,
        experiment.total_ticks,
        experiment.arrival_interval_ticks,
        experiment.seed,
    );

    let runs = [
        run_policy(experiment.config_for_stream(0), SingleLine)?,
        run_policy(experiment.config_for_stream(1), LeastCustomers)?,
        run_policy(experiment.config_for_stream(2), RandomLine)?,
    ];

    let mut writer = CsvReportWriter::from_path(Path::new(COMPARISON_CSV))
        .context("opening comparison CSV")?;
    for (name, stats) in &runs {
        let label = format!("{name}, {} stations", experiment.station_count);
        println!("{}", TextReport::new(&label, stats));
        writer.write_run(&PolicyRunRow::from_stats(*name, stats))?;
    }
    writer.finish()?;
    println!("wrote {COMPARISON_CSV}");

    Ok(())
}

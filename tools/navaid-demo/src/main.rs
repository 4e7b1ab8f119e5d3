//! navaid-demo: headless runner that prints instrument snapshots as JSON lines.
//!
//! Usage:
//!   navaid-demo --scenario all --ticks 300 --every 30
//!   RUST_LOG=debug navaid-demo --scenario dme --config nav.json

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use navaid_core::commands::NavCommand;
use navaid_core::constants::WANDER_SPEED;
use navaid_core::enums::ScenarioId;
use navaid_core::NavConfig;
use navaid_sim::{SimConfig, SimulationEngine};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Dme,
    Vor,
    Localizer,
    Glideslope,
    All,
}

impl From<ScenarioArg> for ScenarioId {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Dme => ScenarioId::Dme,
            ScenarioArg::Vor => ScenarioId::Vor,
            ScenarioArg::Localizer => ScenarioId::Localizer,
            ScenarioArg::Glideslope => ScenarioId::Glideslope,
            ScenarioArg::All => ScenarioId::All,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "navaid-demo")]
#[command(about = "Run the radio-navigation simulation and print snapshots", long_about = None)]
struct Args {
    /// Station layout to load
    #[arg(short = 'S', long, value_enum, default_value = "all")]
    scenario: ScenarioArg,

    /// Number of ticks to run (30 ticks per simulated second)
    #[arg(short, long, default_value = "300")]
    ticks: u64,

    /// Seed for the wander RNG
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// JSON file overriding model parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every Nth snapshot
    #[arg(short, long, default_value = "30")]
    every: u64,

    /// Let the aircraft drift, optionally at this speed (units/s)
    #[arg(short, long, value_name = "SPEED", num_args = 0..=1)]
    wander: Option<Option<f64>>,
}

impl Args {
    /// Wander speed, if requested. A bare `--wander` uses [`WANDER_SPEED`].
    fn wander_speed(&self) -> Option<f64> {
        self.wander.map(|speed| speed.unwrap_or(WANDER_SPEED))
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let nav = match &args.config {
        Some(path) => NavConfig::load(path)?,
        None => NavConfig::default(),
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        scenario: args.scenario.into(),
        nav,
    })?;
    if let Some(speed) = args.wander_speed() {
        engine.queue_command(NavCommand::Wander { speed });
    }

    info!(scenario = ?args.scenario, ticks = args.ticks, seed = args.seed, "starting run");

    let every = args.every.max(1);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for tick in 1..=args.ticks {
        let snapshot = engine.tick();
        if tick % every == 0 || tick == args.ticks {
            serde_json::to_writer(&mut out, &snapshot)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    info!(elapsed_secs = engine.time().elapsed_secs, "run complete");
    Ok(())
}

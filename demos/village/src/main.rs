//! village — run one delivery robot over the bundled village.
//!
//! Eleven places, fourteen roads, five parcels by default.  Pick a robot
//! with `--robot random|route|goal`; every turn is logged, and `--delay-ms`
//! slows the loop down to watch it.  Set `RUST_LOG=mb_sim=debug` for the
//! per-turn internals.

mod presenter;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mb_behavior::RobotKind;
use mb_core::SimConfig;
use mb_sim::{RunOutcome, SimBuilder};
use mb_spatial::village;

use presenter::Presenter;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "village", version, about = "Parcel delivery robots on a village road graph")]
struct Cli {
    /// Strategy: random, route, or goal.
    #[arg(short, long, default_value_t = RobotKind::Goal)]
    robot: RobotKind,

    /// JSON file with a SimConfig; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of parcels to generate.
    #[arg(short, long)]
    parcels: Option<usize>,

    /// RNG seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many turns (0 = never).
    #[arg(long)]
    max_turns: Option<u64>,

    /// Pause between turns, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

impl Cli {
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };
        if let Some(n) = self.parcels {
            config.parcel_count = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(max) = self.max_turns {
            config.max_turns = max;
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("village=info,mb_sim=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.sim_config()?;

    let graph = village::graph().context("building the village road graph")?;
    let layout = village::layout(&graph).context("placing the village on the map")?;
    let robot = cli.robot.build(&graph).context("building the robot")?;

    let mut sim = SimBuilder::new(config.clone(), graph.clone(), robot)
        .build()
        .context("setting up the simulation")?;

    println!("=== village — {} robot ===", cli.robot);
    println!("Parcels: {}  |  Seed: {}  |  Start: {}", config.parcel_count, config.seed, config.start_place);
    println!();
    println!("{:<16} {:<16}", "At", "Deliver to");
    println!("{}", "-".repeat(32));
    for p in &sim.state().parcels {
        println!("{:<16} {:<16}", graph.name(p.place), graph.name(p.address));
    }
    println!();

    let mut presenter = Presenter::new(&graph, &layout, Duration::from_millis(cli.delay_ms));
    let outcome = sim.run(&mut presenter).context("running the simulation")?;

    println!();
    match outcome {
        RunOutcome::Completed { turns } => println!("All deliveries completed in {turns} steps."),
        RunOutcome::Halted { turns } => println!("Halted after {turns} steps."),
        RunOutcome::TurnLimit { turns } => println!(
            "Gave up after {turns} steps with {} parcel(s) undelivered.",
            sim.state().parcel_count()
        ),
    }
    Ok(())
}

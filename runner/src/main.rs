//! The thin driver binary (spec §1): loads a run configuration, builds an
//! initial system, advances it for a configured number of collisions, and
//! writes the resulting state and observables. Everything physically
//! interesting lives in `hsg_engine`; this crate only wires it to a CLI,
//! the way the teacher's `m_runner` wired `m_engine` to its own frontend.

mod config;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use config::{RunConfig, DIMENSIONS};
use report::Report;

#[derive(Debug, Parser)]
#[command(about = "Runs an event-driven hard-sphere gas simulation from a YAML configuration")]
struct Cli {
    /// Path to the YAML run configuration.
    config: PathBuf,

    /// Where to write the resulting YAML report. Defaults to stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Overrides the configured collision budget.
    #[arg(long)]
    collisions: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let contents = fs::read_to_string(&cli.config)
        .with_context(|| format!("reading configuration file {:?}", cli.config))?;
    let config = RunConfig::from_yaml(&contents).with_context(|| "parsing YAML configuration")?;
    let collisions = cli.collisions.unwrap_or(config.collisions);

    tracing::info!(
        particle_count = config.particle_count,
        collisions,
        seed = config.seed,
        "starting run"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut system = hsg_engine::build_system::<DIMENSIONS>(
        config.particle_count,
        config.mass,
        config.radius,
        config.box_lengths,
        config.initial_speed(),
        &mut rng,
    )
    .context("initialising system")?;

    for _ in 0..collisions {
        system.simulate_event().context("advancing simulation")?;
    }

    system
        .check_particle_count()
        .context("conservation check failed at end of run")?;

    tracing::info!(
        collisions = system.collision_count(),
        global_time = system.global_time(),
        temperature = system.temperature(),
        pressure = system.pressure(),
        "run complete"
    );

    let yaml = Report::from_system(&system).to_yaml().context("serialising report")?;
    match cli.output {
        Some(path) => fs::write(&path, yaml).with_context(|| format!("writing report to {path:?}"))?,
        None => println!("{yaml}"),
    }

    Ok(())
}

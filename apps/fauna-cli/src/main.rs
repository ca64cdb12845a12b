use anyhow::Context;
use clap::Parser;
use fauna_common::FaunaConfig;
use fauna_kernel::{Continent, run_continents};
use fauna_tools::WorldInspector;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// With no arguments, prints Africa, North America and Eurasia in that order.
#[derive(Parser)]
#[command(name = "fauna-cli", about = "Grazing and predation on each continent")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML file overriding carnivore starting powers
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a single continent (africa, north-america, eurasia)
    #[arg(long)]
    continent: Option<Continent>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => FaunaConfig::load(path).context("loading --config file")?,
        None => FaunaConfig::default(),
    };

    let mut stdout = std::io::stdout().lock();
    for mut run in run_continents(&Continent::selection(cli.continent), &config) {
        write!(stdout, "{}", run.report)?;
        tracing::debug!(
            continent = %run.report.continent,
            hunts = WorldInspector::hunts(&run.world),
            "{}",
            WorldInspector::summary(&run.world)
        );
        for event in run.world.drain_events() {
            tracing::debug!(?event, "world event");
        }
    }

    Ok(())
}

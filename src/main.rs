use anyhow::{Context, Result};
use clap::Parser;
use percolation::PercolationGrid;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod consts;
mod render;
mod scenario;

use crate::consts::*;
use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "percolation")]
#[command(about = "Simulate site percolation on an n x n grid")]
struct Cli {
    /// Side length of the grid
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Probability of opening each site in the random scenario
    #[arg(short, long, default_value_t = DEFAULT_PROBABILITY)]
    probability: f64,

    /// Seed for the random source; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Scenario::Random)]
    scenario: Scenario,

    /// Estimate how often a random grid percolates over this many trials
    #[arg(long)]
    trials: Option<usize>,

    /// Print only the percolation status, not the grid
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(trials) = cli.trials {
        return estimate(&cli, trials, &mut rng);
    }

    info!(size = cli.size, scenario = ?cli.scenario, "building grid");
    let grid = cli
        .scenario
        .build(cli.size, cli.probability, &mut rng)
        .with_context(|| format!("failed to build {:?} scenario", cli.scenario))?;
    info!(
        open_sites = grid.number_of_open_sites(),
        percolates = grid.percolates(),
        "grid done"
    );

    if cli.quiet {
        println!("Percolates: {}", grid.percolates());
    } else {
        println!("{}", render::render(&grid)?);
    }

    Ok(())
}

/// Runs independent random grids, each with its own instance, and reports the
/// share that percolates.
fn estimate(cli: &Cli, trials: usize, rng: &mut StdRng) -> Result<()> {
    anyhow::ensure!(trials > 0, "--trials must be at least 1");

    let mut percolated = 0;
    for trial in 0..trials {
        let mut grid = PercolationGrid::new(cli.size)?;
        grid.open_random(cli.probability, rng)
            .with_context(|| format!("trial {trial} failed"))?;
        if grid.percolates() {
            percolated += 1;
        }
        debug!(trial, percolates = grid.percolates(), "trial done");
    }

    let fraction = percolated as f64 / trials as f64;
    info!(trials, percolated, "estimate done");
    println!(
        "{percolated}/{trials} grids of size {} percolated at p = {} ({fraction:.3})",
        cli.size, cli.probability
    );

    Ok(())
}

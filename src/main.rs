//! Technokratia - Entry Point
//!
//! Runs the polity kernel for a number of months and prints the run
//! summary. Overrides on the command line win over the config file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use technokratia::{Result, SimulationConfig, SuccessionPolicy, TickScheduler};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "technokratia")]
#[command(about = "Simulate a polity month by month and report how its society fares")]
struct Args {
    /// Number of months to simulate
    #[arg(long)]
    months: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// What happens when the government dissolves
    #[arg(long, value_enum)]
    succession: Option<Succession>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Succession {
    HardStop,
    Interim,
}

impl From<Succession> for SuccessionPolicy {
    fn from(succession: Succession) -> Self {
        match succession {
            Succession::HardStop => SuccessionPolicy::HardStop,
            Succession::Interim => SuccessionPolicy::InterimGovernment,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("technokratia=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(months) = args.months {
        config.run.months = months;
    }
    if args.seed.is_some() {
        config.run.seed = args.seed;
    }
    if let Some(succession) = args.succession {
        config.run.succession = succession.into();
    }

    let report = TickScheduler::new(config)?.run()?;

    println!("{}", report.summary());
    println!();
    println!("{}", report.state_report);
    println!();
    println!("{}", report.bank_report);

    if let Some(path) = &args.json {
        report.write_json(path)?;
        println!("\nFull report written to {}", path.display());
    }

    Ok(())
}

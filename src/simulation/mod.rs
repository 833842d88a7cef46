//! Simulation driver: scheduler, event log and run report

pub mod events;
pub mod report;
pub mod scheduler;

pub use events::{Event, EventLog, EventType};
pub use report::{LegislativeStats, MonthlyRecord, SimulationReport};
pub use scheduler::{Providers, TickScheduler};

use crate::core::config::SimulationConfig;
use crate::core::error::Result;

/// Run `months` ticks with the default configuration.
///
/// With no seed a fresh one is drawn; the report records it.
pub fn run(months: u32, seed: Option<u64>) -> Result<SimulationReport> {
    let mut config = SimulationConfig::default();
    config.run.months = months;
    config.run.seed = seed;
    run_with_config(config)
}

pub fn run_with_config(config: SimulationConfig) -> Result<SimulationReport> {
    TickScheduler::new(config)?.run()
}

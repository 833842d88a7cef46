//! Technokratia - discrete-time polity simulation
//!
//! A legislature, a government and a president, referenda, and a society
//! whose state is classified every simulated month from economic,
//! political and social indicators.

pub mod core;
pub mod government;
pub mod legislature;
pub mod providers;
pub mod referendum;
pub mod simulation;
pub mod society;

pub use crate::core::config::{SimulationConfig, SuccessionPolicy};
pub use crate::core::error::{Result, SimError};
pub use simulation::{run, run_with_config, SimulationReport, TickScheduler};

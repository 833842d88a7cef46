pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{Calendar, SimDate};
pub use config::{SimulationConfig, SuccessionPolicy};
pub use error::{Result, SimError};

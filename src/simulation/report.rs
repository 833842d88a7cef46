//! Simulation output and serialization

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Tick;
use crate::government::GovernmentStatus;
use crate::referendum::ReferendumMonitor;
use crate::simulation::events::EventLog;
use crate::society::{SocietyIndicators, SocietyStateType, StateTransition};

/// One month of aggregate state, recorded at the end of each tick
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub tick: Tick,
    pub state: SocietyStateType,
    pub indicators: SocietyIndicators,
    pub overall_stability: f64,
    pub government_status: Option<GovernmentStatus>,
    pub approval_rating: Option<f64>,
    pub ministry_budget: Option<f64>,
    pub min_ministry_efficiency: Option<f64>,
    pub max_ministry_efficiency: Option<f64>,
    pub active_members: usize,
    pub has_quorum: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LegislativeStats {
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    pub members_seated: usize,
    pub members_former: usize,
    pub admission_committee: usize,
}

/// Complete simulation output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub months_requested: u32,
    pub months_simulated: u32,
    /// True when the run ended before `months_requested`
    pub stopped_early: bool,
    pub final_state: SocietyStateType,
    pub final_indicators: SocietyIndicators,
    pub overall_stability: f64,
    pub transitions: Vec<StateTransition>,
    pub legislation: LegislativeStats,
    pub referendums: ReferendumMonitor,
    pub referendums_approved: usize,
    pub governments_formed: u32,
    pub government_status: Option<GovernmentStatus>,
    pub approval_rating: Option<f64>,
    pub president: String,
    pub presidents_elected: usize,
    /// Combined influence of civil-society organizations at the end of the run
    pub civil_society_influence: f64,
    pub bank_report: String,
    pub state_report: String,
    pub monthly: Vec<MonthlyRecord>,
    pub events: EventLog,
    pub simulation_time_ms: u64,
}

impl SimulationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        let government = match (self.government_status, self.approval_rating) {
            (Some(status), Some(approval)) => format!("{:?}, approval {:.1}%", status, approval),
            _ => "none".to_string(),
        };
        format!(
            "Simulated {} of {} months in {}ms (seed {})\n\
             Society: {}, overall stability {:.2}, {} transitions\n\
             Legislation: {} passed, {} failed, {} pending\n\
             Referenda: {} held, {} completed, {} approved\n\
             Government: {} ({} formed)\n\
             President: {} ({} elected)\n\
             Civil society influence: {:.1}",
            self.months_simulated,
            self.months_requested,
            self.simulation_time_ms,
            self.seed,
            self.final_state.name(),
            self.overall_stability,
            self.transitions.len(),
            self.legislation.passed,
            self.legislation.failed,
            self.legislation.pending,
            self.referendums.total,
            self.referendums.completed,
            self.referendums_approved,
            government,
            self.governments_formed,
            self.president,
            self.presidents_elected,
            self.civil_society_influence,
        )
    }
}

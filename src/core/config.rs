//! Simulation configuration with documented constants
//!
//! All tunable knobs of the kernel are collected here. Every section
//! deserializes with defaults, so a TOML file only needs the keys it
//! overrides:
//!
//! ```toml
//! [run]
//! months = 120
//! seed = 42
//! succession = "interim_government"
//!
//! [legislature]
//! total_seats = 200
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// What happens to the run when the government reaches its dissolution date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessionPolicy {
    /// Stop the tick loop on dissolution
    #[default]
    HardStop,
    /// Form an interim government and keep running
    InterimGovernment,
}

/// Top-level configuration handed to the scheduler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub run: RunConfig,
    pub legislature: LegislatureConfig,
    pub referendum: ReferendumConfig,
    pub government: GovernmentConfig,
    pub society: SocietyConfig,
    pub population: PopulationConfig,
    pub election: ElectionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Simulation length in months (4 years by default)
    pub months: u32,

    /// RNG seed; `None` draws a seed from the OS and records it in the report
    pub seed: Option<u64>,

    pub succession: SuccessionPolicy,

    /// Chance per month that the legislature receives a new bill
    pub bill_probability: f64,

    /// Chance per month that the president reviews a member for dismissal
    pub dismissal_review_probability: f64,

    /// Chance per month that civil society drafts bills for the legislature
    pub civil_proposal_probability: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            months: 48,
            seed: None,
            succession: SuccessionPolicy::HardStop,
            bill_probability: 0.4,
            dismissal_review_probability: 0.1,
            civil_proposal_probability: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LegislatureConfig {
    pub total_seats: u32,

    /// Fraction of seats that must be held by Active members for business
    pub quorum_percentage: f64,

    /// Fraction of seats belonging to the Senate; the rest are Deputies
    pub senate_share: f64,

    /// Years of service after which a member rotates OnBreak
    pub years_until_break: u32,

    /// Fraction of *all seats* that must vote For to ratify a government
    ///
    /// This is an absolute majority of seats, not of members present,
    /// and is independent of `quorum_percentage`.
    pub ratification_majority: f64,

    /// Chance that a non-government member backs a government in ratification
    pub ratification_support: f64,

    /// Ballot draws above this value vote For
    pub vote_for_threshold: f64,

    /// Ballot draws above this value (and at or below the For threshold) vote Against
    pub vote_against_threshold: f64,

    /// Chance a quorate no-confidence motion carries
    pub no_confidence_success: f64,

    /// Chance an admission interview seats the candidate
    pub admission_success: f64,

    /// Chance the chamber approves a nominee to the admission committee
    pub committee_approval: f64,

    /// Career years a member needs before joining the admission committee
    pub committee_min_years: u32,

    /// Activity score a nominee must exceed
    pub committee_min_activity: u32,

    /// Chance per year that a quorate legislature moves to suspend the president
    pub suspension_initiative: f64,
}

impl Default for LegislatureConfig {
    fn default() -> Self {
        Self {
            total_seats: 300,
            quorum_percentage: 0.5,
            senate_share: 0.3,
            years_until_break: 10,
            ratification_majority: 0.51,
            ratification_support: 0.6,
            vote_for_threshold: 0.6,
            vote_against_threshold: 0.3,
            no_confidence_success: 0.3,
            admission_success: 0.7,
            committee_approval: 0.6,
            committee_min_years: 10,
            committee_min_activity: 50,
            suspension_initiative: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferendumConfig {
    /// Fraction of seats used to fix the referendum quorum at activation
    pub quorum_percentage: f64,

    /// Fraction of seats used to fix the minimum vote count at activation
    pub min_votes_percentage: f64,

    pub min_voting_age: u32,

    /// Chance per month that the president calls a national referendum
    pub monthly_probability: f64,
}

impl Default for ReferendumConfig {
    fn default() -> Self {
        Self {
            quorum_percentage: 0.5,
            min_votes_percentage: 0.3,
            min_voting_age: 16,
            monthly_probability: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernmentConfig {
    /// Days from formation until the government dissolves (3 years)
    pub term_days: u32,

    /// Length of a state of emergency in days
    pub emergency_days: u32,

    /// Weight kept from the previous approval rating in the moving average
    ///
    /// At 0.5, approval halves the distance to the ministries' mean
    /// efficiency every month.
    pub approval_decay: f64,

    pub min_ministry_efficiency: f64,
    pub max_ministry_efficiency: f64,

    /// Approval points gained or lost per unit of balance-to-revenue ratio
    pub budget_approval_sensitivity: f64,

    /// Fraction cut from every ministry budget under austerity
    pub austerity_budget_cut: f64,

    /// Fraction of the economy ministry's cut that is given back
    pub austerity_economy_restore: f64,

    /// Efficiency floor forced on every ministry under austerity
    pub austerity_efficiency_floor: f64,

    pub austerity_approval_penalty: f64,

    /// Total budget distributed across ministries at formation
    pub annual_budget: f64,

    pub max_advisors: usize,
    pub max_government_managers: usize,
}

impl Default for GovernmentConfig {
    fn default() -> Self {
        Self {
            term_days: 3 * 365,
            emergency_days: 120,
            approval_decay: 0.5,
            min_ministry_efficiency: 0.5,
            max_ministry_efficiency: 1.0,
            budget_approval_sensitivity: 10.0,
            austerity_budget_cut: 0.2,
            austerity_economy_restore: 0.5,
            austerity_efficiency_floor: 0.8,
            austerity_approval_penalty: 15.0,
            annual_budget: 700_000_000.0,
            max_advisors: 12,
            max_government_managers: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocietyConfig {
    pub economic_crisis_threshold: f64,
    pub political_crisis_threshold: f64,
    pub social_unrest_threshold: f64,
    pub prosperity_threshold: f64,

    /// Number of (previous, new) transitions the classifier retains
    pub history_capacity: usize,
}

impl Default for SocietyConfig {
    fn default() -> Self {
        Self {
            economic_crisis_threshold: -0.6,
            political_crisis_threshold: -0.5,
            social_unrest_threshold: -0.4,
            prosperity_threshold: 0.7,
            history_capacity: 64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub initial_citizens: usize,
    pub regions: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            initial_citizens: 2_000,
            regions: 10,
        }
    }
}

/// A person standing for president
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateConfig {
    pub name: String,
    #[serde(default)]
    pub foreign: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectionConfig {
    /// Candidates standing in every presidential election
    pub candidates: Vec<CandidateConfig>,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                CandidateConfig {
                    name: "John Doe".into(),
                    foreign: false,
                },
                CandidateConfig {
                    name: "Jane Smith".into(),
                    foreign: true,
                },
            ],
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let unit = |name: &str, value: f64| -> Result<()> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{} ({}) must be within [0, 1]",
                    name, value
                )))
            }
        };

        let run = &self.run;
        let legislature = &self.legislature;
        let referendum = &self.referendum;
        let government = &self.government;
        unit("run.bill_probability", run.bill_probability)?;
        unit("run.dismissal_review_probability", run.dismissal_review_probability)?;
        unit("run.civil_proposal_probability", run.civil_proposal_probability)?;
        unit("referendum.monthly_probability", referendum.monthly_probability)?;
        unit("referendum.quorum_percentage", referendum.quorum_percentage)?;
        unit("referendum.min_votes_percentage", referendum.min_votes_percentage)?;
        unit("legislature.no_confidence_success", legislature.no_confidence_success)?;
        unit("legislature.quorum_percentage", legislature.quorum_percentage)?;
        unit("legislature.senate_share", legislature.senate_share)?;
        unit("legislature.ratification_majority", legislature.ratification_majority)?;
        unit("legislature.ratification_support", legislature.ratification_support)?;
        unit("legislature.admission_success", legislature.admission_success)?;
        unit("legislature.committee_approval", legislature.committee_approval)?;
        unit("legislature.suspension_initiative", legislature.suspension_initiative)?;
        unit("government.austerity_economy_restore", government.austerity_economy_restore)?;
        unit("government.approval_decay", government.approval_decay)?;
        unit("government.austerity_budget_cut", government.austerity_budget_cut)?;

        if self.legislature.total_seats == 0 {
            return Err(SimError::InvalidConfig(
                "legislature.total_seats must be positive".into(),
            ));
        }

        if self.election.candidates.is_empty() {
            return Err(SimError::InvalidConfig(
                "election.candidates must name at least one candidate".into(),
            ));
        }

        if self.legislature.vote_against_threshold >= self.legislature.vote_for_threshold {
            return Err(SimError::InvalidConfig(format!(
                "vote_against_threshold ({}) should be < vote_for_threshold ({})",
                self.legislature.vote_against_threshold, self.legislature.vote_for_threshold
            )));
        }

        if government.min_ministry_efficiency > government.max_ministry_efficiency {
            return Err(SimError::InvalidConfig(
                "min_ministry_efficiency must not exceed max_ministry_efficiency".into(),
            ));
        }

        let efficiency = government.min_ministry_efficiency..=government.max_ministry_efficiency;
        if !efficiency.contains(&government.austerity_efficiency_floor) {
            return Err(SimError::InvalidConfig(format!(
                "austerity_efficiency_floor ({}) must lie between the ministry efficiency bounds",
                government.austerity_efficiency_floor
            )));
        }

        if self.society.history_capacity == 0 {
            return Err(SimError::InvalidConfig(
                "society.history_capacity must be positive".into(),
            ));
        }

        Ok(())
    }
}

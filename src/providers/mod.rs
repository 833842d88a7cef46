//! Indicator providers
//!
//! The kernel consults the economy, central bank, media, civil society and
//! population only through the traits below. Each trait has one reference
//! model in this module tree; tests substitute their own.
//!
//! Every getter is bounded: rates and scores in [0, 1] unless documented
//! otherwise.

pub mod bank;
pub mod civil;
pub mod economy;
pub mod media;
pub mod population;

use rand::RngCore;

use crate::core::types::{CitizenId, Tick};
use crate::legislature::Legislation;
use crate::referendum::Referendum;

pub use bank::{MonetaryPolicy, NationalBank};
pub use civil::{ActivityType, CauseType, CivicOrganization, CivicRegistry};
pub use economy::EconomicModel;
pub use media::{MediaMarket, MediaOutlet, MediaType};
pub use population::{Citizen, SocietySystem};

pub trait Economy {
    fn simulate_month(&mut self, rng: &mut dyn RngCore);

    /// Growth over the last month as a fraction
    fn gdp_growth(&self) -> f64;

    fn unemployment_rate(&self) -> f64;

    fn government_revenue(&self) -> f64;

    fn government_spending(&self) -> f64;
}

pub trait CentralBank {
    fn update_indicators(&mut self, rng: &mut dyn RngCore);

    /// Inflation as a fraction, never negative
    fn inflation_rate(&self) -> f64;

    /// Crisis response; fire and forget
    fn emergency_measures(&mut self);

    /// Human-readable account of the bank's position, printed after a run
    fn report(&self) -> String;
}

pub trait MediaLandscape {
    fn simulate_news_cycle(&mut self, rng: &mut dyn RngCore);

    fn trust_score(&self) -> f64;

    /// How intensely the media is covering public affairs
    fn coverage_intensity(&self) -> f64;

    fn increase_coverage(&mut self, rng: &mut dyn RngCore);
}

/// A bill drafted outside the legislature, waiting to be tabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillDraft {
    pub title: String,
    pub proposer: String,
    pub content: String,
}

pub trait CivilSociety {
    fn update(&mut self, rng: &mut dyn RngCore);

    fn cohesion_score(&self) -> f64;

    fn increase_activism(&mut self);

    /// Bills civil society wants tabled this month; may be empty
    fn propose_legislation(&mut self, rng: &mut dyn RngCore) -> Vec<BillDraft>;

    /// Respond to a law the legislature has just passed
    fn react_to_legislation(&mut self, law: &Legislation, rng: &mut dyn RngCore);

    /// Combined influence of every organization; unbounded
    fn total_influence(&self) -> f64;
}

pub trait Society {
    fn update_population(&mut self, month: Tick, rng: &mut dyn RngCore);

    fn satisfaction_score(&self) -> f64;

    /// Citizens of at least `min_age`, in a stable order
    fn voting_population(&self, min_age: u32) -> Vec<&dyn ReferendumVoter>;
}

/// Public positions taken during a referendum campaign, each in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CampaignPositions {
    /// Government backing; positive campaigns for the measure
    pub government: f64,
    /// Civil-society backing
    pub civil_society: f64,
}

pub trait ReferendumVoter {
    fn citizen_id(&self) -> CitizenId;

    fn age(&self) -> u32;

    fn decide_referendum_vote(
        &self,
        referendum: &Referendum,
        coverage: f64,
        positions: &CampaignPositions,
        rng: &mut dyn RngCore,
    ) -> bool;
}

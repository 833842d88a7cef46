//! Reference population: citizens with age, leaning, trust and satisfaction

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::core::calendar::MONTHS_PER_YEAR;
use crate::core::types::{clamp_signed, clamp_unit, CitizenId, Tick};
use crate::providers::{CampaignPositions, ReferendumVoter, Society};
use crate::referendum::Referendum;

const MAX_AGE: u32 = 90;
const MONTHLY_DRIFT: f64 = 0.02;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citizen {
    pub id: CitizenId,
    pub age: u32,
    pub region: u32,
    /// -1 (left) to 1 (right)
    pub political_leaning: f64,
    pub trust_in_institutions: f64,
    pub satisfaction: f64,
}

impl Citizen {
    pub fn generate<R: Rng + ?Sized>(id: CitizenId, regions: u32, rng: &mut R) -> Self {
        Self {
            id,
            age: rng.gen_range(0..=MAX_AGE),
            region: rng.gen_range(1..=regions.max(1)),
            political_leaning: rng.gen_range(-1.0..=1.0),
            trust_in_institutions: rng.gen_range(0.2..=0.8),
            satisfaction: rng.gen_range(0.3..=0.7),
        }
    }

    fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.satisfaction =
            clamp_unit(self.satisfaction + rng.gen_range(-MONTHLY_DRIFT..=MONTHLY_DRIFT));
        self.trust_in_institutions =
            clamp_unit(self.trust_in_institutions + rng.gen_range(-MONTHLY_DRIFT..=MONTHLY_DRIFT));
        self.political_leaning =
            clamp_signed(self.political_leaning + rng.gen_range(-MONTHLY_DRIFT..=MONTHLY_DRIFT));
    }

    /// Chance of voting For: even odds, moved by satisfaction and by
    /// campaigns in proportion to coverage and trust.
    pub fn support_probability(&self, coverage: f64, positions: &CampaignPositions) -> f64 {
        let campaign = 0.6 * positions.government + 0.4 * positions.civil_society;
        let persuasion = clamp_unit(coverage) * self.trust_in_institutions * clamp_signed(campaign);
        clamp_unit(0.5 + 0.3 * persuasion + 0.2 * (self.satisfaction - 0.5))
    }
}

impl ReferendumVoter for Citizen {
    fn citizen_id(&self) -> CitizenId {
        self.id
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn decide_referendum_vote(
        &self,
        _referendum: &Referendum,
        coverage: f64,
        positions: &CampaignPositions,
        rng: &mut dyn RngCore,
    ) -> bool {
        rng.gen_bool(self.support_probability(coverage, positions))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietySystem {
    pub citizens: Vec<Citizen>,
    pub regions: u32,
}

impl SocietySystem {
    pub fn generate<R: Rng + ?Sized>(population: usize, regions: u32, rng: &mut R) -> Self {
        let citizens = (0..population)
            .map(|i| Citizen::generate(CitizenId(i as u32), regions, rng))
            .collect();
        Self { citizens, regions }
    }

    pub fn len(&self) -> usize {
        self.citizens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citizens.is_empty()
    }
}

impl Society for SocietySystem {
    fn update_population(&mut self, month: Tick, rng: &mut dyn RngCore) {
        let birthday = month % MONTHS_PER_YEAR == MONTHS_PER_YEAR - 1;
        for citizen in &mut self.citizens {
            citizen.drift(rng);
            if birthday {
                citizen.age += 1;
            }
        }
    }

    fn satisfaction_score(&self) -> f64 {
        if self.citizens.is_empty() {
            return 0.5;
        }
        let sum: f64 = self.citizens.iter().map(|c| c.satisfaction).sum();
        clamp_unit(sum / self.citizens.len() as f64)
    }

    fn voting_population(&self, min_age: u32) -> Vec<&dyn ReferendumVoter> {
        self.citizens
            .iter()
            .filter(|c| c.age >= min_age)
            .map(|c| c as &dyn ReferendumVoter)
            .collect()
    }
}

//! Reference civil society: civic organizations, activism and cohesion

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::clamp_unit;
use crate::legislature::Legislation;
use crate::providers::{BillDraft, CivilSociety};

const ACTIVISM_BASELINE: f64 = 0.2;
const ACTIVISM_DECAY: f64 = 0.05;
const ACTIVISM_BOOST: f64 = 0.2;
const COHESION_REVERSION: f64 = 0.05;

/// Only the most influential organizations draft bills
const PROPOSING_ORGANIZATIONS: usize = 3;
/// Influence at which an organization drafts a bill every time it is asked
const CERTAIN_PROPOSAL_INFLUENCE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CauseType {
    Environmental,
    SocialJustice,
    Education,
    Healthcare,
    HumanRights,
    EconomicEquality,
}

impl CauseType {
    pub fn name(&self) -> &'static str {
        match self {
            CauseType::Environmental => "Environmental",
            CauseType::SocialJustice => "Social Justice",
            CauseType::Education => "Education",
            CauseType::Healthcare => "Healthcare",
            CauseType::HumanRights => "Human Rights",
            CauseType::EconomicEquality => "Economic Equality",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Protest,
    Petition,
    AwarenessCampaign,
    Lobbying,
    LegalAction,
    Research,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Protest,
        ActivityType::Petition,
        ActivityType::AwarenessCampaign,
        ActivityType::Lobbying,
        ActivityType::LegalAction,
        ActivityType::Research,
    ];

    pub fn cost(&self) -> f64 {
        match self {
            ActivityType::Protest => 500.0,
            ActivityType::Petition => 100.0,
            ActivityType::AwarenessCampaign => 1_000.0,
            ActivityType::Lobbying => 2_000.0,
            ActivityType::LegalAction => 5_000.0,
            ActivityType::Research => 3_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CivicOrganization {
    pub name: String,
    pub cause: CauseType,
    pub members: u32,
    pub influence: f64,
    pub funds: f64,
}

impl CivicOrganization {
    pub fn new(name: impl Into<String>, cause: CauseType) -> Self {
        Self {
            name: name.into(),
            cause,
            members: 0,
            influence: 0.0,
            funds: 1_000.0,
        }
    }

    pub fn recruit(&mut self, count: u32) {
        self.members += count;
        self.influence += 0.1 * count as f64;
    }

    pub fn receive_donation(&mut self, amount: f64) {
        self.funds += amount;
        self.influence += 0.01 * amount;
    }

    /// Spend funds on an activity; false when the organization cannot afford it
    pub fn organize<R: Rng + ?Sized>(&mut self, activity: ActivityType, rng: &mut R) -> bool {
        if self.funds < activity.cost() {
            return false;
        }
        self.funds -= activity.cost();
        self.influence += 0.5 * rng.gen::<f64>();
        true
    }

    pub fn draft_bill(&self) -> BillDraft {
        let cause = self.cause.name();
        BillDraft {
            title: format!("{} Improvement Act", cause),
            proposer: self.name.clone(),
            content: format!("Proposed by {} to address {} issues.", self.name, cause),
        }
    }

    /// Whether a law's title concerns this organization's cause
    pub fn cares_about(&self, law: &Legislation) -> bool {
        law.title
            .to_lowercase()
            .contains(&self.cause.name().to_lowercase())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CivicRegistry {
    pub organizations: Vec<CivicOrganization>,
    /// Share of organizations active in a given month
    pub activism: f64,
    pub cohesion: f64,
    pub activities_held: u32,
}

impl CivicRegistry {
    pub fn new() -> Self {
        Self {
            organizations: Vec::new(),
            activism: ACTIVISM_BASELINE,
            cohesion: 0.5,
            activities_held: 0,
        }
    }

    pub fn with_default_organizations() -> Self {
        let mut registry = Self::new();
        for (name, cause) in [
            ("Green Earth", CauseType::Environmental),
            ("Education for All", CauseType::Education),
            ("Health First", CauseType::Healthcare),
        ] {
            let mut org = CivicOrganization::new(name, cause);
            org.recruit(50);
            registry.register(org);
        }
        registry
    }

    pub fn register(&mut self, org: CivicOrganization) {
        self.organizations.push(org);
    }

    pub fn most_influential(&self, n: usize) -> Vec<&CivicOrganization> {
        let mut orgs: Vec<&CivicOrganization> = self.organizations.iter().collect();
        orgs.sort_by(|a, b| b.influence.total_cmp(&a.influence));
        orgs.truncate(n);
        orgs
    }
}

impl Default for CivicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CivilSociety for CivicRegistry {
    fn update(&mut self, rng: &mut dyn RngCore) {
        let activism = self.activism;
        let mut held = 0;
        for org in &mut self.organizations {
            org.receive_donation(rng.gen_range(0.0..=200.0));
            if rng.gen_bool(activism) {
                let activity = ActivityType::ALL[rng.gen_range(0..ActivityType::ALL.len())];
                if org.organize(activity, rng) {
                    held += 1;
                }
            }
        }
        self.activities_held += held;

        let participation = if self.organizations.is_empty() {
            0.0
        } else {
            held as f64 / self.organizations.len() as f64
        };
        let drift = rng.gen_range(-0.03..=0.03);
        let reversion = COHESION_REVERSION * (0.5 - self.cohesion);
        self.cohesion = clamp_unit(self.cohesion + drift + reversion + 0.02 * participation);
        let decay = (ACTIVISM_BASELINE - self.activism) * ACTIVISM_DECAY;
        self.activism = clamp_unit(self.activism + decay);
    }

    fn cohesion_score(&self) -> f64 {
        self.cohesion
    }

    fn increase_activism(&mut self) {
        self.activism = clamp_unit(self.activism + ACTIVISM_BOOST);
        debug!("Civil society activism raised to {:.2}", self.activism);
    }

    /// Each of the top organizations drafts a bill with a chance that
    /// grows with its influence.
    fn propose_legislation(&mut self, rng: &mut dyn RngCore) -> Vec<BillDraft> {
        let mut drafts = Vec::new();
        for org in self.most_influential(PROPOSING_ORGANIZATIONS) {
            let chance = clamp_unit(org.influence / CERTAIN_PROPOSAL_INFLUENCE);
            if rng.gen_bool(chance) {
                drafts.push(org.draft_bill());
            }
        }
        drafts
    }

    /// Organizations whose cause the law names take to the streets
    fn react_to_legislation(&mut self, law: &Legislation, rng: &mut dyn RngCore) {
        for org in self.organizations.iter_mut().filter(|o| o.cares_about(law)) {
            let activity = ActivityType::ALL[rng.gen_range(0..ActivityType::ALL.len())];
            if org.organize(activity, rng) {
                debug!("{} held a {:?} over '{}'", org.name, activity, law.title);
                self.activities_held += 1;
            }
        }
    }

    fn total_influence(&self) -> f64 {
        self.organizations.iter().map(|o| o.influence).sum()
    }
}

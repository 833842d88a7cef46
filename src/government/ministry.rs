//! Ministries, their advisors and ministers

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MinistryType {
    Economy,
    ForeignAffairs,
    Defense,
    Education,
    Health,
    Labor,
    Culture,
}

impl MinistryType {
    pub const ALL: [MinistryType; 7] = [
        MinistryType::Economy,
        MinistryType::ForeignAffairs,
        MinistryType::Defense,
        MinistryType::Education,
        MinistryType::Health,
        MinistryType::Labor,
        MinistryType::Culture,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MinistryType::Economy => "Ministry of Economy",
            MinistryType::ForeignAffairs => "Ministry of Foreign Affairs",
            MinistryType::Defense => "Ministry of National Defense",
            MinistryType::Education => "Ministry of Education",
            MinistryType::Health => "Ministry of Health",
            MinistryType::Labor => "Ministry of Labor",
            MinistryType::Culture => "Ministry of Culture",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisor {
    pub name: String,
    pub expertise: f64,
    pub efficiency: f64,
}

impl Advisor {
    /// Expertise and efficiency drawn from [0.5, 1.0]
    pub fn generate<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> Self {
        Self {
            name: name.into(),
            expertise: rng.gen_range(0.5..=1.0),
            efficiency: rng.gen_range(0.5..=1.0),
        }
    }
}

/// Weight of the minister's expertise in ministry efficiency
const MINISTER_WEIGHT: f64 = 0.6;
/// Weight of the advisors' mean efficiency
const ADVISOR_WEIGHT: f64 = 0.4;
/// Half-width of the monthly efficiency noise
const EFFICIENCY_NOISE: f64 = 0.05;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ministry {
    pub kind: MinistryType,
    advisors: Vec<Advisor>,
    minister: Option<usize>,
    pub budget: f64,
    pub efficiency: f64,
}

impl Ministry {
    pub fn new(kind: MinistryType) -> Self {
        Self {
            kind,
            advisors: Vec::new(),
            minister: None,
            budget: 0.0,
            efficiency: 0.5,
        }
    }

    pub fn advisors(&self) -> &[Advisor] {
        &self.advisors
    }

    pub fn add_advisor(&mut self, advisor: Advisor, max_advisors: usize) -> bool {
        if self.advisors.len() >= max_advisors {
            return false;
        }
        self.advisors.push(advisor);
        true
    }

    /// Promote an advisor to minister, replacing any previous minister
    pub fn set_minister(&mut self, advisor: usize) -> bool {
        if advisor >= self.advisors.len() {
            return false;
        }
        self.minister = Some(advisor);
        true
    }

    pub fn minister(&self) -> Option<&Advisor> {
        self.minister.and_then(|i| self.advisors.get(i))
    }

    /// Index of the advisor with the highest expertise
    pub fn most_expert_advisor(&self) -> Option<usize> {
        self.advisors
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.expertise.total_cmp(&b.expertise))
            .map(|(i, _)| i)
    }

    pub fn allocate_budget(&mut self, amount: f64) {
        self.budget = amount.max(0.0);
    }

    pub fn advisor_average(&self) -> Option<f64> {
        if self.advisors.is_empty() {
            return None;
        }
        let sum: f64 = self.advisors.iter().map(|a| a.efficiency).sum();
        Some(sum / self.advisors.len() as f64)
    }

    /// Recompute efficiency from the minister and advisors plus noise,
    /// clamped to `[min, max]`.
    pub fn update_efficiency<R: Rng + ?Sized>(&mut self, min: f64, max: f64, rng: &mut R) {
        let advisors = self.advisor_average().unwrap_or(self.efficiency);
        let minister = self.minister().map(|m| m.expertise).unwrap_or(advisors);
        let noise = rng.gen_range(-EFFICIENCY_NOISE..=EFFICIENCY_NOISE);
        let efficiency = MINISTER_WEIGHT * minister + ADVISOR_WEIGHT * advisors + noise;
        self.efficiency = efficiency.clamp(min, max);
    }
}

//! Reference central bank: inflation, interest rate and monetary policy

use std::fmt::Write as _;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::providers::CentralBank;

/// Inflation target as a fraction
const INFLATION_TARGET: f64 = 0.02;
/// Inflation is kept within [0, MAX_INFLATION]
const MAX_INFLATION: f64 = 0.5;
/// Interest rate step per policy adjustment, in percentage points
const RATE_STEP: f64 = 0.25;
/// Share of the gap to target closed by emergency measures
const EMERGENCY_CORRECTION: f64 = 0.25;
/// Monthly chance of a routine policy review
const POLICY_REVIEW_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonetaryPolicy {
    Expansionary,
    Neutral,
    Contractionary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationalBank {
    pub name: String,
    pub policy: MonetaryPolicy,
    /// Policy rate in percent
    pub interest_rate: f64,
    /// Inflation as a fraction
    pub inflation: f64,
    pub reserve_requirement: f64,
    pub emergency_interventions: u32,
}

impl NationalBank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            policy: MonetaryPolicy::Neutral,
            interest_rate: 2.0,
            inflation: INFLATION_TARGET,
            reserve_requirement: 10.0,
            emergency_interventions: 0,
        }
    }

    pub fn set_monetary_policy(&mut self, policy: MonetaryPolicy) {
        self.policy = policy;
        match policy {
            MonetaryPolicy::Expansionary => {
                self.interest_rate = (self.interest_rate - RATE_STEP).max(0.0)
            }
            MonetaryPolicy::Contractionary => self.interest_rate += RATE_STEP,
            MonetaryPolicy::Neutral => {}
        }
    }
}

impl CentralBank for NationalBank {
    fn update_indicators(&mut self, rng: &mut dyn RngCore) {
        let shock = rng.gen_range(-0.005..=0.005);
        self.inflation = (self.inflation + shock).clamp(0.0, MAX_INFLATION);
        if rng.gen_bool(POLICY_REVIEW_CHANCE) {
            let policy = match rng.gen_range(0..3) {
                0 => MonetaryPolicy::Expansionary,
                1 => MonetaryPolicy::Neutral,
                _ => MonetaryPolicy::Contractionary,
            };
            self.set_monetary_policy(policy);
        }
    }

    fn inflation_rate(&self) -> f64 {
        self.inflation
    }

    fn emergency_measures(&mut self) {
        let policy = if self.inflation > INFLATION_TARGET {
            MonetaryPolicy::Contractionary
        } else {
            MonetaryPolicy::Expansionary
        };
        self.set_monetary_policy(policy);
        self.inflation += (INFLATION_TARGET - self.inflation) * EMERGENCY_CORRECTION;
        self.inflation = self.inflation.clamp(0.0, MAX_INFLATION);
        self.emergency_interventions += 1;
        info!(
            "{} emergency measures: {:?}, rate {:.2}%",
            self.name, self.policy, self.interest_rate
        );
    }

    fn report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "Economic Report for {}:", self.name);
        let _ = writeln!(report, "Monetary Policy: {:?}", self.policy);
        let _ = writeln!(report, "Interest Rate: {:.2}%", self.interest_rate);
        let _ = writeln!(report, "Reserve Requirement: {:.2}%", self.reserve_requirement);
        let _ = writeln!(report, "Emergency Interventions: {}", self.emergency_interventions);
        let _ = write!(report, "Inflation: {:.2}%", self.inflation * 100.0);
        report
    }
}

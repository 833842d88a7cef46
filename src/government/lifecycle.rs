//! Government lifecycle: Active / Emergency / Dissolved
//!
//! ```text
//!   Active --declare_emergency--> Emergency
//!   Emergency --check_emergency_status (today >= end)--> Active
//!   Active | Emergency --check_dissolution (today >= dissolution_date)--> Dissolved
//! ```
//!
//! Dissolved is terminal. Every lifecycle call on a dissolved government
//! returns `false` and changes nothing.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::calendar::SimDate;
use crate::core::config::GovernmentConfig;
use crate::core::types::{clamp_percent, MemberId};
use crate::government::ministry::{Advisor, Ministry, MinistryType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GovernmentStatus {
    Active,
    Emergency,
    Dissolved,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Government {
    pub prime_minister: MemberId,
    ministries: BTreeMap<MinistryType, Ministry>,
    managers: Vec<MemberId>,
    status: GovernmentStatus,
    pub formation_date: SimDate,
    pub dissolution_date: SimDate,
    emergency_end_date: Option<SimDate>,
    /// Public approval in [0, 100]
    pub approval_rating: f64,
    /// Revenue minus spending from the last budget update
    pub budget_balance: f64,
    config: GovernmentConfig,
}

impl Government {
    /// Form a government with every ministry staffed and funded.
    ///
    /// Each ministry gets a full bench of advisors; the most expert one
    /// becomes minister. The annual budget is split evenly.
    pub fn form<R: Rng + ?Sized>(
        prime_minister: MemberId,
        today: SimDate,
        config: &GovernmentConfig,
        rng: &mut R,
    ) -> Self {
        let share = config.annual_budget / MinistryType::ALL.len() as f64;
        let mut ministries = BTreeMap::new();
        for kind in MinistryType::ALL {
            let mut ministry = Ministry::new(kind);
            for i in 0..config.max_advisors {
                let advisor = Advisor::generate(format!("{} Advisor {}", kind.name(), i + 1), rng);
                ministry.add_advisor(advisor, config.max_advisors);
            }
            if let Some(best) = ministry.most_expert_advisor() {
                ministry.set_minister(best);
            }
            ministry.allocate_budget(share);
            ministry.update_efficiency(
                config.min_ministry_efficiency,
                config.max_ministry_efficiency,
                rng,
            );
            ministries.insert(kind, ministry);
        }

        info!(
            "Government formed under {} on {}, term ends {}",
            prime_minister,
            today,
            today.plus_days(config.term_days)
        );

        Self {
            prime_minister,
            ministries,
            managers: Vec::new(),
            status: GovernmentStatus::Active,
            formation_date: today,
            dissolution_date: today.plus_days(config.term_days),
            emergency_end_date: None,
            approval_rating: 50.0,
            budget_balance: 0.0,
            config: config.clone(),
        }
    }

    pub fn status(&self) -> GovernmentStatus {
        self.status
    }

    pub fn is_dissolved(&self) -> bool {
        self.status == GovernmentStatus::Dissolved
    }

    pub fn emergency_end_date(&self) -> Option<SimDate> {
        self.emergency_end_date
    }

    pub fn ministries(&self) -> impl Iterator<Item = &Ministry> {
        self.ministries.values()
    }

    pub fn ministry(&self, kind: MinistryType) -> Option<&Ministry> {
        self.ministries.get(&kind)
    }

    pub fn managers(&self) -> &[MemberId] {
        &self.managers
    }

    pub fn appoint_government_manager(&mut self, member: MemberId) -> bool {
        if self.is_dissolved()
            || self.managers.len() >= self.config.max_government_managers
            || self.managers.contains(&member)
        {
            return false;
        }
        self.managers.push(member);
        true
    }

    pub fn declare_emergency(&mut self, today: SimDate) -> bool {
        if self.status != GovernmentStatus::Active {
            return false;
        }
        self.status = GovernmentStatus::Emergency;
        let end = today.plus_days(self.config.emergency_days);
        self.emergency_end_date = Some(end);
        warn!("State of emergency declared on {} until {}", today, end);
        true
    }

    /// Lift an expired emergency
    pub fn check_emergency_status(&mut self, today: SimDate) -> bool {
        if self.status != GovernmentStatus::Emergency {
            return false;
        }
        match self.emergency_end_date {
            Some(end) if today >= end => {
                self.status = GovernmentStatus::Active;
                self.emergency_end_date = None;
                info!("State of emergency lifted on {}", today);
                true
            }
            _ => false,
        }
    }

    pub fn check_dissolution(&mut self, today: SimDate) -> bool {
        if self.is_dissolved() || today < self.dissolution_date {
            return false;
        }
        self.status = GovernmentStatus::Dissolved;
        self.emergency_end_date = None;
        info!("Government of {} dissolved on {}", self.prime_minister, today);
        true
    }

    pub fn update_efficiencies<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_dissolved() {
            return;
        }
        let (min, max) = (
            self.config.min_ministry_efficiency,
            self.config.max_ministry_efficiency,
        );
        for ministry in self.ministries.values_mut() {
            ministry.update_efficiency(min, max, rng);
        }
    }

    pub fn average_efficiency(&self) -> f64 {
        if self.ministries.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.ministries.values().map(|m| m.efficiency).sum();
        sum / self.ministries.len() as f64
    }

    /// Lowest and highest ministry efficiency; `None` without ministries
    pub fn efficiency_range(&self) -> Option<(f64, f64)> {
        self.ministries.values().map(|m| m.efficiency).fold(None, |range, e| match range {
            None => Some((e, e)),
            Some((lo, hi)) => Some((lo.min(e), hi.max(e))),
        })
    }

    pub fn total_budget(&self) -> f64 {
        self.ministries.values().map(|m| m.budget).sum()
    }

    /// Moving average towards mean ministry efficiency on the 0-100 scale
    pub fn update_approval_rating(&mut self) {
        if self.is_dissolved() {
            return;
        }
        let decay = self.config.approval_decay;
        let target = self.average_efficiency() * 100.0;
        self.approval_rating = clamp_percent(decay * self.approval_rating + (1.0 - decay) * target);
    }

    /// Record the month's balance and nudge approval by the
    /// balance-to-revenue ratio. A zero or negative revenue leaves
    /// approval untouched.
    pub fn update_budget(&mut self, revenue: f64, spending: f64) {
        if self.is_dissolved() {
            return;
        }
        self.budget_balance = revenue - spending;
        if revenue > 0.0 {
            let ratio = self.budget_balance / revenue;
            let shift = ratio * self.config.budget_approval_sensitivity;
            self.approval_rating = clamp_percent(self.approval_rating + shift);
        }
        debug!(
            "Budget balance {:.0}, approval {:.1}",
            self.budget_balance, self.approval_rating
        );
    }

    /// One-shot austerity package; not a status change
    pub fn implement_austerity(&mut self) {
        if self.is_dissolved() {
            return;
        }
        let cut = self.config.austerity_budget_cut;
        let restore = self.config.austerity_economy_restore;
        let floor = self.config.austerity_efficiency_floor;
        for ministry in self.ministries.values_mut() {
            let removed = ministry.budget * cut;
            let mut budget = ministry.budget - removed;
            if ministry.kind == MinistryType::Economy {
                budget += removed * restore;
            }
            ministry.allocate_budget(budget);
            ministry.efficiency = ministry.efficiency.max(floor);
        }
        let penalty = self.config.austerity_approval_penalty;
        self.approval_rating = clamp_percent(self.approval_rating - penalty);
        info!(
            "Austerity implemented: budget {:.0}, approval {:.1}",
            self.total_budget(),
            self.approval_rating
        );
    }
}

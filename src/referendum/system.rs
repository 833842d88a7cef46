//! Referendum registry: opening, ballots, delegation and closing

use ahash::AHashMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Builder;

use crate::core::config::ReferendumConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{CitizenId, ReferendumId, Tick};
use crate::legislature::decision::{quorum_gate, Rejection};
use crate::referendum::measure::{
    Referendum, ReferendumStatus, ReferendumThresholds, ReferendumType,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertOrganization {
    pub name: String,
    pub expertise_area: String,
    pub reputation: f64,
    pub delegated_votes: u32,
}

impl ExpertOrganization {
    pub fn new(name: impl Into<String>, expertise_area: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expertise_area: expertise_area.into(),
            reputation: 0.5,
            delegated_votes: 0,
        }
    }
}

/// Status counts across every referendum ever proposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferendumMonitor {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub struct ReferendumSystem {
    referendums: Vec<Referendum>,
    experts: Vec<ExpertOrganization>,
    participation_points: AHashMap<CitizenId, u32>,
    pub min_voting_age: u32,
    pub quorum_percentage: f64,
    pub min_votes_percentage: f64,
    next_id: u32,
}

impl ReferendumSystem {
    pub fn new(config: &ReferendumConfig) -> Self {
        Self {
            referendums: Vec::new(),
            experts: Vec::new(),
            participation_points: AHashMap::new(),
            min_voting_age: config.min_voting_age,
            quorum_percentage: config.quorum_percentage,
            min_votes_percentage: config.min_votes_percentage,
            next_id: 1,
        }
    }

    /// Register a referendum in the Proposed state.
    ///
    /// The legislature's quorum gates proposals just as it gates bills;
    /// without quorum nothing is registered unless `ignore_quorum` is granted.
    pub fn propose(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ReferendumType,
        has_quorum: bool,
        ignore_quorum: bool,
    ) -> std::result::Result<ReferendumId, Rejection> {
        if let Err(rejection) = quorum_gate(has_quorum, ignore_quorum) {
            debug!("Cannot propose referendum: {}", rejection);
            return Err(rejection);
        }
        let id = ReferendumId(self.next_id);
        self.next_id += 1;
        self.referendums.push(Referendum::new(id, title, description, kind));
        Ok(id)
    }

    pub fn get(&self, id: ReferendumId) -> Option<&Referendum> {
        self.referendums.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: ReferendumId) -> Option<&mut Referendum> {
        self.referendums.iter_mut().find(|r| r.id == id)
    }

    pub fn referendums(&self) -> &[Referendum] {
        &self.referendums
    }

    /// Open a proposed referendum and fix its thresholds from the seat count.
    ///
    /// Only a Proposed referendum can be opened; a closed one is never reopened.
    pub fn start(
        &mut self,
        id: ReferendumId,
        total_seats: u32,
        tick: Tick,
    ) -> std::result::Result<(), Rejection> {
        let thresholds = ReferendumThresholds::from_seats(
            total_seats,
            self.quorum_percentage,
            self.min_votes_percentage,
        );
        let referendum = self.get_mut(id).ok_or(Rejection::UnknownProposal)?;
        match referendum.status {
            ReferendumStatus::Proposed => {
                referendum.status = ReferendumStatus::Active;
                referendum.thresholds = Some(thresholds);
                referendum.started_at = Some(tick);
                debug!(
                    "{} opened: quorum {}, min votes {}",
                    id, thresholds.quorum, thresholds.min_votes
                );
                Ok(())
            }
            ReferendumStatus::Active => Err(Rejection::NotActive),
            ReferendumStatus::Completed | ReferendumStatus::Failed => {
                Err(Rejection::AlreadyResolved)
            }
        }
    }

    /// Record one citizen's ballot. Returns false when the referendum is not
    /// open or the citizen is under the voting age.
    pub fn cast_vote(
        &mut self,
        id: ReferendumId,
        citizen: CitizenId,
        age: u32,
        in_favor: bool,
    ) -> bool {
        if age < self.min_voting_age {
            return false;
        }
        let Some(referendum) = self.get_mut(id) else {
            return false;
        };
        if referendum.status != ReferendumStatus::Active {
            return false;
        }
        if in_favor {
            referendum.votes_for += 1;
        } else {
            referendum.votes_against += 1;
        }
        referendum.total_votes += 1;
        *self.participation_points.entry(citizen).or_insert(0) += 1;
        true
    }

    pub fn participation_points(&self, citizen: CitizenId) -> u32 {
        self.participation_points.get(&citizen).copied().unwrap_or(0)
    }

    pub fn add_expert_organization(&mut self, expert: ExpertOrganization) -> usize {
        self.experts.push(expert);
        self.experts.len() - 1
    }

    pub fn expert_organizations(&self) -> &[ExpertOrganization] {
        &self.experts
    }

    /// Hand a citizen's voice to an expert organization. Only regional and
    /// local referenda accept delegation; delegated voices are counted apart
    /// from the ballot totals.
    pub fn delegate_vote(&mut self, id: ReferendumId, expert: usize) -> bool {
        if expert >= self.experts.len() {
            return false;
        }
        let Some(referendum) = self.referendums.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if referendum.status != ReferendumStatus::Active || !referendum.kind.allows_delegation() {
            return false;
        }
        referendum.delegated_votes += 1;
        self.experts[expert].delegated_votes += 1;
        true
    }

    /// Close an open referendum.
    ///
    /// `Ok(false)` when it is not Active. Closing an Active referendum that
    /// never had thresholds fixed is a programming error.
    pub fn complete<R: Rng + ?Sized>(
        &mut self,
        id: ReferendumId,
        tick: Tick,
        rng: &mut R,
    ) -> Result<bool> {
        let referendum = self.get_mut(id).ok_or(SimError::UnknownReferendum(id))?;
        if referendum.status != ReferendumStatus::Active {
            return Ok(false);
        }
        let thresholds = referendum.thresholds.ok_or(SimError::MissingThresholds(id))?;

        referendum.ended_at = Some(tick);
        referendum.status = if thresholds.is_met_by(referendum.total_votes) {
            ReferendumStatus::Completed
        } else {
            ReferendumStatus::Failed
        };
        referendum.receipt = Some(Builder::from_random_bytes(rng.gen()).into_uuid());

        info!(
            "{} '{}' {:?}: {} for, {} against, {} total",
            id,
            referendum.title,
            referendum.status,
            referendum.votes_for,
            referendum.votes_against,
            referendum.total_votes
        );
        Ok(true)
    }

    pub fn monitor(&self) -> ReferendumMonitor {
        let mut monitor = ReferendumMonitor {
            total: self.referendums.len(),
            ..Default::default()
        };
        for referendum in &self.referendums {
            match referendum.status {
                ReferendumStatus::Active => monitor.active += 1,
                ReferendumStatus::Completed => monitor.completed += 1,
                ReferendumStatus::Failed => monitor.failed += 1,
                ReferendumStatus::Proposed => {}
            }
        }
        monitor
    }
}

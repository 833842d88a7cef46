//! A single referendum and its one-way status

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::types::{ReferendumId, Tick};
use crate::legislature::decision::{PassRule, SimpleMajority, VoteTally};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferendumType {
    National,
    Regional,
    Local,
}

impl ReferendumType {
    /// Regional and local questions may be delegated to expert organizations
    pub fn allows_delegation(&self) -> bool {
        matches!(self, ReferendumType::Regional | ReferendumType::Local)
    }
}

/// Proposed -> Active -> Completed | Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferendumStatus {
    Proposed,
    Active,
    Completed,
    Failed,
}

impl ReferendumStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReferendumStatus::Completed | ReferendumStatus::Failed)
    }
}

/// Participation thresholds, fixed when the referendum opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferendumThresholds {
    pub quorum: u32,
    pub min_votes: u32,
}

impl ReferendumThresholds {
    pub fn from_seats(total_seats: u32, quorum_percentage: f64, min_votes_percentage: f64) -> Self {
        Self {
            quorum: (total_seats as f64 * quorum_percentage) as u32,
            min_votes: (total_seats as f64 * min_votes_percentage) as u32,
        }
    }

    /// Procedural validity, independent of how the votes split
    pub fn is_met_by(&self, total_votes: u32) -> bool {
        total_votes >= self.quorum && total_votes >= self.min_votes
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Referendum {
    pub id: ReferendumId,
    pub title: String,
    pub description: String,
    pub kind: ReferendumType,
    pub status: ReferendumStatus,
    pub votes_for: u32,
    pub votes_against: u32,
    pub total_votes: u32,
    pub delegated_votes: u32,
    pub thresholds: Option<ReferendumThresholds>,
    pub started_at: Option<Tick>,
    pub ended_at: Option<Tick>,
    /// Audit receipt issued when the referendum is closed
    pub receipt: Option<Uuid>,
}

impl Referendum {
    pub fn new(
        id: ReferendumId,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ReferendumType,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            kind,
            status: ReferendumStatus::Proposed,
            votes_for: 0,
            votes_against: 0,
            total_votes: 0,
            delegated_votes: 0,
            thresholds: None,
            started_at: None,
            ended_at: None,
            receipt: None,
        }
    }

    pub fn tally(&self) -> VoteTally {
        VoteTally {
            votes_for: self.votes_for,
            votes_against: self.votes_against,
            abstentions: 0,
        }
    }

    /// Substantive result: completed and carried by a strict majority.
    ///
    /// A Completed referendum can still be rejected on substance.
    pub fn approved(&self) -> bool {
        self.status == ReferendumStatus::Completed && SimpleMajority.passes(&self.tally())
    }
}

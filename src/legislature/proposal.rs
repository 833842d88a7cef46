//! Legislative proposals

use serde::{Deserialize, Serialize};

use crate::core::types::{ProposalId, Tick};
use crate::legislature::decision::VoteTally;

/// One-way legislative status: Proposed -> Passed | Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegislationStatus {
    Proposed,
    Passed,
    Failed,
}

impl LegislationStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LegislationStatus::Proposed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Legislation {
    pub id: ProposalId,
    pub title: String,
    pub proposer: String,
    pub content: String,
    pub proposed_at: Tick,
    pub tally: VoteTally,
    pub status: LegislationStatus,
}

impl Legislation {
    pub fn new(
        id: ProposalId,
        title: impl Into<String>,
        proposer: impl Into<String>,
        content: impl Into<String>,
        proposed_at: Tick,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            proposer: proposer.into(),
            content: content.into(),
            proposed_at,
            tally: VoteTally::default(),
            status: LegislationStatus::Proposed,
        }
    }
}

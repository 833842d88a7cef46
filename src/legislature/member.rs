//! Chamber members and their seat status

use serde::{Deserialize, Serialize};

use crate::core::types::MemberId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chamber {
    Senate,
    Deputies,
}

/// Seat status; only `Active` members count towards quorum and cast ballots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    OnBreak,
    Former,
    GovernmentMember,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GovernmentRole {
    #[default]
    None,
    PrimeMinister,
    GovernmentManager,
}

/// Parliamentary work done by one member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityScore {
    pub legislative_initiatives: u32,
    pub speeches_given: u32,
    pub committee_participations: u32,
}

impl ActivityScore {
    /// Initiatives weigh three, committee sittings two, speeches one
    pub fn calculate(&self) -> u32 {
        self.legislative_initiatives * 3 + self.speeches_given + self.committee_participations * 2
    }
}

/// A legislature seat-holder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChamberMember {
    pub id: MemberId,
    pub chamber: Chamber,
    /// Years since the last break; reset when the member rotates out
    pub years_served: u32,
    /// Total years seated, never reset
    pub career_years: u32,
    pub consecutive_terms: u32,
    pub status: MemberStatus,
    pub government_role: GovernmentRole,
    pub party: Option<String>,
    pub activity: ActivityScore,
    pub admission_committee_member: bool,
}

impl ChamberMember {
    /// A fresh Active member. The id is reassigned when the legislature seats it.
    pub fn new(chamber: Chamber) -> Self {
        Self {
            id: MemberId(0),
            chamber,
            years_served: 0,
            career_years: 0,
            consecutive_terms: 0,
            status: MemberStatus::Active,
            government_role: GovernmentRole::None,
            party: None,
            activity: ActivityScore::default(),
            admission_committee_member: false,
        }
    }

    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.party = Some(party.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    /// Recompute status from role and service time.
    ///
    /// Former is terminal and never recomputed.
    pub(crate) fn update_status(&mut self, years_until_break: u32) {
        if self.status == MemberStatus::Former {
            return;
        }
        if self.government_role != GovernmentRole::None {
            self.status = MemberStatus::GovernmentMember;
        } else if self.years_served >= years_until_break {
            self.status = MemberStatus::OnBreak;
            self.years_served = 0;
            self.consecutive_terms = 0;
        } else {
            self.status = MemberStatus::Active;
        }
    }
}

//! Quorum-gated collective decisions
//!
//! Legislative bills, government ratification and referenda share one
//! protocol: a quorum gate, one independent ballot per eligible voter, and
//! a pass rule applied to the resulting tally. The instantiations differ
//! in eligibility, ballot draw and pass rule:
//!
//! - Legislation: each Active member draws u; u > 0.6 votes For, u > 0.3
//!   Against, otherwise Abstain. Carries on `for > against`.
//! - Ratification: government members vote For, other Active members vote
//!   For with 60% chance. Carries on `for >= seats * 0.51`.
//! - Referendum: every citizen of voting age decides their own ballot. Carries
//!   once completed with `for > against`.
//!
//! "No quorum" is a normal outcome, returned as a `Rejection`, never a panic
//! or an error.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::legislature::member::{ChamberMember, MemberStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ballot {
    For,
    Against,
    Abstain,
}

impl From<bool> for Ballot {
    fn from(in_favor: bool) -> Self {
        if in_favor {
            Ballot::For
        } else {
            Ballot::Against
        }
    }
}

/// Ballot counts for one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteTally {
    pub votes_for: u32,
    pub votes_against: u32,
    pub abstentions: u32,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ballot: Ballot) {
        match ballot {
            Ballot::For => self.votes_for += 1,
            Ballot::Against => self.votes_against += 1,
            Ballot::Abstain => self.abstentions += 1,
        }
    }

    /// Every ballot cast, abstentions included
    pub fn total(&self) -> u32 {
        self.votes_for + self.votes_against + self.abstentions
    }

    /// Ballots that expressed a position
    pub fn decisive(&self) -> u32 {
        self.votes_for + self.votes_against
    }
}

impl FromIterator<Ballot> for VoteTally {
    fn from_iter<I: IntoIterator<Item = Ballot>>(iter: I) -> Self {
        let mut tally = VoteTally::new();
        for ballot in iter {
            tally.record(ballot);
        }
        tally
    }
}

/// Why a decision could not be taken. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Too few Active members for the chamber to conduct business
    NoQuorum,
    /// The proposal already reached a terminal status
    AlreadyResolved,
    /// No proposal with that id exists
    UnknownProposal,
    /// The proposal is not in the status this step requires
    NotActive,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NoQuorum => write!(f, "no quorum"),
            Rejection::AlreadyResolved => write!(f, "already resolved"),
            Rejection::UnknownProposal => write!(f, "unknown proposal"),
            Rejection::NotActive => write!(f, "not active"),
        }
    }
}

/// Result of a conducted vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub passed: bool,
    pub tally: VoteTally,
}

/// Decides whether and how a chamber member votes
pub trait BallotRule {
    /// `None` means the member takes no part in this decision.
    fn cast<R: Rng + ?Sized>(&self, member: &ChamberMember, rng: &mut R) -> Option<Ballot>;
}

/// Decides whether a tally carries
pub trait PassRule {
    fn passes(&self, tally: &VoteTally) -> bool;
}

/// Three-way ballot for ordinary bills: one uniform draw per Active member
#[derive(Debug, Clone, Copy)]
pub struct LegislativeBallot {
    pub for_threshold: f64,
    pub against_threshold: f64,
}

impl Default for LegislativeBallot {
    fn default() -> Self {
        Self {
            for_threshold: 0.6,
            against_threshold: 0.3,
        }
    }
}

impl LegislativeBallot {
    pub fn classify(&self, draw: f64) -> Ballot {
        if draw > self.for_threshold {
            Ballot::For
        } else if draw > self.against_threshold {
            Ballot::Against
        } else {
            Ballot::Abstain
        }
    }
}

impl BallotRule for LegislativeBallot {
    fn cast<R: Rng + ?Sized>(&self, member: &ChamberMember, rng: &mut R) -> Option<Ballot> {
        if !member.is_active() {
            return None;
        }
        Some(self.classify(rng.gen::<f64>()))
    }
}

/// Binary ballot for confirming a government
#[derive(Debug, Clone, Copy)]
pub struct RatificationBallot {
    /// Chance that a member outside the government votes For
    pub support: f64,
}

impl Default for RatificationBallot {
    fn default() -> Self {
        Self { support: 0.6 }
    }
}

impl BallotRule for RatificationBallot {
    fn cast<R: Rng + ?Sized>(&self, member: &ChamberMember, rng: &mut R) -> Option<Ballot> {
        match member.status {
            MemberStatus::GovernmentMember => Some(Ballot::For),
            MemberStatus::Active => Some(Ballot::from(rng.gen_bool(self.support))),
            MemberStatus::OnBreak | MemberStatus::Former => None,
        }
    }
}

/// Strict majority of non-abstaining ballots; ties fail
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleMajority;

impl PassRule for SimpleMajority {
    fn passes(&self, tally: &VoteTally) -> bool {
        tally.votes_for > tally.votes_against
    }
}

/// Absolute majority measured against all seats, present or not
#[derive(Debug, Clone, Copy)]
pub struct SeatMajority {
    pub required: f64,
}

impl SeatMajority {
    pub fn of(total_seats: u32, fraction: f64) -> Self {
        Self {
            required: total_seats as f64 * fraction,
        }
    }
}

impl PassRule for SeatMajority {
    fn passes(&self, tally: &VoteTally) -> bool {
        // Tolerate representation error in seats * fraction
        tally.votes_for as f64 >= self.required - 1e-9
    }
}

/// Quorum precondition shared by every legislature-driven decision
pub fn quorum_gate(has_quorum: bool, ignore_quorum: bool) -> Result<(), Rejection> {
    if has_quorum || ignore_quorum {
        Ok(())
    } else {
        Err(Rejection::NoQuorum)
    }
}

/// Draw one ballot per eligible member, in seat order
pub fn conduct_vote<'a, B, R, I>(members: I, rule: &B, rng: &mut R) -> VoteTally
where
    B: BallotRule,
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a ChamberMember>,
{
    members
        .into_iter()
        .filter_map(|member| rule.cast(member, rng))
        .collect()
}

//! The legislature: seats, quorum and the legislative queues

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::LegislatureConfig;
use crate::core::types::{MemberId, ProposalId, Tick};
use crate::legislature::decision::{
    conduct_vote, quorum_gate, Ballot, BallotRule, LegislativeBallot, PassRule, RatificationBallot,
    Rejection, SeatMajority, SimpleMajority, VoteOutcome, VoteTally,
};
use crate::legislature::member::{Chamber, ChamberMember, GovernmentRole, MemberStatus};
use crate::legislature::proposal::{Legislation, LegislationStatus};

/// Years in one legislative term, used to count consecutive terms
const YEARS_PER_TERM: u32 = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Legislature {
    pub total_seats: u32,
    pub senate_seats: u32,
    pub deputy_seats: u32,
    pub quorum_percentage: f64,
    members: Vec<ChamberMember>,
    former_members: Vec<ChamberMember>,
    proposed: Vec<Legislation>,
    passed: Vec<Legislation>,
    failed: Vec<Legislation>,
    rules: ChamberRules,
    next_member_id: u32,
    next_proposal_id: u32,
}

/// Chamber parameters captured from config at construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ChamberRules {
    for_threshold: f64,
    against_threshold: f64,
    ratification_support: f64,
    ratification_majority: f64,
    no_confidence_success: f64,
    years_until_break: u32,
    admission_success: f64,
    committee_approval: f64,
    committee_min_years: u32,
    committee_min_activity: u32,
    suspension_initiative: f64,
}

impl Legislature {
    /// An empty chamber; seats are filled with `add_member` or `fill_seats`
    pub fn new(config: &LegislatureConfig) -> Self {
        let senate_seats = (config.total_seats as f64 * config.senate_share) as u32;
        Self {
            total_seats: config.total_seats,
            senate_seats,
            deputy_seats: config.total_seats - senate_seats,
            quorum_percentage: config.quorum_percentage,
            members: Vec::new(),
            former_members: Vec::new(),
            proposed: Vec::new(),
            passed: Vec::new(),
            failed: Vec::new(),
            rules: ChamberRules {
                for_threshold: config.vote_for_threshold,
                against_threshold: config.vote_against_threshold,
                ratification_support: config.ratification_support,
                ratification_majority: config.ratification_majority,
                no_confidence_success: config.no_confidence_success,
                years_until_break: config.years_until_break,
                admission_success: config.admission_success,
                committee_approval: config.committee_approval,
                committee_min_years: config.committee_min_years,
                committee_min_activity: config.committee_min_activity,
                suspension_initiative: config.suspension_initiative,
            },
            next_member_id: 1,
            next_proposal_id: 1,
        }
    }

    /// Seat members until the chamber is full: senators first, then
    /// deputies, parties assigned round-robin.
    pub fn fill_seats(&mut self, parties: &[String]) {
        let mut index = 0;
        while (self.members.len() as u32) < self.total_seats {
            let chamber = if (self.members.len() as u32) < self.senate_seats {
                Chamber::Senate
            } else {
                Chamber::Deputies
            };
            let mut member = ChamberMember::new(chamber);
            if !parties.is_empty() {
                member = member.with_party(parties[index % parties.len()].clone());
            }
            index += 1;
            if self.add_member(member).is_none() {
                break;
            }
        }
    }

    /// Seat a member. Returns `None` when every seat is taken.
    pub fn add_member(&mut self, mut member: ChamberMember) -> Option<MemberId> {
        if self.members.len() as u32 >= self.total_seats {
            return None;
        }
        let id = MemberId(self.next_member_id);
        self.next_member_id += 1;
        member.id = id;
        self.members.push(member);
        Some(id)
    }

    /// Unseat a member. The member is marked Former and kept on the former roll.
    pub fn remove_member(&mut self, id: MemberId) -> bool {
        let Some(index) = self.members.iter().position(|m| m.id == id) else {
            return false;
        };
        let mut member = self.members.remove(index);
        member.status = MemberStatus::Former;
        member.government_role = GovernmentRole::None;
        self.former_members.push(member);
        true
    }

    pub fn members(&self) -> &[ChamberMember] {
        &self.members
    }

    pub fn former_members(&self) -> &[ChamberMember] {
        &self.former_members
    }

    pub fn member(&self, id: MemberId) -> Option<&ChamberMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_active()).count()
    }

    /// Active members needed for quorum
    pub fn quorum_threshold(&self) -> f64 {
        self.total_seats as f64 * self.quorum_percentage
    }

    pub fn has_quorum(&self) -> bool {
        self.active_count() as f64 >= self.quorum_threshold()
    }

    /// One year of service for every seated member
    pub fn age_members(&mut self) {
        let years_until_break = self.rules.years_until_break;
        for member in &mut self.members {
            member.years_served += 1;
            member.career_years += 1;
            if member.years_served % YEARS_PER_TERM == 0 {
                member.consecutive_terms += 1;
            }
            member.update_status(years_until_break);
        }
    }

    pub fn assign_government_role(&mut self, id: MemberId, role: GovernmentRole) -> bool {
        let years_until_break = self.rules.years_until_break;
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.government_role = role;
                member.update_status(years_until_break);
                true
            }
            None => false,
        }
    }

    /// Return every government member to the benches
    pub fn release_government_members(&mut self) {
        let years_until_break = self.rules.years_until_break;
        for member in &mut self.members {
            if member.government_role != GovernmentRole::None {
                member.government_role = GovernmentRole::None;
                member.update_status(years_until_break);
            }
        }
    }

    /// Chamber of the first empty seat: the Senate fills before the Deputies
    pub fn vacant_chamber(&self) -> Option<Chamber> {
        if self.members.len() as u32 >= self.total_seats {
            return None;
        }
        let senators = self
            .members
            .iter()
            .filter(|m| m.chamber == Chamber::Senate)
            .count() as u32;
        if senators < self.senate_seats {
            Some(Chamber::Senate)
        } else {
            Some(Chamber::Deputies)
        }
    }

    /// Every member of the admission committee takes part in the interview
    pub fn conduct_admission_interview<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        for member in self.members.iter_mut().filter(|m| m.admission_committee_member) {
            member.activity.committee_participations += 1;
        }
        rng.gen_bool(self.rules.admission_success)
    }

    /// Interview a candidate for an empty seat and seat them on success
    pub fn admit_candidate<R: Rng + ?Sized>(
        &mut self,
        candidate: ChamberMember,
        rng: &mut R,
    ) -> Option<MemberId> {
        if self.members.len() as u32 >= self.total_seats {
            return None;
        }
        if !self.conduct_admission_interview(&mut *rng) {
            debug!("Candidate for the {:?} not admitted", candidate.chamber);
            return None;
        }
        self.add_member(candidate)
    }

    pub fn admission_committee(&self) -> impl Iterator<Item = &ChamberMember> {
        self.members.iter().filter(|m| m.admission_committee_member)
    }

    /// Long-serving, active parliamentarians are eligible for the committee
    pub fn nominate_for_admission_committee(&self, id: MemberId) -> bool {
        self.member(id).is_some_and(|m| {
            !m.admission_committee_member
                && m.career_years >= self.rules.committee_min_years
                && m.activity.calculate() > self.rules.committee_min_activity
        })
    }

    pub fn vote_for_admission_committee<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen_bool(self.rules.committee_approval)
    }

    /// Put eligible members to the chamber in seat order until one is approved.
    /// At most one member joins per call.
    pub fn elect_admission_committee_member<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<MemberId> {
        let nominees: Vec<MemberId> = self
            .members
            .iter()
            .map(|m| m.id)
            .filter(|id| self.nominate_for_admission_committee(*id))
            .collect();
        for nominee in nominees {
            if !self.vote_for_admission_committee(&mut *rng) {
                continue;
            }
            if let Some(member) = self.members.iter_mut().find(|m| m.id == nominee) {
                member.admission_committee_member = true;
                return Some(nominee);
            }
        }
        None
    }

    /// Credit a member with a legislative initiative
    pub fn record_initiative(&mut self, id: MemberId) -> bool {
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.activity.legislative_initiatives += 1;
                true
            }
            None => false,
        }
    }

    pub fn proposed(&self) -> &[Legislation] {
        &self.proposed
    }

    pub fn passed(&self) -> &[Legislation] {
        &self.passed
    }

    pub fn failed(&self) -> &[Legislation] {
        &self.failed
    }

    pub fn oldest_proposal(&self) -> Option<ProposalId> {
        self.proposed.first().map(|l| l.id)
    }

    /// Share of resolved bills that passed; 0.5 before any bill is resolved
    pub fn effectiveness(&self) -> f64 {
        let resolved = self.passed.len() + self.failed.len();
        if resolved == 0 {
            0.5
        } else {
            self.passed.len() as f64 / resolved as f64
        }
    }

    /// Queue a bill. Fails with `NoQuorum` and leaves the queues untouched
    /// unless `ignore_quorum` is granted.
    pub fn propose_legislation(
        &mut self,
        title: impl Into<String>,
        proposer: impl Into<String>,
        content: impl Into<String>,
        tick: Tick,
        ignore_quorum: bool,
    ) -> Result<ProposalId, Rejection> {
        if let Err(rejection) = quorum_gate(self.has_quorum(), ignore_quorum) {
            debug!("Cannot propose legislation: {}", rejection);
            return Err(rejection);
        }
        let id = ProposalId(self.next_proposal_id);
        self.next_proposal_id += 1;
        self.proposed
            .push(Legislation::new(id, title, proposer, content, tick));
        Ok(id)
    }

    /// Vote on a queued bill.
    ///
    /// On success the bill leaves the proposed queue and lands in exactly
    /// one of the passed/failed queues in the same step. Members who take a
    /// position speak in the debate.
    pub fn vote_on_legislation<R: Rng + ?Sized>(
        &mut self,
        id: ProposalId,
        ignore_quorum: bool,
        rng: &mut R,
    ) -> Result<VoteOutcome, Rejection> {
        let Some(index) = self.proposed.iter().position(|l| l.id == id) else {
            let resolved = self.passed.iter().chain(&self.failed).any(|l| l.id == id);
            return Err(if resolved {
                Rejection::AlreadyResolved
            } else {
                Rejection::UnknownProposal
            });
        };

        if let Err(rejection) = quorum_gate(self.has_quorum(), ignore_quorum) {
            debug!("Cannot vote on {}: {}", id, rejection);
            return Err(rejection);
        }

        let ballot = LegislativeBallot {
            for_threshold: self.rules.for_threshold,
            against_threshold: self.rules.against_threshold,
        };
        let mut tally = VoteTally::new();
        for member in &mut self.members {
            let Some(cast) = ballot.cast(member, &mut *rng) else {
                continue;
            };
            if cast != Ballot::Abstain {
                member.activity.speeches_given += 1;
            }
            tally.record(cast);
        }
        let passed = SimpleMajority.passes(&tally);

        let mut legislation = self.proposed.remove(index);
        legislation.tally = tally;
        if passed {
            legislation.status = LegislationStatus::Passed;
            self.passed.push(legislation);
        } else {
            legislation.status = LegislationStatus::Failed;
            self.failed.push(legislation);
        }

        Ok(VoteOutcome { passed, tally })
    }

    /// Confidence vote on a newly formed government.
    ///
    /// Quorum gates whether the vote is held; success needs an absolute
    /// majority of all seats.
    pub fn ratify_government<R: Rng + ?Sized>(
        &self,
        ignore_quorum: bool,
        rng: &mut R,
    ) -> Result<VoteOutcome, Rejection> {
        if let Err(rejection) = quorum_gate(self.has_quorum(), ignore_quorum) {
            debug!("Cannot ratify government: {}", rejection);
            return Err(rejection);
        }
        let ballot = RatificationBallot {
            support: self.rules.ratification_support,
        };
        let tally = conduct_vote(&self.members, &ballot, rng);
        let required = SeatMajority::of(self.total_seats, self.rules.ratification_majority);
        let passed = required.passes(&tally);
        Ok(VoteOutcome { passed, tally })
    }

    /// Motion of no confidence in the government; needs quorum to be held
    pub fn vote_no_confidence<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<bool, Rejection> {
        quorum_gate(self.has_quorum(), false)?;
        Ok(rng.gen_bool(self.rules.no_confidence_success))
    }

    /// Motion to put the president's suspension to a referendum
    pub fn initiate_presidential_suspension<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<bool, Rejection> {
        quorum_gate(self.has_quorum(), false)?;
        Ok(rng.gen_bool(self.rules.suspension_initiative))
    }
}

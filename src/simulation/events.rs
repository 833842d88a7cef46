//! Events and run history

use serde::{Deserialize, Serialize};

use crate::core::calendar::SimDate;
use crate::core::types::{MemberId, ProposalId, ReferendumId, Tick};
use crate::legislature::decision::{Rejection, VoteTally};
use crate::referendum::ReferendumStatus;
use crate::society::SocietyStateType;

/// A recorded event
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub tick: Tick,
    pub event_type: EventType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventType {
    // Government
    GovernmentFormed { prime_minister: MemberId, interim: bool },
    GovernmentRatified { tally: VoteTally, passed: bool },
    RatificationNotHeld { reason: Rejection },
    GovernmentDissolved,
    SuccessionFailed,
    EmergencyDeclared { until: SimDate },
    EmergencyLifted,
    AusterityImplemented,

    // Presidency
    PresidentElected { name: String },
    SuspensionInitiated { referendum: ReferendumId },
    PresidentSuspended { name: String },

    // Society
    StateChanged { previous: SocietyStateType, new: SocietyStateType },
    CentralBankIntervention,
    ActivismIncreased,
    CoverageIncreased,

    // Legislature
    LegislationProposed { id: ProposalId },
    CivicBillProposed { id: ProposalId, organization: String },
    ProposalRejected { reason: Rejection },
    LegislationPassed { id: ProposalId, tally: VoteTally },
    LegislationFailed { id: ProposalId, tally: VoteTally },
    VoteNotHeld { id: ProposalId, reason: Rejection },
    MemberDismissed { member: MemberId },
    MemberAdmitted { member: MemberId },
    AdmissionCommitteeJoined { member: MemberId },
    TermsAged,

    // Referenda
    ReferendumHeld {
        id: ReferendumId,
        status: ReferendumStatus,
        votes_for: u32,
        votes_against: u32,
        approved: bool,
    },
}

/// The complete event log of a run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<Event>,
    next_event_id: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, event_type: EventType, tick: Tick) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;
        self.events.push(Event { id, tick, event_type });
        id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events_for_tick(&self, tick: Tick) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.tick == tick)
    }

    pub fn count(&self, predicate: impl Fn(&EventType) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(&e.event_type)).count()
    }
}

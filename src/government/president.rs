//! The president: head of state with privileged access to the legislature

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::calendar::{SimDate, DAYS_PER_YEAR};
use crate::core::types::{MemberId, ReferendumId, Tick};
use crate::legislature::chamber::Legislature;
use crate::legislature::decision::Rejection;
use crate::legislature::member::GovernmentRole;
use crate::legislature::proposal::Legislation;
use crate::referendum::{ReferendumSystem, ReferendumType};

/// Presidential term in years
pub const TERM_YEARS: u32 = 5;

/// Chance that a reviewed member is put up for dismissal
const DISMISSAL_PROPOSAL_CHANCE: f64 = 0.3;
/// Chance that a dismissal proposal survives without a veto
const DISMISSAL_NO_VETO_CHANCE: f64 = 0.4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct President {
    pub name: String,
    pub term_start: SimDate,
    pub term_end: SimDate,
}

impl President {
    pub fn new(name: impl Into<String>, today: SimDate) -> Self {
        Self {
            name: name.into(),
            term_start: today,
            term_end: today.plus_days(TERM_YEARS * DAYS_PER_YEAR),
        }
    }

    pub fn is_term_expired(&self, today: SimDate) -> bool {
        today > self.term_end
    }

    pub fn propose_dismissal<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen_bool(DISMISSAL_PROPOSAL_CHANCE)
    }

    pub fn veto_dismissal<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        !rng.gen_bool(DISMISSAL_NO_VETO_CHANCE)
    }

    /// Review one seated member outside the government at random.
    /// Returns the member removed, if any.
    pub fn review_dismissal<R: Rng + ?Sized>(
        &self,
        legislature: &mut Legislature,
        rng: &mut R,
    ) -> Option<MemberId> {
        let candidates: Vec<MemberId> = legislature
            .members()
            .iter()
            .filter(|m| m.government_role == GovernmentRole::None)
            .map(|m| m.id)
            .collect();
        let candidate = *candidates.choose(rng)?;
        if !self.propose_dismissal(rng) {
            return None;
        }
        debug!("President {} proposed dismissal of {}", self.name, candidate);
        if self.veto_dismissal(rng) {
            return None;
        }
        if legislature.remove_member(candidate) {
            info!("{} dismissed from the legislature", candidate);
            Some(candidate)
        } else {
            None
        }
    }

    /// Nominate Active members until the legislature confirms one.
    ///
    /// The appointment bill is proposed and voted with the presidential
    /// quorum override. Gives up after `max_attempts` rejected nominees.
    pub fn choose_prime_minister<R: Rng + ?Sized>(
        &self,
        legislature: &mut Legislature,
        tick: Tick,
        max_attempts: u32,
        rng: &mut R,
    ) -> Option<MemberId> {
        for _ in 0..max_attempts {
            let candidates: Vec<MemberId> = legislature
                .members()
                .iter()
                .filter(|m| m.is_active())
                .map(|m| m.id)
                .collect();
            let candidate = *candidates.choose(rng)?;

            let bill = legislature
                .propose_legislation(
                    "New Prime Minister",
                    "President",
                    format!("Appointment of {} as Prime Minister", candidate),
                    tick,
                    true,
                )
                .ok()?;
            match legislature.vote_on_legislation(bill, true, rng) {
                Ok(outcome) if outcome.passed => {
                    info!("{} confirmed as Prime Minister", candidate);
                    return Some(candidate);
                }
                Ok(_) => debug!("Nomination of {} rejected", candidate),
                Err(rejection) => debug!("Nomination vote not held: {}", rejection),
            }
        }
        None
    }

    /// Call a referendum. The president is not bound by the legislature's
    /// quorum, so the proposal goes through either way.
    pub fn propose_referendum(
        &self,
        system: &mut ReferendumSystem,
        legislature: &Legislature,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ReferendumType,
    ) -> Result<ReferendumId, Rejection> {
        system.propose(title, description, kind, legislature.has_quorum(), true)
    }

    /// Put a passed law to a national referendum
    pub fn send_law_to_referendum(
        &self,
        law: &Legislation,
        legislature: &Legislature,
        system: &mut ReferendumSystem,
    ) -> Result<ReferendumId, Rejection> {
        self.propose_referendum(
            system,
            legislature,
            format!("Referendum on {}", law.title),
            law.content.clone(),
            ReferendumType::National,
        )
    }
}

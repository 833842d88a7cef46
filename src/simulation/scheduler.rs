//! Tick scheduler - orchestrates one simulated month at a time
//!
//! Each tick runs, in order:
//!
//! 1. advance the providers (economy, central bank, media, civil society, population)
//! 2. collect economic / political / social snapshots
//! 3. reclassify the society state
//! 4. react to the state (austerity, emergency, activism and coverage)
//! 5. legislative session: maybe a member's bill, maybe civil-society bills,
//!    then a vote on the oldest one; civil society reacts to a passed law
//! 6. maybe a presidential referendum
//! 7. maybe a presidential dismissal review
//! 8. presidential election once the president's term has expired
//! 9. government lifecycle: efficiency, approval, budget, emergency expiry, dissolution
//! 10. year end: term-aging, admissions to empty seats, the admission
//!     committee, and a possible motion to suspend the president
//! 11. record the month
//!
//! A president is elected before the first tick.
//!
//! The scheduler owns the only RNG of the run and lends it to every call
//! that draws, so a seed reproduces a run exactly.

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::core::calendar::{Calendar, SimDate};
use crate::core::config::{CandidateConfig, SimulationConfig, SuccessionPolicy};
use crate::core::error::{Result, SimError};
use crate::core::types::{clamp_signed, MemberId, ReferendumId, Tick};
use crate::government::{Government, President, PresidentialCandidate, PresidentialElection};
use crate::legislature::{ChamberMember, GovernmentRole, Legislature};
use crate::providers::{
    CampaignPositions, CentralBank, CivicRegistry, CivilSociety, EconomicModel, Economy,
    MediaLandscape, MediaMarket, NationalBank, Society, SocietySystem,
};
use crate::referendum::{ReferendumStatus, ReferendumSystem, ReferendumType};
use crate::simulation::events::{EventLog, EventType};
use crate::simulation::report::{LegislativeStats, MonthlyRecord, SimulationReport};
use crate::society::{
    EconomicData, PoliticalData, SocialData, SocietyStateClassifier, SocietyStateType,
};

/// Nominees the president may put forward before giving up on a prime minister
const MAX_NOMINATIONS: u32 = 10;

const PARTIES: [&str; 3] = ["Progressive Alliance", "Conservative Union", "Green Future"];

/// The external collaborators the kernel reads indicators from
pub struct Providers {
    pub economy: Box<dyn Economy>,
    pub bank: Box<dyn CentralBank>,
    pub media: Box<dyn MediaLandscape>,
    pub civil: Box<dyn CivilSociety>,
    pub society: Box<dyn Society>,
}

impl Providers {
    /// The bundled bounded-random models
    pub fn reference<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Self {
        Self {
            economy: Box::new(EconomicModel::new()),
            bank: Box::new(NationalBank::new("Central Bank of Technokratia")),
            media: Box::new(MediaMarket::with_default_outlets(rng)),
            civil: Box::new(CivicRegistry::with_default_organizations()),
            society: Box::new(SocietySystem::generate(
                config.population.initial_citizens,
                config.population.regions,
                rng,
            )),
        }
    }
}

pub struct TickScheduler {
    config: SimulationConfig,
    seed: u64,
    rng: ChaCha8Rng,
    calendar: Calendar,
    legislature: Legislature,
    president: President,
    government: Option<Government>,
    referendums: ReferendumSystem,
    classifier: SocietyStateClassifier,
    providers: Providers,
    events: EventLog,
    monthly: Vec<MonthlyRecord>,
    governments_formed: u32,
    presidents_elected: usize,
    halted: bool,
}

/// Every candidate sits the exams; those who pass stand for election
fn elect_president<R: Rng + ?Sized>(
    candidates: &[CandidateConfig],
    today: SimDate,
    rng: &mut R,
) -> Option<President> {
    let mut election = PresidentialElection::new();
    for entry in candidates {
        let mut candidate = PresidentialCandidate::new(entry.name.clone(), entry.foreign);
        candidate.take_all_exams(&mut *rng);
        election.register_candidate(candidate);
    }
    election.conduct_election(today, rng)
}

impl TickScheduler {
    /// Build a scheduler with the reference providers
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let seed = config.run.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let providers = Providers::reference(&config, &mut rng);
        Self::assemble(config, seed, rng, providers)
    }

    /// Build a scheduler around caller-supplied providers
    pub fn with_providers(config: SimulationConfig, providers: Providers) -> Result<Self> {
        let seed = config.run.seed.unwrap_or_else(rand::random);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self::assemble(config, seed, rng, providers)
    }

    fn assemble(
        config: SimulationConfig,
        seed: u64,
        mut rng: ChaCha8Rng,
        providers: Providers,
    ) -> Result<Self> {
        config.validate()?;

        let mut legislature = Legislature::new(&config.legislature);
        let parties: Vec<String> = PARTIES.iter().map(|p| p.to_string()).collect();
        legislature.fill_seats(&parties);

        let calendar = Calendar::new();
        let president = elect_president(&config.election.candidates, calendar.today(), &mut rng)
            .ok_or_else(|| {
                SimError::InvalidConfig("no presidential candidate passed the exams".into())
            })?;
        let mut scheduler = Self {
            president,
            referendums: ReferendumSystem::new(&config.referendum),
            classifier: SocietyStateClassifier::new(&config.society),
            legislature,
            calendar,
            government: None,
            providers,
            events: EventLog::new(),
            monthly: Vec::new(),
            governments_formed: 0,
            presidents_elected: 1,
            halted: false,
            config,
            seed,
            rng,
        };

        info!(
            "Technokratia starting: seed {}, {} seats, {} months, President {}",
            seed,
            scheduler.legislature.total_seats,
            scheduler.config.run.months,
            scheduler.president.name
        );
        let name = scheduler.president.name.clone();
        scheduler.events.add_event(EventType::PresidentElected { name }, 0);

        let government = scheduler.form_government(0, false).ok_or_else(|| {
            SimError::InvalidConfig("no legislator available to lead a government".into())
        })?;
        scheduler.government = Some(government);
        Ok(scheduler)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> Tick {
        self.calendar.current_tick()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn legislature(&self) -> &Legislature {
        &self.legislature
    }

    pub fn government(&self) -> Option<&Government> {
        self.government.as_ref()
    }

    pub fn president(&self) -> &President {
        &self.president
    }

    pub fn referendums(&self) -> &ReferendumSystem {
        &self.referendums
    }

    pub fn classifier(&self) -> &SocietyStateClassifier {
        &self.classifier
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn monthly(&self) -> &[MonthlyRecord] {
        &self.monthly
    }

    /// Advance one month. Returns false once the run has halted.
    pub fn step(&mut self) -> Result<bool> {
        if self.halted {
            return Ok(false);
        }
        let tick = self.calendar.current_tick();
        let today = self.calendar.today();

        self.advance_providers(tick);

        let (economic, political, social) = self.snapshots();
        let previous = self.classifier.state();
        let state = self.classifier.update(tick, economic, political, social);
        if state != previous {
            self.events.add_event(EventType::StateChanged { previous, new: state }, tick);
        }

        self.react(state, tick, today);
        self.legislative_session(tick);

        if self.rng.gen_bool(self.config.referendum.monthly_probability) {
            self.hold_referendum(tick)?;
        }

        if self.rng.gen_bool(self.config.run.dismissal_review_probability) {
            let dismissed = self.president.review_dismissal(&mut self.legislature, &mut self.rng);
            if let Some(member) = dismissed {
                self.events.add_event(EventType::MemberDismissed { member }, tick);
            }
        }

        if self.president.is_term_expired(today) {
            info!("Term of President {} has expired", self.president.name);
            self.replace_president(tick, today);
        }

        self.government_lifecycle(tick, today);

        if self.calendar.is_year_end() {
            self.legislature.age_members();
            self.events.add_event(EventType::TermsAged, tick);
            self.admissions(tick);
            self.suspension_motion(tick, today)?;
        }

        self.record_month(tick);
        self.calendar.advance();
        Ok(!self.halted)
    }

    /// Run until the configured length is exhausted or the run halts
    pub fn run(mut self) -> Result<SimulationReport> {
        let start = Instant::now();
        let months = self.config.run.months;
        for _ in 0..months {
            if !self.step()? {
                break;
            }
        }
        let elapsed = start.elapsed();
        info!(
            "Run finished after {} months: {}",
            self.calendar.current_tick(),
            self.classifier.state().name()
        );
        Ok(self.into_report(elapsed.as_millis() as u64))
    }

    fn advance_providers(&mut self, tick: Tick) {
        self.providers.economy.simulate_month(&mut self.rng);
        self.providers.bank.update_indicators(&mut self.rng);
        self.providers.media.simulate_news_cycle(&mut self.rng);
        self.providers.civil.update(&mut self.rng);
        self.providers.society.update_population(tick, &mut self.rng);
    }

    fn snapshots(&self) -> (EconomicData, PoliticalData, SocialData) {
        let providers = &self.providers;
        let economic = EconomicData {
            gdp_growth: providers.economy.gdp_growth(),
            inflation: providers.bank.inflation_rate(),
            unemployment: providers.economy.unemployment_rate(),
        };
        let seated = self.legislature.active_count() as f64;
        let political = PoliticalData {
            government_approval: self
                .sitting_government()
                .map(|g| g.approval_rating)
                .unwrap_or(0.0),
            parliament_effectiveness: self.legislature.effectiveness(),
            political_stability: seated / self.legislature.total_seats as f64,
        };
        let social = SocialData {
            social_cohesion: providers.civil.cohesion_score(),
            media_trust: providers.media.trust_score(),
            citizen_satisfaction: providers.society.satisfaction_score(),
        };
        (economic, political, social)
    }

    fn sitting_government(&self) -> Option<&Government> {
        self.government.as_ref().filter(|g| !g.is_dissolved())
    }

    fn react(&mut self, state: SocietyStateType, tick: Tick, today: SimDate) {
        match state {
            SocietyStateType::EconomicCrisis => {
                self.providers.bank.emergency_measures();
                self.events.add_event(EventType::CentralBankIntervention, tick);
                if let Some(government) = self.government.as_mut().filter(|g| !g.is_dissolved()) {
                    government.implement_austerity();
                    self.events.add_event(EventType::AusterityImplemented, tick);
                }
            }
            SocietyStateType::PoliticalCrisis => {
                let Some(government) = self.government.as_mut() else {
                    return;
                };
                if government.declare_emergency(today) {
                    let until = government.emergency_end_date().unwrap_or(today);
                    self.events.add_event(EventType::EmergencyDeclared { until }, tick);
                    let previous = self.classifier.state();
                    if self.classifier.record_emergency(tick) {
                        self.events.add_event(
                            EventType::StateChanged {
                                previous,
                                new: SocietyStateType::StateOfEmergency,
                            },
                            tick,
                        );
                    }
                }
            }
            SocietyStateType::SocialUnrest => {
                self.providers.civil.increase_activism();
                self.providers.media.increase_coverage(&mut self.rng);
                self.events.add_event(EventType::ActivismIncreased, tick);
                self.events.add_event(EventType::CoverageIncreased, tick);
            }
            SocietyStateType::Stable
            | SocietyStateType::Prosperity
            | SocietyStateType::StateOfEmergency => {}
        }
    }

    fn legislative_session(&mut self, tick: Tick) {
        if self.rng.gen_bool(self.config.run.bill_probability) {
            self.member_bill(tick);
        }
        if self.rng.gen_bool(self.config.run.civil_proposal_probability) {
            self.civic_bills(tick);
        }

        let Some(id) = self.legislature.oldest_proposal() else {
            return;
        };
        match self.legislature.vote_on_legislation(id, false, &mut self.rng) {
            Ok(outcome) if outcome.passed => {
                debug!("{} passed: {:?}", id, outcome.tally);
                let tally = outcome.tally;
                self.events.add_event(EventType::LegislationPassed { id, tally }, tick);
                if let Some(law) = self.legislature.passed().last() {
                    self.providers.civil.react_to_legislation(law, &mut self.rng);
                }
            }
            Ok(outcome) => {
                debug!("{} failed: {:?}", id, outcome.tally);
                let tally = outcome.tally;
                self.events.add_event(EventType::LegislationFailed { id, tally }, tick);
            }
            Err(reason) => {
                self.events.add_event(EventType::VoteNotHeld { id, reason }, tick);
            }
        }
    }

    /// A bill sponsored by a randomly chosen Active member
    fn member_bill(&mut self, tick: Tick) {
        let sponsors: Vec<MemberId> = self
            .legislature
            .members()
            .iter()
            .filter(|m| m.is_active())
            .map(|m| m.id)
            .collect();
        let sponsor = sponsors.choose(&mut self.rng).copied();
        let proposer = sponsor.map_or_else(|| "Parliament".to_string(), |id| id.to_string());

        let title = format!("Bill {}", tick);
        let content = format!("Content of bill {}", tick);
        match self
            .legislature
            .propose_legislation(title, proposer, content, tick, false)
        {
            Ok(id) => {
                if let Some(sponsor) = sponsor {
                    self.legislature.record_initiative(sponsor);
                }
                self.events.add_event(EventType::LegislationProposed { id }, tick);
            }
            Err(reason) => {
                self.events.add_event(EventType::ProposalRejected { reason }, tick);
            }
        }
    }

    /// Civil society drafts bills; each is tabled without quorum privileges
    fn civic_bills(&mut self, tick: Tick) {
        for draft in self.providers.civil.propose_legislation(&mut self.rng) {
            let organization = draft.proposer.clone();
            match self.legislature.propose_legislation(
                draft.title,
                draft.proposer,
                draft.content,
                tick,
                false,
            ) {
                Ok(id) => {
                    debug!("{} tabled {}", organization, id);
                    self.events
                        .add_event(EventType::CivicBillProposed { id, organization }, tick);
                }
                Err(reason) => {
                    self.events.add_event(EventType::ProposalRejected { reason }, tick);
                }
            }
        }
    }

    /// The president calls a national referendum, on the latest passed law
    /// when there is one, and the voting population decides it.
    fn hold_referendum(&mut self, tick: Tick) -> Result<()> {
        let proposal = match self.legislature.passed().last() {
            Some(law) => self.president.send_law_to_referendum(
                law,
                &self.legislature,
                &mut self.referendums,
            ),
            None => self.president.propose_referendum(
                &mut self.referendums,
                &self.legislature,
                format!("Referendum {}", tick),
                format!("National question raised in month {}", tick + 1),
                ReferendumType::National,
            ),
        };
        match proposal {
            Ok(id) => {
                self.put_to_vote(id, tick)?;
            }
            Err(reason) => warn!("Referendum not proposed: {}", reason),
        }
        Ok(())
    }

    /// Open a proposed referendum, collect the voting population's ballots
    /// and close it. Returns whether the measure was approved.
    fn put_to_vote(&mut self, id: ReferendumId, tick: Tick) -> Result<bool> {
        if let Err(reason) = self.referendums.start(id, self.legislature.total_seats, tick) {
            warn!("{} could not be opened: {}", id, reason);
            return Ok(false);
        }

        let coverage = self.providers.media.coverage_intensity();
        let positions = CampaignPositions {
            government: self
                .sitting_government()
                .map(|g| clamp_signed((g.approval_rating - 50.0) / 50.0))
                .unwrap_or(0.0),
            civil_society: clamp_signed((self.providers.civil.cohesion_score() - 0.5) * 2.0),
        };
        let min_age = self.referendums.min_voting_age;

        let ballots: Vec<_> = {
            let referendum = self
                .referendums
                .get(id)
                .ok_or(SimError::UnknownReferendum(id))?;
            let rng = &mut self.rng;
            self.providers
                .society
                .voting_population(min_age)
                .into_iter()
                .map(|voter| {
                    let in_favor =
                        voter.decide_referendum_vote(referendum, coverage, &positions, &mut *rng);
                    (voter.citizen_id(), voter.age(), in_favor)
                })
                .collect()
        };
        for (citizen, age, in_favor) in ballots {
            self.referendums.cast_vote(id, citizen, age, in_favor);
        }

        self.referendums.complete(id, tick, &mut self.rng)?;
        let referendum = self
            .referendums
            .get(id)
            .ok_or(SimError::UnknownReferendum(id))?;
        let approved = referendum.approved();
        self.events.add_event(
            EventType::ReferendumHeld {
                id,
                status: referendum.status,
                votes_for: referendum.votes_for,
                votes_against: referendum.votes_against,
                approved,
            },
            tick,
        );
        Ok(approved)
    }

    /// Hold a presidential election. The incumbent stays on when nobody
    /// qualifies.
    fn replace_president(&mut self, tick: Tick, today: SimDate) {
        match elect_president(&self.config.election.candidates, today, &mut self.rng) {
            Some(president) => {
                let name = president.name.clone();
                self.president = president;
                self.presidents_elected += 1;
                self.events.add_event(EventType::PresidentElected { name }, tick);
            }
            None => warn!("No candidate qualified; {} stays in office", self.president.name),
        }
    }

    /// Interview a candidate for every empty seat, then let the chamber
    /// add one long-serving member to the admission committee.
    fn admissions(&mut self, tick: Tick) {
        let vacancies = self.legislature.total_seats as usize - self.legislature.members().len();
        for _ in 0..vacancies {
            let Some(chamber) = self.legislature.vacant_chamber() else {
                break;
            };
            let mut candidate = ChamberMember::new(chamber);
            if let Some(party) = PARTIES.choose(&mut self.rng) {
                candidate = candidate.with_party(*party);
            }
            if let Some(member) = self.legislature.admit_candidate(candidate, &mut self.rng) {
                self.events.add_event(EventType::MemberAdmitted { member }, tick);
            }
        }

        if let Some(member) = self.legislature.elect_admission_committee_member(&mut self.rng) {
            info!("{} joined the admission committee", member);
            self.events.add_event(EventType::AdmissionCommitteeJoined { member }, tick);
        }
    }

    /// A quorate legislature may put the president's suspension to the
    /// people; an approved referendum removes the president and triggers
    /// a new election.
    fn suspension_motion(&mut self, tick: Tick, today: SimDate) -> Result<()> {
        match self.legislature.initiate_presidential_suspension(&mut self.rng) {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(reason) => {
                debug!("Suspension motion not held: {}", reason);
                return Ok(());
            }
        }

        let name = self.president.name.clone();
        let proposal = self.referendums.propose(
            format!("Suspension of President {}", name),
            format!("The legislature moves to suspend President {}", name),
            ReferendumType::National,
            self.legislature.has_quorum(),
            false,
        );
        let referendum = match proposal {
            Ok(id) => id,
            Err(reason) => {
                warn!("Suspension referendum not proposed: {}", reason);
                return Ok(());
            }
        };
        self.events.add_event(EventType::SuspensionInitiated { referendum }, tick);

        if self.put_to_vote(referendum, tick)? {
            warn!("President {} suspended by referendum", name);
            self.events.add_event(EventType::PresidentSuspended { name }, tick);
            self.replace_president(tick, today);
        }
        Ok(())
    }

    fn government_lifecycle(&mut self, tick: Tick, today: SimDate) {
        let revenue = self.providers.economy.government_revenue();
        let spending = self.providers.economy.government_spending();
        let Some(government) = self.government.as_mut() else {
            return;
        };

        government.update_efficiencies(&mut self.rng);
        government.update_approval_rating();
        government.update_budget(revenue, spending);

        if government.check_emergency_status(today) {
            self.events.add_event(EventType::EmergencyLifted, tick);
        }
        if !government.check_dissolution(today) {
            return;
        }

        self.events.add_event(EventType::GovernmentDissolved, tick);
        self.legislature.release_government_members();

        match self.config.run.succession {
            SuccessionPolicy::HardStop => {
                info!("Government dissolved without succession; stopping the run");
                self.halted = true;
            }
            SuccessionPolicy::InterimGovernment => match self.form_government(tick, true) {
                Some(interim) => self.government = Some(interim),
                None => {
                    warn!("No interim government could be formed; stopping the run");
                    self.events.add_event(EventType::SuccessionFailed, tick);
                    self.halted = true;
                }
            },
        }
    }

    /// President nominates a prime minister, government managers are
    /// appointed, and the legislature holds a ratification vote.
    fn form_government(&mut self, tick: Tick, interim: bool) -> Option<Government> {
        let today = SimDate::from_tick(tick);
        let prime_minister = self
            .president
            .choose_prime_minister(&mut self.legislature, tick, MAX_NOMINATIONS, &mut self.rng)
            .or_else(|| {
                let fallback = self
                    .legislature
                    .members()
                    .iter()
                    .find(|m| m.is_active())
                    .map(|m| m.id);
                if let Some(id) = fallback {
                    warn!("No nominee confirmed; {} appointed Prime Minister directly", id);
                }
                fallback
            })?;

        self.legislature
            .assign_government_role(prime_minister, GovernmentRole::PrimeMinister);
        let mut government =
            Government::form(prime_minister, today, &self.config.government, &mut self.rng);

        let candidates: Vec<MemberId> = self
            .legislature
            .members()
            .iter()
            .filter(|m| m.is_active())
            .map(|m| m.id)
            .collect();
        let managers = self.config.government.max_government_managers;
        for member in candidates.choose_multiple(&mut self.rng, managers) {
            if government.appoint_government_manager(*member) {
                self.legislature
                    .assign_government_role(*member, GovernmentRole::GovernmentManager);
            }
        }

        self.governments_formed += 1;
        self.events
            .add_event(EventType::GovernmentFormed { prime_minister, interim }, tick);

        match self.legislature.ratify_government(interim, &mut self.rng) {
            Ok(outcome) => {
                if outcome.passed {
                    info!("Government ratified with {} votes", outcome.tally.votes_for);
                } else {
                    warn!("Government ratification failed with {} votes", outcome.tally.votes_for);
                }
                self.events.add_event(
                    EventType::GovernmentRatified {
                        tally: outcome.tally,
                        passed: outcome.passed,
                    },
                    tick,
                );
            }
            Err(reason) => {
                warn!("Ratification vote not held: {}", reason);
                self.events.add_event(EventType::RatificationNotHeld { reason }, tick);
            }
        }

        Some(government)
    }

    fn record_month(&mut self, tick: Tick) {
        let government = self.government.as_ref();
        let efficiency = government.and_then(|g| g.efficiency_range());
        self.monthly.push(MonthlyRecord {
            tick,
            state: self.classifier.state(),
            indicators: *self.classifier.indicators(),
            overall_stability: self.classifier.overall_stability(),
            government_status: government.map(|g| g.status()),
            approval_rating: government.map(|g| g.approval_rating),
            ministry_budget: government.map(|g| g.total_budget()),
            min_ministry_efficiency: efficiency.map(|(lo, _)| lo),
            max_ministry_efficiency: efficiency.map(|(_, hi)| hi),
            active_members: self.legislature.active_count(),
            has_quorum: self.legislature.has_quorum(),
        });
    }

    fn into_report(self, simulation_time_ms: u64) -> SimulationReport {
        let months_simulated = self.calendar.current_tick();
        let referendums_approved = self
            .referendums
            .referendums()
            .iter()
            .filter(|r| r.status == ReferendumStatus::Completed && r.approved())
            .count();
        SimulationReport {
            seed: self.seed,
            months_requested: self.config.run.months,
            months_simulated,
            stopped_early: months_simulated < self.config.run.months,
            final_state: self.classifier.state(),
            final_indicators: *self.classifier.indicators(),
            overall_stability: self.classifier.overall_stability(),
            transitions: self.classifier.history().copied().collect(),
            legislation: LegislativeStats {
                passed: self.legislature.passed().len(),
                failed: self.legislature.failed().len(),
                pending: self.legislature.proposed().len(),
                members_seated: self.legislature.members().len(),
                members_former: self.legislature.former_members().len(),
                admission_committee: self.legislature.admission_committee().count(),
            },
            referendums: self.referendums.monitor(),
            referendums_approved,
            governments_formed: self.governments_formed,
            government_status: self.government.as_ref().map(|g| g.status()),
            approval_rating: self.government.as_ref().map(|g| g.approval_rating),
            president: self.president.name.clone(),
            presidents_elected: self.presidents_elected,
            civil_society_influence: self.providers.civil.total_influence(),
            bank_report: self.providers.bank.report(),
            state_report: self.classifier.state_report(),
            monthly: self.monthly,
            events: self.events,
            simulation_time_ms,
        }
    }
}

//! Integration tests for the tick scheduler
//!
//! These tests drive whole runs through the public API:
//! - Same seed, same run
//! - Hard-stop and interim succession on government dissolution
//! - Crisis reactions, using fixed-value providers
//! - Presidential elections and suspension motions
//! - Civil-society bills and reactions to passed laws
//! - Report serialization

use std::cell::Cell;
use std::rc::Rc;

use rand::RngCore;
use technokratia::government::GovernmentStatus;
use technokratia::legislature::Legislation;
use technokratia::providers::{
    BillDraft, CentralBank, CivilSociety, Economy, MediaLandscape, ReferendumVoter, Society,
};
use technokratia::simulation::{EventType, Providers};
use technokratia::society::SocietyStateType;
use technokratia::{
    SimError, SimulationConfig, SimulationReport, SuccessionPolicy, TickScheduler,
};

fn config(months: u32, seed: u64) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.run.months = months;
    config.run.seed = Some(seed);
    config.population.initial_citizens = 300;
    config
}

struct FixedEconomy {
    growth: f64,
    unemployment: f64,
}

impl Economy for FixedEconomy {
    fn simulate_month(&mut self, _rng: &mut dyn RngCore) {}

    fn gdp_growth(&self) -> f64 {
        self.growth
    }

    fn unemployment_rate(&self) -> f64 {
        self.unemployment
    }

    fn government_revenue(&self) -> f64 {
        1_000_000.0
    }

    fn government_spending(&self) -> f64 {
        1_000_000.0
    }
}

struct CountingBank {
    inflation: f64,
    interventions: Rc<Cell<u32>>,
}

impl CentralBank for CountingBank {
    fn update_indicators(&mut self, _rng: &mut dyn RngCore) {}

    fn inflation_rate(&self) -> f64 {
        self.inflation
    }

    fn emergency_measures(&mut self) {
        self.interventions.set(self.interventions.get() + 1);
    }

    fn report(&self) -> String {
        format!("Fixed bank at {:.2}% inflation", self.inflation * 100.0)
    }
}

struct FixedMedia {
    trust: f64,
    coverage_boosts: Rc<Cell<u32>>,
}

impl MediaLandscape for FixedMedia {
    fn simulate_news_cycle(&mut self, _rng: &mut dyn RngCore) {}

    fn trust_score(&self) -> f64 {
        self.trust
    }

    fn coverage_intensity(&self) -> f64 {
        0.5
    }

    fn increase_coverage(&mut self, _rng: &mut dyn RngCore) {
        self.coverage_boosts.set(self.coverage_boosts.get() + 1);
    }
}

struct FixedCivil {
    cohesion: f64,
    drafts_bills: bool,
    activism_boosts: Rc<Cell<u32>>,
    reactions: Rc<Cell<u32>>,
}

impl CivilSociety for FixedCivil {
    fn update(&mut self, _rng: &mut dyn RngCore) {}

    fn cohesion_score(&self) -> f64 {
        self.cohesion
    }

    fn increase_activism(&mut self) {
        self.activism_boosts.set(self.activism_boosts.get() + 1);
    }

    fn propose_legislation(&mut self, _rng: &mut dyn RngCore) -> Vec<BillDraft> {
        if !self.drafts_bills {
            return Vec::new();
        }
        vec![BillDraft {
            title: "Environmental Improvement Act".to_string(),
            proposer: "Green Earth".to_string(),
            content: "Proposed by Green Earth to address Environmental issues.".to_string(),
        }]
    }

    fn react_to_legislation(&mut self, _law: &Legislation, _rng: &mut dyn RngCore) {
        self.reactions.set(self.reactions.get() + 1);
    }

    fn total_influence(&self) -> f64 {
        42.0
    }
}

struct FixedSociety {
    satisfaction: f64,
}

impl Society for FixedSociety {
    fn update_population(&mut self, _month: u32, _rng: &mut dyn RngCore) {}

    fn satisfaction_score(&self) -> f64 {
        self.satisfaction
    }

    fn voting_population(&self, _min_age: u32) -> Vec<&dyn ReferendumVoter> {
        Vec::new()
    }
}

/// Counters shared with the fixed providers
#[derive(Default)]
struct Counters {
    interventions: Rc<Cell<u32>>,
    coverage_boosts: Rc<Cell<u32>>,
    activism_boosts: Rc<Cell<u32>>,
    reactions: Rc<Cell<u32>>,
}

/// Providers reporting a neutral economy and a middling society unless overridden
struct Fixture {
    growth: f64,
    inflation: f64,
    unemployment: f64,
    social: f64,
    civic_bills: bool,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            growth: 0.0,
            inflation: 0.02,
            unemployment: 0.05,
            social: 0.5,
            civic_bills: false,
        }
    }
}

impl Fixture {
    fn build(self, counters: &Counters) -> Providers {
        Providers {
            economy: Box::new(FixedEconomy {
                growth: self.growth,
                unemployment: self.unemployment,
            }),
            bank: Box::new(CountingBank {
                inflation: self.inflation,
                interventions: Rc::clone(&counters.interventions),
            }),
            media: Box::new(FixedMedia {
                trust: self.social,
                coverage_boosts: Rc::clone(&counters.coverage_boosts),
            }),
            civil: Box::new(FixedCivil {
                cohesion: self.social,
                drafts_bills: self.civic_bills,
                activism_boosts: Rc::clone(&counters.activism_boosts),
                reactions: Rc::clone(&counters.reactions),
            }),
            society: Box::new(FixedSociety {
                satisfaction: self.social,
            }),
        }
    }
}

fn quiet_config(months: u32) -> SimulationConfig {
    let mut config = config(months, 11);
    config.referendum.monthly_probability = 0.0;
    config.run.dismissal_review_probability = 0.0;
    config
}

#[test]
fn test_same_seed_reproduces_run() {
    let a = TickScheduler::new(config(30, 42)).unwrap().run().unwrap();
    let b = TickScheduler::new(config(30, 42)).unwrap().run().unwrap();

    assert_eq!(a.seed, 42);
    assert_eq!(a.months_simulated, b.months_simulated);
    assert_eq!(a.final_state, b.final_state);
    assert_eq!(
        serde_json::to_string(&a.monthly).unwrap(),
        serde_json::to_string(&b.monthly).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&a.events).unwrap(),
        serde_json::to_string(&b.events).unwrap()
    );
    assert_eq!(a.legislation.passed, b.legislation.passed);
}

#[test]
fn test_hard_stop_halts_at_dissolution() {
    // 3-year term: day 1095 falls on tick 36
    let report = TickScheduler::new(config(60, 7)).unwrap().run().unwrap();

    assert_eq!(report.months_simulated, 37);
    assert!(report.stopped_early);
    assert_eq!(report.governments_formed, 1);
    assert_eq!(report.government_status, Some(GovernmentStatus::Dissolved));
    assert_eq!(report.events.count(|e| matches!(e, EventType::GovernmentDissolved)), 1);
    assert!(report
        .events
        .events_for_tick(36)
        .any(|e| e.event_type == EventType::GovernmentDissolved));
}

#[test]
fn test_scheduler_refuses_to_step_after_halt() {
    let mut scheduler = TickScheduler::new(config(60, 7)).unwrap();
    while scheduler.step().unwrap() {}

    assert!(scheduler.is_halted());
    let tick = scheduler.current_tick();
    assert!(!scheduler.step().unwrap());
    assert_eq!(scheduler.current_tick(), tick);
}

#[test]
fn test_interim_government_keeps_running() {
    let mut config = config(80, 7);
    config.run.succession = SuccessionPolicy::InterimGovernment;
    let report = TickScheduler::new(config).unwrap().run().unwrap();

    assert_eq!(report.months_simulated, 80);
    assert!(!report.stopped_early);
    // Formed at 0, then interim at ticks 36 and 72
    assert_eq!(report.governments_formed, 3);
    let interim = report
        .events
        .count(|e| matches!(e, EventType::GovernmentFormed { interim: true, .. }));
    assert_eq!(interim, 2);
    assert_ne!(report.government_status, Some(GovernmentStatus::Dissolved));
}

#[test]
fn test_government_members_released_on_dissolution() {
    let mut scheduler = TickScheduler::new(config(60, 3)).unwrap();
    while scheduler.step().unwrap() {}

    let legislature = scheduler.legislature();
    assert!(legislature
        .members()
        .iter()
        .all(|m| m.government_role == technokratia::legislature::GovernmentRole::None));
}

#[test]
fn test_economic_crisis_triggers_bank_and_austerity() {
    let counters = Counters::default();
    let providers = Fixture {
        growth: -0.1,
        inflation: 0.2,
        unemployment: 0.3,
        ..Fixture::default()
    }
    .build(&counters);

    let mut scheduler = TickScheduler::with_providers(quiet_config(3), providers).unwrap();
    let budget_before = scheduler.government().unwrap().total_budget();
    scheduler.step().unwrap();

    assert_eq!(scheduler.classifier().state(), SocietyStateType::EconomicCrisis);
    assert_eq!(counters.interventions.get(), 1);
    assert!(scheduler.government().unwrap().total_budget() < budget_before);
    assert_eq!(
        scheduler.events().count(|e| matches!(e, EventType::AusterityImplemented)),
        1
    );
}

#[test]
fn test_political_crisis_declares_emergency() {
    let counters = Counters::default();
    let providers = Fixture::default().build(&counters);
    let mut config = quiet_config(12);
    config.run.bill_probability = 0.0;
    // Any political score short of perfect counts as a crisis
    config.society.political_crisis_threshold = 0.9;

    let mut scheduler = TickScheduler::with_providers(config, providers).unwrap();
    scheduler.step().unwrap();

    assert_eq!(scheduler.classifier().state(), SocietyStateType::StateOfEmergency);
    assert_eq!(scheduler.government().unwrap().status(), GovernmentStatus::Emergency);
    assert_eq!(scheduler.monthly()[0].state, SocietyStateType::StateOfEmergency);

    // Emergency lasts 120 days; month 4 starts on day 121
    for _ in 0..4 {
        scheduler.step().unwrap();
    }
    let events = scheduler.events();
    assert_eq!(events.count(|e| matches!(e, EventType::EmergencyLifted)), 1);
    assert!(events.events_for_tick(4).any(|e| e.event_type == EventType::EmergencyLifted));
    assert_eq!(events.count(|e| matches!(e, EventType::EmergencyDeclared { .. })), 1);
}

#[test]
fn test_social_unrest_raises_activism_and_coverage() {
    let counters = Counters::default();
    let providers = Fixture {
        social: 0.0,
        ..Fixture::default()
    }
    .build(&counters);

    let mut scheduler = TickScheduler::with_providers(quiet_config(2), providers).unwrap();
    scheduler.step().unwrap();
    scheduler.step().unwrap();

    assert_eq!(scheduler.classifier().state(), SocietyStateType::SocialUnrest);
    assert_eq!(counters.activism_boosts.get(), 2);
    assert_eq!(counters.coverage_boosts.get(), 2);
    assert_eq!(counters.interventions.get(), 0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = config(12, 1);
    config.legislature.total_seats = 0;
    let result = TickScheduler::new(config);
    assert!(matches!(result, Err(SimError::InvalidConfig(_))));
}

#[test]
fn test_report_json_round_trip() {
    let report = technokratia::run(18, Some(99)).unwrap();
    assert_eq!(report.months_simulated, 18);
    assert_eq!(report.monthly.len(), 18);

    let json = report.to_json().unwrap();
    let decoded: SimulationReport = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.seed, 99);
    assert_eq!(decoded.final_state, report.final_state);
    assert_eq!(decoded.monthly.len(), report.monthly.len());
    assert_eq!(decoded.events.len(), report.events.len());
    assert_eq!(decoded.state_report, report.state_report);
}

#[test]
fn test_referendums_are_held_and_monitored() {
    let mut config = config(24, 5);
    config.referendum.monthly_probability = 1.0;
    config.legislature.suspension_initiative = 0.0;
    let report = TickScheduler::new(config).unwrap().run().unwrap();

    assert_eq!(report.referendums.total, 24);
    assert_eq!(report.referendums.active, 0);
    assert_eq!(
        report.referendums.completed + report.referendums.failed,
        report.referendums.total
    );
    assert!(report.referendums_approved <= report.referendums.completed);
}

#[test]
fn test_president_elected_before_first_tick() {
    let scheduler = TickScheduler::new(config(12, 8)).unwrap();
    let name = scheduler.president().name.clone();
    assert!(name == "John Doe" || name == "Jane Smith", "{}", name);
    assert!(scheduler
        .events()
        .events_for_tick(0)
        .any(|e| e.event_type == EventType::PresidentElected { name: name.clone() }));
}

#[test]
fn test_configured_candidate_wins_uncontested() {
    let mut config = config(6, 8);
    config.election.candidates = vec![technokratia::core::config::CandidateConfig {
        name: "Ada Byron".to_string(),
        foreign: true,
    }];
    let report = TickScheduler::new(config).unwrap().run().unwrap();
    assert_eq!(report.president, "Ada Byron");
    assert_eq!(report.presidents_elected, 1);
}

#[test]
fn test_new_election_when_presidential_term_expires() {
    let mut config = config(70, 4);
    config.run.succession = SuccessionPolicy::InterimGovernment;
    config.legislature.years_until_break = 1_000;
    config.legislature.suspension_initiative = 0.0;
    let mut scheduler = TickScheduler::new(config).unwrap();
    for _ in 0..70 {
        scheduler.step().unwrap();
    }

    // Five-year term ends on day 1825; tick 61 starts on day 1855
    let events = scheduler.events();
    assert_eq!(events.count(|e| matches!(e, EventType::PresidentElected { .. })), 2);
    assert!(events
        .events_for_tick(61)
        .any(|e| matches!(e.event_type, EventType::PresidentElected { .. })));
    assert_eq!(scheduler.president().term_start.day(), 1855);
}

#[test]
fn test_suspension_motion_goes_to_referendum() {
    let mut config = config(12, 21);
    config.referendum.monthly_probability = 0.0;
    config.legislature.suspension_initiative = 1.0;
    let report = TickScheduler::new(config).unwrap().run().unwrap();

    let events = &report.events;
    assert_eq!(events.count(|e| matches!(e, EventType::SuspensionInitiated { .. })), 1);
    assert_eq!(report.referendums.total, 1);
    let suspended = events.count(|e| matches!(e, EventType::PresidentSuspended { .. }));
    assert_eq!(report.presidents_elected, 1 + suspended);
    assert_eq!(suspended == 1, report.referendums_approved == 1);
}

#[test]
fn test_suspension_fails_without_voters() {
    let counters = Counters::default();
    let providers = Fixture::default().build(&counters);
    let mut config = quiet_config(12);
    config.legislature.suspension_initiative = 1.0;

    let mut scheduler = TickScheduler::with_providers(config, providers).unwrap();
    let president = scheduler.president().name.clone();
    for _ in 0..12 {
        scheduler.step().unwrap();
    }

    let referendum = &scheduler.referendums().referendums()[0];
    assert_eq!(referendum.title, format!("Suspension of President {}", president));
    assert!(!referendum.approved());
    assert_eq!(scheduler.president().name, president);
    assert_eq!(
        scheduler.events().count(|e| matches!(e, EventType::PresidentSuspended { .. })),
        0
    );
}

#[test]
fn test_civic_bills_are_tabled_and_answered() {
    let counters = Counters::default();
    let providers = Fixture {
        civic_bills: true,
        ..Fixture::default()
    }
    .build(&counters);
    let mut config = quiet_config(6);
    config.run.bill_probability = 0.0;
    config.run.civil_proposal_probability = 1.0;

    let mut scheduler = TickScheduler::with_providers(config, providers).unwrap();
    for _ in 0..6 {
        scheduler.step().unwrap();
    }

    let events = scheduler.events();
    assert_eq!(events.count(|e| matches!(e, EventType::CivicBillProposed { .. })), 6);
    let passed = events.count(|e| matches!(e, EventType::LegislationPassed { .. }));
    assert_eq!(counters.reactions.get() as usize, passed);

    let legislature = scheduler.legislature();
    assert!(legislature
        .passed()
        .iter()
        .chain(legislature.failed())
        .filter(|l| l.title == "Environmental Improvement Act")
        .all(|l| l.proposer == "Green Earth"));
}

#[test]
fn test_reference_civil_society_drafts_bills() {
    let mut config = config(12, 13);
    config.run.civil_proposal_probability = 1.0;
    let report = TickScheduler::new(config).unwrap().run().unwrap();

    let civic = report
        .events
        .count(|e| matches!(e, EventType::CivicBillProposed { .. }));
    assert!(civic > 0);
    assert!(report.civil_society_influence > 15.0);
}

#[test]
fn test_vacant_seats_are_refilled_at_year_end() {
    let mut config = config(36, 17);
    config.run.dismissal_review_probability = 1.0;
    config.legislature.admission_success = 1.0;
    let report = TickScheduler::new(config).unwrap().run().unwrap();

    let dismissed = report
        .events
        .count(|e| matches!(e, EventType::MemberDismissed { .. }));
    let admitted: Vec<_> = report
        .events
        .events
        .iter()
        .filter(|e| matches!(e.event_type, EventType::MemberAdmitted { .. }))
        .collect();
    assert!(dismissed > 0);
    assert_eq!(admitted.len(), dismissed);
    assert!(admitted.iter().all(|e| e.tick % 12 == 11));
    assert_eq!(report.legislation.members_seated, 300);
}

#[test]
fn test_report_carries_bank_and_civil_society() {
    let report = technokratia::run(6, Some(3)).unwrap();
    assert!(report
        .bank_report
        .starts_with("Economic Report for Central Bank of Technokratia:"));
    assert!(report.civil_society_influence >= 15.0);

    let summary = report.summary();
    assert!(summary.contains(&format!("President: {}", report.president)));
    assert!(summary.contains("Civil society influence:"));

    let counters = Counters::default();
    let providers = Fixture::default().build(&counters);
    let report = TickScheduler::with_providers(quiet_config(2), providers)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(report.bank_report, "Fixed bank at 2.00% inflation");
    assert_eq!(report.civil_society_influence, 42.0);
}

#[test]
fn test_monthly_records_track_ministry_efficiency() {
    let report = technokratia::run(12, Some(5)).unwrap();
    for record in &report.monthly {
        let lo = record.min_ministry_efficiency.unwrap();
        let hi = record.max_ministry_efficiency.unwrap();
        assert!(0.5 <= lo && lo <= hi && hi <= 1.0);
    }
}

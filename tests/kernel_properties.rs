use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use technokratia::core::calendar::SimDate;
use technokratia::core::config::{GovernmentConfig, LegislatureConfig, ReferendumConfig};
use technokratia::core::types::{CitizenId, MemberId, ProposalId};
use technokratia::government::{Government, GovernmentStatus};
use technokratia::legislature::{Legislature, Rejection};
use technokratia::referendum::{ReferendumStatus, ReferendumSystem, ReferendumType};
use technokratia::{SimulationConfig, SuccessionPolicy, TickScheduler};

fn chamber(seats: u32, quorum: f64, unseated: u32) -> Legislature {
    let config = LegislatureConfig {
        total_seats: seats,
        quorum_percentage: quorum,
        ..LegislatureConfig::default()
    };
    let mut legislature = Legislature::new(&config);
    legislature.fill_seats(&["Progressive Alliance".to_string()]);
    let ids: Vec<MemberId> = legislature
        .members()
        .iter()
        .take(unseated as usize)
        .map(|m| m.id)
        .collect();
    for id in ids {
        legislature.remove_member(id);
    }
    legislature
}

proptest! {
    #[test]
    fn property_quorum_gates_every_proposal(
        seats in 1_u32..400,
        quorum in 0.0_f64..=1.0,
        unseated in 0_u32..400,
    ) {
        let unseated = unseated.min(seats);
        let mut legislature = chamber(seats, quorum, unseated);
        let active = seats - unseated;

        prop_assert_eq!(legislature.active_count() as u32, active);
        prop_assert_eq!(legislature.has_quorum(), active as f64 >= seats as f64 * quorum);

        let result = legislature.propose_legislation("Bill", "Parliament", "Text", 0, false);
        if legislature.has_quorum() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(legislature.proposed().len(), 1);
        } else {
            prop_assert_eq!(result, Err(Rejection::NoQuorum));
            prop_assert!(legislature.proposed().is_empty());
        }
    }

    #[test]
    fn property_tally_counts_every_active_member(
        seats in 1_u32..300,
        unseated in 0_u32..300,
        bills in 1_usize..12,
        seed in 0_u64..10_000,
    ) {
        let unseated = unseated.min(seats);
        let mut legislature = chamber(seats, 0.5, unseated);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for i in 0..bills {
            legislature
                .propose_legislation(format!("Bill {}", i), "Parliament", "Text", 0, true)
                .unwrap();
        }
        while let Some(id) = legislature.oldest_proposal() {
            let outcome = legislature.vote_on_legislation(id, true, &mut rng).unwrap();
            prop_assert_eq!(outcome.tally.total() as usize, legislature.active_count());
            prop_assert_eq!(outcome.passed, outcome.tally.votes_for > outcome.tally.votes_against);
        }

        prop_assert!(legislature.proposed().is_empty());
        prop_assert_eq!(legislature.passed().len() + legislature.failed().len(), bills);
    }

    #[test]
    fn property_resolved_bill_sits_in_one_queue(
        bills in 1_u32..10,
        seed in 0_u64..10_000,
    ) {
        let mut legislature = chamber(100, 0.5, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ids: Vec<ProposalId> = (0..bills)
            .map(|i| {
                legislature
                    .propose_legislation(format!("Bill {}", i), "Parliament", "Text", 0, false)
                    .unwrap()
            })
            .collect();

        for id in &ids {
            legislature.vote_on_legislation(*id, false, &mut rng).unwrap();
            prop_assert_eq!(
                legislature.vote_on_legislation(*id, false, &mut rng),
                Err(Rejection::AlreadyResolved)
            );
        }

        for id in &ids {
            let in_passed = legislature.passed().iter().any(|l| l.id == *id);
            let in_failed = legislature.failed().iter().any(|l| l.id == *id);
            let in_proposed = legislature.proposed().iter().any(|l| l.id == *id);
            prop_assert!(in_passed ^ in_failed);
            prop_assert!(!in_proposed);
        }
    }

    #[test]
    fn property_quorum_gates_referendum_proposals(
        has_quorum in any::<bool>(),
        ignore_quorum in any::<bool>(),
        earlier in 0_usize..5,
    ) {
        let mut system = ReferendumSystem::new(&ReferendumConfig::default());
        for i in 0..earlier {
            system
                .propose(format!("Earlier {}", i), "", ReferendumType::Local, true, false)
                .unwrap();
        }

        let kind = ReferendumType::National;
        let result = system.propose("Measure", "", kind, has_quorum, ignore_quorum);
        if has_quorum || ignore_quorum {
            let id = result.unwrap();
            prop_assert_eq!(system.referendums().len(), earlier + 1);
            prop_assert_eq!(system.get(id).unwrap().status, ReferendumStatus::Proposed);
        } else {
            prop_assert_eq!(result, Err(Rejection::NoQuorum));
            prop_assert_eq!(system.referendums().len(), earlier);
        }
    }

    #[test]
    fn property_dissolved_government_stays_dissolved(
        days in proptest::collection::vec(0_u32..3_000, 1..40),
        flows in proptest::collection::vec((-1.0e9_f64..1.0e9, 0.0_f64..1.0e9), 1..40),
        seed in 0_u64..10_000,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let config = GovernmentConfig::default();
        let mut government = Government::form(MemberId(1), SimDate(0), &config, &mut rng);

        let mut days = days;
        days.sort_unstable();
        let mut dissolved_at = None;
        for (day, (revenue, spending)) in days.iter().zip(flows.iter().cycle()) {
            let today = SimDate(*day);
            government.declare_emergency(today);
            government.check_emergency_status(today);
            government.update_efficiencies(&mut rng);
            government.update_approval_rating();
            government.update_budget(*revenue, *spending);
            government.implement_austerity();
            if government.check_dissolution(today) {
                prop_assert!(dissolved_at.is_none());
                prop_assert!(*day >= config.term_days);
                dissolved_at = Some(*day);
            }

            if dissolved_at.is_some() {
                prop_assert_eq!(government.status(), GovernmentStatus::Dissolved);
                prop_assert!(!government.declare_emergency(today));
                prop_assert!(government.emergency_end_date().is_none());
            }
            prop_assert!((0.0..=100.0).contains(&government.approval_rating));
        }
    }

    #[test]
    fn property_referendum_votes_are_conserved(
        ballots in proptest::collection::vec((0_u32..90, any::<bool>()), 0..400),
        seats in 1_u32..600,
        seed in 0_u64..10_000,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut system = ReferendumSystem::new(&ReferendumConfig::default());
        let id = system
            .propose("Measure", "A national question", ReferendumType::National, true, false)
            .unwrap();
        system.start(id, seats, 0).unwrap();

        let mut accepted = 0;
        for (i, (age, in_favor)) in ballots.iter().enumerate() {
            if system.cast_vote(id, CitizenId(i as u32), *age, *in_favor) {
                accepted += 1;
            }
        }
        prop_assert!(system.complete(id, 1, &mut rng).unwrap());

        let referendum = system.get(id).unwrap();
        prop_assert_eq!(referendum.total_votes, accepted);
        prop_assert_eq!(referendum.votes_for + referendum.votes_against, referendum.total_votes);

        let thresholds = referendum.thresholds.unwrap();
        let valid = referendum.total_votes >= thresholds.quorum
            && referendum.total_votes >= thresholds.min_votes;
        let expected = if valid { ReferendumStatus::Completed } else { ReferendumStatus::Failed };
        prop_assert_eq!(referendum.status, expected);
        prop_assert!(!system.complete(id, 2, &mut rng).unwrap());
    }
}

#[test]
fn property_indicators_stay_clamped_over_long_run() {
    let mut config = SimulationConfig::default();
    config.run.months = 10_000;
    config.run.seed = Some(2024);
    config.run.succession = SuccessionPolicy::InterimGovernment;
    config.population.initial_citizens = 200;
    // Members seated together would all rotate out in the same year
    config.legislature.years_until_break = 1_000;

    let report = TickScheduler::new(config).unwrap().run().unwrap();
    assert_eq!(report.months_simulated, 10_000);
    assert!(report.governments_formed > 1);
    assert!(report.transitions.len() <= 64);

    let signed = |v: f64| (-1.0..=1.0).contains(&v);
    let efficiency = |v: Option<f64>| v.map_or(true, |e| (0.5..=1.0).contains(&e));
    for record in &report.monthly {
        let i = &record.indicators;
        assert!(signed(i.economic_stability), "tick {}: {:?}", record.tick, i);
        assert!(signed(i.political_stability), "tick {}: {:?}", record.tick, i);
        assert!(signed(i.social_cohesion), "tick {}: {:?}", record.tick, i);
        assert!(signed(i.societal_trust), "tick {}: {:?}", record.tick, i);
        assert!(signed(record.overall_stability));
        if let Some(approval) = record.approval_rating {
            assert!((0.0..=100.0).contains(&approval));
        }
        if let Some(budget) = record.ministry_budget {
            assert!(budget >= 0.0, "tick {}: budget {}", record.tick, budget);
        }
        assert!(efficiency(record.min_ministry_efficiency), "tick {}", record.tick);
        assert!(efficiency(record.max_ministry_efficiency), "tick {}", record.tick);
        assert_eq!(
            record.min_ministry_efficiency.is_some(),
            record.government_status.is_some()
        );
    }
}

//! First-match society state classification with transition history

use std::collections::VecDeque;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::SocietyConfig;
use crate::core::types::Tick;
use crate::society::indicators::{EconomicData, PoliticalData, SocialData, SocietyIndicators};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocietyStateType {
    #[default]
    Stable,
    EconomicCrisis,
    PoliticalCrisis,
    SocialUnrest,
    StateOfEmergency,
    Prosperity,
}

impl SocietyStateType {
    pub fn name(&self) -> &'static str {
        match self {
            SocietyStateType::Stable => "stable",
            SocietyStateType::EconomicCrisis => "economic crisis",
            SocietyStateType::PoliticalCrisis => "political crisis",
            SocietyStateType::SocialUnrest => "social unrest",
            SocietyStateType::StateOfEmergency => "state of emergency",
            SocietyStateType::Prosperity => "prosperity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    pub tick: Tick,
    pub previous: SocietyStateType,
    pub new: SocietyStateType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    pub economic_crisis: f64,
    pub political_crisis: f64,
    pub social_unrest: f64,
    pub prosperity: f64,
}

impl From<&SocietyConfig> for ClassifierThresholds {
    fn from(config: &SocietyConfig) -> Self {
        Self {
            economic_crisis: config.economic_crisis_threshold,
            political_crisis: config.political_crisis_threshold,
            social_unrest: config.social_unrest_threshold,
            prosperity: config.prosperity_threshold,
        }
    }
}

impl ClassifierThresholds {
    /// Priority-ordered: the first matching rule wins.
    ///
    /// No dwell time is applied, so a borderline score can flip the
    /// state every tick.
    pub fn classify(&self, indicators: &SocietyIndicators) -> SocietyStateType {
        if indicators.economic_stability < self.economic_crisis {
            SocietyStateType::EconomicCrisis
        } else if indicators.political_stability < self.political_crisis {
            SocietyStateType::PoliticalCrisis
        } else if indicators.social_cohesion < self.social_unrest {
            SocietyStateType::SocialUnrest
        } else if indicators.all_above(self.prosperity) {
            SocietyStateType::Prosperity
        } else {
            SocietyStateType::Stable
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocietyStateClassifier {
    state: SocietyStateType,
    indicators: SocietyIndicators,
    economic: EconomicData,
    political: PoliticalData,
    social: SocialData,
    thresholds: ClassifierThresholds,
    history: VecDeque<StateTransition>,
    capacity: usize,
}

impl SocietyStateClassifier {
    pub fn new(config: &SocietyConfig) -> Self {
        Self {
            state: SocietyStateType::Stable,
            indicators: SocietyIndicators::default(),
            economic: EconomicData::default(),
            political: PoliticalData::default(),
            social: SocialData::default(),
            thresholds: ClassifierThresholds::from(config),
            history: VecDeque::with_capacity(config.history_capacity),
            capacity: config.history_capacity.max(1),
        }
    }

    pub fn state(&self) -> SocietyStateType {
        self.state
    }

    pub fn indicators(&self) -> &SocietyIndicators {
        &self.indicators
    }

    pub fn overall_stability(&self) -> f64 {
        self.indicators.overall_stability()
    }

    /// Oldest first
    pub fn history(&self) -> impl Iterator<Item = &StateTransition> {
        self.history.iter()
    }

    /// Recompute all indicators from fresh snapshots and reclassify
    pub fn update(
        &mut self,
        tick: Tick,
        economic: EconomicData,
        political: PoliticalData,
        social: SocialData,
    ) -> SocietyStateType {
        self.economic = economic;
        self.political = political;
        self.social = social;
        self.indicators = SocietyIndicators::compute(&economic, &political, &social);
        let next = self.thresholds.classify(&self.indicators);
        self.transition(tick, next);
        self.state
    }

    /// Enter StateOfEmergency after the government declares one.
    ///
    /// The next `update` reclassifies from indicators as usual.
    pub fn record_emergency(&mut self, tick: Tick) -> bool {
        self.transition(tick, SocietyStateType::StateOfEmergency)
    }

    fn transition(&mut self, tick: Tick, next: SocietyStateType) -> bool {
        if next == self.state {
            return false;
        }
        info!("Society state: {} -> {}", self.state.name(), next.name());
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(StateTransition {
            tick,
            previous: self.state,
            new: next,
        });
        self.state = next;
        true
    }

    pub fn state_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "Society State Report");
        let _ = writeln!(report, "====================");
        let _ = writeln!(report, "State: {}", self.state.name());
        let _ = writeln!(report);
        let _ = writeln!(report, "Economic Indicators:");
        let _ = writeln!(report, "  gdp_growth: {:.3}", self.economic.gdp_growth);
        let _ = writeln!(report, "  inflation: {:.3}", self.economic.inflation);
        let _ = writeln!(report, "  unemployment: {:.3}", self.economic.unemployment);
        let _ = writeln!(report);
        let _ = writeln!(report, "Political Indicators:");
        let _ = writeln!(
            report,
            "  government_approval: {:.2}",
            self.political.government_approval
        );
        let _ = writeln!(
            report,
            "  parliament_effectiveness: {:.2}",
            self.political.parliament_effectiveness
        );
        let _ = writeln!(
            report,
            "  political_stability: {:.2}",
            self.political.political_stability
        );
        let _ = writeln!(report);
        let _ = writeln!(report, "Social Indicators:");
        let _ = writeln!(report, "  social_cohesion: {:.2}", self.social.social_cohesion);
        let _ = writeln!(report, "  media_trust: {:.2}", self.social.media_trust);
        let _ = writeln!(report, "  citizen_satisfaction: {:.2}", self.social.citizen_satisfaction);
        let _ = writeln!(report);
        let _ = write!(report, "Overall Stability: {:.2}", self.overall_stability());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(economic: f64, political: f64, social: f64, trust: f64) -> SocietyIndicators {
        SocietyIndicators {
            economic_stability: economic,
            political_stability: political,
            social_cohesion: social,
            societal_trust: trust,
        }
    }

    fn thresholds() -> ClassifierThresholds {
        ClassifierThresholds::from(&SocietyConfig::default())
    }

    #[test]
    fn test_economic_crisis_takes_priority() {
        let state = thresholds().classify(&indicators(-0.7, -0.9, -0.9, 0.0));
        assert_eq!(state, SocietyStateType::EconomicCrisis);
    }

    #[test]
    fn test_priority_order() {
        let t = thresholds();
        assert_eq!(
            t.classify(&indicators(0.0, -0.6, -0.9, 0.0)),
            SocietyStateType::PoliticalCrisis
        );
        assert_eq!(t.classify(&indicators(0.0, 0.0, -0.5, 0.0)), SocietyStateType::SocialUnrest);
        assert_eq!(t.classify(&indicators(0.8, 0.8, 0.8, 0.8)), SocietyStateType::Prosperity);
        assert_eq!(t.classify(&indicators(0.8, 0.8, 0.8, 0.7)), SocietyStateType::Stable);
        assert_eq!(t.classify(&indicators(-0.6, -0.5, -0.4, 0.0)), SocietyStateType::Stable);
    }

    fn crisis_economy() -> EconomicData {
        EconomicData {
            gdp_growth: -0.2,
            inflation: 0.3,
            unemployment: 0.4,
        }
    }

    fn calm_politics() -> PoliticalData {
        PoliticalData {
            government_approval: 50.0,
            parliament_effectiveness: 0.5,
            political_stability: 0.5,
        }
    }

    fn calm_society() -> SocialData {
        SocialData {
            social_cohesion: 0.5,
            media_trust: 0.5,
            citizen_satisfaction: 0.5,
        }
    }

    #[test]
    fn test_transitions_logged_only_on_change() {
        let mut classifier = SocietyStateClassifier::new(&SocietyConfig::default());
        classifier.update(0, EconomicData::default(), calm_politics(), calm_society());
        assert_eq!(classifier.history().count(), 0);

        classifier.update(1, crisis_economy(), calm_politics(), calm_society());
        classifier.update(2, crisis_economy(), calm_politics(), calm_society());
        let history: Vec<_> = classifier.history().copied().collect();
        assert_eq!(
            history,
            vec![StateTransition {
                tick: 1,
                previous: SocietyStateType::Stable,
                new: SocietyStateType::EconomicCrisis,
            }]
        );
    }

    #[test]
    fn test_emergency_is_overridden_by_next_update() {
        let mut classifier = SocietyStateClassifier::new(&SocietyConfig::default());
        assert!(classifier.record_emergency(3));
        assert!(!classifier.record_emergency(3));
        assert_eq!(classifier.state(), SocietyStateType::StateOfEmergency);

        let state = classifier.update(4, EconomicData::default(), calm_politics(), calm_society());
        assert_eq!(state, SocietyStateType::Stable);
        assert_eq!(classifier.history().count(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let config = SocietyConfig {
            history_capacity: 4,
            ..SocietyConfig::default()
        };
        let mut classifier = SocietyStateClassifier::new(&config);
        for tick in 0..20 {
            let economy = if tick % 2 == 0 {
                crisis_economy()
            } else {
                EconomicData::default()
            };
            classifier.update(tick, economy, calm_politics(), calm_society());
        }
        let history: Vec<_> = classifier.history().collect();
        assert_eq!(history.len(), 4);
        assert_eq!(history[3].tick, 19);
    }

    #[test]
    fn test_state_report_mentions_overall_stability() {
        let mut classifier = SocietyStateClassifier::new(&SocietyConfig::default());
        classifier.update(0, crisis_economy(), calm_politics(), calm_society());
        let report = classifier.state_report();
        assert!(report.contains("State: economic crisis"));
        assert!(report.contains("Overall Stability: -0.40"));
    }
}

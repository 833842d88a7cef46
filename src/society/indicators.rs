//! Indicator snapshots and their reduction to stability scores
//!
//! Every term is a deviation from a neutral point, clamped to [-1, 1]
//! before weighting; every category score is clamped again.

use serde::{Deserialize, Serialize};

use crate::core::types::clamp_signed;

/// Healthy inflation rate
pub const TARGET_INFLATION: f64 = 0.02;
/// Natural unemployment rate
pub const NATURAL_UNEMPLOYMENT: f64 = 0.05;
/// Deviation that saturates an economic term
const ECONOMIC_SCALE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EconomicData {
    /// Monthly GDP growth as a fraction
    pub gdp_growth: f64,
    /// Inflation as a fraction
    pub inflation: f64,
    /// Unemployment rate in [0, 1]
    pub unemployment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoliticalData {
    /// Government approval in [0, 100]
    pub government_approval: f64,
    /// Share of resolved bills that passed, [0, 1]
    pub parliament_effectiveness: f64,
    /// Institutional stability, [0, 1]
    pub political_stability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SocialData {
    pub social_cohesion: f64,
    pub media_trust: f64,
    pub citizen_satisfaction: f64,
}

/// Map a [0, 1] score onto [-1, 1] around 0.5
fn centred(score: f64) -> f64 {
    clamp_signed((score - 0.5) * 2.0)
}

pub fn economic_stability(data: &EconomicData) -> f64 {
    let growth = clamp_signed(data.gdp_growth / ECONOMIC_SCALE);
    let inflation = clamp_signed(-(data.inflation - TARGET_INFLATION).abs() / ECONOMIC_SCALE);
    let unemployment = clamp_signed(-(data.unemployment - NATURAL_UNEMPLOYMENT) / ECONOMIC_SCALE);
    clamp_signed(0.4 * growth + 0.3 * inflation + 0.3 * unemployment)
}

pub fn political_stability(data: &PoliticalData) -> f64 {
    let approval = clamp_signed((data.government_approval - 50.0) / 50.0);
    let effectiveness = centred(data.parliament_effectiveness);
    let stability = centred(data.political_stability);
    clamp_signed(0.4 * approval + 0.3 * effectiveness + 0.3 * stability)
}

pub fn social_cohesion(data: &SocialData) -> f64 {
    let cohesion = centred(data.social_cohesion);
    let trust = centred(data.media_trust);
    let satisfaction = centred(data.citizen_satisfaction);
    clamp_signed(0.4 * cohesion + 0.3 * trust + 0.3 * satisfaction)
}

/// Trust in institutions, from media trust and citizen satisfaction
pub fn societal_trust(data: &SocialData) -> f64 {
    clamp_signed(0.5 * centred(data.media_trust) + 0.5 * centred(data.citizen_satisfaction))
}

/// The four [-1, 1] scores the classifier decides on.
///
/// Recomputed from scratch every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SocietyIndicators {
    pub economic_stability: f64,
    pub political_stability: f64,
    pub social_cohesion: f64,
    pub societal_trust: f64,
}

impl SocietyIndicators {
    pub fn compute(
        economic: &EconomicData,
        political: &PoliticalData,
        social: &SocialData,
    ) -> Self {
        Self {
            economic_stability: economic_stability(economic),
            political_stability: political_stability(political),
            social_cohesion: social_cohesion(social),
            societal_trust: societal_trust(social),
        }
    }

    pub fn overall_stability(&self) -> f64 {
        clamp_signed(
            0.4 * self.economic_stability
                + 0.3 * self.political_stability
                + 0.3 * self.social_cohesion,
        )
    }

    pub fn all_above(&self, threshold: f64) -> bool {
        self.economic_stability > threshold
            && self.political_stability > threshold
            && self.social_cohesion > threshold
            && self.societal_trust > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_economy_is_balanced() {
        let data = EconomicData {
            gdp_growth: 0.0,
            inflation: TARGET_INFLATION,
            unemployment: NATURAL_UNEMPLOYMENT,
        };
        assert!(economic_stability(&data).abs() < 1e-12);
    }

    #[test]
    fn test_inflation_deviation_lowers_stability() {
        let base = EconomicData {
            gdp_growth: 0.0,
            inflation: TARGET_INFLATION,
            unemployment: NATURAL_UNEMPLOYMENT,
        };
        let high = EconomicData { inflation: 0.12, ..base };
        let low = EconomicData { inflation: -0.08, ..base };
        assert!((economic_stability(&high) + 0.3).abs() < 1e-9);
        assert!((economic_stability(&low) + 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_unemployment_above_natural_rate_lowers_stability() {
        let data = EconomicData {
            gdp_growth: 0.0,
            inflation: TARGET_INFLATION,
            unemployment: 0.15,
        };
        assert!((economic_stability(&data) + 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_inputs_are_clamped() {
        let economic = EconomicData {
            gdp_growth: -50.0,
            inflation: 10.0,
            unemployment: 1.0,
        };
        assert_eq!(economic_stability(&economic), -1.0);

        let political = PoliticalData {
            government_approval: 500.0,
            parliament_effectiveness: 9.0,
            political_stability: 9.0,
        };
        assert_eq!(political_stability(&political), 1.0);
    }

    #[test]
    fn test_political_scale() {
        let data = PoliticalData {
            government_approval: 0.0,
            parliament_effectiveness: 0.5,
            political_stability: 0.5,
        };
        assert!((political_stability(&data) + 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_overall_stability_weights() {
        let indicators = SocietyIndicators {
            economic_stability: 1.0,
            political_stability: -1.0,
            social_cohesion: 0.5,
            societal_trust: 0.0,
        };
        assert!((indicators.overall_stability() - 0.25).abs() < 1e-9);
    }
}

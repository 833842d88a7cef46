//! Reference media landscape: outlets, credibility and public trust

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::core::types::{clamp_percent, clamp_unit};
use crate::providers::MediaLandscape;

/// Weight of the latest news cycle in public trust
const TRUST_RESPONSIVENESS: f64 = 0.1;
/// Monthly relaxation of coverage intensity towards its baseline
const COVERAGE_RELAXATION: f64 = 0.1;
const BASELINE_COVERAGE: f64 = 0.5;
const CRISIS_COVERAGE_BOOST: f64 = 0.2;
const MIN_AUDIENCE: f64 = 100.0;
const MAX_AUDIENCE: f64 = 10_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Newspaper,
    TvNetwork,
    OnlinePortal,
    SocialPlatform,
    IndependentJournalist,
}

impl MediaType {
    /// Digital audiences grow and shrink twice as fast
    fn audience_volatility(&self) -> f64 {
        match self {
            MediaType::OnlinePortal | MediaType::SocialPlatform => 0.2,
            _ => 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaOutlet {
    pub name: String,
    pub kind: MediaType,
    /// 0-100
    pub credibility: f64,
    pub audience_reach: f64,
    /// -1 (left) to 1 (right)
    pub bias: f64,
    /// 0 (factual) to 1 (sensational)
    pub sensationalism: f64,
}

impl MediaOutlet {
    pub fn new<R: Rng + ?Sized>(name: impl Into<String>, kind: MediaType, rng: &mut R) -> Self {
        Self {
            name: name.into(),
            kind,
            credibility: 50.0,
            audience_reach: 1_000.0,
            bias: rng.gen_range(-1.0..=1.0),
            sensationalism: rng.gen_range(0.0..=1.0),
        }
    }

    /// Publish one story; returns its perceived factuality
    fn publish<R: Rng + ?Sized>(&mut self, factuality: f64, rng: &mut R) -> f64 {
        let perceived = factuality * (1.0 - 0.5 * self.sensationalism);
        self.credibility = clamp_percent(self.credibility + (perceived - 0.5) * 10.0);
        let volatility = self.kind.audience_volatility();
        let change = rng.gen_range(-1.0..=1.0) * volatility * self.audience_reach;
        self.audience_reach = (self.audience_reach + change).clamp(MIN_AUDIENCE, MAX_AUDIENCE);
        perceived
    }

    pub fn influence(&self) -> f64 {
        self.audience_reach * self.credibility / 100.0
    }
}

pub fn bias_label(bias: f64) -> &'static str {
    if bias < -0.6 {
        "Far Left"
    } else if bias < -0.2 {
        "Left"
    } else if bias < 0.2 {
        "Center"
    } else if bias < 0.6 {
        "Right"
    } else {
        "Far Right"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaMarket {
    pub outlets: Vec<MediaOutlet>,
    /// Public trust in media, 0-100
    pub trust: f64,
    pub coverage: f64,
}

impl MediaMarket {
    pub fn new() -> Self {
        Self {
            outlets: Vec::new(),
            trust: 50.0,
            coverage: BASELINE_COVERAGE,
        }
    }

    /// The five outlet archetypes, one of each kind
    pub fn with_default_outlets<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut market = Self::new();
        for (name, kind) in [
            ("Daily Chronicle", MediaType::Newspaper),
            ("Global News Network", MediaType::TvNetwork),
            ("TechTruth", MediaType::OnlinePortal),
            ("SocialPulse", MediaType::SocialPlatform),
            ("Independent Voice", MediaType::IndependentJournalist),
        ] {
            market.add_outlet(MediaOutlet::new(name, kind, rng));
        }
        market
    }

    pub fn add_outlet(&mut self, outlet: MediaOutlet) {
        self.outlets.push(outlet);
    }

    pub fn most_influential(&self, n: usize) -> Vec<&MediaOutlet> {
        let mut outlets: Vec<&MediaOutlet> = self.outlets.iter().collect();
        outlets.sort_by(|a, b| b.influence().total_cmp(&a.influence()));
        outlets.truncate(n);
        outlets
    }
}

impl Default for MediaMarket {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaLandscape for MediaMarket {
    fn simulate_news_cycle(&mut self, rng: &mut dyn RngCore) {
        self.coverage += (BASELINE_COVERAGE - self.coverage) * COVERAGE_RELAXATION;
        if self.outlets.is_empty() {
            return;
        }
        let mut total = 0.0;
        for outlet in &mut self.outlets {
            let factuality = rng.gen_range(0.5..=1.0);
            total += outlet.publish(factuality, rng);
        }
        let average = total / self.outlets.len() as f64;
        self.trust = clamp_percent(
            (1.0 - TRUST_RESPONSIVENESS) * self.trust + TRUST_RESPONSIVENESS * average * 100.0,
        );
    }

    fn trust_score(&self) -> f64 {
        clamp_unit(self.trust / 100.0)
    }

    fn coverage_intensity(&self) -> f64 {
        clamp_unit(self.coverage)
    }

    /// Crisis coverage: wider reach, and credibility judged against a
    /// temporarily more sensational tone.
    fn increase_coverage(&mut self, rng: &mut dyn RngCore) {
        self.coverage = clamp_unit(self.coverage + CRISIS_COVERAGE_BOOST);
        for outlet in &mut self.outlets {
            outlet.audience_reach = (outlet.audience_reach * 1.2).min(MAX_AUDIENCE);
            let crisis_tone = (outlet.sensationalism * 1.5).min(1.0);
            let quality = 0.8 - crisis_tone + rng.gen_range(-0.05..=0.05);
            outlet.credibility = clamp_percent(outlet.credibility + quality * 10.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bias_labels() {
        assert_eq!(bias_label(-0.9), "Far Left");
        assert_eq!(bias_label(-0.3), "Left");
        assert_eq!(bias_label(0.0), "Center");
        assert_eq!(bias_label(0.5), "Right");
        assert_eq!(bias_label(0.6), "Far Right");
    }

    #[test]
    fn test_news_cycles_keep_scores_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut market = MediaMarket::with_default_outlets(&mut rng);
        for i in 0..2_000 {
            market.simulate_news_cycle(&mut rng);
            if i % 3 == 0 {
                market.increase_coverage(&mut rng);
            }
            assert!((0.0..=1.0).contains(&market.trust_score()));
            assert!((0.0..=1.0).contains(&market.coverage_intensity()));
            for outlet in &market.outlets {
                assert!((0.0..=100.0).contains(&outlet.credibility));
                assert!(outlet.audience_reach >= MIN_AUDIENCE);
            }
        }
    }

    #[test]
    fn test_increase_coverage_raises_intensity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut market = MediaMarket::with_default_outlets(&mut rng);
        market.increase_coverage(&mut rng);
        assert!((market.coverage_intensity() - 0.7).abs() < 1e-12);
        assert_eq!(market.most_influential(3).len(), 3);
    }

    #[test]
    fn test_empty_market_keeps_trust() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut market = MediaMarket::new();
        market.simulate_news_cycle(&mut rng);
        assert_eq!(market.trust_score(), 0.5);
    }
}

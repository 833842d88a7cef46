//! Society state: indicator reduction and classification

pub mod classifier;
pub mod indicators;

pub use classifier::{
    ClassifierThresholds, SocietyStateClassifier, SocietyStateType, StateTransition,
};
pub use indicators::{EconomicData, PoliticalData, SocialData, SocietyIndicators};

//! Profile module - cognitive profile scoring and classification.
//!
//! # Domain Invariants
//!
//! 1. Each learner has at most one profile
//! 2. Behavioral and technical scores lie in [0, 100]
//! 3. The cognitive level is one of five fixed tiers
//! 4. The learning style is Practical, Theoretical or Visual

mod cognitive_level;
mod learning_style;
#[allow(clippy::module_inception)]
mod profile;
mod scoring;

pub use cognitive_level::{
    CognitiveLevel, ADVANCED_THRESHOLD, DEVELOPING_THRESHOLD, MODERATE_THRESHOLD,
    STRONG_ANALYTICAL_THRESHOLD,
};
pub use learning_style::{LearningStyle, STYLE_SIGNAL_THRESHOLD};
pub use profile::CognitiveProfile;
pub use scoring::{
    ProfileScores, ScoringEngine, BEHAVIORAL_WEIGHT, RETRY_WEIGHT, SPEED_WEIGHT, TECHNICAL_WEIGHT,
};

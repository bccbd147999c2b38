//! Cognitive level tiers derived from the final score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lower bound (inclusive) of each tier above Basic Learner.
pub const DEVELOPING_THRESHOLD: f64 = 40.0;
pub const MODERATE_THRESHOLD: f64 = 60.0;
pub const ADVANCED_THRESHOLD: f64 = 75.0;
pub const STRONG_ANALYTICAL_THRESHOLD: f64 = 90.0;

/// One of five ordered learner tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CognitiveLevel {
    #[serde(rename = "Basic Learner")]
    BasicLearner,
    #[serde(rename = "Developing Learner")]
    DevelopingLearner,
    #[serde(rename = "Moderate Performer")]
    ModeratePerformer,
    #[serde(rename = "Advanced Learner")]
    AdvancedLearner,
    #[serde(rename = "Strong Analytical Learner")]
    StrongAnalyticalLearner,
}

impl CognitiveLevel {
    /// All tiers, lowest first.
    pub const ALL: [CognitiveLevel; 5] = [
        CognitiveLevel::BasicLearner,
        CognitiveLevel::DevelopingLearner,
        CognitiveLevel::ModeratePerformer,
        CognitiveLevel::AdvancedLearner,
        CognitiveLevel::StrongAnalyticalLearner,
    ];

    /// Classifies a final score. Bounds are inclusive below, exclusive above:
    ///
    /// - `< 40` Basic Learner
    /// - `< 60` Developing Learner
    /// - `< 75` Moderate Performer
    /// - `< 90` Advanced Learner
    /// - otherwise Strong Analytical Learner
    pub fn from_score(final_score: f64) -> Self {
        if final_score < DEVELOPING_THRESHOLD {
            Self::BasicLearner
        } else if final_score < MODERATE_THRESHOLD {
            Self::DevelopingLearner
        } else if final_score < ADVANCED_THRESHOLD {
            Self::ModeratePerformer
        } else if final_score < STRONG_ANALYTICAL_THRESHOLD {
            Self::AdvancedLearner
        } else {
            Self::StrongAnalyticalLearner
        }
    }

    /// Human-readable label, also the persisted and JSON form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BasicLearner => "Basic Learner",
            Self::DevelopingLearner => "Developing Learner",
            Self::ModeratePerformer => "Moderate Performer",
            Self::AdvancedLearner => "Advanced Learner",
            Self::StrongAnalyticalLearner => "Strong Analytical Learner",
        }
    }

    /// Study strategy recommended for this tier.
    pub fn recommended_strategy(&self) -> &'static str {
        match self {
            Self::BasicLearner => {
                "Recommend structured learning, Daily 1 hour focused study, Video-based learning."
            }
            Self::DevelopingLearner => {
                "Focus on foundational concepts and take more practice tests."
            }
            Self::ModeratePerformer => {
                "Practice problem solving, Weekly mock tests, Revision strategy."
            }
            Self::AdvancedLearner => {
                "Competitive exams practice, Timed quizzes, Analytical challenges."
            }
            Self::StrongAnalyticalLearner => {
                "Focus on complex edge-cases, help tutor basic learners, advanced project building."
            }
        }
    }
}

impl Default for CognitiveLevel {
    fn default() -> Self {
        Self::BasicLearner
    }
}

impl fmt::Display for CognitiveLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CognitiveLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.label() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("cognitive_level", format!("unknown tier '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_below() {
        assert_eq!(CognitiveLevel::from_score(39.999), CognitiveLevel::BasicLearner);
        assert_eq!(CognitiveLevel::from_score(40.0), CognitiveLevel::DevelopingLearner);
        assert_eq!(CognitiveLevel::from_score(59.999), CognitiveLevel::DevelopingLearner);
        assert_eq!(CognitiveLevel::from_score(60.0), CognitiveLevel::ModeratePerformer);
        assert_eq!(CognitiveLevel::from_score(74.999), CognitiveLevel::ModeratePerformer);
        assert_eq!(CognitiveLevel::from_score(75.0), CognitiveLevel::AdvancedLearner);
        assert_eq!(CognitiveLevel::from_score(89.999), CognitiveLevel::AdvancedLearner);
        assert_eq!(CognitiveLevel::from_score(90.0), CognitiveLevel::StrongAnalyticalLearner);
    }

    #[test]
    fn extremes_classify() {
        assert_eq!(CognitiveLevel::from_score(0.0), CognitiveLevel::BasicLearner);
        assert_eq!(CognitiveLevel::from_score(100.0), CognitiveLevel::StrongAnalyticalLearner);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(CognitiveLevel::BasicLearner < CognitiveLevel::DevelopingLearner);
        assert!(CognitiveLevel::AdvancedLearner < CognitiveLevel::StrongAnalyticalLearner);
    }

    #[test]
    fn label_round_trips_through_from_str() {
        for level in CognitiveLevel::ALL {
            assert_eq!(level.label().parse::<CognitiveLevel>().unwrap(), level);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("Beginner".parse::<CognitiveLevel>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&CognitiveLevel::ModeratePerformer).unwrap();
        assert_eq!(json, "\"Moderate Performer\"");
    }

    #[test]
    fn every_tier_has_a_strategy() {
        for level in CognitiveLevel::ALL {
            assert!(!level.recommended_strategy().is_empty());
        }
        assert!(CognitiveLevel::BasicLearner
            .recommended_strategy()
            .contains("Video-based learning"));
    }
}

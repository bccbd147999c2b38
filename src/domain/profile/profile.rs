//! CognitiveProfile aggregate root.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CognitiveLevel, LearningStyle, ProfileScores};
use crate::domain::foundation::{CognitiveProfileId, UserId};

/// A learner's derived skill and style classification.
///
/// At most one exists per learner. It is created by the first scoring run
/// and afterwards overwritten in place by each refresh; never deleted.
///
/// Tier and style are held as labels. Rows written before the current tier
/// set (e.g. `"Beginner"`) keep their label and read back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveProfile {
    id: CognitiveProfileId,
    user_id: UserId,
    behavioral_score: f64,
    technical_score: f64,
    cognitive_level: String,
    learning_style: String,
    recommended_strategy: String,
    last_updated: DateTime<Utc>,
}

impl CognitiveProfile {
    /// Creates the first profile for a learner from a scoring run.
    pub fn from_scores(user_id: UserId, scores: &ProfileScores, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: CognitiveProfileId::new(),
            user_id,
            behavioral_score: scores.behavioral_score,
            technical_score: scores.technical_score,
            cognitive_level: scores.cognitive_level.label().to_string(),
            learning_style: scores.learning_style.label().to_string(),
            recommended_strategy: scores.recommended_strategy.clone(),
            last_updated: timestamp,
        }
    }

    /// Rebuilds a profile from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CognitiveProfileId,
        user_id: UserId,
        behavioral_score: f64,
        technical_score: f64,
        cognitive_level: impl Into<String>,
        learning_style: impl Into<String>,
        recommended_strategy: String,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            behavioral_score,
            technical_score,
            cognitive_level: cognitive_level.into(),
            learning_style: learning_style.into(),
            recommended_strategy,
            last_updated,
        }
    }

    /// Overwrites the score and classification fields; id and owner are kept.
    pub fn apply_scores(&mut self, scores: &ProfileScores, timestamp: DateTime<Utc>) {
        self.behavioral_score = scores.behavioral_score;
        self.technical_score = scores.technical_score;
        self.cognitive_level = scores.cognitive_level.label().to_string();
        self.learning_style = scores.learning_style.label().to_string();
        self.recommended_strategy = scores.recommended_strategy.clone();
        self.last_updated = timestamp;
    }

    pub fn id(&self) -> CognitiveProfileId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn behavioral_score(&self) -> f64 {
        self.behavioral_score
    }

    pub fn technical_score(&self) -> f64 {
        self.technical_score
    }

    /// The tier, or `None` when the stored label is not a known tier.
    pub fn cognitive_level(&self) -> Option<CognitiveLevel> {
        self.cognitive_level.parse().ok()
    }

    pub fn cognitive_level_label(&self) -> &str {
        &self.cognitive_level
    }

    pub fn learning_style(&self) -> Option<LearningStyle> {
        self.learning_style.parse().ok()
    }

    pub fn learning_style_label(&self) -> &str {
        &self.learning_style
    }

    pub fn recommended_strategy(&self) -> &str {
        &self.recommended_strategy
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

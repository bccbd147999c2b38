//! DTOs for recommendation endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::profile::CognitiveProfile;

/// A learner's cognitive profile as returned over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub behavioral_score: f64,
    pub technical_score: f64,
    pub cognitive_level: String,
    pub learning_style: String,
    pub recommended_strategy: String,
    pub last_updated: DateTime<Utc>,
}

impl From<&CognitiveProfile> for ProfileResponse {
    fn from(profile: &CognitiveProfile) -> Self {
        Self {
            id: profile.id().to_string(),
            user_id: profile.user_id().to_string(),
            behavioral_score: profile.behavioral_score(),
            technical_score: profile.technical_score(),
            cognitive_level: profile.cognitive_level_label().to_string(),
            learning_style: profile.learning_style_label().to_string(),
            recommended_strategy: profile.recommended_strategy().to_string(),
            last_updated: profile.last_updated(),
        }
    }
}

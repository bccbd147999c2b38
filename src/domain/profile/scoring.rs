//! Scoring engine - turns raw submissions into a cognitive classification.
//!
//! Four sub-scores on a 0-100 scale are combined into a weighted final score:
//!
//! | Signal | Weight |
//! |---|---|
//! | Behavioral score | 0.40 |
//! | Technical accuracy | 0.30 |
//! | Speed score | 0.15 |
//! | Retry persistence | 0.15 |
//!
//! Every sub-score defaults to 0 on empty input, so the engine never fails.

use serde::{Deserialize, Serialize};

use super::{CognitiveLevel, LearningStyle};
use crate::domain::assessment::{BehavioralResponse, TechnicalAttempt, MAX_CONVENTIONAL_WEIGHT};

pub const BEHAVIORAL_WEIGHT: f64 = 0.4;
pub const TECHNICAL_WEIGHT: f64 = 0.3;
pub const SPEED_WEIGHT: f64 = 0.15;
pub const RETRY_WEIGHT: f64 = 0.15;

/// Average response time (seconds) at or below which speed scores 100.
pub const SPEED_GRACE_SECS: f64 = 10.0;

/// Points lost per second beyond the grace period.
pub const SPEED_PENALTY_PER_SEC: f64 = 1.5;

/// Points per retry beyond the first try.
pub const POINTS_PER_RETRY: f64 = 10.0;

const MAX_SCORE: f64 = 100.0;

/// Output of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileScores {
    pub behavioral_score: f64,
    /// Technical accuracy.
    pub technical_score: f64,
    pub speed_score: f64,
    pub retry_score: f64,
    pub final_score: f64,
    pub cognitive_level: CognitiveLevel,
    pub learning_style: LearningStyle,
    pub recommended_strategy: String,
}

/// Stateless scoring functions.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes every score and the resulting classification.
    ///
    /// Pure and deterministic; input order does not matter.
    pub fn compute_profile(
        behavioral: &[BehavioralResponse],
        technical: &[TechnicalAttempt],
    ) -> ProfileScores {
        let behavioral_score = Self::behavioral_score(behavioral);
        let technical_score = Self::technical_accuracy(technical);
        let speed_score = Self::speed_score(technical);
        let retry_score = Self::retry_score(technical);

        let final_score =
            Self::final_score(behavioral_score, technical_score, speed_score, retry_score);
        let cognitive_level = CognitiveLevel::from_score(final_score);

        ProfileScores {
            behavioral_score,
            technical_score,
            speed_score,
            retry_score,
            final_score,
            cognitive_level,
            learning_style: LearningStyle::derive(speed_score, behavioral_score),
            recommended_strategy: cognitive_level.recommended_strategy().to_string(),
        }
    }

    /// Mean weight normalised against a maximum of 10 per answer, capped at 100.
    pub fn behavioral_score(responses: &[BehavioralResponse]) -> f64 {
        if responses.is_empty() {
            return 0.0;
        }

        let total_weight: f64 = responses.iter().map(|r| r.score_weight).sum();
        let max_weight = responses.len() as f64 * MAX_CONVENTIONAL_WEIGHT;

        ((total_weight / max_weight) * 100.0).clamp(0.0, MAX_SCORE)
    }

    /// Percentage of attempts answered correctly.
    pub fn technical_accuracy(attempts: &[TechnicalAttempt]) -> f64 {
        if attempts.is_empty() {
            return 0.0;
        }

        let correct = attempts.iter().filter(|a| a.is_correct).count();
        (correct as f64 / attempts.len() as f64) * 100.0
    }

    /// Speed score from the mean response time across attempts.
    pub fn speed_score(attempts: &[TechnicalAttempt]) -> f64 {
        if attempts.is_empty() {
            return 0.0;
        }

        let total_time: f64 = attempts.iter().map(|a| a.response_time).sum();
        Self::speed_score_for_average(total_time / attempts.len() as f64)
    }

    /// 100 up to the grace period, then 1.5 points off per second, floored at 0.
    pub fn speed_score_for_average(avg_time_secs: f64) -> f64 {
        let overrun = (avg_time_secs - SPEED_GRACE_SECS).max(0.0);
        (MAX_SCORE - overrun * SPEED_PENALTY_PER_SEC).max(0.0)
    }

    /// 10 points per attempt beyond the first, capped at 100.
    ///
    /// Retries are summed over all attempts regardless of question, so two
    /// questions answered on the second try count the same as one question
    /// answered on the third.
    pub fn retry_score(attempts: &[TechnicalAttempt]) -> f64 {
        if attempts.is_empty() {
            return 0.0;
        }

        let attempt_sum: u64 = attempts.iter().map(|a| u64::from(a.attempt_number)).sum();
        let retries = attempt_sum.saturating_sub(attempts.len() as u64);

        (retries as f64 * POINTS_PER_RETRY).min(MAX_SCORE)
    }

    /// Weighted combination of the four sub-scores.
    pub fn final_score(behavioral: f64, technical: f64, speed: f64, retry: f64) -> f64 {
        behavioral * BEHAVIORAL_WEIGHT
            + technical * TECHNICAL_WEIGHT
            + speed * SPEED_WEIGHT
            + retry * RETRY_WEIGHT
    }
}

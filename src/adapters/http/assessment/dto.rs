//! DTOs for assessment submission endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{BehavioralResponse, TechnicalAttempt};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralResponseRequest {
    pub question_id: i64,
    pub selected_option: String,
    pub score_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralResponseResponse {
    pub id: i64,
    pub user_id: String,
    pub question_id: i64,
    pub selected_option: String,
    pub score_weight: f64,
}

impl From<BehavioralResponse> for BehavioralResponseResponse {
    fn from(response: BehavioralResponse) -> Self {
        Self {
            id: response.id.value(),
            user_id: response.user_id.to_string(),
            question_id: response.question_id,
            selected_option: response.selected_option,
            score_weight: response.score_weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalAttemptRequest {
    pub question_id: i64,
    pub selected_answer: String,
    pub correct_answer: String,
    /// Seconds.
    pub response_time: f64,
    pub is_correct: bool,
    pub attempt_number: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalAttemptResponse {
    pub id: i64,
    pub user_id: String,
    pub question_id: i64,
    pub selected_answer: String,
    pub correct_answer: String,
    pub response_time: f64,
    pub is_correct: bool,
    pub attempt_number: u32,
}

impl From<TechnicalAttempt> for TechnicalAttemptResponse {
    fn from(attempt: TechnicalAttempt) -> Self {
        Self {
            id: attempt.id.value(),
            user_id: attempt.user_id.to_string(),
            question_id: attempt.question_id,
            selected_answer: attempt.selected_answer,
            correct_answer: attempt.correct_answer,
            response_time: attempt.response_time,
            is_correct: attempt.is_correct,
            attempt_number: attempt.attempt_number,
        }
    }
}

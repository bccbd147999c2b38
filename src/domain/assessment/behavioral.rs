//! Behavioral responses: answers to self-assessment questions carrying a weight.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubmissionId, UserId, ValidationError};

/// Assumed maximum weight of a single behavioral answer.
pub const MAX_CONVENTIONAL_WEIGHT: f64 = 10.0;

/// A behavioral response that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBehavioralResponse {
    pub user_id: UserId,
    pub question_id: i64,
    pub selected_option: String,
    pub score_weight: f64,
}

impl NewBehavioralResponse {
    /// Validates a submission.
    ///
    /// Weights above 10 are accepted (the score caps at 100); negative or
    /// non-finite weights are rejected.
    pub fn new(
        user_id: UserId,
        question_id: i64,
        selected_option: impl Into<String>,
        score_weight: f64,
    ) -> Result<Self, ValidationError> {
        if !score_weight.is_finite() {
            return Err(ValidationError::invalid_format(
                "score_weight",
                "must be a finite number",
            ));
        }
        if score_weight < 0.0 {
            return Err(ValidationError::out_of_range(
                "score_weight",
                0.0,
                f64::MAX,
                score_weight,
            ));
        }

        Ok(Self {
            user_id,
            question_id,
            selected_option: selected_option.into(),
            score_weight,
        })
    }

    /// Attaches the store-assigned id.
    pub fn stored(self, id: SubmissionId) -> BehavioralResponse {
        BehavioralResponse {
            id,
            user_id: self.user_id,
            question_id: self.question_id,
            selected_option: self.selected_option,
            score_weight: self.score_weight,
        }
    }
}

/// A stored behavioral response. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralResponse {
    pub id: SubmissionId,
    pub user_id: UserId,
    pub question_id: i64,
    pub selected_option: String,
    pub score_weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learner() -> UserId {
        UserId::new("learner@example.com").unwrap()
    }

    #[test]
    fn accepts_conventional_weight() {
        let response = NewBehavioralResponse::new(learner(), 1, "Reading docs", 8.0).unwrap();
        assert_eq!(response.score_weight, 8.0);
        assert_eq!(response.selected_option, "Reading docs");
    }

    #[test]
    fn accepts_zero_and_above_conventional_max() {
        assert!(NewBehavioralResponse::new(learner(), 1, "a", 0.0).is_ok());
        assert!(NewBehavioralResponse::new(learner(), 1, "a", 15.0).is_ok());
    }

    #[test]
    fn rejects_negative_weight() {
        let err = NewBehavioralResponse::new(learner(), 1, "a", -1.0).unwrap_err();
        assert_eq!(err.field(), "score_weight");
    }

    #[test]
    fn rejects_non_finite_weight() {
        assert!(NewBehavioralResponse::new(learner(), 1, "a", f64::NAN).is_err());
        assert!(NewBehavioralResponse::new(learner(), 1, "a", f64::INFINITY).is_err());
    }

    #[test]
    fn stored_keeps_all_fields() {
        let stored = NewBehavioralResponse::new(learner(), 3, "Videos", 6.5)
            .unwrap()
            .stored(SubmissionId::new(11));
        assert_eq!(stored.id, SubmissionId::new(11));
        assert_eq!(stored.question_id, 3);
        assert_eq!(stored.user_id, learner());
    }
}

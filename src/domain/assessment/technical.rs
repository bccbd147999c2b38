//! Technical attempts: knowledge-check answers with correctness and timing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubmissionId, UserId, ValidationError};

/// A technical attempt that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTechnicalAttempt {
    pub user_id: UserId,
    pub question_id: i64,
    pub selected_answer: String,
    pub correct_answer: String,
    /// Seconds taken to answer, strictly positive.
    pub response_time: f64,
    pub is_correct: bool,
    /// 1 is the first try at the question.
    pub attempt_number: u32,
}

impl NewTechnicalAttempt {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        question_id: i64,
        selected_answer: impl Into<String>,
        correct_answer: impl Into<String>,
        response_time: f64,
        is_correct: bool,
        attempt_number: u32,
    ) -> Result<Self, ValidationError> {
        if !response_time.is_finite() {
            return Err(ValidationError::invalid_format(
                "response_time",
                "must be a finite number of seconds",
            ));
        }
        if response_time <= 0.0 {
            return Err(ValidationError::invalid_format(
                "response_time",
                "must be positive",
            ));
        }
        if attempt_number == 0 {
            return Err(ValidationError::out_of_range(
                "attempt_number",
                1.0,
                f64::from(u32::MAX),
                0.0,
            ));
        }

        Ok(Self {
            user_id,
            question_id,
            selected_answer: selected_answer.into(),
            correct_answer: correct_answer.into(),
            response_time,
            is_correct,
            attempt_number,
        })
    }

    /// Attaches the store-assigned id.
    pub fn stored(self, id: SubmissionId) -> TechnicalAttempt {
        TechnicalAttempt {
            id,
            user_id: self.user_id,
            question_id: self.question_id,
            selected_answer: self.selected_answer,
            correct_answer: self.correct_answer,
            response_time: self.response_time,
            is_correct: self.is_correct,
            attempt_number: self.attempt_number,
        }
    }
}

/// A stored technical attempt. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAttempt {
    pub id: SubmissionId,
    pub user_id: UserId,
    pub question_id: i64,
    pub selected_answer: String,
    pub correct_answer: String,
    pub response_time: f64,
    pub is_correct: bool,
    pub attempt_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learner() -> UserId {
        UserId::new("learner@example.com").unwrap()
    }

    #[test]
    fn accepts_valid_attempt() {
        let attempt = NewTechnicalAttempt::new(learner(), 4, "A*", "A*", 5.0, true, 1).unwrap();
        assert!(attempt.is_correct);
        assert_eq!(attempt.attempt_number, 1);
    }

    #[test]
    fn rejects_zero_and_negative_response_time() {
        assert!(NewTechnicalAttempt::new(learner(), 4, "a", "b", 0.0, false, 1).is_err());
        assert!(NewTechnicalAttempt::new(learner(), 4, "a", "b", -3.0, false, 1).is_err());
    }

    #[test]
    fn rejects_non_finite_response_time() {
        let err = NewTechnicalAttempt::new(learner(), 4, "a", "b", f64::NAN, false, 1).unwrap_err();
        assert_eq!(err.field(), "response_time");
    }

    #[test]
    fn rejects_attempt_number_zero() {
        let err = NewTechnicalAttempt::new(learner(), 4, "a", "b", 2.0, false, 0).unwrap_err();
        assert_eq!(err.field(), "attempt_number");
    }

    #[test]
    fn stored_keeps_all_fields() {
        let stored = NewTechnicalAttempt::new(learner(), 9, "BFS", "DFS", 12.5, false, 2)
            .unwrap()
            .stored(SubmissionId::new(5));
        assert_eq!(stored.id, SubmissionId::new(5));
        assert_eq!(stored.selected_answer, "BFS");
        assert_eq!(stored.correct_answer, "DFS");
        assert_eq!(stored.attempt_number, 2);
    }
}

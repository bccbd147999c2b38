//! PostgreSQL implementation of ResponseStore.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::assessment::{
    BehavioralResponse, NewBehavioralResponse, NewTechnicalAttempt, TechnicalAttempt,
};
use crate::domain::foundation::{DomainError, SubmissionId, UserId};
use crate::ports::ResponseStore;

/// PostgreSQL implementation of ResponseStore.
///
/// Submission order is the `BIGSERIAL` id order.
#[derive(Clone)]
pub struct PostgresResponseStore {
    pool: PgPool,
}

impl PostgresResponseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseStore for PostgresResponseStore {
    async fn record_behavioral(
        &self,
        response: NewBehavioralResponse,
    ) -> Result<BehavioralResponse, DomainError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO behavioral_responses (user_id, question_id, selected_option, score_weight)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(response.user_id.as_str())
        .bind(response.question_id)
        .bind(&response.selected_option)
        .bind(response.score_weight)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert behavioral response", e))?;

        Ok(response.stored(SubmissionId::new(id)))
    }

    async fn record_technical(
        &self,
        attempt: NewTechnicalAttempt,
    ) -> Result<TechnicalAttempt, DomainError> {
        let attempt_number = i32::try_from(attempt.attempt_number)
            .map_err(|_| DomainError::validation("attempt_number", "Attempt number too large"))?;

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO technical_attempts (
                user_id, question_id, selected_answer, correct_answer,
                response_time, is_correct, attempt_number
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(attempt.user_id.as_str())
        .bind(attempt.question_id)
        .bind(&attempt.selected_answer)
        .bind(&attempt.correct_answer)
        .bind(attempt.response_time)
        .bind(attempt.is_correct)
        .bind(attempt_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert technical attempt", e))?;

        Ok(attempt.stored(SubmissionId::new(id)))
    }

    async fn list_behavioral(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<BehavioralResponse>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, question_id, selected_option, score_weight
            FROM behavioral_responses
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch behavioral responses", e))?;

        rows.iter().map(row_to_behavioral).collect()
    }

    async fn list_technical(&self, user_id: &UserId) -> Result<Vec<TechnicalAttempt>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, question_id, selected_answer, correct_answer,
                   response_time, is_correct, attempt_number
            FROM technical_attempts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch technical attempts", e))?;

        rows.iter().map(row_to_technical).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_user_id(row: &PgRow) -> Result<UserId, DomainError> {
    let raw: String = column(row, "user_id")?;
    UserId::new(raw).map_err(|e| DomainError::database("Invalid user_id", e))
}

fn row_to_behavioral(row: &PgRow) -> Result<BehavioralResponse, DomainError> {
    Ok(BehavioralResponse {
        id: SubmissionId::new(column(row, "id")?),
        user_id: row_user_id(row)?,
        question_id: column(row, "question_id")?,
        selected_option: column(row, "selected_option")?,
        score_weight: column(row, "score_weight")?,
    })
}

fn row_to_technical(row: &PgRow) -> Result<TechnicalAttempt, DomainError> {
    let attempt_number: i32 = column(row, "attempt_number")?;
    let attempt_number = u32::try_from(attempt_number)
        .map_err(|e| DomainError::database("Invalid attempt_number", e))?;

    Ok(TechnicalAttempt {
        id: SubmissionId::new(column(row, "id")?),
        user_id: row_user_id(row)?,
        question_id: column(row, "question_id")?,
        selected_answer: column(row, "selected_answer")?,
        correct_answer: column(row, "correct_answer")?,
        response_time: column(row, "response_time")?,
        is_correct: column(row, "is_correct")?,
        attempt_number,
    })
}

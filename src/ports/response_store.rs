//! ResponseStore port - durable record of learner submissions.

use async_trait::async_trait;

use crate::domain::{
    assessment::{BehavioralResponse, NewBehavioralResponse, NewTechnicalAttempt, TechnicalAttempt},
    foundation::{DomainError, UserId},
};

/// Append-only store of behavioral responses and technical attempts.
///
/// Submissions are immutable once recorded. List operations return a
/// learner's submissions in the order they were recorded.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    async fn record_behavioral(
        &self,
        response: NewBehavioralResponse,
    ) -> Result<BehavioralResponse, DomainError>;

    async fn record_technical(
        &self,
        attempt: NewTechnicalAttempt,
    ) -> Result<TechnicalAttempt, DomainError>;

    async fn list_behavioral(&self, user_id: &UserId)
        -> Result<Vec<BehavioralResponse>, DomainError>;

    async fn list_technical(&self, user_id: &UserId) -> Result<Vec<TechnicalAttempt>, DomainError>;
}

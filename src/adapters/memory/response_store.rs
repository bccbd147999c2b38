//! In-memory ResponseStore.
//!
//! Keeps submissions in insertion order. Useful for testing and local runs.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{
    BehavioralResponse, NewBehavioralResponse, NewTechnicalAttempt, TechnicalAttempt,
};
use crate::domain::foundation::{DomainError, SubmissionId, UserId};
use crate::ports::ResponseStore;

/// In-memory storage for learner submissions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResponseStore {
    behavioral: Arc<RwLock<Vec<BehavioralResponse>>>,
    technical: Arc<RwLock<Vec<TechnicalAttempt>>>,
}

impl InMemoryResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored submissions of both kinds.
    pub async fn submission_count(&self) -> usize {
        self.behavioral.read().await.len() + self.technical.read().await.len()
    }
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn record_behavioral(
        &self,
        response: NewBehavioralResponse,
    ) -> Result<BehavioralResponse, DomainError> {
        let mut rows = self.behavioral.write().await;
        let stored = response.stored(SubmissionId::new(rows.len() as i64 + 1));
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn record_technical(
        &self,
        attempt: NewTechnicalAttempt,
    ) -> Result<TechnicalAttempt, DomainError> {
        let mut rows = self.technical.write().await;
        let stored = attempt.stored(SubmissionId::new(rows.len() as i64 + 1));
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_behavioral(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<BehavioralResponse>, DomainError> {
        let rows = self.behavioral.read().await;
        Ok(rows.iter().filter(|r| &r.user_id == user_id).cloned().collect())
    }

    async fn list_technical(&self, user_id: &UserId) -> Result<Vec<TechnicalAttempt>, DomainError> {
        let rows = self.technical.read().await;
        Ok(rows.iter().filter(|r| &r.user_id == user_id).cloned().collect())
    }
}

//! In-memory ProfileRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::CognitiveProfile;
use crate::ports::ProfileRepository;

/// In-memory profile storage keyed by learner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, CognitiveProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CognitiveProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn upsert(&self, profile: &CognitiveProfile) -> Result<CognitiveProfile, DomainError> {
        let mut profiles = self.profiles.write().await;
        let stored = match profiles.get(profile.user_id()) {
            Some(existing) => CognitiveProfile::reconstitute(
                existing.id(),
                profile.user_id().clone(),
                profile.behavioral_score(),
                profile.technical_score(),
                profile.cognitive_level_label(),
                profile.learning_style_label(),
                profile.recommended_strategy().to_string(),
                profile.last_updated(),
            ),
            None => profile.clone(),
        };
        profiles.insert(stored.user_id().clone(), stored.clone());
        Ok(stored)
    }
}

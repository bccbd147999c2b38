//! ProfileManager - keeps each learner's cognitive profile in step with
//! their submissions.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::{CognitiveProfile, ScoringEngine};
use crate::ports::{ProfileRepository, ResponseStore, SubmissionObserver};

/// Keyed async locks, one per learner.
///
/// Entries nobody holds or waits on are pruned on the next acquisition.
#[derive(Debug, Default)]
struct UserLocks {
    locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl UserLocks {
    async fn lock_for(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks
            .entry(user_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

/// Computes and stores cognitive profiles.
///
/// Refreshes for the same learner run one at a time, so concurrent
/// submissions cannot overwrite a newer profile with one scored from
/// an older snapshot. Different learners never contend.
pub struct ProfileManager {
    responses: Arc<dyn ResponseStore>,
    profiles: Arc<dyn ProfileRepository>,
    locks: UserLocks,
}

impl ProfileManager {
    pub fn new(responses: Arc<dyn ResponseStore>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self {
            responses,
            profiles,
            locks: UserLocks::default(),
        }
    }

    /// Rescores the learner from every stored submission and upserts the result.
    ///
    /// A learner with no submissions gets an all-zero Basic Learner profile.
    pub async fn refresh_profile(&self, user_id: &UserId) -> Result<CognitiveProfile, DomainError> {
        let lock = self.locks.lock_for(user_id).await;
        let _guard = lock.lock().await;

        let behavioral = self.responses.list_behavioral(user_id).await?;
        let technical = self.responses.list_technical(user_id).await?;
        let scores = ScoringEngine::compute_profile(&behavioral, &technical);
        let now = Utc::now();

        let profile = match self.profiles.find_by_user(user_id).await? {
            Some(mut existing) => {
                existing.apply_scores(&scores, now);
                existing
            }
            None => CognitiveProfile::from_scores(user_id.clone(), &scores, now),
        };

        let stored = self.profiles.upsert(&profile).await?;

        debug!(
            user_id = %user_id,
            behavioral_responses = behavioral.len(),
            technical_attempts = technical.len(),
            final_score = scores.final_score,
            cognitive_level = %scores.cognitive_level,
            learning_style = %scores.learning_style,
            "Cognitive profile refreshed"
        );

        Ok(stored)
    }

    /// Returns the stored profile, computing it first if none exists.
    pub async fn get_or_compute(&self, user_id: &UserId) -> Result<CognitiveProfile, DomainError> {
        if let Some(profile) = self.profiles.find_by_user(user_id).await? {
            return Ok(profile);
        }
        self.refresh_profile(user_id).await
    }
}

#[async_trait]
impl SubmissionObserver for ProfileManager {
    async fn on_submission(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.refresh_profile(user_id).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProfileRepository, InMemoryResponseStore};
    use crate::domain::assessment::{
        BehavioralResponse, NewBehavioralResponse, NewTechnicalAttempt, TechnicalAttempt,
    };
    use crate::domain::foundation::ErrorCode;
    use crate::domain::profile::{CognitiveLevel, LearningStyle};

    struct FailingResponseStore;

    #[async_trait]
    impl ResponseStore for FailingResponseStore {
        async fn record_behavioral(
            &self,
            _response: NewBehavioralResponse,
        ) -> Result<BehavioralResponse, DomainError> {
            unimplemented!()
        }

        async fn record_technical(
            &self,
            _attempt: NewTechnicalAttempt,
        ) -> Result<TechnicalAttempt, DomainError> {
            unimplemented!()
        }

        async fn list_behavioral(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<BehavioralResponse>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
        }

        async fn list_technical(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<TechnicalAttempt>, DomainError> {
            Ok(vec![])
        }
    }

    fn learner() -> UserId {
        UserId::new("learner@example.com").unwrap()
    }

    fn setup() -> (Arc<InMemoryResponseStore>, Arc<InMemoryProfileRepository>, ProfileManager) {
        let store = Arc::new(InMemoryResponseStore::new());
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let manager = ProfileManager::new(store.clone(), profiles.clone());
        (store, profiles, manager)
    }

    #[tokio::test]
    async fn refresh_without_submissions_yields_default_profile() {
        let (_, profiles, manager) = setup();

        let profile = manager.refresh_profile(&learner()).await.unwrap();

        assert_eq!(profile.behavioral_score(), 0.0);
        assert_eq!(profile.technical_score(), 0.0);
        assert_eq!(profile.cognitive_level(), Some(CognitiveLevel::BasicLearner));
        assert_eq!(profile.learning_style(), Some(LearningStyle::Visual));
        assert_eq!(profiles.profile_count().await, 1);
    }

    #[tokio::test]
    async fn refresh_scores_stored_submissions() {
        let (store, _, manager) = setup();
        store
            .record_behavioral(NewBehavioralResponse::new(learner(), 1, "Plan ahead", 8.0).unwrap())
            .await
            .unwrap();
        store
            .record_technical(
                NewTechnicalAttempt::new(learner(), 2, "O(n)", "O(n)", 5.0, true, 1).unwrap(),
            )
            .await
            .unwrap();

        let profile = manager.refresh_profile(&learner()).await.unwrap();

        assert_eq!(profile.behavioral_score(), 80.0);
        assert_eq!(profile.technical_score(), 100.0);
        assert_eq!(profile.cognitive_level(), Some(CognitiveLevel::AdvancedLearner));
        assert_eq!(profile.learning_style(), Some(LearningStyle::Practical));
    }

    #[tokio::test]
    async fn refresh_overwrites_in_place() {
        let (store, profiles, manager) = setup();
        let first = manager.refresh_profile(&learner()).await.unwrap();

        store
            .record_behavioral(NewBehavioralResponse::new(learner(), 1, "A", 10.0).unwrap())
            .await
            .unwrap();
        let second = manager.refresh_profile(&learner()).await.unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(second.behavioral_score(), 100.0);
        assert_eq!(profiles.profile_count().await, 1);
    }

    #[tokio::test]
    async fn get_or_compute_is_idempotent_without_new_submissions() {
        let (_, _, manager) = setup();

        let first = manager.get_or_compute(&learner()).await.unwrap();
        let second = manager.get_or_compute(&learner()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn concurrent_refreshes_leave_one_consistent_profile() {
        let (store, profiles, manager) = setup();
        let manager = Arc::new(manager);
        for q in 0..5 {
            store
                .record_technical(
                    NewTechnicalAttempt::new(learner(), q, "A", "A", 4.0, true, 1).unwrap(),
                )
                .await
                .unwrap();
        }

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let manager = manager.clone();
                tokio::spawn(async move { manager.refresh_profile(&learner()).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let profile = profiles.find_by_user(&learner()).await.unwrap().unwrap();
        assert_eq!(profiles.profile_count().await, 1);
        assert_eq!(profile.technical_score(), 100.0);
    }

    #[tokio::test]
    async fn store_errors_propagate_and_leave_no_profile() {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let manager = ProfileManager::new(Arc::new(FailingResponseStore), profiles.clone());

        let err = manager.refresh_profile(&learner()).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert_eq!(profiles.profile_count().await, 0);
    }
}

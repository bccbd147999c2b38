//! RecordBehavioralResponse - Command handler for behavioral submissions.

use std::sync::Arc;
use tracing::info;

use crate::domain::assessment::{BehavioralResponse, NewBehavioralResponse};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ResponseStore, SubmissionObserver};

/// Command to record a behavioral response.
#[derive(Debug, Clone)]
pub struct RecordBehavioralResponseCommand {
    pub user_id: UserId,
    pub question_id: i64,
    pub selected_option: String,
    pub score_weight: f64,
}

/// Handler for recording behavioral responses.
///
/// The observer runs before the handler returns, so the learner's profile
/// already reflects the submission when it is acknowledged.
pub struct RecordBehavioralResponseHandler {
    store: Arc<dyn ResponseStore>,
    observer: Arc<dyn SubmissionObserver>,
}

impl RecordBehavioralResponseHandler {
    pub fn new(store: Arc<dyn ResponseStore>, observer: Arc<dyn SubmissionObserver>) -> Self {
        Self { store, observer }
    }

    pub async fn handle(
        &self,
        cmd: RecordBehavioralResponseCommand,
    ) -> Result<BehavioralResponse, DomainError> {
        let response = NewBehavioralResponse::new(
            cmd.user_id,
            cmd.question_id,
            cmd.selected_option,
            cmd.score_weight,
        )?;

        let stored = self.store.record_behavioral(response).await?;
        info!(
            user_id = %stored.user_id,
            submission_id = %stored.id,
            question_id = stored.question_id,
            "Behavioral response recorded"
        );

        self.observer.on_submission(&stored.user_id).await?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryResponseStore;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingObserver {
        notified: Mutex<Vec<UserId>>,
        fail: bool,
    }

    impl RecordingObserver {
        fn new() -> Self {
            Self {
                notified: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                notified: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl SubmissionObserver for RecordingObserver {
        async fn on_submission(&self, user_id: &UserId) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "profile write failed"));
            }
            self.notified.lock().unwrap().push(user_id.clone());
            Ok(())
        }
    }

    fn command(weight: f64) -> RecordBehavioralResponseCommand {
        RecordBehavioralResponseCommand {
            user_id: UserId::new("learner@example.com").unwrap(),
            question_id: 3,
            selected_option: "Work through examples".to_string(),
            score_weight: weight,
        }
    }

    #[tokio::test]
    async fn records_and_notifies_observer() {
        let store = Arc::new(InMemoryResponseStore::new());
        let observer = Arc::new(RecordingObserver::new());
        let handler = RecordBehavioralResponseHandler::new(store.clone(), observer.clone());

        let stored = handler.handle(command(7.0)).await.unwrap();

        assert_eq!(stored.score_weight, 7.0);
        assert_eq!(store.submission_count().await, 1);
        assert_eq!(observer.notified.lock().unwrap().as_slice(), &[stored.user_id]);
    }

    #[tokio::test]
    async fn rejects_negative_weight_without_storing() {
        let store = Arc::new(InMemoryResponseStore::new());
        let observer = Arc::new(RecordingObserver::new());
        let handler = RecordBehavioralResponseHandler::new(store.clone(), observer.clone());

        let err = handler.handle(command(-1.0)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(store.submission_count().await, 0);
        assert!(observer.notified.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn observer_failure_fails_the_submission() {
        let store = Arc::new(InMemoryResponseStore::new());
        let handler =
            RecordBehavioralResponseHandler::new(store, Arc::new(RecordingObserver::failing()));

        let err = handler.handle(command(5.0)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}

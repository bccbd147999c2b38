//! SubmissionObserver port - hook run after a submission is stored.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Notified synchronously after a learner's submission has been recorded.
///
/// The recording handler awaits the observer before acknowledging the
/// submission, and an observer error fails the submission request.
#[async_trait]
pub trait SubmissionObserver: Send + Sync {
    async fn on_submission(&self, user_id: &UserId) -> Result<(), DomainError>;
}

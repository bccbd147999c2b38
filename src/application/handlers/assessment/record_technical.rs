//! RecordTechnicalAttempt - Command handler for technical submissions.

use std::sync::Arc;
use tracing::info;

use crate::domain::assessment::{NewTechnicalAttempt, TechnicalAttempt};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ResponseStore, SubmissionObserver};

/// Command to record a technical attempt.
#[derive(Debug, Clone)]
pub struct RecordTechnicalAttemptCommand {
    pub user_id: UserId,
    pub question_id: i64,
    pub selected_answer: String,
    pub correct_answer: String,
    pub response_time: f64,
    pub is_correct: bool,
    pub attempt_number: u32,
}

/// Handler for recording technical attempts.
pub struct RecordTechnicalAttemptHandler {
    store: Arc<dyn ResponseStore>,
    observer: Arc<dyn SubmissionObserver>,
}

impl RecordTechnicalAttemptHandler {
    pub fn new(store: Arc<dyn ResponseStore>, observer: Arc<dyn SubmissionObserver>) -> Self {
        Self { store, observer }
    }

    pub async fn handle(
        &self,
        cmd: RecordTechnicalAttemptCommand,
    ) -> Result<TechnicalAttempt, DomainError> {
        let attempt = NewTechnicalAttempt::new(
            cmd.user_id,
            cmd.question_id,
            cmd.selected_answer,
            cmd.correct_answer,
            cmd.response_time,
            cmd.is_correct,
            cmd.attempt_number,
        )?;

        let stored = self.store.record_technical(attempt).await?;
        info!(
            user_id = %stored.user_id,
            submission_id = %stored.id,
            question_id = stored.question_id,
            is_correct = stored.is_correct,
            attempt_number = stored.attempt_number,
            "Technical attempt recorded"
        );

        self.observer.on_submission(&stored.user_id).await?;

        Ok(stored)
    }
}

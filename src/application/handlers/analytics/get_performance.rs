//! GetPerformance - Query handler for a learner's performance report.

use std::sync::Arc;

use crate::domain::analytics::PerformanceReport;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ProfileRepository, ResponseStore};

/// Query for a learner's performance report.
#[derive(Debug, Clone)]
pub struct GetPerformanceQuery {
    pub user_id: UserId,
}

/// Handler for performance reports.
///
/// Reads the stored profile only; a learner without one gets `profile: None`.
pub struct GetPerformanceHandler {
    responses: Arc<dyn ResponseStore>,
    profiles: Arc<dyn ProfileRepository>,
}

impl GetPerformanceHandler {
    pub fn new(responses: Arc<dyn ResponseStore>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self {
            responses,
            profiles,
        }
    }

    pub async fn handle(&self, query: GetPerformanceQuery) -> Result<PerformanceReport, DomainError> {
        let attempts = self.responses.list_technical(&query.user_id).await?;
        let behavioral = self.responses.list_behavioral(&query.user_id).await?;
        let profile = self.profiles.find_by_user(&query.user_id).await?;

        Ok(PerformanceReport::build(profile, &attempts, &behavioral))
    }
}

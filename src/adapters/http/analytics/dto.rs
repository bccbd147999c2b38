//! DTOs for analytics endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::recommendation::ProfileResponse;
use crate::domain::analytics::{AccuracyPoint, PerformanceReport, ResponseTimePoint};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceResponse {
    /// `null` until the learner's first submission has been scored.
    pub profile: Option<ProfileResponse>,
    pub accuracy_trend: Vec<AccuracyPoint>,
    pub response_time_trend: Vec<ResponseTimePoint>,
    pub total_attempts: usize,
    pub total_behavioral_responses: usize,
}

impl From<PerformanceReport> for PerformanceResponse {
    fn from(report: PerformanceReport) -> Self {
        Self {
            profile: report.profile.as_ref().map(ProfileResponse::from),
            accuracy_trend: report.accuracy_trend,
            response_time_trend: report.response_time_trend,
            total_attempts: report.total_attempts,
            total_behavioral_responses: report.total_behavioral_responses,
        }
    }
}

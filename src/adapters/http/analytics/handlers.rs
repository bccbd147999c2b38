//! HTTP handlers for analytics endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::analytics::{GetPerformanceHandler, GetPerformanceQuery};

use super::dto::PerformanceResponse;

#[derive(Clone)]
pub struct AnalyticsHandlers {
    performance_handler: Arc<GetPerformanceHandler>,
}

impl AnalyticsHandlers {
    pub fn new(performance_handler: Arc<GetPerformanceHandler>) -> Self {
        Self {
            performance_handler,
        }
    }
}

/// GET /analytics/performance - Trends and totals for the learner
pub async fn get_performance(
    State(handlers): State<AnalyticsHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetPerformanceQuery { user_id: user.id };

    match handlers.performance_handler.handle(query).await {
        Ok(report) => (StatusCode::OK, Json(PerformanceResponse::from(report))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

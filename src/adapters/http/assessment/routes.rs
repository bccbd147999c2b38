//! HTTP routes for assessment endpoints.

use axum::{routing::post, Router};

use super::handlers::{submit_behavioral, submit_technical, AssessmentHandlers};

/// Routes nested under `/tests`.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/behavioral", post(submit_behavioral))
        .route("/technical", post(submit_technical))
        .with_state(handlers)
}

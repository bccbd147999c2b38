//! HTTP routes for analytics endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_performance, AnalyticsHandlers};

/// Routes nested under `/analytics`.
pub fn analytics_routes(handlers: AnalyticsHandlers) -> Router {
    Router::new()
        .route("/performance", get(get_performance))
        .with_state(handlers)
}

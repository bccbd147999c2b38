//! HTTP routes for recommendation endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_profile, recommend_courses, RecommendationHandlers};

/// Routes nested under `/recommendations`.
pub fn recommendation_routes(handlers: RecommendationHandlers) -> Router {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/courses", get(recommend_courses))
        .with_state(handlers)
}

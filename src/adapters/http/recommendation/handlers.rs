//! HTTP handlers for recommendation endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::course::CourseResponse;
use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::profile::ProfileManager;
use crate::application::handlers::recommendation::{
    RecommendCoursesHandler, RecommendCoursesQuery,
};

use super::dto::ProfileResponse;

#[derive(Clone)]
pub struct RecommendationHandlers {
    profile_manager: Arc<ProfileManager>,
    recommend_handler: Arc<RecommendCoursesHandler>,
}

impl RecommendationHandlers {
    pub fn new(
        profile_manager: Arc<ProfileManager>,
        recommend_handler: Arc<RecommendCoursesHandler>,
    ) -> Self {
        Self {
            profile_manager,
            recommend_handler,
        }
    }
}

/// GET /recommendations/profile - The learner's profile, computed on first use
pub async fn get_profile(
    State(handlers): State<RecommendationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.profile_manager.get_or_compute(&user.id).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(&profile))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /recommendations/courses - Courses matched to the learner's tier
pub async fn recommend_courses(
    State(handlers): State<RecommendationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = RecommendCoursesQuery { user_id: user.id };

    match handlers.recommend_handler.handle(query).await {
        Ok(courses) => {
            let body: Vec<CourseResponse> = courses.iter().map(CourseResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

//! HTTP routes for course endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_course, list_courses, CourseHandlers};

/// Public catalog routes, nested under `/courses`.
pub fn course_routes(handlers: CourseHandlers) -> Router {
    Router::new()
        .route("/", get(list_courses))
        .route("/:id", get(get_course))
        .with_state(handlers)
}

//! HTTP handlers for the public course catalog.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::catalog::{GetCourseHandler, GetCourseQuery, ListCoursesHandler};
use crate::domain::foundation::CourseId;

use super::dto::CourseResponse;

#[derive(Clone)]
pub struct CourseHandlers {
    list_handler: Arc<ListCoursesHandler>,
    get_handler: Arc<GetCourseHandler>,
}

impl CourseHandlers {
    pub fn new(list_handler: Arc<ListCoursesHandler>, get_handler: Arc<GetCourseHandler>) -> Self {
        Self {
            list_handler,
            get_handler,
        }
    }
}

/// GET /courses - All courses with their modules
pub async fn list_courses(State(handlers): State<CourseHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(courses) => {
            let body: Vec<CourseResponse> = courses.iter().map(CourseResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /courses/:id - One course with modules, quiz and questions
pub async fn get_course(
    State(handlers): State<CourseHandlers>,
    Path(course_id): Path<i64>,
) -> Response {
    let query = GetCourseQuery {
        course_id: CourseId::new(course_id),
    };

    match handlers.get_handler.handle(query).await {
        Ok(course) => (StatusCode::OK, Json(CourseResponse::from(&course))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

//! GetCourse - Query handler for a single course with its quiz.

use std::sync::Arc;

use crate::domain::catalog::Course;
use crate::domain::foundation::{CourseId, DomainError, ErrorCode};
use crate::ports::CourseCatalog;

/// Query to get a course by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetCourseQuery {
    pub course_id: CourseId,
}

/// Handler for course details.
pub struct GetCourseHandler {
    catalog: Arc<dyn CourseCatalog>,
}

impl GetCourseHandler {
    pub fn new(catalog: Arc<dyn CourseCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetCourseQuery) -> Result<Course, DomainError> {
        self.catalog
            .find_by_id(query.course_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::CourseNotFound, "Course not found")
                    .with_detail("course_id", query.course_id.to_string())
            })
    }
}

//! ListCourses - Query handler for the public course listing.

use std::sync::Arc;

use crate::domain::catalog::{Course, CourseFilter};
use crate::domain::foundation::DomainError;
use crate::ports::CourseCatalog;

/// Handler listing every course with its modules.
pub struct ListCoursesHandler {
    catalog: Arc<dyn CourseCatalog>,
}

impl ListCoursesHandler {
    pub fn new(catalog: Arc<dyn CourseCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Course>, DomainError> {
        self.catalog.list_courses(CourseFilter::all()).await
    }
}

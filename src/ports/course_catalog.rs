//! CourseCatalog port - course reads and maintenance.

use async_trait::async_trait;

use crate::domain::{
    catalog::{Course, CourseFilter, NewCourse},
    foundation::{CourseId, DomainError},
};

/// Read and maintenance access to the course catalog.
///
/// Catalog order is ascending course id.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    /// Courses passing the filter, with their modules ordered by `order`.
    /// The quiz is not loaded.
    async fn list_courses(&self, filter: CourseFilter) -> Result<Vec<Course>, DomainError>;

    /// A single course with modules, quiz and quiz questions.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError>;

    /// Stores a course together with its modules and optional quiz.
    async fn create_course(&self, course: NewCourse) -> Result<Course, DomainError>;

    /// Deletes questions, quiz, modules and the course as one unit.
    ///
    /// Returns `CourseNotFound` if the course does not exist.
    async fn delete_course(&self, id: CourseId) -> Result<(), DomainError>;
}

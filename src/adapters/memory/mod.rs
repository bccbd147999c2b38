//! In-memory adapters for tests and local development.

mod course_catalog;
mod profile_repository;
mod response_store;

pub use course_catalog::InMemoryCourseCatalog;
pub use profile_repository::InMemoryProfileRepository;
pub use response_store::InMemoryResponseStore;

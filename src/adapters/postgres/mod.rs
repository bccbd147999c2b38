//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresResponseStore` - Behavioral responses and technical attempts
//! - `PostgresProfileRepository` - Cognitive profiles, upserted per learner
//! - `PostgresCourseCatalog` - Courses with modules, quiz and questions

mod course_catalog;
mod profile_repository;
mod response_store;

pub use course_catalog::PostgresCourseCatalog;
pub use profile_repository::PostgresProfileRepository;
pub use response_store::PostgresResponseStore;

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::DomainError;

/// Reads a column, mapping decode failures to `DatabaseError`.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

//! PostgreSQL implementation of ProfileRepository.
//!
//! Persists CognitiveProfile aggregates to PostgreSQL.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{CognitiveProfileId, DomainError, UserId};
use crate::domain::profile::CognitiveProfile;
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CognitiveProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, behavioral_score, technical_score, cognitive_level,
                   learning_style, recommended_strategy, last_updated
            FROM cognitive_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch cognitive profile", e))?;

        row.as_ref().map(row_to_profile).transpose()
    }

    async fn upsert(&self, profile: &CognitiveProfile) -> Result<CognitiveProfile, DomainError> {
        // A single statement, so the row is replaced atomically.
        let row = sqlx::query(
            r#"
            INSERT INTO cognitive_profiles (
                id, user_id, behavioral_score, technical_score, cognitive_level,
                learning_style, recommended_strategy, last_updated
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE SET
                behavioral_score = EXCLUDED.behavioral_score,
                technical_score = EXCLUDED.technical_score,
                cognitive_level = EXCLUDED.cognitive_level,
                learning_style = EXCLUDED.learning_style,
                recommended_strategy = EXCLUDED.recommended_strategy,
                last_updated = EXCLUDED.last_updated
            RETURNING id, user_id, behavioral_score, technical_score, cognitive_level,
                      learning_style, recommended_strategy, last_updated
            "#,
        )
        .bind(profile.id().as_uuid())
        .bind(profile.user_id().as_str())
        .bind(profile.behavioral_score())
        .bind(profile.technical_score())
        .bind(profile.cognitive_level_label())
        .bind(profile.learning_style_label())
        .bind(profile.recommended_strategy())
        .bind(profile.last_updated())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to upsert cognitive profile", e))?;

        row_to_profile(&row)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Labels are read back as stored; unknown tiers are resolved by callers.
fn row_to_profile(row: &PgRow) -> Result<CognitiveProfile, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let user_id: String = column(row, "user_id")?;
    let level: String = column(row, "cognitive_level")?;
    let style: String = column(row, "learning_style")?;
    let last_updated: chrono::DateTime<chrono::Utc> = column(row, "last_updated")?;

    Ok(CognitiveProfile::reconstitute(
        CognitiveProfileId::from_uuid(id),
        UserId::new(user_id).map_err(|e| DomainError::database("Invalid user_id", e))?,
        column(row, "behavioral_score")?,
        column(row, "technical_score")?,
        level,
        style,
        column(row, "recommended_strategy")?,
        last_updated,
    ))
}

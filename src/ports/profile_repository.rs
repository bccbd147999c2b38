//! ProfileRepository port for cognitive profile persistence.

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, UserId},
    profile::CognitiveProfile,
};

/// Repository for cognitive profiles, keyed by learner.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile of a learner, if one has been computed.
    async fn find_by_user(&self, user_id: &UserId)
        -> Result<Option<CognitiveProfile>, DomainError>;

    /// Insert the profile, or overwrite the learner's existing one.
    ///
    /// Implementations must write the row as a single unit: a reader sees
    /// either the previous profile or the new one, never a mix. When a row
    /// already exists its id is kept and the stored profile is returned.
    async fn upsert(&self, profile: &CognitiveProfile) -> Result<CognitiveProfile, DomainError>;
}

//! Profile repository trait defining the interface for profile persistence.

use async_trait::async_trait;

use crate::domain::entities::{ProfileVerificationState, UserProfile};
use crate::domain::value_objects::CallerIdentity;
use crate::errors::DomainError;

/// Repository trait for user profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by user id
    async fn find(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError>;

    /// Merge verification fields into the owner's profile
    ///
    /// Creates the profile when it does not exist. Fields outside the
    /// verification state are never touched.
    async fn merge_verification(
        &self,
        owner: &CallerIdentity,
        state: &ProfileVerificationState,
    ) -> Result<(), DomainError>;

    /// Create or update the contact fields of a profile
    ///
    /// The stored verification state is preserved.
    async fn upsert_contact(&self, profile: &UserProfile) -> Result<(), DomainError>;
}

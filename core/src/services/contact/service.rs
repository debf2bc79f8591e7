use std::sync::Arc;

use crate::domain::entities::{ContactCard, ContactDetails, UserProfile};
use crate::domain::value_objects::CallerIdentity;
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::ProfileRepository;

/// Gate in front of other users' contact details, and the owner's way to
/// save them
pub struct ContactService<P: ProfileRepository> {
    profiles: Arc<P>,
}

impl<P: ProfileRepository> ContactService<P> {
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }

    /// Contact card of `owner_id` as seen by `viewer`
    ///
    /// The viewer must have verified an institutional email. The viewer
    /// check runs first so unverified callers cannot probe which profiles
    /// exist.
    pub async fn view_contact(
        &self,
        viewer: &CallerIdentity,
        owner_id: &str,
    ) -> DomainResult<ContactCard> {
        let viewer_verified = self
            .profiles
            .find(viewer.as_str())
            .await?
            .map(|profile| profile.is_verified())
            .unwrap_or(false);

        if !viewer_verified {
            tracing::info!(
                user_id = %viewer,
                event = "contact_denied",
                "Unverified viewer requested contact details"
            );
            return Err(VerificationError::NotVerified.into());
        }

        let owner = self
            .profiles
            .find(owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile"))?;

        Ok(owner.contact_card())
    }

    /// Save the caller's own contact details
    ///
    /// Fields are trimmed and blank ones cleared. The verification state of
    /// the profile is left as stored.
    pub async fn update_contact(
        &self,
        owner: &CallerIdentity,
        details: ContactDetails,
    ) -> DomainResult<ContactCard> {
        let profile = UserProfile::with_contact(owner.as_str(), details);
        self.profiles.upsert_contact(&profile).await?;

        tracing::info!(
            user_id = %owner,
            event = "contact_updated",
            "Saved profile contact details"
        );

        let stored = self
            .profiles
            .find(owner.as_str())
            .await?
            .ok_or_else(|| DomainError::internal("Profile missing after save"))?;
        Ok(stored.contact_card())
    }
}

//! In-memory profile store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{ProfileVerificationState, UserProfile};
use crate::domain::value_objects::CallerIdentity;
use crate::errors::DomainError;

use super::r#trait::ProfileRepository;

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    async fn merge_verification(
        &self,
        owner: &CallerIdentity,
        state: &ProfileVerificationState,
    ) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        profiles
            .entry(owner.as_str().to_string())
            .or_insert_with(|| UserProfile::new(owner.as_str()))
            .verification = state.clone();
        Ok(())
    }

    async fn upsert_contact(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        let entry = profiles
            .entry(profile.user_id.clone())
            .or_insert_with(|| UserProfile::new(profile.user_id.clone()));
        entry.display_name = profile.display_name.clone();
        entry.contact_email = profile.contact_email.clone();
        entry.phone = profile.phone.clone();
        entry.whatsapp = profile.whatsapp.clone();
        Ok(())
    }
}

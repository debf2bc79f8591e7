//! MySQL implementation of the ProfileRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ot_core::domain::entities::{ProfileVerificationState, UserProfile};
use ot_core::domain::value_objects::CallerIdentity;
use ot_core::errors::DomainError;
use ot_core::repositories::ProfileRepository;

use crate::InfrastructureError;

pub(crate) const FIND_PROFILE: &str = r#"
    SELECT user_id, display_name, contact_email, phone, whatsapp,
           oxford_email_verified, oxford_email_verified_at, oxford_email
    FROM user_profiles
    WHERE user_id = ?
    LIMIT 1
"#;

pub(crate) const MERGE_VERIFICATION: &str = r#"
    INSERT INTO user_profiles (user_id, oxford_email_verified, oxford_email_verified_at, oxford_email)
    VALUES (?, ?, ?, ?)
    ON DUPLICATE KEY UPDATE
        oxford_email_verified = VALUES(oxford_email_verified),
        oxford_email_verified_at = VALUES(oxford_email_verified_at),
        oxford_email = VALUES(oxford_email)
"#;

pub(crate) const UPSERT_CONTACT: &str = r#"
    INSERT INTO user_profiles (user_id, display_name, contact_email, phone, whatsapp)
    VALUES (?, ?, ?, ?, ?)
    ON DUPLICATE KEY UPDATE
        display_name = VALUES(display_name),
        contact_email = VALUES(contact_email),
        phone = VALUES(phone),
        whatsapp = VALUES(whatsapp)
"#;

/// MySQL implementation of ProfileRepository
///
/// Verification fields are stored in the `oxford_email*` columns and are
/// only ever written by [`ProfileRepository::merge_verification`].
pub struct MySqlProfileRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<UserProfile, sqlx::Error> {
        Ok(UserProfile {
            user_id: row.try_get("user_id")?,
            display_name: row.try_get("display_name")?,
            contact_email: row.try_get("contact_email")?,
            phone: row.try_get("phone")?,
            whatsapp: row.try_get("whatsapp")?,
            verification: ProfileVerificationState {
                verified: row.try_get("oxford_email_verified")?,
                verified_at: row.try_get::<Option<DateTime<Utc>>, _>("oxford_email_verified_at")?,
                verified_email: row.try_get("oxford_email")?,
            },
        })
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(FIND_PROFILE)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        row.as_ref()
            .map(Self::row_to_profile)
            .transpose()
            .map_err(|e| InfrastructureError::from(e).into())
    }

    async fn merge_verification(
        &self,
        owner: &CallerIdentity,
        state: &ProfileVerificationState,
    ) -> Result<(), DomainError> {
        sqlx::query(MERGE_VERIFICATION)
            .bind(owner.as_str())
            .bind(state.verified)
            .bind(state.verified_at)
            .bind(state.verified_email.as_deref())
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        tracing::debug!(
            user_id = %owner,
            event = "profile_verification_merged",
            "Merged verification state into profile"
        );
        Ok(())
    }

    async fn upsert_contact(&self, profile: &UserProfile) -> Result<(), DomainError> {
        sqlx::query(UPSERT_CONTACT)
            .bind(&profile.user_id)
            .bind(profile.display_name.as_deref())
            .bind(profile.contact_email.as_deref())
            .bind(profile.phone.as_deref())
            .bind(profile.whatsapp.as_deref())
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;
        Ok(())
    }
}

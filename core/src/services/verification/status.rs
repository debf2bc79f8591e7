//! Verification status lookup

use chrono::Utc;

use crate::domain::value_objects::CallerIdentity;
use crate::errors::DomainResult;
use crate::repositories::{ProfileRepository, VerificationRecordRepository};

use super::service::VerificationService;
use super::traits::MailDispatchTrait;
use super::types::{PendingVerification, VerificationStatus};

impl<M, V, P> VerificationService<M, V, P>
where
    M: MailDispatchTrait,
    V: VerificationRecordRepository,
    P: ProfileRepository,
{
    /// Current verification status of the caller
    ///
    /// Read-only; never consumes an attempt.
    pub async fn status(&self, caller: &CallerIdentity) -> DomainResult<VerificationStatus> {
        let verification = self
            .profiles
            .find(caller.as_str())
            .await?
            .map(|profile| profile.verification)
            .unwrap_or_default();

        let max_attempts = self.config.max_attempts;
        let pending = match self.records.find(caller).await? {
            Some(record) if record.has_code() => PendingVerification {
                state: record.state_at(Utc::now(), max_attempts),
                remaining_attempts: Some(record.remaining_attempts(max_attempts)),
                expires_at: record.expires_at,
                email: Some(record.email),
            },
            _ => PendingVerification::none(),
        };

        Ok(VerificationStatus {
            verified: verification.verified,
            verified_at: verification.verified_at,
            verified_email: verification.verified_email,
            pending,
        })
    }
}

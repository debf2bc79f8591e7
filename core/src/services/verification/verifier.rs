//! Code verification

use chrono::Utc;

use crate::domain::entities::ProfileVerificationState;
use crate::domain::value_objects::CallerIdentity;
use crate::errors::{DomainResult, VerificationError};
use crate::repositories::{ProfileRepository, VerificationRecordRepository};

use super::service::VerificationService;
use super::traits::MailDispatchTrait;

impl<M, V, P> VerificationService<M, V, P>
where
    M: MailDispatchTrait,
    V: VerificationRecordRepository,
    P: ProfileRepository,
{
    /// Check `candidate` against the caller's record
    ///
    /// Checks run in order: non-empty code, record present, not expired,
    /// code match. An expired record is rejected without consuming an
    /// attempt. A mismatch persists the incremented attempt count before
    /// failing; reaching the cap changes only the message.
    ///
    /// On a match the caller's profile is marked verified with the
    /// record's email.
    pub async fn verify_code(&self, caller: &CallerIdentity, candidate: &str) -> DomainResult<()> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Err(VerificationError::CodeRequired.into());
        }

        let record = match self.records.find(caller).await? {
            Some(record) if record.has_code() => record,
            _ => return Err(VerificationError::NoCodeFound.into()),
        };

        let now = Utc::now();
        if record.is_expired_at(now) {
            tracing::info!(
                user_id = %caller,
                event = "verification_code_expired",
                "Verification attempted with an expired code"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        let max_attempts = self.config.max_attempts;
        if self.config.policy.lockout_blocks_correct_code && record.is_locked(max_attempts) {
            tracing::warn!(
                user_id = %caller,
                attempts = record.attempts,
                event = "verification_locked",
                "Verification attempted on a locked record"
            );
            return Err(VerificationError::TooManyAttempts.into());
        }

        if !record.matches(candidate) {
            let attempts = record.next_attempts();
            self.records.update_attempts(caller, attempts).await?;

            if attempts >= max_attempts {
                tracing::warn!(
                    user_id = %caller,
                    attempts = attempts,
                    event = "verification_locked",
                    "Too many failed verification attempts"
                );
                return Err(VerificationError::TooManyAttempts.into());
            }

            tracing::info!(
                user_id = %caller,
                attempts = attempts,
                remaining_attempts = max_attempts - attempts,
                event = "verification_failed",
                "Invalid verification code"
            );
            return Err(VerificationError::InvalidCode.into());
        }

        let state = ProfileVerificationState::verified(record.email.clone(), now);
        self.profiles.merge_verification(caller, &state).await?;

        if self.config.policy.consume_on_success {
            self.records.delete(caller).await?;
        }

        tracing::info!(
            user_id = %caller,
            event = "verification_succeeded",
            "Institutional email verified"
        );

        Ok(())
    }
}

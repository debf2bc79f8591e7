//! Code issuance

use chrono::{Duration, Utc};
use ot_shared::email::mask_email;

use crate::domain::entities::VerificationRecord;
use crate::domain::value_objects::{CallerIdentity, InstitutionalEmail};
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
    /// Request a code for `email` and record it for `caller`
    ///
    /// This method:
    /// 1. Validates the address against the institutional domain
    /// 2. Asks the mail dispatch service to send a code
    /// 3. Overwrites the caller's record with the returned code
    ///
    /// Dispatch or storage failures are logged and reported as
    /// [`VerificationError::DispatchFailed`]. No record is written unless the
    /// dispatch succeeded.
    pub async fn issue_code(&self, caller: &CallerIdentity, email: &str) -> DomainResult<()> {
        let email = match InstitutionalEmail::parse(email, &self.config.institutional_domain) {
            Ok(email) => email,
            Err(err) => {
                tracing::warn!(
                    user_id = %caller,
                    event = "verification_email_rejected",
                    "Candidate email is not an institutional address"
                );
                return Err(err.into());
            }
        };
        let masked = mask_email(email.as_str());

        let code = match self.mail_dispatch.request_code(email.as_str()).await {
            Ok(code) if !code.is_empty() => code,
            Ok(_) => {
                tracing::error!(
                    user_id = %caller,
                    email = %masked,
                    event = "mail_dispatch_failed",
                    "Mail API did not return a code"
                );
                return Err(VerificationError::DispatchFailed.into());
            }
            Err(error) => {
                tracing::error!(
                    user_id = %caller,
                    email = %masked,
                    error = %error,
                    event = "mail_dispatch_failed",
                    "Mail API request failed"
                );
                return Err(VerificationError::DispatchFailed.into());
            }
        };

        let record = VerificationRecord::issue(
            code,
            email.into_inner(),
            Utc::now(),
            Duration::minutes(self.config.code_expiration_minutes),
        );

        if let Err(error) = self.records.save(caller, &record).await {
            tracing::error!(
                user_id = %caller,
                error = %error,
                event = "verification_record_write_failed",
                "Failed to store verification record"
            );
            return Err(VerificationError::DispatchFailed.into());
        }

        tracing::info!(
            user_id = %caller,
            email = %masked,
            expires_at = ?record.expires_at,
            event = "verification_code_issued",
            "Issued verification code"
        );

        Ok(())
    }
}

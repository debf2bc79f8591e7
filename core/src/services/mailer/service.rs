//! Mailer service implementation

use rand::{rngs::OsRng, Rng};
use std::sync::Arc;

use ot_shared::email::{is_institutional_email, mask_email, DEFAULT_INSTITUTIONAL_DOMAIN};

use crate::domain::entities::DEFAULT_EXPIRATION_MINUTES;
use crate::errors::MailerError;

use super::message::OutgoingEmail;
use super::traits::MailTransport;

/// Configuration for the mailer service
#[derive(Debug, Clone)]
pub struct MailerServiceConfig {
    /// Domain recipients must belong to
    pub institutional_domain: String,
    /// Lifetime quoted in the email body
    pub code_lifetime_minutes: i64,
}

impl Default for MailerServiceConfig {
    fn default() -> Self {
        Self {
            institutional_domain: DEFAULT_INSTITUTIONAL_DOMAIN.to_string(),
            code_lifetime_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}

/// Generate a six digit code in `100000..=999999` using the OS CSPRNG
pub fn generate_code() -> String {
    OsRng.gen_range(100_000u32..=999_999).to_string()
}

/// Service that emails freshly generated verification codes
pub struct MailerService<T: MailTransport> {
    transport: Arc<T>,
    config: MailerServiceConfig,
}

impl<T: MailTransport> MailerService<T> {
    pub fn new(transport: Arc<T>, config: MailerServiceConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Generate a code, email it to `email` and return it
    ///
    /// The address is trimmed before validation and delivery.
    pub async fn send_code(&self, email: &str) -> Result<String, MailerError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(MailerError::MissingEmail);
        }
        if !is_institutional_email(email, &self.config.institutional_domain) {
            return Err(MailerError::OutsideDomain {
                domain: self.config.institutional_domain.clone(),
            });
        }

        let code = generate_code();
        let message =
            OutgoingEmail::verification_code(email, &code, self.config.code_lifetime_minutes);

        if let Err(message) = self.transport.send(&message).await {
            tracing::error!(
                email = %mask_email(email),
                transport = self.transport.name(),
                error = %message,
                event = "mail_send_failed",
                "Failed to send verification email"
            );
            return Err(MailerError::Transport { message });
        }

        tracing::info!(
            email = %mask_email(email),
            transport = self.transport.name(),
            event = "mail_sent",
            "Verification email sent"
        );

        Ok(code)
    }
}

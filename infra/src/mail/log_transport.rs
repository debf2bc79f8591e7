//! Development transport that logs instead of delivering

use async_trait::async_trait;

use ot_core::services::mailer::{MailTransport, OutgoingEmail};
use ot_shared::email::mask_email;

/// Writes outgoing email to the tracing log
///
/// The body, and with it the code, is logged at debug level only.
#[derive(Debug, Default, Clone)]
pub struct LogTransport;

impl LogTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        tracing::info!(
            to = %mask_email(&email.to),
            subject = %email.subject,
            event = "mail_logged",
            "Email not delivered (log transport)"
        );
        tracing::debug!(to = %email.to, body = %email.text_body, "Logged email body");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

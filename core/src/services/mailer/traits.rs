//! Outbound email transport trait

use async_trait::async_trait;

use super::message::OutgoingEmail;

/// Trait for delivering a rendered email
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver `email`, returning a human-readable failure reason on error
    async fn send(&self, email: &OutgoingEmail) -> Result<(), String>;

    /// Short transport name for logs
    fn name(&self) -> &'static str;
}

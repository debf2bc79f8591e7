//! SMTP transport: STARTTLS submission with username and password

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;

use ot_core::services::mailer::{MailTransport, OutgoingEmail};
use ot_shared::config::MailerConfig;

use crate::InfrastructureError;

/// Delivers email through an SMTP relay such as the university's
pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpTransport {
    /// Build from mailer configuration
    ///
    /// Username and password are required. The sender defaults to the
    /// username. No connection is opened until the first send.
    pub fn from_config(config: &MailerConfig) -> Result<Self, InfrastructureError> {
        let (username, password) = match (
            non_blank(config.smtp_username.as_deref()),
            non_blank(config.smtp_password.as_deref()),
        ) {
            (Some(username), Some(password)) => (username, password),
            _ => {
                return Err(InfrastructureError::Config(
                    "Missing OX_SMTP_USER or OX_SMTP_PASS.".to_string(),
                ))
            }
        };

        let from = non_blank(config.sender_email.as_deref()).unwrap_or(username);
        let address: Address = from
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;
        let sender = Mailbox::new(config.sender_name.clone(), address);

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Mail(format!("SMTP relay setup failed: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .timeout(Some(Duration::from_secs(15)))
            .build();

        Ok(Self { mailer, sender })
    }

    /// Plain text message, with an HTML alternative when one is given
    pub(crate) fn message_for(&self, email: &OutgoingEmail) -> Result<Message, String> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;

        let builder = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(email.subject.clone());

        let message = match &email.html_body {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                html.clone(),
            )),
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(email.text_body.clone()),
        };

        message.map_err(|e| format!("Failed to build message: {}", e))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        let message = self.message_for(email)?;
        self.mailer
            .send(message)
            .await
            .map_err(|e| format!("SMTP send failed: {}", e))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}

//! Brevo transactional email transport

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use ot_core::services::mailer::{MailTransport, OutgoingEmail};
use ot_shared::config::MailerConfig;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrevoEmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrevoSendEmailBody {
    pub sender: BrevoEmailAddress,
    pub to: Vec<BrevoEmailAddress>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    pub text_content: String,
}

/// Delivers email through the Brevo `smtp/email` API
pub struct BrevoTransport {
    http: Client,
    endpoint: String,
    api_key: String,
    sender_email: String,
    sender_name: Option<String>,
}

impl BrevoTransport {
    /// Build from mailer configuration
    ///
    /// API key and sender address are both required.
    pub fn from_config(config: &MailerConfig) -> Result<Self, InfrastructureError> {
        let api_key = required(config.brevo_api_key.as_deref(), "BREVO_API_KEY")?;
        let sender_email = required(config.sender_email.as_deref(), "BREVO_SENDER_EMAIL")?;
        let http = Client::builder().timeout(Duration::from_secs(15)).build()?;

        Ok(Self {
            http,
            endpoint: config.brevo_endpoint.clone(),
            api_key,
            sender_email,
            sender_name: config.sender_name.clone(),
        })
    }

    pub(crate) fn body_for(&self, email: &OutgoingEmail) -> BrevoSendEmailBody {
        BrevoSendEmailBody {
            sender: BrevoEmailAddress {
                email: self.sender_email.clone(),
                name: self.sender_name.clone(),
            },
            to: vec![BrevoEmailAddress {
                email: email.to.clone(),
                name: None,
            }],
            subject: email.subject.clone(),
            html_content: email.html_body.clone(),
            text_content: email.text_body.clone(),
        }
    }
}

fn required(value: Option<&str>, key: &str) -> Result<String, InfrastructureError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| InfrastructureError::Config(format!("{} is required", key)))
}

#[async_trait]
impl MailTransport for BrevoTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .header("Accept", "application/json")
            .json(&self.body_for(email))
            .send()
            .await
            .map_err(|e| format!("Brevo request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(format!("Brevo send failed (status={}): {}", status.as_u16(), body))
    }

    fn name(&self) -> &'static str {
        "brevo"
    }
}

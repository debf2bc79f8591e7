//! HTTP client for the mail dispatch service
//!
//! `POST {base}/send_code` with `{"email": ...}` and a bearer token. A 2xx
//! reply carries `{"code": ...}`; anything else may carry `{"error": ...}`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use ot_core::services::verification::MailDispatchTrait;
use ot_shared::config::MailApiConfig;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct SendCodeRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SendCodeResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Mail dispatch API client
#[derive(Clone)]
pub struct OxMailApiClient {
    http: Client,
    config: MailApiConfig,
}

impl OxMailApiClient {
    /// Build a client; missing credentials are only reported when used
    pub fn new(config: MailApiConfig) -> Result<Self, InfrastructureError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Ask the dispatch service to email a code to `email`
    ///
    /// Fails with [`InfrastructureError::Config`] before any network
    /// activity when the base address or token is missing.
    pub async fn send_code(&self, email: &str) -> Result<String, InfrastructureError> {
        let (base_url, token) = self.config.credentials().ok_or_else(|| {
            InfrastructureError::Config("Missing OX_MAIL_API_URL or OX_MAIL_API_TOKEN.".to_string())
        })?;
        let url = send_code_url(base_url)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&SendCodeRequest { email })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        parse_send_code_response(status, &body)
    }
}

/// `/send_code` resolved against the origin of `base_url`
pub(crate) fn send_code_url(base_url: &str) -> Result<Url, InfrastructureError> {
    Url::parse(base_url)
        .and_then(|base| base.join("/send_code"))
        .map_err(|e| InfrastructureError::Config(format!("Invalid OX_MAIL_API_URL: {}", e)))
}

/// Interpret a dispatch reply
///
/// An empty body counts as `{}`.
pub(crate) fn parse_send_code_response(status: u16, body: &str) -> Result<String, InfrastructureError> {
    let payload: SendCodeResponse = if body.trim().is_empty() {
        SendCodeResponse::default()
    } else {
        serde_json::from_str(body)
            .map_err(|e| InfrastructureError::Mail(format!("Invalid mail API response: {}", e)))?
    };

    if !(200..300).contains(&status) {
        let message = payload
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "Mail API error.".to_string());
        return Err(InfrastructureError::Mail(format!("{} (status {})", message, status)));
    }

    payload
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| InfrastructureError::Mail("Mail API did not return a code.".to_string()))
}

#[async_trait]
impl MailDispatchTrait for OxMailApiClient {
    async fn request_code(&self, email: &str) -> Result<String, String> {
        self.send_code(email).await.map_err(|e| e.to_string())
    }
}

//! Mail configuration
//!
//! Two sides of the same round trip:
//! - [`MailApiConfig`] is what the API server needs to call the mail dispatch service
//! - [`MailerConfig`] is what the mail dispatch service needs to serve and deliver

use serde::{Deserialize, Serialize};

use super::env_non_empty;

/// Client-side configuration for the mail dispatch API
///
/// Both `base_url` and `token` are secrets supplied out of band. They are
/// optional at load time; their absence is reported when a code is requested.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailApiConfig {
    /// Base address of the mail dispatch service
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer credential presented to the mail dispatch service
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for MailApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl MailApiConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: env_non_empty("OX_MAIL_API_URL"),
            token: env_non_empty("OX_MAIL_API_TOKEN"),
            request_timeout_secs: std::env::var("OX_MAIL_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
        }
    }

    /// Create a configuration with both secrets present
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Base address and token, if both are present and non-blank
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let base_url = self.base_url.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
        let token = self.token.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
        Some((base_url, token))
    }

    /// Whether both secrets are present
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }
}

/// Outbound email transport used by the mail dispatch service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailTransportKind {
    /// Write the message to the log instead of delivering it
    Log,
    /// STARTTLS SMTP relay with username and password
    Smtp,
    /// Brevo transactional email API
    Brevo,
}

impl std::str::FromStr for MailTransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" | "console" => Ok(MailTransportKind::Log),
            "smtp" => Ok(MailTransportKind::Smtp),
            "brevo" => Ok(MailTransportKind::Brevo),
            other => Err(format!("Unknown mail transport: {}", other)),
        }
    }
}

/// Mail dispatch service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailerConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Token callers must present as `Authorization: Bearer {token}`
    #[serde(default, skip_serializing)]
    pub api_token: Option<String>,

    /// Which transport delivers the email
    pub transport: MailTransportKind,

    /// Brevo API key
    #[serde(default, skip_serializing)]
    pub brevo_api_key: Option<String>,

    /// Brevo endpoint for transactional email
    #[serde(default = "default_brevo_endpoint")]
    pub brevo_endpoint: String,

    /// SMTP relay host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP submission port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP login
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[serde(default, skip_serializing)]
    pub smtp_password: Option<String>,

    /// Sender address
    #[serde(default)]
    pub sender_email: Option<String>,

    /// Sender display name
    #[serde(default)]
    pub sender_name: Option<String>,

    /// Lifetime quoted in the email body, in minutes
    #[serde(default = "default_code_lifetime_minutes")]
    pub code_lifetime_minutes: i64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            api_token: None,
            transport: MailTransportKind::Log,
            brevo_api_key: None,
            brevo_endpoint: default_brevo_endpoint(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            sender_email: None,
            sender_name: None,
            code_lifetime_minutes: default_code_lifetime_minutes(),
        }
    }
}

impl MailerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_non_empty("OX_MAIL_HOST").unwrap_or(defaults.host),
            port: std::env::var("OX_MAIL_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            api_token: env_non_empty("OX_MAIL_API_TOKEN"),
            transport: env_non_empty("MAIL_TRANSPORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.transport),
            brevo_api_key: env_non_empty("BREVO_API_KEY"),
            brevo_endpoint: env_non_empty("BREVO_ENDPOINT").unwrap_or(defaults.brevo_endpoint),
            smtp_host: env_non_empty("OX_SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: std::env::var("OX_SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.smtp_port),
            smtp_username: env_non_empty("OX_SMTP_USER"),
            smtp_password: env_non_empty("OX_SMTP_PASS"),
            sender_email: env_non_empty("MAIL_SENDER_EMAIL")
                .or_else(|| env_non_empty("BREVO_SENDER_EMAIL")),
            sender_name: env_non_empty("MAIL_SENDER_NAME")
                .or_else(|| env_non_empty("BREVO_SENDER_NAME")),
            code_lifetime_minutes: defaults.code_lifetime_minutes,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_request_timeout() -> u64 {
    10
}

fn default_brevo_endpoint() -> String {
    String::from("https://api.brevo.com/v3/smtp/email")
}

fn default_smtp_host() -> String {
    String::from("smtp.ox.ac.uk")
}

fn default_smtp_port() -> u16 {
    587
}

fn default_code_lifetime_minutes() -> i64 {
    15
}

//! Caller identity configuration
//!
//! Callers authenticate with an HS256 bearer JWT; the `sub` claim is the
//! stable caller identity used to key verification records and profiles.

use serde::{Deserialize, Serialize};

use super::env_non_empty;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to verify token signatures
    pub secret: String,

    /// Expected `iss` claim, if issuer checking is enabled
    #[serde(default)]
    pub issuer: Option<String>,

    /// Clock skew tolerated on `exp`, in seconds
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            issuer: None,
            leeway_seconds: default_leeway(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            secret: env_non_empty("JWT_SECRET").unwrap_or_else(|| DEFAULT_SECRET.to_string()),
            issuer: env_non_empty("JWT_ISSUER"),
            leeway_seconds: std::env::var("JWT_LEEWAY_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_leeway),
        }
    }

    /// Require a specific issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_leeway() -> u64 {
    30
}

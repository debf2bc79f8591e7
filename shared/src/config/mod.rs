//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT verification for caller identity
//! - `cache` - Redis configuration for verification records
//! - `database` - MySQL connection and pool configuration for profiles
//! - `environment` - Environment detection
//! - `mail` - Mail dispatch API (client side) and the mailer service itself
//! - `server` - HTTP server and CORS configuration
//! - `verification` - Verification code lifecycle settings

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::{MailApiConfig, MailTransportKind, MailerConfig};
pub use server::{CorsConfig, ServerConfig};
pub use verification::VerificationSettings;

/// Which persistence backend the API server wires up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    /// Process-local stores, lost on restart
    Memory,
    /// Redis for verification records, MySQL for profiles
    RedisMysql,
}

impl StorageBackend {
    /// Read `STORAGE_BACKEND`, falling back to a per-environment default
    pub fn from_env(environment: Environment) -> Self {
        match std::env::var("STORAGE_BACKEND").ok().as_deref() {
            Some("memory") => StorageBackend::Memory,
            Some("redis-mysql") | Some("redis_mysql") => StorageBackend::RedisMysql,
            _ if environment.is_development() => StorageBackend::Memory,
            _ => StorageBackend::RedisMysql,
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::RedisMysql => write!(f, "redis-mysql"),
        }
    }
}

/// Complete API server configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Caller identity verification
    pub jwt: JwtConfig,

    /// Persistence backend selection
    pub storage: StorageBackend,

    /// Profile database configuration
    pub database: DatabaseConfig,

    /// Verification record cache configuration
    pub cache: CacheConfig,

    /// Outbound mail dispatch API
    pub mail_api: MailApiConfig,

    /// Verification lifecycle settings
    #[serde(default)]
    pub verification: VerificationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            jwt: JwtConfig::default(),
            storage: StorageBackend::Memory,
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            mail_api: MailApiConfig::default(),
            verification: VerificationSettings::default(),
        }
    }
}

/// Configuration the server refuses to start with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in production; the built-in development secret is public")]
    DefaultJwtSecret,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            jwt: JwtConfig::from_env(),
            storage: StorageBackend::from_env(environment),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            mail_api: MailApiConfig::from_env(),
            verification: VerificationSettings::from_env(),
        }
    }

    /// Reject settings that are only acceptable outside production
    ///
    /// With the default JWT secret anyone could sign a token for any caller
    /// identity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultJwtSecret);
        }
        Ok(())
    }
}

/// Parse a boolean environment flag ("1", "true", "yes", "on")
pub(crate) fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Read a non-blank environment variable
pub(crate) fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

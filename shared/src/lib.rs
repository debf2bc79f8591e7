//! Shared utilities and common types for the OxTickets server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Utility functions (institutional email validation, masking)
//! - Common response types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, Environment,
    DatabaseConfig, JwtConfig, CacheConfig, MailApiConfig, MailerConfig,
    ServerConfig, CorsConfig, StorageBackend,
};
pub use errors::{ErrorResponse, error_codes};
pub use types::{HealthResponse, HealthStatus, ServiceHealth, SuccessResponse};
pub use utils::email;

//! Type definitions shared by the HTTP binaries

pub mod response;

pub use response::{HealthResponse, HealthStatus, ServiceHealth, SuccessResponse};

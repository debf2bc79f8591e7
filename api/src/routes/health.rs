//! Health check endpoint

use actix_web::{web, HttpResponse};

use ot_infra::cache::RedisClient;
use ot_infra::database::DatabasePool;
use ot_shared::{HealthResponse, HealthStatus, ServiceHealth, StorageBackend};

/// Dependencies probed by the health check
pub struct HealthState {
    pub storage: StorageBackend,
    pub mail_api_configured: bool,
    pub cache: Option<RedisClient>,
    pub database: Option<DatabasePool>,
}

impl HealthState {
    /// Process-local stores, nothing to probe
    pub fn in_memory(mail_api_configured: bool) -> Self {
        Self {
            storage: StorageBackend::Memory,
            mail_api_configured,
            cache: None,
            database: None,
        }
    }
}

fn check(result: Result<bool, impl std::fmt::Display>) -> ServiceHealth {
    match result {
        Ok(true) => ServiceHealth {
            status: HealthStatus::Healthy,
            message: None,
        },
        Ok(false) => ServiceHealth {
            status: HealthStatus::Unhealthy,
            message: Some("unexpected reply".to_string()),
        },
        Err(e) => ServiceHealth {
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
        },
    }
}

/// Handler for GET /health
///
/// Always answers 200; a failing dependency degrades the reported status.
pub async fn health_check(state: web::Data<HealthState>) -> HttpResponse {
    let mut health = HealthResponse::healthy("oxtickets-api", env!("CARGO_PKG_VERSION"))
        .with_service(
            "storage",
            ServiceHealth {
                status: HealthStatus::Healthy,
                message: Some(state.storage.to_string()),
            },
        )
        .with_service(
            "mail_api",
            ServiceHealth {
                status: if state.mail_api_configured {
                    HealthStatus::Healthy
                } else {
                    HealthStatus::Unhealthy
                },
                message: (!state.mail_api_configured).then(|| "not configured".to_string()),
            },
        );

    if let Some(cache) = &state.cache {
        health = health.with_service("redis", check(cache.health_check().await));
    }
    if let Some(database) = &state.database {
        health = health.with_service("mysql", check(database.health_check().await));
    }

    HttpResponse::Ok().json(health)
}

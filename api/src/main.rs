use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use ot_api::{create_app, telemetry, AppState, HealthState};
use ot_core::{
    ContactService, InMemoryProfileRepository, InMemoryVerificationRepository,
    MailDispatchTrait, ProfileRepository, VerificationRecordRepository, VerificationService,
    VerificationServiceConfig,
};
use ot_infra::cache::{RedisClient, RedisVerificationRepository};
use ot_infra::database::{DatabasePool, MySqlProfileRepository};
use ot_infra::mail::OxMailApiClient;
use ot_shared::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(config.environment);

    info!(
        environment = %config.environment,
        storage = %config.storage,
        "Starting OxTickets API server"
    );

    config.validate().context("refusing to start")?;
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the built-in development secret");
    }

    let mail_client = Arc::new(
        OxMailApiClient::new(config.mail_api.clone()).context("building mail API client")?,
    );
    if !mail_client.is_configured() {
        warn!("OX_MAIL_API_URL or OX_MAIL_API_TOKEN missing; code requests will fail");
    }

    match config.storage {
        StorageBackend::Memory => {
            let health = HealthState::in_memory(mail_client.is_configured());
            run(
                config,
                mail_client,
                Arc::new(InMemoryVerificationRepository::new()),
                Arc::new(InMemoryProfileRepository::new()),
                health,
            )
            .await
        }
        StorageBackend::RedisMysql => {
            let redis = RedisClient::new(&config.cache)
                .await
                .context("connecting to Redis")?;
            let database = DatabasePool::new(&config.database)
                .await
                .context("connecting to MySQL")?;
            database
                .ensure_schema()
                .await
                .context("creating profile schema")?;

            let records = Arc::new(RedisVerificationRepository::new(
                redis.clone(),
                config.cache.key_prefix.clone(),
            ));
            let profiles = Arc::new(MySqlProfileRepository::new(database.get_pool().clone()));
            let health = HealthState {
                storage: StorageBackend::RedisMysql,
                mail_api_configured: mail_client.is_configured(),
                cache: Some(redis),
                database: Some(database),
            };

            run(config, mail_client, records, profiles, health).await
        }
    }
}

/// Wire the services over the chosen stores and serve until shutdown
async fn run<M, V, P>(
    config: AppConfig,
    mail_dispatch: Arc<M>,
    records: Arc<V>,
    profiles: Arc<P>,
    health: HealthState,
) -> anyhow::Result<()>
where
    M: MailDispatchTrait + 'static,
    V: VerificationRecordRepository + 'static,
    P: ProfileRepository + 'static,
{
    let verification_service = Arc::new(VerificationService::new(
        mail_dispatch,
        records,
        Arc::clone(&profiles),
        VerificationServiceConfig::from(&config.verification),
    ));
    let contact_service = Arc::new(ContactService::new(profiles));

    let app_state = web::Data::new(AppState::new(verification_service, contact_service));
    let health_state = web::Data::new(health);

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    info!(address = %bind_address, "Server will bind");

    let factory_config = config.clone();
    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), health_state.clone(), &factory_config)
    });
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("binding {}", bind_address))?
        .run()
        .await
        .context("running HTTP server")
}

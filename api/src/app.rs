//! Application factories
//!
//! [`create_app`] builds the verification API, [`create_mailer_app`] the mail
//! dispatch service. Both binaries and the integration tests use them.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use ot_core::errors::DomainError;
use ot_core::services::mailer::MailTransport;
use ot_core::{MailDispatchTrait, ProfileRepository, VerificationRecordRepository};
use ot_shared::AppConfig;

use crate::handlers::{json_error_handler, ApiError};
use crate::middleware::{create_cors, JwtAuth, SecurityMiddleware};
use crate::routes::health::{health_check, HealthState};
use crate::routes::mailer::{mailer_not_found, send_code, MailerState};
use crate::routes::profiles::{contact, update_profile};
use crate::routes::verification::{request_code, status, verify_code};
use crate::routes::AppState;

/// Create the verification API with all dependencies
pub fn create_app<M, V, P>(
    app_state: web::Data<AppState<M, V, P>>,
    health_state: web::Data<HealthState>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    M: MailDispatchTrait + 'static,
    V: VerificationRecordRepository + 'static,
    P: ProfileRepository + 'static,
{
    let cors = create_cors(&config.cors, config.environment);
    let security = SecurityMiddleware::new(config.environment);
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(health_state)
        .app_data(json_config)
        // Middleware order matters: security first, then CORS, then logging
        .wrap(TracingLogger::default())
        .wrap(cors)
        .wrap(security)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/verification")
                        .wrap(JwtAuth::new(&config.jwt))
                        .route("/request-code", web::post().to(request_code::<M, V, P>))
                        .route("/verify-code", web::post().to(verify_code::<M, V, P>))
                        .route("/status", web::get().to(status::<M, V, P>)),
                )
                .service(
                    web::scope("/profiles")
                        .wrap(JwtAuth::new(&config.jwt))
                        .route("/me", web::put().to(update_profile::<M, V, P>))
                        .route("/{user_id}/contact", web::get().to(contact::<M, V, P>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Create the mail dispatch service
pub fn create_mailer_app<T>(
    state: web::Data<MailerState<T>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    T: MailTransport + 'static,
{
    App::new()
        .app_data(state)
        .wrap(TracingLogger::default())
        .route("/send_code", web::post().to(send_code::<T>))
        .default_service(web::route().to(mailer_not_found))
}

/// Default 404 handler
async fn not_found() -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError(DomainError::not_found("Route")))
}

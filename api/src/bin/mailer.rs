//! Mail dispatch service
//!
//! Serves `POST /send_code` for the API server: generates a code, emails it
//! to the institutional address and returns it.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use ot_api::{create_mailer_app, telemetry, MailerState};
use ot_core::services::mailer::{MailTransport, MailerService, MailerServiceConfig};
use ot_infra::mail::{BrevoTransport, LogTransport, SmtpTransport};
use ot_shared::config::MailTransportKind;
use ot_shared::{email::DEFAULT_INSTITUTIONAL_DOMAIN, Environment, MailerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let environment = Environment::from_env();
    telemetry::init_tracing(environment);

    let config = MailerConfig::from_env();
    if config.api_token.is_none() {
        warn!("OX_MAIL_API_TOKEN is not set; every request will be rejected");
    }

    match config.transport {
        MailTransportKind::Smtp => {
            let transport =
                SmtpTransport::from_config(&config).context("configuring SMTP transport")?;
            serve(config, transport).await
        }
        MailTransportKind::Brevo => {
            let transport =
                BrevoTransport::from_config(&config).context("configuring Brevo transport")?;
            serve(config, transport).await
        }
        MailTransportKind::Log => {
            if environment.is_production() {
                warn!("Log transport selected in production; no email will be delivered");
            }
            serve(config, LogTransport::new()).await
        }
    }
}

async fn serve<T>(config: MailerConfig, transport: T) -> anyhow::Result<()>
where
    T: MailTransport + 'static,
{
    let mailer = MailerService::new(
        Arc::new(transport),
        MailerServiceConfig {
            institutional_domain: DEFAULT_INSTITUTIONAL_DOMAIN.to_string(),
            code_lifetime_minutes: config.code_lifetime_minutes,
        },
    );
    info!(
        transport = mailer.transport_name(),
        address = %config.bind_address(),
        "Starting mail dispatch service"
    );

    let state = web::Data::new(MailerState::new(Arc::new(mailer), config.api_token.clone()));

    HttpServer::new(move || create_mailer_app(state.clone()))
        .bind(config.bind_address())
        .with_context(|| format!("binding {}", config.bind_address()))?
        .run()
        .await
        .context("running HTTP server")
}

//! CORS middleware configuration for cross-origin requests.
//!
//! The marketplace web client calls the API from a browser. Outside
//! production any origin is accepted unless origins are configured; in
//! production only `ALLOWED_ORIGINS` are.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use ot_shared::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_production() || !config.allowed_origins.is_empty() {
        create_restricted_cors(config)
    } else {
        create_development_cors(config.max_age)
    }
}

fn base_cors(max_age: usize) -> Cors {
    Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring permissive CORS for development");
    base_cors(max_age).allow_any_origin()
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    if config.allowed_origins.is_empty() {
        tracing::warn!("No ALLOWED_ORIGINS configured; cross-origin requests will be rejected");
    }

    config
        .allowed_origins
        .iter()
        .fold(base_cors(config.max_age), |cors, origin| {
            tracing::info!(origin = %origin, "Adding allowed origin");
            cors.allowed_origin(origin)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(cors: Cors, origin: &str) -> StatusCode {
        preflight_method(cors, origin, "GET").await
    }

    async fn preflight_method(cors: Cors, origin: &str, method: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(cors)
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, method))
            .to_request();
        match test::try_call_service(&app, req).await {
            Ok(resp) => resp.status(),
            Err(err) => err.as_response_error().status_code(),
        }
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let cors = create_cors(&CorsConfig::default(), Environment::Development);
        assert_eq!(preflight(cors, "https://anything.example").await, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_production_restricts_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["https://oxtickets.example".to_string()],
            ..CorsConfig::default()
        };

        let allowed = create_cors(&config, Environment::Production);
        assert_eq!(preflight(allowed, "https://oxtickets.example").await, StatusCode::OK);

        let rejected = create_cors(&config, Environment::Production);
        assert_ne!(preflight(rejected, "https://evil.example").await, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_profile_update_method_is_allowed() {
        let config = CorsConfig {
            allowed_origins: vec!["https://oxtickets.example".to_string()],
            ..CorsConfig::default()
        };

        let cors = create_cors(&config, Environment::Production);
        assert_eq!(
            preflight_method(cors, "https://oxtickets.example", "PUT").await,
            StatusCode::OK
        );

        let cors = create_cors(&config, Environment::Production);
        assert_ne!(
            preflight_method(cors, "https://oxtickets.example", "DELETE").await,
            StatusCode::OK
        );
    }
}

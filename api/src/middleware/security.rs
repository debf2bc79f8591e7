//! Security middleware for enforcing HTTPS and response hardening headers.
//!
//! In production plain-HTTP requests are refused unless a trusted proxy
//! vouches for TLS through `X-Forwarded-Proto`, and every response carries
//! HSTS and related headers.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use ot_core::errors::DomainError;
use ot_shared::Environment;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::ApiError;

/// Security middleware factory
#[derive(Debug, Clone)]
pub struct SecurityMiddleware {
    enforce_https: bool,
    add_security_headers: bool,
    /// Peers whose `X-Forwarded-Proto` header is believed
    trusted_proxies: Vec<String>,
}

impl SecurityMiddleware {
    /// Settings for `environment`, trusted proxies from `TRUSTED_PROXIES`
    pub fn new(environment: Environment) -> Self {
        let trusted_proxies: Vec<String> = std::env::var("TRUSTED_PROXIES")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let middleware = Self {
            enforce_https: environment.is_production(),
            add_security_headers: environment.is_production(),
            trusted_proxies,
        };

        tracing::info!(
            enforce_https = middleware.enforce_https,
            add_headers = middleware.add_security_headers,
            trusted_proxies = ?middleware.trusted_proxies,
            "Security middleware configured"
        );

        middleware
    }

    /// No HTTPS enforcement, no extra headers
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: false,
            trusted_proxies: vec!["127.0.0.1".to_string(), "::1".to_string()],
        }
    }

    /// Full enforcement
    pub fn production() -> Self {
        Self {
            enforce_https: true,
            add_security_headers: true,
            trusted_proxies: vec![],
        }
    }

    pub fn with_trusted_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.trusted_proxies.push(proxy.into());
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            settings: Rc::new(self.clone()),
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    settings: Rc<SecurityMiddleware>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let settings = Rc::clone(&self.settings);

        Box::pin(async move {
            if settings.enforce_https && !is_secure_request(&req, &settings.trusted_proxies) {
                tracing::warn!(
                    method = %req.method(),
                    path = %req.path(),
                    event = "insecure_request_blocked",
                    "Insecure request blocked"
                );
                return Err(ApiError(DomainError::PermissionDenied {
                    message: "HTTPS required.".to_string(),
                })
                .into());
            }

            let mut response = service.call(req).await?;

            if settings.add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

/// Checks if the request is secure (HTTPS or vouched for by a trusted proxy)
fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    let conn_info = req.connection_info();
    if conn_info.scheme() == "https" {
        return true;
    }

    if let Some(proto) = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
    {
        let peer_addr = conn_info.peer_addr().unwrap_or("");
        if proto == "https" && is_trusted_proxy(peer_addr, trusted_proxies) {
            return true;
        }
    }

    let host = conn_info.host();
    host == "localhost" || host.starts_with("127.0.0.1") || host.starts_with("[::1]")
}

/// Checks if the given peer is in the trusted proxy list
fn is_trusted_proxy(peer_addr: &str, trusted_proxies: &[String]) -> bool {
    // "ip:port" or bare ip
    let ip = peer_addr
        .rsplit_once(':')
        .map(|(ip, _)| ip.trim_start_matches('[').trim_end_matches(']'))
        .unwrap_or(peer_addr);

    trusted_proxies
        .iter()
        .any(|trusted| trusted == ip || trusted == peer_addr)
}

fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none';"),
    );
}

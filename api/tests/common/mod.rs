//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::{
    body::{to_bytes, MessageBody},
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;

use ot_api::middleware::Claims;
use ot_api::{AppState, HealthState};
use ot_core::{
    ContactService, InMemoryProfileRepository, InMemoryVerificationRepository,
    MailDispatchTrait, VerificationService, VerificationServiceConfig,
};
use ot_shared::{AppConfig, JwtConfig};

pub const SECRET: &str = "integration-test-secret";

/// Mail dispatch stub returning a fixed code, or failing
pub struct StubMailDispatch {
    pub requested: Mutex<Vec<String>>,
    reply: Mutex<Result<String, String>>,
}

impl StubMailDispatch {
    pub fn returning(code: &str) -> Self {
        Self {
            requested: Mutex::new(Vec::new()),
            reply: Mutex::new(Ok(code.to_string())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            requested: Mutex::new(Vec::new()),
            reply: Mutex::new(Err(message.to_string())),
        }
    }

    pub fn set_code(&self, code: &str) {
        *self.reply.lock().unwrap() = Ok(code.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

#[async_trait]
impl MailDispatchTrait for StubMailDispatch {
    async fn request_code(&self, email: &str) -> Result<String, String> {
        self.requested.lock().unwrap().push(email.to_string());
        self.reply.lock().unwrap().clone()
    }
}

pub type TestState =
    AppState<StubMailDispatch, InMemoryVerificationRepository, InMemoryProfileRepository>;

/// Services and stores behind one test app
pub struct Harness {
    pub dispatch: Arc<StubMailDispatch>,
    pub records: Arc<InMemoryVerificationRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
    pub state: web::Data<TestState>,
    pub health: web::Data<HealthState>,
    pub config: AppConfig,
}

impl Harness {
    pub fn new(dispatch: StubMailDispatch) -> Self {
        Self::with_config(dispatch, VerificationServiceConfig::default())
    }

    pub fn with_config(
        dispatch: StubMailDispatch,
        service_config: VerificationServiceConfig,
    ) -> Self {
        let dispatch = Arc::new(dispatch);
        let records = Arc::new(InMemoryVerificationRepository::new());
        let profiles = Arc::new(InMemoryProfileRepository::new());

        let verification_service = Arc::new(VerificationService::new(
            Arc::clone(&dispatch),
            Arc::clone(&records),
            Arc::clone(&profiles),
            service_config,
        ));
        let contact_service = Arc::new(ContactService::new(Arc::clone(&profiles)));

        Self {
            dispatch,
            records,
            profiles,
            state: web::Data::new(AppState::new(verification_service, contact_service)),
            health: web::Data::new(HealthState::in_memory(true)),
            config: AppConfig {
                jwt: JwtConfig::new(SECRET),
                ..AppConfig::default()
            },
        }
    }
}

/// Signed bearer token for `sub`
pub fn token_for(sub: &str) -> String {
    token_signed_with(sub, SECRET)
}

pub fn token_signed_with(sub: &str, secret: &str) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        iss: None,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn bearer(sub: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(sub)))
}

/// Call the service and decode the JSON body, whether the response came
/// from a handler or from a middleware rejection
pub async fn call<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => {
            let status = resp.status();
            let body = test::read_body(resp).await;
            (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let body = to_bytes(resp.into_body()).await.unwrap();
            (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
        }
    }
}

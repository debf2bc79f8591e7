use actix_web::{
    http::{header::AUTHORIZATION, StatusCode},
    web, HttpRequest, HttpResponse,
};
use constant_time_eq::constant_time_eq;

use ot_core::services::mailer::MailTransport;

use crate::dto::{MailerErrorBody, SendCodeResponse};
use crate::handlers::error::status_for;
use crate::routes::mailer::MailerState;

/// Whether the request carries exactly `Bearer {token}`
fn is_authorized(req: &HttpRequest, token: Option<&str>) -> bool {
    let token = match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => return false,
    };

    let presented = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let expected = format!("Bearer {}", token);

    constant_time_eq(presented.as_bytes(), expected.as_bytes())
}

fn error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(MailerErrorBody::new(message))
}

/// Handler for POST /send_code
///
/// Generates a code, emails it to the institutional address in the body and
/// returns it to the caller.
///
/// # Request Body
///
/// ```json
/// { "email": "jane.doe@ox.ac.uk" }
/// ```
///
/// # Response
///
/// `200 {"code": "123456"}`; errors are `{"error": "..."}` with 401 for a
/// bad token, 400 for a bad body or address and 500 when delivery failed.
pub async fn send_code<T>(
    req: HttpRequest,
    state: web::Data<MailerState<T>>,
    body: web::Bytes,
) -> HttpResponse
where
    T: MailTransport + 'static,
{
    if !is_authorized(&req, state.api_token.as_deref()) {
        tracing::warn!(event = "mailer_unauthorized", "Rejected send_code request");
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => return error(StatusCode::BAD_REQUEST, "Invalid JSON"),
    };
    let email = payload
        .get("email")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("");

    match state.mailer.send_code(email).await {
        Ok(code) => HttpResponse::Ok().json(SendCodeResponse { code }),
        Err(err) => error(status_for(err.kind()), err.to_string()),
    }
}

/// Fallback for every other path
pub async fn mailer_not_found() -> HttpResponse {
    error(StatusCode::NOT_FOUND, "Not found")
}

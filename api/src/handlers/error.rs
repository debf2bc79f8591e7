//! Conversion of domain errors into HTTP responses
//!
//! Every failure leaves the API as `{ "error", "message", "timestamp" }`,
//! where `error` is the taxonomy code of the underlying [`DomainError`].

use actix_web::{
    error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError,
};
use ot_core::errors::{DomainError, ErrorKind, VerificationError};
use ot_shared::ErrorResponse;
use std::fmt;

/// Message returned in place of internal failure details
const INTERNAL_MESSAGE: &str = "Internal server error.";

/// HTTP wrapper around a domain error
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self(DomainError::InvalidArgument {
            message: message.into(),
        })
    }

    pub fn unauthenticated() -> Self {
        Self(DomainError::Unauthenticated)
    }

    pub fn kind(&self) -> ErrorKind {
        self.0.kind()
    }

    /// Message safe to show the caller
    ///
    /// Raw internal failures (storage, network) are replaced by a generic
    /// message; domain messages of kind `internal`, such as a failed send,
    /// are kept.
    pub fn public_message(&self) -> String {
        match &self.0 {
            DomainError::Internal { .. } => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// HTTP status for each error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::FailedPrecondition => StatusCode::CONFLICT,
        ErrorKind::DeadlineExceeded => StatusCode::GONE,
        ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.0)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<VerificationError> for ApiError {
    fn from(err: VerificationError) -> Self {
        Self(err.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        if let DomainError::Internal { message } = &self.0 {
            tracing::error!(error = %message, event = "internal_error", "Request failed");
        }

        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.0.code(), self.public_message()))
    }
}

/// Map JSON extractor failures onto `invalid_argument`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, event = "invalid_json_body", "Rejected request body");
    ApiError::invalid_argument("Invalid request body.").into()
}

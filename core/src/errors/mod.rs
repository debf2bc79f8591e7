//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{ErrorKind, MailerError, VerificationError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Every failure surfaced to a caller maps onto exactly one [`ErrorKind`].
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Please log in first.")]
    Unauthenticated,

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    FailedPrecondition { message: String },

    #[error("{message}")]
    DeadlineExceeded { message: String },

    #[error("{message}")]
    PermissionDenied { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("{message}")]
    Internal { message: String },

    // Bridge to verification flow errors
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Mailer(#[from] MailerError),
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Taxonomy kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthenticated => ErrorKind::Unauthenticated,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::FailedPrecondition { .. } => ErrorKind::FailedPrecondition,
            Self::DeadlineExceeded { .. } => ErrorKind::DeadlineExceeded,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Internal { .. } => ErrorKind::Internal,
            Self::Verification(err) => err.kind(),
            Self::Mailer(err) => err.kind(),
        }
    }

    /// Wire code of this error, as used in error response bodies
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;

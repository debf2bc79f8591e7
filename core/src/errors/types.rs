//! Error kinds and verification flow errors.

use ot_shared::error_codes;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Caller-visible error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Unauthenticated,
    InvalidArgument,
    FailedPrecondition,
    DeadlineExceeded,
    PermissionDenied,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Unauthenticated => error_codes::UNAUTHENTICATED,
            Self::InvalidArgument => error_codes::INVALID_ARGUMENT,
            Self::FailedPrecondition => error_codes::FAILED_PRECONDITION,
            Self::DeadlineExceeded => error_codes::DEADLINE_EXCEEDED,
            Self::PermissionDenied => error_codes::PERMISSION_DENIED,
            Self::NotFound => error_codes::NOT_FOUND,
            Self::Internal => error_codes::INTERNAL,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Verification-related errors
///
/// Display strings are the messages shown to the end user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Must be a valid Oxford University email.")]
    InvalidEmail,

    #[error("Failed to send email.")]
    DispatchFailed,

    #[error("Code is required.")]
    CodeRequired,

    #[error("No code found.")]
    NoCodeFound,

    #[error("Code expired.")]
    CodeExpired,

    #[error("Invalid code.")]
    InvalidCode,

    #[error("Too many attempts. Request a new code.")]
    TooManyAttempts,

    #[error("Verify your Oxford email to view contact information.")]
    NotVerified,
}

impl VerificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmail | Self::CodeRequired => ErrorKind::InvalidArgument,
            Self::DispatchFailed => ErrorKind::Internal,
            Self::NoCodeFound => ErrorKind::FailedPrecondition,
            Self::CodeExpired => ErrorKind::DeadlineExceeded,
            Self::InvalidCode | Self::TooManyAttempts | Self::NotVerified => {
                ErrorKind::PermissionDenied
            }
        }
    }
}

/// Mail dispatch service errors
///
/// Display strings are returned verbatim in the dispatch service's error body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailerError {
    #[error("email is required")]
    MissingEmail,

    #[error("email must end with @{domain}")]
    OutsideDomain { domain: String },

    #[error("{message}")]
    Transport { message: String },
}

impl MailerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingEmail | Self::OutsideDomain { .. } => ErrorKind::InvalidArgument,
            Self::Transport { .. } => ErrorKind::Internal,
        }
    }
}

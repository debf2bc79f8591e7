//! Unit tests for domain error types

use crate::errors::{DomainError, ErrorKind, MailerError, VerificationError};

#[test]
fn test_verification_error_messages() {
    assert_eq!(
        VerificationError::InvalidEmail.to_string(),
        "Must be a valid Oxford University email."
    );
    assert_eq!(VerificationError::CodeRequired.to_string(), "Code is required.");
    assert_eq!(VerificationError::NoCodeFound.to_string(), "No code found.");
    assert_eq!(VerificationError::CodeExpired.to_string(), "Code expired.");
    assert_eq!(VerificationError::InvalidCode.to_string(), "Invalid code.");
    assert_eq!(
        VerificationError::TooManyAttempts.to_string(),
        "Too many attempts. Request a new code."
    );
    assert_eq!(
        VerificationError::DispatchFailed.to_string(),
        "Failed to send email."
    );
}

#[test]
fn test_mismatch_and_lockout_share_kind() {
    assert_eq!(VerificationError::InvalidCode.kind(), ErrorKind::PermissionDenied);
    assert_eq!(
        VerificationError::TooManyAttempts.kind(),
        ErrorKind::PermissionDenied
    );
}

#[test]
fn test_domain_error_bridges_verification_kind() {
    let err: DomainError = VerificationError::CodeExpired.into();
    assert_eq!(err.kind(), ErrorKind::DeadlineExceeded);
    assert_eq!(err.code(), "deadline_exceeded");
    assert_eq!(err.to_string(), "Code expired.");

    let err: DomainError = VerificationError::NoCodeFound.into();
    assert_eq!(err.code(), "failed_precondition");
}

#[test]
fn test_general_error_kinds() {
    assert_eq!(DomainError::Unauthenticated.code(), "unauthenticated");
    assert_eq!(DomainError::Unauthenticated.to_string(), "Please log in first.");
    assert_eq!(DomainError::not_found("Profile").kind(), ErrorKind::NotFound);
    assert_eq!(DomainError::internal("boom").code(), "internal");
}

#[test]
fn test_mailer_error_messages() {
    assert_eq!(MailerError::MissingEmail.to_string(), "email is required");
    assert_eq!(
        MailerError::OutsideDomain {
            domain: "ox.ac.uk".to_string()
        }
        .to_string(),
        "email must end with @ox.ac.uk"
    );
    let err: DomainError = MailerError::Transport {
        message: "Brevo returned 401".to_string(),
    }
    .into();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert_eq!(err.to_string(), "Brevo returned 401");
}

//! Institutional email verification
//!
//! This module provides the verification code workflow:
//! - Requesting a code from the mail dispatch service and recording it
//! - Verifying a submitted code with attempt tracking and lockout
//! - Reporting the caller's verification status

mod config;
mod issuer;
mod service;
mod status;
mod traits;
mod types;
mod verifier;


pub use config::{VerificationPolicy, VerificationServiceConfig};
pub use service::VerificationService;
pub use traits::MailDispatchTrait;
pub use types::{PendingVerification, VerificationStatus};

//! Types for verification service results

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::VerificationState;

/// Verification status of the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationStatus {
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub verified_email: Option<String>,
    /// Outstanding code, if any
    pub pending: PendingVerification,
}

/// State of the caller's outstanding verification record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingVerification {
    pub state: VerificationState,
    pub email: Option<String>,
    pub remaining_attempts: Option<u32>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl PendingVerification {
    pub fn none() -> Self {
        Self {
            state: VerificationState::NoRecord,
            email: None,
            remaining_attempts: None,
            expires_at: None,
        }
    }
}

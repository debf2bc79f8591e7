//! Verification record entity for institutional email verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Number of failed attempts after which a record is locked
pub const MAX_ATTEMPTS: u32 = 5;

/// Default lifetime of an issued code (15 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 15;

/// Pending verification code for one caller identity
///
/// There is at most one record per identity. Issuing a new code overwrites
/// the previous record, which is the only way to leave the expired and
/// locked states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Code generated by the mail dispatch service
    pub code: String,

    /// Institutional email the code was sent to
    pub email: String,

    /// Failed verification attempts since issuance
    pub attempts: u32,

    /// Instant after which the record is no longer valid
    ///
    /// A record without an expiry never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of a pending verification record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    /// No code has been issued
    #[serde(rename = "none")]
    NoRecord,
    /// Code issued, unexpired and below the attempt cap
    Pending,
    /// Code lifetime has passed
    Expired,
    /// Attempt cap reached
    Locked,
}

impl VerificationRecord {
    /// Creates a freshly issued record expiring `lifetime` after `now`
    pub fn issue(
        code: impl Into<String>,
        email: impl Into<String>,
        now: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            code: code.into(),
            email: email.into(),
            attempts: 0,
            expires_at: Some(now + lifetime),
        }
    }

    /// Whether the stored code is missing or blank
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// Checks whether the record had expired at `now`
    ///
    /// The record is still valid at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expires_at) if now > expires_at)
    }

    /// Checks whether the attempt cap has been reached
    pub fn is_locked(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }

    /// Compares a candidate code against the stored code
    ///
    /// Exact byte equality, evaluated in constant time for equal lengths.
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.len() == candidate.len()
            && constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Attempt count after one more failure
    pub fn next_attempts(&self) -> u32 {
        self.attempts.saturating_add(1)
    }

    /// Gets the number of remaining verification attempts
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }

    /// Gets the state of this record at `now`
    ///
    /// Expiry takes precedence over lockout, matching the order in which
    /// verification checks them.
    pub fn state_at(&self, now: DateTime<Utc>, max_attempts: u32) -> VerificationState {
        if self.is_expired_at(now) {
            VerificationState::Expired
        } else if self.is_locked(max_attempts) {
            VerificationState::Locked
        } else {
            VerificationState::Pending
        }
    }
}

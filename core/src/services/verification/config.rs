//! Configuration for the verification service

use ot_shared::config::VerificationSettings;
use ot_shared::email::DEFAULT_INSTITUTIONAL_DOMAIN;

use crate::domain::entities::{DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};

/// Optional behaviors around lockout and record reuse
///
/// Both switches default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationPolicy {
    /// Reject even a correct code once the attempt cap has been reached
    pub lockout_blocks_correct_code: bool,
    /// Delete the record after a successful verification
    pub consume_on_success: bool,
}

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before an issued code expires
    pub code_expiration_minutes: i64,
    /// Failed attempts at which the record locks
    pub max_attempts: u32,
    /// Domain candidate emails must belong to
    pub institutional_domain: String,
    pub policy: VerificationPolicy,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            institutional_domain: DEFAULT_INSTITUTIONAL_DOMAIN.to_string(),
            policy: VerificationPolicy::default(),
        }
    }
}

impl From<&VerificationSettings> for VerificationServiceConfig {
    fn from(settings: &VerificationSettings) -> Self {
        Self {
            institutional_domain: settings.institutional_domain.clone(),
            policy: VerificationPolicy {
                lockout_blocks_correct_code: settings.lockout_blocks_correct_code,
                consume_on_success: settings.consume_on_success,
            },
            ..Self::default()
        }
    }
}

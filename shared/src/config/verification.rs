//! Verification lifecycle settings

use serde::{Deserialize, Serialize};

use super::{env_flag, env_non_empty};

/// Settings the API server applies to the verification code lifecycle
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationSettings {
    /// Required institutional domain (subdomains accepted)
    pub institutional_domain: String,

    /// Reject a correct code once the attempt cap has been reached
    #[serde(default)]
    pub lockout_blocks_correct_code: bool,

    /// Delete the pending record after a successful verification
    #[serde(default)]
    pub consume_on_success: bool,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            institutional_domain: String::from("ox.ac.uk"),
            lockout_blocks_correct_code: false,
            consume_on_success: false,
        }
    }
}

impl VerificationSettings {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            institutional_domain: env_non_empty("VERIFICATION_DOMAIN")
                .unwrap_or_else(|| String::from("ox.ac.uk")),
            lockout_blocks_correct_code: env_flag("VERIFICATION_LOCKOUT_BLOCKS_CORRECT_CODE"),
            consume_on_success: env_flag("VERIFICATION_CONSUME_ON_SUCCESS"),
        }
    }
}

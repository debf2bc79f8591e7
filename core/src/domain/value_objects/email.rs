//! Institutional email address value object.

use ot_shared::email::is_institutional_email;
use serde::Serialize;
use std::fmt;

use crate::errors::VerificationError;

/// Email address known to belong to the configured institutional domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstitutionalEmail(String);

impl InstitutionalEmail {
    /// Validates `raw` against `domain`
    ///
    /// The address is kept exactly as supplied; it is what the code is sent
    /// to and what is recorded on the profile after verification.
    pub fn parse(raw: &str, domain: &str) -> Result<Self, VerificationError> {
        if raw.is_empty() || !is_institutional_email(raw, domain) {
            return Err(VerificationError::InvalidEmail);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for InstitutionalEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

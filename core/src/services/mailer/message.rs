//! Rendered outbound email

use serde::Serialize;

pub const VERIFICATION_SUBJECT: &str = "Your Oxford Verification Code";

/// Email ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: Option<String>,
}

impl OutgoingEmail {
    /// Verification code email for `to`
    pub fn verification_code(to: impl Into<String>, code: &str, lifetime_minutes: i64) -> Self {
        Self {
            to: to.into(),
            subject: VERIFICATION_SUBJECT.to_string(),
            text_body: format!("Your verification code is: {}", code),
            html_body: Some(format!(
                "<strong>{}</strong> is your verification code. It expires in {} minutes.",
                code, lifetime_minutes
            )),
        }
    }
}

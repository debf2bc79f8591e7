use serde::{Deserialize, Serialize};

/// Successful reply of the mail dispatch service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub code: String,
}

/// Error reply of the mail dispatch service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerErrorBody {
    pub error: String,
}

impl MailerErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

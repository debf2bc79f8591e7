use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RequestCodeRequest {
    /// Candidate institutional address; a missing field reads as empty
    #[serde(default)]
    #[validate(length(max = 320))]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    /// Code from the verification email; a missing field reads as empty
    #[serde(default)]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: RequestCodeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.email, "");

        let request: VerifyCodeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.code, "");
    }

    #[test]
    fn test_overlong_email_fails_validation() {
        let request = RequestCodeRequest {
            email: format!("{}@ox.ac.uk", "a".repeat(320)),
        };
        assert!(request.validate().is_err());

        let request = RequestCodeRequest {
            email: "jane@ox.ac.uk".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}

//! Unit tests for the mail dispatch client

use ot_core::services::verification::MailDispatchTrait;
use ot_shared::config::MailApiConfig;

use crate::mail::ox_mail_client::{parse_send_code_response, send_code_url};
use crate::mail::OxMailApiClient;
use crate::InfrastructureError;

#[test]
fn test_success_returns_code() {
    assert_eq!(
        parse_send_code_response(200, r#"{"code":"123456"}"#).unwrap(),
        "123456"
    );
}

#[test]
fn test_success_without_code_fails() {
    for body in ["", "{}", r#"{"code":""}"#] {
        let err = parse_send_code_response(200, body).unwrap_err();
        assert!(err.to_string().contains("did not return a code"), "body {:?}", body);
    }
}

#[test]
fn test_error_status_uses_error_field() {
    let err = parse_send_code_response(401, r#"{"error":"Unauthorized"}"#).unwrap_err();
    assert!(matches!(err, InfrastructureError::Mail(ref m) if m.contains("Unauthorized")));

    let err = parse_send_code_response(502, "").unwrap_err();
    assert!(err.to_string().contains("Mail API error."));

    // A code in an error reply is ignored
    assert!(parse_send_code_response(500, r#"{"code":"123456"}"#).is_err());
}

#[test]
fn test_malformed_body_fails() {
    assert!(parse_send_code_response(200, "<html>").is_err());
}

#[test]
fn test_send_code_url_replaces_path() {
    assert_eq!(
        send_code_url("https://mail.example.org").unwrap().as_str(),
        "https://mail.example.org/send_code"
    );
    assert_eq!(
        send_code_url("https://mail.example.org/api/").unwrap().as_str(),
        "https://mail.example.org/send_code"
    );
    assert!(send_code_url("not a url").is_err());
}

#[tokio::test]
async fn test_missing_configuration_fails_before_network() {
    for config in [
        MailApiConfig::default(),
        MailApiConfig {
            base_url: Some("http://127.0.0.1:9".to_string()),
            ..MailApiConfig::default()
        },
        MailApiConfig {
            token: Some("secret".to_string()),
            ..MailApiConfig::default()
        },
    ] {
        let client = OxMailApiClient::new(config).unwrap();
        assert!(!client.is_configured());

        let err = client.send_code("jane@ox.ac.uk").await.unwrap_err();
        assert!(matches!(err, InfrastructureError::Config(_)));

        let err = client.request_code("jane@ox.ac.uk").await.unwrap_err();
        assert!(err.contains("OX_MAIL_API_URL"));
    }
}

//! Unit tests for the mailer service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::MailerError;
use crate::services::mailer::{
    generate_code, MailTransport, MailerService, MailerServiceConfig, OutgoingEmail,
};

// Mock transport recording every delivered email
#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail_with: Option<String>,
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone());
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[test]
fn test_generate_code_is_six_digits() {
    for _ in 0..1000 {
        let code = generate_code();
        assert_eq!(code.len(), 6);
        let value: u32 = code.parse().unwrap();
        assert!((100_000..=999_999).contains(&value));
    }
}

#[tokio::test]
async fn test_send_code_delivers_and_returns_code() {
    let transport = Arc::new(RecordingTransport::default());
    let service = MailerService::new(transport.clone(), MailerServiceConfig::default());

    let code = service.send_code("  jane@ox.ac.uk ").await.unwrap();

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "jane@ox.ac.uk");
    assert_eq!(sent[0].text_body, format!("Your verification code is: {}", code));
    assert!(sent[0].html_body.as_ref().unwrap().contains("It expires in 15 minutes."));
}

#[tokio::test]
async fn test_send_code_validates_email() {
    let transport = Arc::new(RecordingTransport::default());
    let service = MailerService::new(transport.clone(), MailerServiceConfig::default());

    assert_eq!(service.send_code("   ").await, Err(MailerError::MissingEmail));
    assert_eq!(
        service.send_code("jane@gmail.com").await,
        Err(MailerError::OutsideDomain {
            domain: "ox.ac.uk".to_string()
        })
    );
    assert!(transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_send_code_surfaces_transport_failure() {
    let transport = Arc::new(RecordingTransport {
        sent: Mutex::new(Vec::new()),
        fail_with: Some("Missing BREVO_API_KEY".to_string()),
    });
    let service = MailerService::new(transport, MailerServiceConfig::default());

    let err = service.send_code("jane@ox.ac.uk").await.unwrap_err();
    assert_eq!(err.to_string(), "Missing BREVO_API_KEY");
}

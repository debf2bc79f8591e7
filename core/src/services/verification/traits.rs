//! Traits for mail dispatch integration

use async_trait::async_trait;

/// Trait for the external mail dispatch service
///
/// The dispatch service generates the code, emails it to the address and
/// returns it so it can be recorded.
#[async_trait]
pub trait MailDispatchTrait: Send + Sync {
    /// Ask the dispatch service to email a fresh code to `email`
    ///
    /// Returns the code that was sent.
    async fn request_code(&self, email: &str) -> Result<String, String>;
}

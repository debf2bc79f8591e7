//! Mail dispatch service endpoint

pub mod send_code;

use std::sync::Arc;

use ot_core::services::mailer::{MailTransport, MailerService};

pub use send_code::{mailer_not_found, send_code};

/// State of the mail dispatch service
pub struct MailerState<T: MailTransport> {
    pub mailer: Arc<MailerService<T>>,
    /// Token callers must present; every request is refused without one
    pub api_token: Option<String>,
}

impl<T: MailTransport> MailerState<T> {
    pub fn new(mailer: Arc<MailerService<T>>, api_token: Option<String>) -> Self {
        Self { mailer, api_token }
    }
}

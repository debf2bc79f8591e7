//! Mail module
//!
//! - [`OxMailApiClient`] calls the mail dispatch service on behalf of the
//!   API server
//! - [`SmtpTransport`], [`BrevoTransport`] and [`LogTransport`] deliver
//!   email for the dispatch service itself

pub mod brevo;
pub mod log_transport;
pub mod ox_mail_client;
pub mod smtp;

#[cfg(test)]
mod tests;

pub use brevo::BrevoTransport;
pub use log_transport::LogTransport;
pub use ox_mail_client::OxMailApiClient;
pub use smtp::SmtpTransport;

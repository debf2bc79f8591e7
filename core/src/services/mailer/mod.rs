//! Mail dispatch service
//!
//! Generates verification codes and emails them to institutional addresses
//! through a pluggable [`MailTransport`].

mod message;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use message::OutgoingEmail;
pub use service::{generate_code, MailerService, MailerServiceConfig};
pub use traits::MailTransport;

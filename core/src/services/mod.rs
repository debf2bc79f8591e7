//! Business services containing domain logic and use cases.

pub mod contact;
pub mod mailer;
pub mod verification;

// Re-export commonly used types
pub use contact::ContactService;
pub use mailer::{MailTransport, MailerService, MailerServiceConfig, OutgoingEmail};
pub use verification::{
    MailDispatchTrait, PendingVerification, VerificationPolicy, VerificationService,
    VerificationServiceConfig, VerificationStatus,
};

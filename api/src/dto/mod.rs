pub mod mailer;
pub mod profile;
pub mod verification;

pub use mailer::{MailerErrorBody, SendCodeResponse};
pub use profile::UpdateProfileRequest;
pub use verification::{RequestCodeRequest, VerifyCodeRequest};

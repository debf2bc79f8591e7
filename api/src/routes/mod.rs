//! Route handlers
//!
//! - `verification`: request, verify and inspect institutional email codes
//! - `profiles`: the contact gate and saving one's own contact details
//! - `mailer`: the mail dispatch service endpoint
//! - `health`: liveness and dependency checks

pub mod health;
pub mod mailer;
pub mod profiles;
pub mod verification;

use std::sync::Arc;

use ot_core::{
    ContactService, MailDispatchTrait, ProfileRepository, VerificationRecordRepository,
    VerificationService,
};

/// Application state that holds shared services
pub struct AppState<M, V, P>
where
    M: MailDispatchTrait,
    V: VerificationRecordRepository,
    P: ProfileRepository,
{
    pub verification_service: Arc<VerificationService<M, V, P>>,
    pub contact_service: Arc<ContactService<P>>,
}

impl<M, V, P> AppState<M, V, P>
where
    M: MailDispatchTrait,
    V: VerificationRecordRepository,
    P: ProfileRepository,
{
    pub fn new(
        verification_service: Arc<VerificationService<M, V, P>>,
        contact_service: Arc<ContactService<P>>,
    ) -> Self {
        Self {
            verification_service,
            contact_service,
        }
    }
}

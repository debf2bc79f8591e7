//! Verification service definition

use std::sync::Arc;

use crate::repositories::{ProfileRepository, VerificationRecordRepository};

use super::config::VerificationServiceConfig;
use super::traits::MailDispatchTrait;

/// Verification service for institutional email codes
///
/// Operations live in `issuer`, `verifier` and `status`.
pub struct VerificationService<M, V, P>
where
    M: MailDispatchTrait,
    V: VerificationRecordRepository,
    P: ProfileRepository,
{
    /// Mail dispatch client that generates and sends codes
    pub(super) mail_dispatch: Arc<M>,
    /// Store of pending verification records
    pub(super) records: Arc<V>,
    /// Store of user profiles
    pub(super) profiles: Arc<P>,
    pub(super) config: VerificationServiceConfig,
}

impl<M, V, P> VerificationService<M, V, P>
where
    M: MailDispatchTrait,
    V: VerificationRecordRepository,
    P: ProfileRepository,
{
    /// Create a new verification service
    pub fn new(
        mail_dispatch: Arc<M>,
        records: Arc<V>,
        profiles: Arc<P>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            mail_dispatch,
            records,
            profiles,
            config,
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }
}

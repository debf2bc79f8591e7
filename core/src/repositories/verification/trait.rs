//! Verification record repository trait.
//!
//! Records are keyed by the identity of their owner; implementations never
//! expose a record to anyone else.

use async_trait::async_trait;

use crate::domain::entities::VerificationRecord;
use crate::domain::value_objects::CallerIdentity;
use crate::errors::DomainError;

/// Repository trait for pending verification records
#[async_trait]
pub trait VerificationRecordRepository: Send + Sync {
    /// Find the record owned by `owner`
    ///
    /// # Returns
    /// * `Ok(Some(record))` - A code has been issued for this identity
    /// * `Ok(None)` - No record exists
    async fn find(&self, owner: &CallerIdentity) -> Result<Option<VerificationRecord>, DomainError>;

    /// Create or fully replace the record owned by `owner`
    ///
    /// Every field of any previous record is discarded.
    async fn save(&self, owner: &CallerIdentity, record: &VerificationRecord) -> Result<(), DomainError>;

    /// Merge a new failed-attempt count into the existing record
    ///
    /// Only the `attempts` field is written; the other fields are left as
    /// they are in storage.
    async fn update_attempts(&self, owner: &CallerIdentity, attempts: u32) -> Result<(), DomainError>;

    /// Remove the record owned by `owner`
    ///
    /// Returns `true` if a record existed.
    async fn delete(&self, owner: &CallerIdentity) -> Result<bool, DomainError>;
}

//! In-memory verification record store, used in development and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::VerificationRecord;
use crate::domain::value_objects::CallerIdentity;
use crate::errors::DomainError;

use super::r#trait::VerificationRecordRepository;

/// Process-local verification record store
#[derive(Clone, Default)]
pub struct InMemoryVerificationRepository {
    records: Arc<RwLock<HashMap<CallerIdentity, VerificationRecord>>>,
}

impl InMemoryVerificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl VerificationRecordRepository for InMemoryVerificationRepository {
    async fn find(&self, owner: &CallerIdentity) -> Result<Option<VerificationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(owner).cloned())
    }

    async fn save(&self, owner: &CallerIdentity, record: &VerificationRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert(owner.clone(), record.clone());
        Ok(())
    }

    async fn update_attempts(&self, owner: &CallerIdentity, attempts: u32) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        // Merge semantics: a missing record gets a bare entry holding only the count
        records
            .entry(owner.clone())
            .and_modify(|record| record.attempts = attempts)
            .or_insert_with(|| VerificationRecord {
                code: String::new(),
                email: String::new(),
                attempts,
                expires_at: None,
            });
        Ok(())
    }

    async fn delete(&self, owner: &CallerIdentity) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(owner).is_some())
    }
}

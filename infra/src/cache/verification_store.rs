//! Redis implementation of the verification record repository
//!
//! Each record is a hash at `{prefix}:record:{uid}` with the fields
//! `code`, `email`, `attempts` and `expires_at_ms` (milliseconds since the
//! Unix epoch, `0` meaning no expiry).

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use tracing::debug;

use ot_core::domain::entities::VerificationRecord;
use ot_core::domain::value_objects::CallerIdentity;
use ot_core::errors::DomainError;
use ot_core::repositories::VerificationRecordRepository;

use super::redis_client::RedisClient;

pub(crate) const FIELD_CODE: &str = "code";
pub(crate) const FIELD_EMAIL: &str = "email";
pub(crate) const FIELD_ATTEMPTS: &str = "attempts";
pub(crate) const FIELD_EXPIRES_AT: &str = "expires_at_ms";

/// Redis-backed verification record store
#[derive(Clone)]
pub struct RedisVerificationRepository {
    client: RedisClient,
    key_prefix: String,
}

impl RedisVerificationRepository {
    pub fn new(client: RedisClient, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn record_key(&self, owner: &CallerIdentity) -> String {
        record_key(&self.key_prefix, owner)
    }
}

pub(crate) fn record_key(prefix: &str, owner: &CallerIdentity) -> String {
    format!("{}:record:{}", prefix, owner)
}

/// Flatten a record into hash fields
pub(crate) fn record_to_fields(record: &VerificationRecord) -> Vec<(&'static str, String)> {
    let expires_at_ms = record
        .expires_at
        .map(|at| at.timestamp_millis())
        .unwrap_or(0);

    vec![
        (FIELD_CODE, record.code.clone()),
        (FIELD_EMAIL, record.email.clone()),
        (FIELD_ATTEMPTS, record.attempts.to_string()),
        (FIELD_EXPIRES_AT, expires_at_ms.to_string()),
    ]
}

/// The single hash field written by an attempt-count merge
pub(crate) fn attempts_update(attempts: u32) -> (&'static str, String) {
    (FIELD_ATTEMPTS, attempts.to_string())
}

/// Rebuild a record from hash fields
///
/// An empty hash means no record. Missing or unparseable fields fall back
/// to empty values, which the verifier treats as "no code".
pub(crate) fn record_from_fields(fields: &HashMap<String, String>) -> Option<VerificationRecord> {
    if fields.is_empty() {
        return None;
    }

    let expires_at = fields
        .get(FIELD_EXPIRES_AT)
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|ms| *ms != 0)
        .and_then(millis_to_datetime);

    Some(VerificationRecord {
        code: fields.get(FIELD_CODE).cloned().unwrap_or_default(),
        email: fields.get(FIELD_EMAIL).cloned().unwrap_or_default(),
        attempts: fields
            .get(FIELD_ATTEMPTS)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        expires_at,
    })
}

fn millis_to_datetime(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

#[async_trait]
impl VerificationRecordRepository for RedisVerificationRepository {
    async fn find(&self, owner: &CallerIdentity) -> Result<Option<VerificationRecord>, DomainError> {
        let fields = self.client.hash_get_all(&self.record_key(owner)).await?;
        Ok(record_from_fields(&fields))
    }

    async fn save(&self, owner: &CallerIdentity, record: &VerificationRecord) -> Result<(), DomainError> {
        self.client
            .hash_replace(&self.record_key(owner), record_to_fields(record))
            .await?;
        debug!(user_id = %owner, event = "verification_record_saved", "Stored verification record");
        Ok(())
    }

    async fn update_attempts(&self, owner: &CallerIdentity, attempts: u32) -> Result<(), DomainError> {
        let (field, value) = attempts_update(attempts);
        self.client
            .hash_set(&self.record_key(owner), field, value)
            .await?;
        Ok(())
    }

    async fn delete(&self, owner: &CallerIdentity) -> Result<bool, DomainError> {
        Ok(self.client.delete(&self.record_key(owner)).await?)
    }
}

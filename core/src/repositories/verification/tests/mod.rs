//! Unit tests for the in-memory verification record store

use chrono::{Duration, Utc};

use crate::domain::entities::VerificationRecord;
use crate::domain::value_objects::CallerIdentity;
use crate::repositories::verification::{
    InMemoryVerificationRepository, VerificationRecordRepository,
};

fn identity(id: &str) -> CallerIdentity {
    CallerIdentity::new(id).unwrap()
}

fn record(code: &str) -> VerificationRecord {
    VerificationRecord::issue(code, "jane@ox.ac.uk", Utc::now(), Duration::minutes(15))
}

#[tokio::test]
async fn test_save_and_find() {
    let repo = InMemoryVerificationRepository::new();
    let owner = identity("uid-1");

    assert!(repo.find(&owner).await.unwrap().is_none());

    repo.save(&owner, &record("123456")).await.unwrap();
    let found = repo.find(&owner).await.unwrap().unwrap();
    assert_eq!(found.code, "123456");
    assert_eq!(found.attempts, 0);
}

#[tokio::test]
async fn test_save_replaces_whole_record() {
    let repo = InMemoryVerificationRepository::new();
    let owner = identity("uid-1");

    repo.save(&owner, &record("111111")).await.unwrap();
    repo.update_attempts(&owner, 4).await.unwrap();
    repo.save(&owner, &record("222222")).await.unwrap();

    let found = repo.find(&owner).await.unwrap().unwrap();
    assert_eq!(found.code, "222222");
    assert_eq!(found.attempts, 0);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_update_attempts_leaves_other_fields() {
    let repo = InMemoryVerificationRepository::new();
    let owner = identity("uid-1");
    let original = record("123456");

    repo.save(&owner, &original).await.unwrap();
    repo.update_attempts(&owner, 3).await.unwrap();

    let found = repo.find(&owner).await.unwrap().unwrap();
    assert_eq!(found.attempts, 3);
    assert_eq!(found.code, original.code);
    assert_eq!(found.email, original.email);
    assert_eq!(found.expires_at, original.expires_at);
}

#[tokio::test]
async fn test_records_are_scoped_to_owner() {
    let repo = InMemoryVerificationRepository::new();
    let alice = identity("alice");
    let bob = identity("bob");

    repo.save(&alice, &record("123456")).await.unwrap();

    assert!(repo.find(&bob).await.unwrap().is_none());
    assert!(!repo.delete(&bob).await.unwrap());
    assert!(repo.delete(&alice).await.unwrap());
    assert!(repo.is_empty().await);
}

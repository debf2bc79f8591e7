//! Unit tests for the in-memory profile store

use chrono::Utc;

use crate::domain::entities::{ProfileVerificationState, UserProfile};
use crate::domain::value_objects::CallerIdentity;
use crate::repositories::profile::{InMemoryProfileRepository, ProfileRepository};

#[tokio::test]
async fn test_merge_creates_missing_profile() {
    let repo = InMemoryProfileRepository::new();
    let owner = CallerIdentity::new("uid-1").unwrap();
    let now = Utc::now();

    repo.merge_verification(&owner, &ProfileVerificationState::verified("jane@ox.ac.uk", now))
        .await
        .unwrap();

    let profile = repo.find("uid-1").await.unwrap().unwrap();
    assert!(profile.is_verified());
    assert_eq!(profile.verification.verified_at, Some(now));
    assert_eq!(profile.verification.verified_email.as_deref(), Some("jane@ox.ac.uk"));
    assert_eq!(profile.display_name, None);
}

#[tokio::test]
async fn test_merge_keeps_contact_fields() {
    let repo = InMemoryProfileRepository::new();
    let mut profile = UserProfile::new("uid-1");
    profile.display_name = Some("Jane".to_string());
    profile.phone = Some("+44 7700 900123".to_string());
    repo.upsert_contact(&profile).await.unwrap();

    let owner = CallerIdentity::new("uid-1").unwrap();
    repo.merge_verification(&owner, &ProfileVerificationState::verified("jane@ox.ac.uk", Utc::now()))
        .await
        .unwrap();

    let stored = repo.find("uid-1").await.unwrap().unwrap();
    assert!(stored.is_verified());
    assert_eq!(stored.display_name.as_deref(), Some("Jane"));
    assert_eq!(stored.phone.as_deref(), Some("+44 7700 900123"));
}

#[tokio::test]
async fn test_upsert_contact_preserves_verification() {
    let repo = InMemoryProfileRepository::new();
    let owner = CallerIdentity::new("uid-1").unwrap();
    repo.merge_verification(&owner, &ProfileVerificationState::verified("jane@ox.ac.uk", Utc::now()))
        .await
        .unwrap();

    let mut update = UserProfile::new("uid-1");
    update.contact_email = Some("jane@gmail.com".to_string());
    repo.upsert_contact(&update).await.unwrap();

    let stored = repo.find("uid-1").await.unwrap().unwrap();
    assert!(stored.is_verified());
    assert_eq!(stored.contact_email.as_deref(), Some("jane@gmail.com"));
}

//! Unit tests for the contact gate

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{ContactDetails, ProfileVerificationState, UserProfile};
use crate::domain::value_objects::CallerIdentity;
use crate::errors::ErrorKind;
use crate::repositories::{InMemoryProfileRepository, ProfileRepository};
use crate::services::contact::ContactService;

async fn seeded() -> (ContactService<InMemoryProfileRepository>, Arc<InMemoryProfileRepository>) {
    let profiles = Arc::new(InMemoryProfileRepository::new());

    let mut seller = UserProfile::new("seller");
    seller.display_name = Some("Sam Seller".to_string());
    seller.contact_email = Some("sam@gmail.com".to_string());
    seller.phone = Some("+44 7700 900456".to_string());
    profiles.upsert_contact(&seller).await.unwrap();

    (ContactService::new(profiles.clone()), profiles)
}

async fn verify(profiles: &InMemoryProfileRepository, id: &str) {
    let owner = CallerIdentity::new(id).unwrap();
    profiles
        .merge_verification(
            &owner,
            &ProfileVerificationState::verified(format!("{}@ox.ac.uk", id), Utc::now()),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unverified_viewer_is_denied() {
    let (service, _) = seeded().await;
    let viewer = CallerIdentity::new("buyer").unwrap();

    let err = service.view_contact(&viewer, "seller").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert_eq!(
        err.to_string(),
        "Verify your Oxford email to view contact information."
    );

    // Unknown owners are indistinguishable for unverified viewers
    let err = service.view_contact(&viewer, "nobody").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
}

#[tokio::test]
async fn test_verified_viewer_sees_contact_card() {
    let (service, profiles) = seeded().await;
    verify(&profiles, "buyer").await;
    let viewer = CallerIdentity::new("buyer").unwrap();

    let card = service.view_contact(&viewer, "seller").await.unwrap();
    assert_eq!(card.user_id, "seller");
    assert_eq!(card.display_name.as_deref(), Some("Sam Seller"));
    assert_eq!(card.contact_email.as_deref(), Some("sam@gmail.com"));
    assert_eq!(card.phone.as_deref(), Some("+44 7700 900456"));
    assert!(!card.verified);
}

#[tokio::test]
async fn test_missing_owner_is_not_found() {
    let (service, profiles) = seeded().await;
    verify(&profiles, "buyer").await;
    let viewer = CallerIdentity::new("buyer").unwrap();

    let err = service.view_contact(&viewer, "nobody").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_update_contact_keeps_verification() {
    let (service, profiles) = seeded().await;
    verify(&profiles, "seller").await;
    let owner = CallerIdentity::new("seller").unwrap();

    let card = service
        .update_contact(
            &owner,
            ContactDetails {
                display_name: Some(" Sam S. ".to_string()),
                contact_email: None,
                phone: Some("".to_string()),
                whatsapp: Some("+44 7700 900999".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(card.display_name.as_deref(), Some("Sam S."));
    assert_eq!(card.contact_email, None);
    assert_eq!(card.phone, None);
    assert_eq!(card.whatsapp.as_deref(), Some("+44 7700 900999"));
    assert!(card.verified);

    let stored = profiles.find("seller").await.unwrap().unwrap();
    assert_eq!(
        stored.verification.verified_email.as_deref(),
        Some("seller@ox.ac.uk")
    );
}

#[tokio::test]
async fn test_update_contact_creates_unverified_profile() {
    let (service, profiles) = seeded().await;
    let owner = CallerIdentity::new("newcomer").unwrap();

    let card = service
        .update_contact(
            &owner,
            ContactDetails {
                display_name: Some("Nina".to_string()),
                ..ContactDetails::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(card.user_id, "newcomer");
    assert!(!card.verified);
    assert!(!profiles.find("newcomer").await.unwrap().unwrap().is_verified());
}

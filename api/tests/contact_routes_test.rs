//! Integration tests for the contact gate

mod common;

use actix_web::{http::StatusCode, test};
use chrono::Utc;
use serde_json::{json, Value};

use common::{bearer, call, Harness, StubMailDispatch};
use ot_api::create_app;
use ot_core::{CallerIdentity, ProfileRepository, ProfileVerificationState, UserProfile};

async fn seed_owner(harness: &Harness) {
    let mut owner = UserProfile::new("seller-1");
    owner.display_name = Some("Sam Seller".to_string());
    owner.contact_email = Some("sam@example.com".to_string());
    owner.phone = Some("+44 7700 900123".to_string());
    owner.whatsapp = Some("+44 7700 900123".to_string());
    harness.profiles.upsert_contact(&owner).await.unwrap();
}

async fn verify(harness: &Harness, user_id: &str) {
    let caller = CallerIdentity::new(user_id).unwrap();
    let state = ProfileVerificationState::verified("buyer@ox.ac.uk", Utc::now());
    harness.profiles.merge_verification(&caller, &state).await.unwrap();
}

#[actix_web::test]
async fn test_unverified_viewer_is_denied() {
    let harness = Harness::new(StubMailDispatch::returning("123456"));
    seed_owner(&harness).await;
    let app = test::init_service(create_app(
        harness.state.clone(),
        harness.health.clone(),
        &harness.config,
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/seller-1/contact")
        .insert_header(bearer("buyer-1"))
        .to_request();
    let (status, body) = call(&app, req).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "permission_denied");
    assert_eq!(
        body["message"],
        "Verify your Oxford email to view contact information."
    );
}

#[actix_web::test]
async fn test_verified_viewer_sees_contact_card() {
    let harness = Harness::new(StubMailDispatch::returning("123456"));
    seed_owner(&harness).await;
    verify(&harness, "buyer-1").await;
    let app = test::init_service(create_app(
        harness.state.clone(),
        harness.health.clone(),
        &harness.config,
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/seller-1/contact")
        .insert_header(bearer("buyer-1"))
        .to_request();
    let (status, body) = call(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "seller-1");
    assert_eq!(body["display_name"], "Sam Seller");
    assert_eq!(body["contact_email"], "sam@example.com");
    assert_eq!(body["whatsapp"], "+44 7700 900123");
    assert_eq!(body["verified"], false);
}

#[actix_web::test]
async fn test_unknown_owner_is_not_found() {
    let harness = Harness::new(StubMailDispatch::returning("123456"));
    verify(&harness, "buyer-1").await;
    let app = test::init_service(create_app(
        harness.state.clone(),
        harness.health.clone(),
        &harness.config,
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/nobody/contact")
        .insert_header(bearer("buyer-1"))
        .to_request();
    let (status, body) = call(&app, req).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn test_saved_profile_is_visible_to_verified_viewer() {
    let harness = Harness::new(StubMailDispatch::returning("654321"));
    let app = test::init_service(create_app(
        harness.state.clone(),
        harness.health.clone(),
        &harness.config,
    ))
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/profiles/me")
        .insert_header(bearer("seller-1"))
        .set_json(json!({
            "name": "  Sam Seller ",
            "preferred_email": "sam@example.com",
            "preferred_phone": "",
            "preferred_whatsapp": "+44 7700 900123",
        }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "seller-1");
    assert_eq!(body["display_name"], "Sam Seller");
    assert_eq!(body["phone"], Value::Null);
    assert_eq!(body["verified"], false);

    for (uri, payload) in [
        ("/api/v1/verification/request-code", json!({ "email": "buyer@ox.ac.uk" })),
        ("/api/v1/verification/verify-code", json!({ "code": "654321" })),
    ] {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(bearer("buyer-1"))
            .set_json(payload)
            .to_request();
        let (status, _) = call(&app, req).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/seller-1/contact")
        .insert_header(bearer("buyer-1"))
        .to_request();
    let (status, body) = call(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_name"], "Sam Seller");
    assert_eq!(body["contact_email"], "sam@example.com");
    assert_eq!(body["phone"], Value::Null);
    assert_eq!(body["whatsapp"], "+44 7700 900123");
}

#[actix_web::test]
async fn test_profile_update_cannot_set_verification() {
    let harness = Harness::new(StubMailDispatch::returning("123456"));
    let app = test::init_service(create_app(
        harness.state.clone(),
        harness.health.clone(),
        &harness.config,
    ))
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/profiles/me")
        .insert_header(bearer("buyer-1"))
        .set_json(json!({
            "display_name": "Mallory",
            "verification": { "verified": true, "verified_email": "x@ox.ac.uk" },
            "verified": true,
        }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verified"], false);

    let stored = harness.profiles.find("buyer-1").await.unwrap().unwrap();
    assert!(!stored.is_verified());
    assert_eq!(stored.verification.verified_email, None);

    // Still gated as an unverified viewer
    seed_owner(&harness).await;
    let req = test::TestRequest::get()
        .uri("/api/v1/profiles/seller-1/contact")
        .insert_header(bearer("buyer-1"))
        .to_request();
    let (status, _) = call(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_profile_update_requires_login_and_valid_lengths() {
    let harness = Harness::new(StubMailDispatch::returning("123456"));
    let app = test::init_service(create_app(
        harness.state.clone(),
        harness.health.clone(),
        &harness.config,
    ))
    .await;

    let req = test::TestRequest::put()
        .uri("/api/v1/profiles/me")
        .set_json(json!({ "display_name": "Jane" }))
        .to_request();
    let (status, _) = call(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::put()
        .uri("/api/v1/profiles/me")
        .insert_header(bearer("buyer-1"))
        .set_json(json!({ "display_name": "x".repeat(256) }))
        .to_request();
    let (status, body) = call(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_argument");
    assert!(harness.profiles.find("buyer-1").await.unwrap().is_none());
}

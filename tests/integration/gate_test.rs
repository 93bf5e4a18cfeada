//! Access gate: token verification and renewal on gated routes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeDelta, Utc};
use serde_json::json;
use tower::ServiceExt;

use paintstock_auth::jwt::{JwtDecoder, JwtEncoder};
use paintstock_core::config::AuthConfig;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn missing_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/stock/list", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.has_renewal());

    let response = app.get("/permission/list", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app.get("/stock/list", Some("not-a-token")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.has_renewal());
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = TestApp::new().await;
    let (id, _) = app.create_user("alice", false, false).await;

    let foreign = JwtEncoder::new(&AuthConfig {
        token_secret: "some-other-secret".into(),
        ..AuthConfig::default()
    })
    .issue(id, None)
    .unwrap();

    let response = app.get("/stock/list", Some(&foreign.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.has_renewal());
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = TestApp::new().await;
    let (id, _) = app.create_user("alice", false, false).await;

    let expired = app
        .encoder()
        .issue_at(id, None, 12, Utc::now() - TimeDelta::hours(13))
        .unwrap();

    let response = app.get("/stock/list", Some(&expired.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(!response.has_renewal());
}

#[tokio::test]
async fn gated_success_carries_renewed_token() {
    let app = TestApp::new().await;
    let (id, token) = app.create_user("alice", false, false).await;

    let response = app.get("/stock/list", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.has_renewal());

    let issued: i64 = response.header("issued").unwrap().parse().unwrap();
    let expires: i64 = response.header("expires").unwrap().parse().unwrap();
    assert_eq!(expires - issued, 12 * 3600 * 1000);

    let renewed = response.header("token").unwrap();
    let claims = JwtDecoder::new(&app.config.auth).verify(renewed).unwrap();
    assert_eq!(claims.user_id, id);

    let again = app.get("/stock/list", Some(renewed)).await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn denied_request_still_carries_renewed_token() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("alice", false, false).await;

    let response = app
        .post("/stock/adjust", json!({ "color": "blue", "amount": 3 }), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.has_renewal());
}

#[tokio::test]
async fn public_routes_do_not_renew() {
    let app = TestApp::new().await;
    app.register("alice", PASSWORD).await;

    let login = app.login("alice", PASSWORD).await;
    assert_eq!(login.status, StatusCode::OK);
    assert!(!login.has_renewal());

    let health = app.get("/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["database"], "connected");
    assert!(!health.has_renewal());
}

#[tokio::test]
async fn token_header_name_follows_configuration() {
    let app = TestApp::with_config(|config| config.auth.auth_header = "x-session".into()).await;
    let (_, token) = app.create_user("alice", false, false).await;

    let response = app.get("/stock/list", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let request = Request::builder()
        .uri("/stock/list")
        .header("auth", token.as_str())
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unconfigured_secret_rejects_every_token() {
    let app = TestApp::with_config(|config| config.auth.token_secret.clear()).await;
    app.register("alice", PASSWORD).await;

    let login = app.login("alice", PASSWORD).await;
    assert_eq!(login.status, StatusCode::BAD_REQUEST);
    assert_ne!(login.body["message"], "");

    let signed_elsewhere = JwtEncoder::new(&AuthConfig {
        token_secret: "anything".into(),
        ..AuthConfig::default()
    })
    .issue(1, None)
    .unwrap();
    let response = app.get("/stock/list", Some(&signed_elsewhere.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

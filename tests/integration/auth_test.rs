//! Registration and login.

use axum::http::StatusCode;
use serde_json::json;

use paintstock_auth::jwt::JwtDecoder;

use crate::helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn register_creates_inactive_account_without_roles() {
    let app = TestApp::new().await;

    let response = app.register("alice", PASSWORD).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["message"].is_string());

    let account = app.account("alice").await;
    assert!(!account.editor);
    assert!(!account.admin);
    assert!(!account.activated);
    assert_ne!(account.password_hash, PASSWORD);
}

#[tokio::test]
async fn register_rejects_taken_username() {
    let app = TestApp::new().await;
    app.register("alice", PASSWORD).await;

    let response = app.register("alice", "another password").await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let accounts = app.users().list().await.unwrap();
    assert_eq!(accounts.len(), 1);
}

#[tokio::test]
async fn register_requires_both_fields() {
    let app = TestApp::new().await;

    let missing = app
        .post("/auth/register", json!({ "username": "alice" }), None)
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["message"], "All input is required");

    let empty = app.register("", PASSWORD).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["message"], "All input is required");

    assert!(app.users().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request_raw("POST", "/auth/register", "{not json", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid request body");
}

#[tokio::test]
async fn login_issues_token_for_configured_lifetime() {
    let app = TestApp::new().await;
    app.register("alice", PASSWORD).await;

    let response = app.login("alice", PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["editor"], 0);

    let issued = response.body["issued"].as_i64().unwrap();
    let expires = response.body["expires"].as_i64().unwrap();
    assert_eq!(expires - issued, 12 * 3600 * 1000);

    let token = response.body["token"].as_str().unwrap();
    let claims = JwtDecoder::new(&app.config.auth).verify(token).unwrap();
    assert_eq!(claims.user_id, app.account("alice").await.id);
}

#[tokio::test]
async fn login_reports_editor_flag() {
    let app = TestApp::new().await;
    app.create_user("erin", true, false).await;

    let response = app.login("erin", PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["editor"], 1);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register("alice", PASSWORD).await;

    let wrong_password = app.login("alice", "not the password").await;
    let unknown_user = app.login("mallory", PASSWORD).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert_eq!(
        wrong_password.body["message"],
        "Email and password do not match or this account does not exist."
    );
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = TestApp::new().await;

    let response = app
        .post("/auth/login", json!({ "password": PASSWORD }), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "All input is required");
}

//! Account administration endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn admin_lists_accounts_without_secrets() {
    let app = TestApp::new().await;
    let (admin_id, token) = app.create_user("root", false, true).await;
    let (user_id, _) = app.create_user("alice", true, false).await;

    let response = app.get("/permission/list", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            { "userId": admin_id, "username": "root", "editor": 0, "activated": 0 },
            { "userId": user_id, "username": "alice", "editor": 1, "activated": 0 },
        ])
    );
}

#[tokio::test]
async fn non_admin_is_forbidden() {
    let app = TestApp::new().await;
    let (id, token) = app.create_user("erin", true, false).await;

    let list = app.get("/permission/list", Some(&token)).await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);

    let activate = app
        .post(
            "/permission/activate",
            json!({ "userId": id, "activated": 1 }),
            Some(&token),
        )
        .await;
    assert_eq!(activate.status, StatusCode::FORBIDDEN);
    assert!(!app.account("erin").await.activated);

    let editor = app
        .post(
            "/permission/editor",
            json!({ "userId": id, "editor": 0 }),
            Some(&token),
        )
        .await;
    assert_eq!(editor.status, StatusCode::FORBIDDEN);
    assert!(app.account("erin").await.editor);
}

#[tokio::test]
async fn admin_toggles_activation() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("root", false, true).await;
    let (id, _) = app.create_user("alice", false, false).await;

    let response = app
        .post(
            "/permission/activate",
            json!({ "userId": id, "activated": 1 }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({ "activated": 1 }));
    assert!(app.account("alice").await.activated);

    let response = app
        .post(
            "/permission/activate",
            json!({ "userId": id, "activated": false }),
            Some(&token),
        )
        .await;
    assert_eq!(response.body, json!({ "activated": 0 }));
    assert!(!app.account("alice").await.activated);
}

#[tokio::test]
async fn editor_grant_applies_to_existing_session() {
    let app = TestApp::new().await;
    let (_, admin) = app.create_user("root", false, true).await;
    let (id, user) = app.create_user("alice", false, false).await;

    let response = app
        .post(
            "/permission/editor",
            json!({ "userId": id, "editor": true }),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({ "editor": 1 }));

    let adjust = app
        .post("/stock/adjust", json!({ "color": "grey", "amount": 7 }), Some(&user))
        .await;
    assert_eq!(adjust.status, StatusCode::CREATED);

    app.post(
        "/permission/editor",
        json!({ "userId": id, "editor": 0 }),
        Some(&admin),
    )
    .await;

    let adjust = app
        .post("/stock/adjust", json!({ "color": "grey", "amount": 1 }), Some(&user))
        .await;
    assert_eq!(adjust.status, StatusCode::FORBIDDEN);
    assert_eq!(app.stock_of("grey", &user).await, 7);
}

#[tokio::test]
async fn unknown_target_is_not_found() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("root", false, true).await;

    let response = app
        .post(
            "/permission/activate",
            json!({ "userId": 999, "activated": 1 }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .post(
            "/permission/editor",
            json!({ "userId": 999, "editor": 1 }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn incomplete_body_is_bad_request() {
    let app = TestApp::new().await;
    let (id, token) = app.create_user("root", false, true).await;

    let missing_target = app
        .post("/permission/activate", json!({ "activated": 1 }), Some(&token))
        .await;
    assert_eq!(missing_target.status, StatusCode::BAD_REQUEST);

    let missing_flag = app
        .post("/permission/editor", json!({ "userId": id }), Some(&token))
        .await;
    assert_eq!(missing_flag.status, StatusCode::BAD_REQUEST);
}

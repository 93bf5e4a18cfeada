//! Paint stock listing and adjustment.

use axum::http::StatusCode;
use serde_json::json;

use paintstock_database::repositories::PaintRepository;
use paintstock_entity::paint::CreatePaint;

use crate::helpers::TestApp;

#[tokio::test]
async fn list_returns_catalogue_and_caller_flags() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("alice", false, false).await;

    let response = app.get("/stock/list", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["permissions"], json!({ "editor": 0, "admin": 0 }));

    let colors: Vec<&str> = response.body["list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["color"].as_str().unwrap())
        .collect();
    assert_eq!(colors, ["blue", "grey", "black", "white", "purple"]);

    let blue = &response.body["list"][0];
    assert_eq!(blue["stock"], 0);
    assert_eq!(blue["colorcode"], "#0000ff");
}

#[tokio::test]
async fn list_reflects_current_role_flags() {
    let app = TestApp::new().await;
    let (id, token) = app.create_user("alice", false, false).await;

    app.users().set_admin(id, true).await.unwrap();

    let response = app.get("/stock/list", Some(&token)).await;
    assert_eq!(response.body["permissions"], json!({ "editor": 0, "admin": 1 }));
}

#[tokio::test]
async fn editor_sets_absolute_stock_level() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("erin", true, false).await;

    let response = app
        .post("/stock/adjust", json!({ "color": "blue", "amount": 5 }), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({ "stock": 5 }));

    let response = app
        .post("/stock/adjust", json!({ "color": "blue", "amount": 2 }), Some(&token))
        .await;
    assert_eq!(response.body["stock"], 2);
    assert_eq!(app.stock_of("blue", &token).await, 2);
    assert_eq!(app.stock_of("grey", &token).await, 0);
}

#[tokio::test]
async fn editor_sets_stock_of_added_colour() {
    let app = TestApp::new().await;
    PaintRepository::new(app.db.pool().clone())
        .create(&CreatePaint {
            color: "red".into(),
            colorcode: "#ff0000".into(),
            stock: 0,
        })
        .await
        .unwrap();
    let (_, token) = app.create_user("erin", true, false).await;

    let response = app
        .post("/stock/adjust", json!({ "color": "red", "amount": 5 }), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({ "stock": 5 }));
    assert_eq!(app.stock_of("red", &token).await, 5);
}

#[tokio::test]
async fn non_editor_cannot_adjust() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("alice", false, false).await;

    let response = app
        .post("/stock/adjust", json!({ "color": "blue", "amount": 5 }), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.stock_of("blue", &token).await, 0);
}

#[tokio::test]
async fn admin_role_does_not_imply_editor() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("root", false, true).await;

    let response = app
        .post("/stock/adjust", json!({ "color": "white", "amount": 1 }), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_colour_is_not_found() {
    let app = TestApp::new().await;
    let (_, token) = app.create_user("erin", true, false).await;

    let response = app
        .post("/stock/adjust", json!({ "color": "orange", "amount": 1 }), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_adjustment_is_bad_request() {
    let app = TestApp::new().await;
    let (_, editor) = app.create_user("erin", true, false).await;
    let (_, viewer) = app.create_user("alice", false, false).await;

    let negative = app
        .post("/stock/adjust", json!({ "color": "blue", "amount": -1 }), Some(&editor))
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    let missing_color = app
        .post("/stock/adjust", json!({ "amount": 4 }), Some(&editor))
        .await;
    assert_eq!(missing_color.status, StatusCode::BAD_REQUEST);

    // Checked before the caller's role.
    let from_viewer = app
        .post("/stock/adjust", json!({ "color": "blue" }), Some(&viewer))
        .await;
    assert_eq!(from_viewer.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.stock_of("blue", &editor).await, 0);
}

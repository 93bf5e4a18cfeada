//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use paintstock_api::{build_app, build_state};
use paintstock_auth::jwt::JwtEncoder;
use paintstock_core::config::AppConfig;
use paintstock_database::DatabasePool;
use paintstock_database::repositories::UserRepository;
use paintstock_entity::Account;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "correct horse";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
    /// Application config
    pub config: AppConfig,
    _dir: TempDir,
}

/// Response captured from the router
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
}

impl TestResponse {
    /// Value of a response header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Whether the response carries the renewed-token headers.
    pub fn has_renewal(&self) -> bool {
        ["issued", "expires", "token"]
            .iter()
            .all(|name| self.headers.contains_key(*name))
    }
}

impl TestApp {
    /// Create a test application over a fresh temporary database
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application, adjusting the default test config first
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.database.path = dir.path().join("paintstock.db").to_string_lossy().into_owned();
        config.database.max_connections = 2;
        config.auth.token_secret = TEST_SECRET.to_string();
        config.auth.hash_cost = 1;
        config.auth.hash_memory_kib = 256;
        adjust(&mut config);

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to open test database");
        paintstock_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let router = build_app(build_state(config.clone(), db.clone()));

        Self {
            router,
            db,
            config,
            _dir: dir,
        }
    }

    /// Send a JSON request, optionally carrying a session token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body, token).await
    }

    /// Send a request with a literal body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: impl Into<String>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header(self.config.auth.auth_header.as_str(), token);
        }

        let req = req
            .body(Body::from(body.into()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request("GET", path, None, token).await
    }

    pub async fn post(&self, path: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request("POST", path, Some(body), token).await
    }

    /// Register through the API
    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/auth/register",
            json!({ "username": username, "password": password }),
            None,
        )
        .await
    }

    /// Log in through the API
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/auth/login",
            json!({ "username": username, "password": password }),
            None,
        )
        .await
    }

    /// Register `username`, apply role flags directly in the store, log in,
    /// and return the account id with a session token.
    pub async fn create_user(&self, username: &str, editor: bool, admin: bool) -> (i64, String) {
        let response = self.register(username, PASSWORD).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

        let id = self.account(username).await.id;
        let users = self.users();
        if editor {
            users.set_editor(id, true).await.expect("Failed to set editor");
        }
        if admin {
            users.set_admin(id, true).await.expect("Failed to set admin");
        }

        let login = self.login(username, PASSWORD).await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.body);
        let token = login.body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string();

        (id, token)
    }

    /// Stored account by username
    pub async fn account(&self, username: &str) -> Account {
        self.users()
            .find_by_username(username)
            .await
            .expect("Failed to query account")
            .expect("Account does not exist")
    }

    /// Current stock of `color` as reported by the list endpoint
    pub async fn stock_of(&self, color: &str, token: &str) -> i64 {
        let response = self.get("/stock/list", Some(token)).await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["list"]
            .as_array()
            .expect("list is not an array")
            .iter()
            .find(|p| p["color"] == color)
            .and_then(|p| p["stock"].as_i64())
            .expect("colour not listed")
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.db.pool().clone())
    }

    pub fn encoder(&self) -> JwtEncoder {
        JwtEncoder::new(&self.config.auth)
    }
}

//! Response DTOs.

use serde::{Deserialize, Serialize};

use paintstock_auth::jwt::IssuedToken;

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response. Times are milliseconds since epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub issued: i64,
    pub expires: i64,
    pub token: String,
    #[serde(with = "paintstock_entity::flag")]
    pub editor: bool,
}

impl LoginResponse {
    pub fn new(token: IssuedToken, editor: bool) -> Self {
        Self {
            issued: token.issued_millis(),
            expires: token.expires_millis(),
            token: token.token,
            editor,
        }
    }
}

/// New stock level after an adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockResponse {
    pub stock: i64,
}

/// New activation flag of the target account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivatedResponse {
    #[serde(with = "paintstock_entity::flag")]
    pub activated: bool,
}

/// New editor flag of the target account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorResponse {
    #[serde(with = "paintstock_entity::flag")]
    pub editor: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

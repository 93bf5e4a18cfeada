//! Request DTOs with validation.
//!
//! Every field is optional at the serde level so that a missing field is
//! reported by `validator` as a 400 with a readable message instead of a
//! deserialization failure.

use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Register and login body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(
        required(message = "All input is required"),
        length(min = 1, message = "All input is required")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "All input is required"),
        length(min = 1, message = "All input is required")
    )]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Borrow both fields; empty strings stand in for absent ones.
    pub fn credentials(&self) -> (&str, &str) {
        (
            self.username.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
        )
    }
}

/// `POST /stock/adjust` body. `amount` is the new absolute stock level.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdjustStockRequest {
    #[validate(
        required(message = "A color is required"),
        length(min = 1, message = "A color is required")
    )]
    pub color: Option<String>,
    #[validate(
        required(message = "An amount is required"),
        range(min = 0, message = "Stock cannot be negative")
    )]
    pub amount: Option<i64>,
}

/// `POST /permission/activate` body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetActivatedRequest {
    #[serde(rename = "userId")]
    #[validate(
        required(message = "A target userId is required"),
        range(min = 1, message = "A target userId is required")
    )]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_flag")]
    #[validate(required(message = "An activated value is required"))]
    pub activated: Option<bool>,
}

/// `POST /permission/editor` body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetEditorRequest {
    #[serde(rename = "userId")]
    #[validate(
        required(message = "A target userId is required"),
        range(min = 1, message = "A target userId is required")
    )]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_flag")]
    #[validate(required(message = "An editor value is required"))]
    pub editor: Option<bool>,
}

/// Accepts `true`/`false` or `0`/`1`.
fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Flag(#[serde(with = "paintstock_entity::flag")] bool);

    Ok(Option::<Flag>::deserialize(deserializer)?.map(|Flag(value)| value))
}

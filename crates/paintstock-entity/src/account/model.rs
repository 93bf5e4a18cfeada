//! Account entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// May adjust paint stock.
    #[serde(with = "crate::flag")]
    pub editor: bool,
    /// May administer accounts.
    #[serde(with = "crate::flag")]
    pub admin: bool,
    /// Marked active by an administrator.
    #[serde(with = "crate::flag")]
    pub activated: bool,
}

/// Account row as listed to administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AccountSummary {
    #[serde(rename = "userId")]
    pub id: i64,
    pub username: String,
    #[serde(with = "crate::flag")]
    pub editor: bool,
    #[serde(with = "crate::flag")]
    pub activated: bool,
}

/// Data required to create a new account.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    pub editor: bool,
    pub admin: bool,
    pub activated: bool,
}

impl CreateAccount {
    /// A self-registered account: no roles, not yet activated.
    pub fn registration(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            editor: false,
            admin: false,
            activated: false,
        }
    }

    /// A fully privileged, active account.
    pub fn administrator(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            editor: true,
            admin: true,
            activated: true,
            ..Self::registration(username, password_hash)
        }
    }
}

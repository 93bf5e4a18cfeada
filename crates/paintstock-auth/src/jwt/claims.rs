//! Session token payload and issuance result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account id.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Editor flag at login time. Renewed tokens omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<bool>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Whether the token is past its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Returns the remaining TTL in seconds at `now` (0 if expired).
    pub fn remaining_ttl_seconds(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from(self.exp - now.timestamp()).unwrap_or(0)
    }
}

/// A freshly signed token with its validity window.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    /// Issue time in milliseconds since epoch.
    pub fn issued_millis(&self) -> i64 {
        self.issued_at.timestamp_millis()
    }

    /// Expiry time in milliseconds since epoch.
    pub fn expires_millis(&self) -> i64 {
        self.expires_at.timestamp_millis()
    }
}

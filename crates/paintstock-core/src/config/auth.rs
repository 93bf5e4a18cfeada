//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Session token and credential hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC-SHA256 secret for session tokens. Empty disables signing.
    #[serde(default)]
    pub token_secret: String,
    /// Session token lifetime in hours. Zero falls back to 12.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Request header carrying the session token.
    #[serde(default = "default_auth_header")]
    pub auth_header: String,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
    /// Argon2 memory size in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Default session lifetime in hours.
    pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 12;

    /// Effective token lifetime, never zero.
    pub fn effective_ttl_hours(&self) -> u64 {
        if self.token_ttl_hours == 0 {
            Self::DEFAULT_TOKEN_TTL_HOURS
        } else {
            self.token_ttl_hours
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl_hours: default_token_ttl(),
            auth_header: default_auth_header(),
            hash_cost: default_hash_cost(),
            hash_memory_kib: default_hash_memory(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_token_ttl() -> u64 {
    AuthConfig::DEFAULT_TOKEN_TTL_HOURS
}

fn default_auth_header() -> String {
    "auth".to_string()
}

fn default_hash_cost() -> u32 {
    2
}

fn default_hash_memory() -> u32 {
    19_456
}

fn default_password_min() -> usize {
    1
}

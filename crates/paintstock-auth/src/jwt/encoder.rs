//! Session token signing and renewal.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use paintstock_core::config::AuthConfig;
use paintstock_core::error::{AppError, ErrorKind};

use super::claims::{Claims, IssuedToken};

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// `None` when no secret is configured; every issue then fails.
    encoding_key: Option<EncodingKey>,
    /// Standard token lifetime in hours.
    ttl_hours: u64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("signing_enabled", &self.encoding_key.is_some())
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let encoding_key = (!config.token_secret.is_empty())
            .then(|| EncodingKey::from_secret(config.token_secret.as_bytes()));

        Self {
            encoding_key,
            ttl_hours: config.effective_ttl_hours(),
        }
    }

    /// Issues a token for `user_id` valid for the standard lifetime.
    pub fn issue(&self, user_id: i64, editor: Option<bool>) -> Result<IssuedToken, AppError> {
        self.issue_at(user_id, editor, self.ttl_hours, Utc::now())
    }

    /// Issues a token as of `now`, valid for `ttl_hours` (zero means the
    /// 12 hour default).
    pub fn issue_at(
        &self,
        user_id: i64,
        editor: Option<bool>,
        ttl_hours: u64,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let key = self
            .encoding_key
            .as_ref()
            .ok_or_else(|| AppError::signing("Token signing secret is not configured"))?;

        let ttl_hours = if ttl_hours == 0 {
            AuthConfig::DEFAULT_TOKEN_TTL_HOURS
        } else {
            ttl_hours
        };
        let expires_at = i64::try_from(ttl_hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::signing(format!("Token lifetime of {ttl_hours}h is out of range"))
            })?;

        let claims = Claims {
            user_id,
            editor,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, key).map_err(|e| {
            AppError::with_source(ErrorKind::Signing, "Failed to sign session token", e)
        })?;

        Ok(IssuedToken {
            token,
            issued_at: now,
            expires_at,
        })
    }

    /// Re-issues a verified token for the same subject with the standard
    /// lifetime counted from `now`. Depends only on its arguments.
    pub fn renew(&self, claims: &Claims, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        self.issue_at(claims.user_id, None, self.ttl_hours, now)
    }
}

//! Session token verification.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use paintstock_core::config::AuthConfig;
use paintstock_core::error::AppError;

use super::claims::Claims;

/// Verifies HS256 session tokens against the shared secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// `None` when no secret is configured; every token is then rejected.
    decoding_key: Option<DecodingKey>,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: (!config.token_secret.is_empty())
                .then(|| DecodingKey::from_secret(config.token_secret.as_bytes())),
            validation,
        }
    }

    /// Verifies signature and expiry and returns the payload.
    ///
    /// Every failure is an `InvalidToken` error.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let key = self
            .decoding_key
            .as_ref()
            .ok_or_else(|| AppError::invalid_token("Token verification is not configured"))?;

        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::invalid_token("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::invalid_token("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::invalid_token("Invalid token signature")
                }
                _ => AppError::invalid_token(format!("Token validation failed: {e}")),
            }
        })?;

        // The library accepts `exp == now`; a token is only valid strictly before expiry.
        if token_data.claims.is_expired_at(Utc::now()) {
            return Err(AppError::invalid_token("Token has expired"));
        }

        Ok(token_data.claims)
    }
}

//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use paintstock_core::config::AuthConfig;
use paintstock_core::error::AppError;

/// Hashes and verifies passwords using Argon2id with a deployment-chosen
/// work factor.
///
/// Both operations are CPU bound; async callers should run them on the
/// blocking pool.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Argon2 iteration count.
    time_cost: u32,
    /// Argon2 memory size in KiB.
    memory_kib: u32,
}

impl PasswordHasher {
    /// Creates a hasher using the work factor from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_cost(config.hash_cost, config.hash_memory_kib)
    }

    pub fn with_cost(time_cost: u32, memory_kib: u32) -> Self {
        Self {
            time_cost,
            memory_kib,
        }
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// An unusable work factor is reported as a hashing error.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let params = Params::new(self.memory_kib, self.time_cost, 1, None)
            .map_err(|e| AppError::hashing(format!("Invalid password hashing parameters: {e}")))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2 hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not. The
    /// parameters embedded in the stored hash are used, so hashes made
    /// under an older work factor keep verifying.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

//! Account registration and credential login.

use std::sync::Arc;

use tracing::{info, warn};

use paintstock_auth::jwt::{IssuedToken, JwtEncoder};
use paintstock_auth::password::{PasswordHasher, PasswordValidator};
use paintstock_core::error::AppError;
use paintstock_database::repositories::UserRepository;
use paintstock_entity::account::{Account, CreateAccount};

/// The single message returned for every failed login, whether or not the
/// username exists.
pub const LOGIN_FAILED_MESSAGE: &str =
    "Email and password do not match or this account does not exist.";

/// Handles registration and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user_id: i64,
    pub editor: bool,
    pub token: IssuedToken,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Creates an account with no roles and activation pending.
    ///
    /// A taken username yields a conflict and leaves the store unchanged.
    pub async fn register(&self, username: &str, password: &str) -> Result<Account, AppError> {
        require_credentials(username, password)?;
        self.validator.validate(password)?;

        let password_hash = self.hash(password).await?;
        let account = self
            .user_repo
            .create(&CreateAccount::registration(username, password_hash))
            .await?;

        info!(user_id = account.id, username = %account.username, "Account registered");
        Ok(account)
    }

    /// Creates an active account holding every role.
    pub async fn create_administrator(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Account, AppError> {
        require_credentials(username, password)?;
        self.validator.validate(password)?;

        let password_hash = self.hash(password).await?;
        let account = self
            .user_repo
            .create(&CreateAccount::administrator(username, password_hash))
            .await?;

        info!(user_id = account.id, username = %account.username, "Administrator created");
        Ok(account)
    }

    /// Verifies credentials and issues a session token.
    ///
    /// Unknown usernames and wrong passwords fail with the same
    /// authentication error.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        require_credentials(username, password)?;

        let Some(account) = self.user_repo.find_by_username(username).await? else {
            warn!(username = %username, "Login failed: unknown username");
            return Err(AppError::authentication(LOGIN_FAILED_MESSAGE));
        };

        if !self.verify(password, &account.password_hash).await? {
            warn!(user_id = account.id, "Login failed: password mismatch");
            return Err(AppError::authentication(LOGIN_FAILED_MESSAGE));
        }

        let token = self.encoder.issue(account.id, Some(account.editor))?;

        info!(user_id = account.id, "User logged in");
        Ok(LoginResult {
            user_id: account.id,
            editor: account.editor,
            token,
        })
    }

    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::hashing(format!("Hashing task failed: {e}")))?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?
    }
}

fn require_credentials(username: &str, password: &str) -> Result<(), AppError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::validation("All input is required"));
    }
    Ok(())
}

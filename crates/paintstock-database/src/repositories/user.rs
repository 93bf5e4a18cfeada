//! Account repository implementation.

use sqlx::SqlitePool;

use paintstock_core::error::{AppError, ErrorKind};
use paintstock_core::result::AppResult;
use paintstock_entity::account::{Account, AccountSummary, CreateAccount, Permissions};

const ACCOUNT_COLUMNS: &str = "id, username, password_hash, editor, admin, activated";

/// Repository for account CRUD and role flag updates.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>(&format!("SELECT {ACCOUNT_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find an account by exact username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
        })
    }

    /// Read only the role flags of an account.
    pub async fn find_permissions(&self, id: i64) -> AppResult<Option<Permissions>> {
        sqlx::query_as::<_, Permissions>("SELECT editor, admin FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read user permissions", e)
            })
    }

    /// List every account, oldest first.
    pub async fn list(&self) -> AppResult<Vec<AccountSummary>> {
        sqlx::query_as::<_, AccountSummary>(
            "SELECT id, username, editor, activated FROM users ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Insert a new account. A taken username yields a conflict error.
    pub async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(&format!(
            "INSERT INTO users (username, password_hash, editor, admin, activated) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(data.editor)
        .bind(data.admin)
        .bind(data.activated)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Set the `activated` flag. Returns the stored value, or `None` when
    /// no account has this id.
    pub async fn set_activated(&self, id: i64, activated: bool) -> AppResult<Option<bool>> {
        self.set_flag("activated", id, activated).await
    }

    /// Set the `editor` flag. Returns the stored value, or `None` when no
    /// account has this id.
    pub async fn set_editor(&self, id: i64, editor: bool) -> AppResult<Option<bool>> {
        self.set_flag("editor", id, editor).await
    }

    /// Set the `admin` flag. Returns the stored value, or `None` when no
    /// account has this id.
    pub async fn set_admin(&self, id: i64, admin: bool) -> AppResult<Option<bool>> {
        self.set_flag("admin", id, admin).await
    }

    // `column` is always one of the literals above, never caller input.
    async fn set_flag(
        &self,
        column: &'static str,
        id: i64,
        value: bool,
    ) -> AppResult<Option<bool>> {
        sqlx::query_scalar::<_, bool>(&format!(
            "UPDATE users SET {column} = ? WHERE id = ? RETURNING {column}"
        ))
        .bind(value)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to update {column}"), e)
        })
    }
}

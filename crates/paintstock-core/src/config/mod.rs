//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and environment variables. Each sub-module
//! represents a logical configuration section; every field has a default so
//! the server starts without any file present.

pub mod app;
pub mod auth;
pub mod logging;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Plain environment variables honoured for compatibility with older
/// deployments, mapped to their configuration keys.
const LEGACY_VARIABLES: &[(&str, &str)] = &[
    ("TOKEN_KEY", "auth.token_secret"),
    ("TOKEN_EXPIRATION", "auth.token_ttl_hours"),
    ("HASH_SALT_ROUNDS", "auth.hash_cost"),
    ("PORT", "server.port"),
    ("DATABASE_PATH", "database.path"),
];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Token and password settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// SQLite database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file.
    #[serde(default = "default_database_path")]
    pub path: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Create the database file when it does not exist.
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            create_if_missing: default_true(),
        }
    }
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, later ones winning: `config/default.toml`,
    /// `config/{env}.toml`, `PAINTSTOCK__SECTION__KEY` variables, then the
    /// legacy plain variables (`TOKEN_KEY`, `PORT`, ...).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("PAINTSTOCK")
                    .separator("__")
                    .try_parsing(true),
            );

        let builder = apply_legacy_overrides(builder, |name| std::env::var(name).ok())?;
        Self::from_builder(builder)
    }

    /// Build and deserialize a prepared source stack.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

/// Overlay legacy variables resolved through `lookup` onto `builder`.
pub fn apply_legacy_overrides<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    for (variable, key) in LEGACY_VARIABLES {
        let value = lookup(variable).filter(|v| !v.trim().is_empty());
        builder = builder.set_override_option(*key, value)?;
    }
    Ok(builder)
}

fn default_database_path() -> String {
    "database.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

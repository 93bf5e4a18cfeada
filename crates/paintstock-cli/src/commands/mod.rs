//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod paint;
pub mod user;

use clap::{Parser, Subcommand};

use paintstock_core::config::AppConfig;
use paintstock_core::error::AppError;
use paintstock_database::DatabasePool;

use crate::output::OutputFormat;

/// Paintstock administration tool
#[derive(Debug, Parser)]
#[command(name = "paintstock", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects `config/{env}.toml`)
    #[arg(short, long, env = "PAINTSTOCK_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Administrator bootstrap
    Admin(admin::AdminArgs),
    /// Account role management
    User(user::UserArgs),
    /// Paint catalogue management
    Paint(paint::PaintArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;

        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Admin(args) => admin::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Paint(args) => paint::execute(args, &config, self.format).await,
        }
    }
}

/// Open the configured database and bring its schema up to date.
pub async fn open_database(config: &AppConfig) -> Result<DatabasePool, AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    paintstock_database::migration::run_migrations(db.pool()).await?;
    Ok(db)
}

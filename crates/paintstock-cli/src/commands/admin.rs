//! Administrator bootstrap command.

use std::sync::Arc;

use clap::{Args, Subcommand};

use paintstock_auth::jwt::JwtEncoder;
use paintstock_auth::password::{PasswordHasher, PasswordValidator};
use paintstock_core::config::AppConfig;
use paintstock_core::error::AppError;
use paintstock_database::repositories::UserRepository;
use paintstock_service::AuthService;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create an activated account holding the admin and editor roles
    Create {
        /// Username (will prompt if not provided)
        #[arg(long)]
        username: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Create { username, password } => {
            let username = match username {
                Some(u) => u.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin username")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let db = super::open_database(config).await?;
            let auth = AuthService::new(
                Arc::new(UserRepository::new(db.pool().clone())),
                Arc::new(PasswordHasher::new(&config.auth)),
                Arc::new(PasswordValidator::new(&config.auth)),
                Arc::new(JwtEncoder::new(&config.auth)),
            );

            let account = auth.create_administrator(&username, &password).await?;
            db.close().await;

            output::print_success(&format!(
                "Administrator '{}' created (id: {})",
                account.username, account.id
            ));
        }
    }

    Ok(())
}

//! Account role management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use paintstock_core::config::AppConfig;
use paintstock_core::error::AppError;
use paintstock_database::repositories::UserRepository;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all accounts
    List,
    /// Grant roles or activation to an account
    Grant {
        /// Username of the account
        #[arg(long)]
        username: String,
        /// Grant the admin role
        #[arg(long)]
        admin: bool,
        /// Grant the editor role
        #[arg(long)]
        editor: bool,
        /// Mark the account as activated
        #[arg(long)]
        activate: bool,
    },
}

/// Account display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    editor: &'static str,
    activated: &'static str,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::open_database(config).await?;
    let user_repo = UserRepository::new(db.pool().clone());

    match &args.command {
        UserCommand::List => {
            let rows: Vec<UserRow> = user_repo
                .list()
                .await?
                .into_iter()
                .map(|u| UserRow {
                    id: u.id,
                    username: u.username,
                    editor: output::yes_no(u.editor),
                    activated: output::yes_no(u.activated),
                })
                .collect();

            output::print_list(&rows, format);
        }
        UserCommand::Grant {
            username,
            admin,
            editor,
            activate,
        } => {
            if !(*admin || *editor || *activate) {
                return Err(AppError::validation(
                    "Nothing to grant: pass --admin, --editor or --activate",
                ));
            }

            let account = user_repo
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

            let mut granted = Vec::new();
            if *admin {
                user_repo.set_admin(account.id, true).await?;
                granted.push("admin");
            }
            if *editor {
                user_repo.set_editor(account.id, true).await?;
                granted.push("editor");
            }
            if *activate {
                user_repo.set_activated(account.id, true).await?;
                granted.push("activated");
            }

            output::print_success(&format!(
                "User '{}' updated: {}",
                username,
                granted.join(", ")
            ));
        }
    }

    db.close().await;
    Ok(())
}

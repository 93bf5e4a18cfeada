//! Paint catalogue commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use paintstock_auth::rbac::RbacEnforcer;
use paintstock_core::config::AppConfig;
use paintstock_core::error::AppError;
use paintstock_database::repositories::{PaintRepository, UserRepository};
use paintstock_entity::paint::{CreatePaint, Paint};
use paintstock_service::{PermissionService, StockService};

use crate::output::{self, OutputFormat};

/// Arguments for paint commands
#[derive(Debug, Args)]
pub struct PaintArgs {
    /// Paint subcommand
    #[command(subcommand)]
    pub command: PaintCommand,
}

/// Paint subcommands
#[derive(Debug, Subcommand)]
pub enum PaintCommand {
    /// Add a colour to the catalogue
    Add {
        /// Colour name, e.g. `blue`
        #[arg(long)]
        color: String,
        /// Display code, e.g. `#0000ff`
        #[arg(long)]
        colorcode: String,
        /// Initial stock level
        #[arg(long, default_value_t = 0)]
        stock: i64,
    },
    /// List the catalogue with current stock
    List,
}

/// Paint display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PaintRow {
    color: String,
    stock: i64,
    colorcode: String,
}

impl From<Paint> for PaintRow {
    fn from(paint: Paint) -> Self {
        Self {
            color: paint.color,
            stock: paint.stock,
            colorcode: paint.colorcode,
        }
    }
}

/// Execute paint commands
pub async fn execute(
    args: &PaintArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::open_database(config).await?;
    let permissions = Arc::new(PermissionService::new(
        Arc::new(UserRepository::new(db.pool().clone())),
        Arc::new(RbacEnforcer::new()),
    ));
    let stock = StockService::new(
        Arc::new(PaintRepository::new(db.pool().clone())),
        permissions,
    );

    match &args.command {
        PaintCommand::Add {
            color,
            colorcode,
            stock: level,
        } => {
            let paint = stock
                .add_paint(CreatePaint {
                    color: color.clone(),
                    colorcode: colorcode.clone(),
                    stock: *level,
                })
                .await?;

            output::print_success(&format!(
                "Paint '{}' added with stock {}",
                paint.color, paint.stock
            ));
        }
        PaintCommand::List => {
            let rows: Vec<PaintRow> = stock
                .catalogue()
                .await?
                .into_iter()
                .map(PaintRow::from)
                .collect();

            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}

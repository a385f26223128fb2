//! Seed command - Creates the admin account from `ADMIN_*` settings.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database startup failed: {}", e)))?;

    if args.reset {
        tracing::warn!("Clearing catalog data and admin accounts...");
        db.clear_catalog().await?;
    }

    let services = Services::from_connection(db.get_connection(), &config);
    let admin = services
        .auth()
        .ensure_admin(&config.admin_email, config.admin_password(), &config.admin_name)
        .await?;

    tracing::info!(admin_id = %admin.id, email = %admin.email, "Admin account ready");
    println!("Admin account ready: {}", admin.email);

    Ok(())
}

//! Migrate command - schema management for the tiffin database.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // The serve path migrates on connect; here the operator drives it
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Applying pending migrations");
            db.run_migrations().await?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back the last migration");
            db.rollback_migration().await?;
            tracing::info!("Rollback complete");
        }
        MigrateAction::Status => {
            for entry in db.migration_status().await? {
                let state = if entry.applied { "applied" } else { "pending" };
                println!("{:<55} {}", entry.name, state);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and reapplying every migration");
            db.fresh_migrations().await?;
            tracing::info!("Fresh schema ready");
        }
    }

    Ok(())
}

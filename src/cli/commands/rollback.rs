use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::{error, info, trace};

use crate::config::connect;

pub async fn rollback(database_url: &str, steps: u32) -> Result<()> {
    trace!("Entering rollback function");
    let db = connect(database_url).await?;
    revert_migrations(&db, steps).await?;
    println!("Reverted {} migration(s)", steps);
    Ok(())
}

/// Revert the last `steps` applied migrations, newest first.
pub async fn revert_migrations(db: &DatabaseConnection, steps: u32) -> Result<()> {
    info!(steps, "Reverting database migrations");
    match Migrator::down(db, Some(steps)).await {
        Ok(_) => {
            info!("Database migrations reverted successfully");
            Ok(())
        }
        Err(e) => {
            error!("Failed to revert database migrations: {}", e);
            Err(e.into())
        }
    }
}

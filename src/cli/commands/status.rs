use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::config::connect;

/// A migration and whether it has been applied to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

pub async fn migration_status(database_url: &str) -> Result<()> {
    let db = connect(database_url).await?;

    for state in collect_status(&db).await? {
        let status = if state.applied { "applied" } else { "pending" };
        println!("{:<40} {}", state.name, status);
    }

    Ok(())
}

/// Applied migrations followed by pending ones, each group in application order.
pub async fn collect_status(db: &DatabaseConnection) -> Result<Vec<MigrationState>> {
    let applied = Migrator::get_applied_migrations(db).await?;
    let pending = Migrator::get_pending_migrations(db).await?;
    debug!(applied = applied.len(), pending = pending.len(), "Collected migration status");

    let applied = applied.iter().map(|m| MigrationState {
        name: m.name().to_string(),
        applied: true,
    });
    let pending = pending.iter().map(|m| MigrationState {
        name: m.name().to_string(),
        applied: false,
    });

    Ok(applied.chain(pending).collect())
}

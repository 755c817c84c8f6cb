//! Structural preconditions checked by migrations before they touch the schema.

use sea_orm_migration::prelude::*;
use tracing::error;

/// Fails unless `table` exists. A missing table means `dependency`,
/// the migration that creates it, has not been applied yet.
pub(crate) async fn require_table<T>(
    manager: &SchemaManager<'_>,
    table: T,
    dependency: &str,
) -> Result<(), DbErr>
where
    T: AsRef<str>,
{
    let table = table.as_ref();
    if manager.has_table(table).await? {
        return Ok(());
    }

    let err = DbErr::Migration(format!(
        "table `{table}` does not exist; migration `{dependency}` must be applied first"
    ));
    error!(?err, "Migration dependency not satisfied");
    Err(err)
}

/// Fails if `table.column` already exists.
pub(crate) async fn forbid_column<T, C>(
    manager: &SchemaManager<'_>,
    table: T,
    column: C,
) -> Result<(), DbErr>
where
    T: AsRef<str>,
    C: AsRef<str>,
{
    let (table, column) = (table.as_ref(), column.as_ref());
    if !manager.has_column(table, column).await? {
        return Ok(());
    }

    let err = DbErr::Migration(format!("column `{table}.{column}` already exists"));
    error!(?err, "Migration would add an existing column");
    Err(err)
}

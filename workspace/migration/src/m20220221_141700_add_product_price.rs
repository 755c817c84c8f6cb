use sea_orm::{ConnectionTrait, DbBackend, TransactionTrait};
use sea_orm_migration::{prelude::*, schema::*};
use tracing::{debug, error, info};

use crate::m20220221_000001_create_products::Migration as CreateProducts;
use crate::schema_guard::{forbid_column, require_table};

/// Price given to rows that exist when the column is added.
/// It is not kept as a column default afterwards.
const BACKFILL_PRICE: i32 = 12;

/// Temporary table used while rebuilding `products` on SQLite.
const STAGING_TABLE: &str = "products__new";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The runner already wraps each migration in a transaction on Postgres
        if manager.get_database_backend() == DbBackend::Postgres {
            return add_price(manager).await;
        }

        let txn = manager.get_connection().begin().await?;
        let result = add_price(&SchemaManager::new(&txn)).await;
        match result {
            Ok(()) => txn.commit().await,
            Err(e) => {
                error!("Adding products.price failed, rolling back: {}", e);
                txn.rollback().await?;
                Err(e)
            }
        }
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Products::Table)
                    .drop_column(Products::Price)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Price,
}

async fn add_price(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let table = Products::Table.to_string();
    require_table(manager, &table, CreateProducts.name()).await?;
    forbid_column(manager, &table, Products::Price.to_string()).await?;

    let existing = count_products(manager).await?;
    info!(existing, "Adding products.price, existing rows get {}", BACKFILL_PRICE);

    // Add price with a default so that existing rows are backfilled
    manager
        .alter_table(
            Table::alter()
                .table(Products::Table)
                .add_column(
                    ColumnDef::new(Products::Price)
                        .decimal_len(6, 2)
                        .not_null()
                        .default(BACKFILL_PRICE),
                )
                .to_owned(),
        )
        .await?;

    // New rows must always provide a price
    match drop_price_default_sql(manager.get_database_backend()) {
        Some(sql) => {
            debug!(%sql, "Dropping price default");
            manager.get_connection().execute_unprepared(&sql).await?;
            Ok(())
        }
        // SQLite has no ALTER COLUMN, the table has to be recreated
        None => rebuild_products(manager).await,
    }
}

async fn count_products(manager: &SchemaManager<'_>) -> Result<i64, DbErr> {
    let query = Query::select()
        .expr_as(Func::count(Expr::col(Asterisk)), Alias::new("count"))
        .from(Products::Table)
        .to_owned();

    let backend = manager.get_database_backend();
    match manager.get_connection().query_one(backend.build(&query)).await? {
        Some(row) => row.try_get("", "count"),
        None => Ok(0),
    }
}

/// `ALTER COLUMN ... DROP DEFAULT` for backends that support it.
fn drop_price_default_sql(backend: DbBackend) -> Option<String> {
    let quote = match backend {
        DbBackend::Postgres => '"',
        DbBackend::MySql => '`',
        _ => return None,
    };
    Some(format!(
        "ALTER TABLE {quote}{}{quote} ALTER COLUMN {quote}{}{quote} DROP DEFAULT",
        Products::Table.to_string(),
        Products::Price.to_string()
    ))
}

/// Recreates `products` with `price` declared without a default and
/// copies every row over, keeping ids.
async fn rebuild_products(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let staging = Alias::new(STAGING_TABLE);

    debug!("Rebuilding products table without the price default");
    manager
        .create_table(
            Table::create()
                .table(staging.clone())
                .col(pk_auto(Products::Id))
                .col(string(Products::Name))
                .col(ColumnDef::new(Products::Price).decimal_len(6, 2).not_null())
                .to_owned(),
        )
        .await?;

    let copy = Query::insert()
        .into_table(staging.clone())
        .columns([Products::Id, Products::Name, Products::Price])
        .select_from(
            Query::select()
                .columns([Products::Id, Products::Name, Products::Price])
                .from(Products::Table)
                .to_owned(),
        )
        .map_err(|e| DbErr::Migration(e.to_string()))?
        .to_owned();
    let backend = manager.get_database_backend();
    let copied = manager.get_connection().execute(backend.build(&copy)).await?;
    debug!(rows = copied.rows_affected(), "Copied products into staging table");

    manager
        .drop_table(Table::drop().table(Products::Table).to_owned())
        .await?;
    manager
        .rename_table(Table::rename().table(staging, Products::Table).to_owned())
        .await
}

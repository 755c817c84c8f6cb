pub use sea_orm_migration::prelude::*;

mod m20220221_000001_create_products;
mod m20220221_141700_add_product_price;
mod schema_guard;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Migrations in application order. Each one depends on the one before it.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220221_000001_create_products::Migration),
            Box::new(m20220221_141700_add_product_price::Migration),
        ]
    }
}

use anyhow::{ensure, Result};
use model::entities::{prelude::Product, product};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::{error, info, instrument};

use crate::config::connect;

pub async fn add_product(database_url: &str, name: &str, price: Decimal) -> Result<()> {
    let db = connect(database_url).await?;
    let product = create_product(&db, name, price).await?;
    println!("{}", format_row(&product));
    Ok(())
}

pub async fn list_products(database_url: &str) -> Result<()> {
    let db = connect(database_url).await?;
    for product in find_products(&db).await? {
        println!("{}", format_row(&product));
    }
    Ok(())
}

/// Insert a product. The price is validated by the entity before saving.
#[instrument(skip(db))]
pub async fn create_product(
    db: &DatabaseConnection,
    name: &str,
    price: Decimal,
) -> Result<product::Model> {
    let name = name.trim();
    ensure!(!name.is_empty(), "product name must not be empty");

    let product = product::ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| {
        error!("Failed to create product '{}': {}", name, e);
        e
    })?;

    info!(id = product.id, "Product created");
    Ok(product)
}

/// All products, ordered by id.
pub async fn find_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Ok(Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?)
}

pub fn format_row(product: &product::Model) -> String {
    format!("{}\t{}\t{}", product.id, product.name, product.formatted_price())
}

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use tracing::{debug, warn};

/// A product offered in the shop catalog.
/// Corresponds to the `Product` model of the `products` app.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name of the product.
    pub name: String,
    /// Unit price, validated to fit `decimal(6, 2)`. The column has no
    /// default, so every insert has to provide it. Backends may not keep
    /// the scale (SQLite stores a REAL), use `formatted_price` for display.
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Rejects prices that do not fit the column and rescales the rest
    /// to two decimal places before saving.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(price) = &self.price {
            let price = *price;
            let stored = common::validate_price(price).map_err(|e| {
                warn!(%price, insert, "Refusing to save product: {}", e);
                DbErr::Custom(e.to_string())
            })?;
            debug!(%stored, insert, "Product price validated");
            self.price = ActiveValue::Set(stored);
        }
        Ok(self)
    }
}

impl Model {
    /// Price rendered with two decimal places, e.g. `12.00`.
    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}

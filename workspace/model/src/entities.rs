//! This file serves as the root for all SeaORM entity modules.
//! The catalog currently consists of a single `products` table whose
//! shape is defined by the migrations in the `migration` crate.

pub mod product;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::product::Entity as Product;
}

pub mod initdb;
pub mod products;
pub mod rollback;
pub mod status;

pub use initdb::init_database;
pub use products::{add_product, list_products};
pub use rollback::rollback;
pub use status::migration_status;

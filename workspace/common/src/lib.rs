//! Catalog rules shared between the entity layer and the CLI.
//! Kept free of database dependencies so the rules can be checked anywhere.

mod price;

pub use price::{PRICE_DECIMAL_PLACES, PRICE_MAX_DIGITS, PriceError, validate_price};

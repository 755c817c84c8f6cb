use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, instrument};

/// Total number of digits a product price may carry.
pub const PRICE_MAX_DIGITS: u32 = 6;

/// Number of digits after the decimal point in a stored price.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Reasons a value does not fit the `decimal(6, 2)` price column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// More fractional digits than the column stores
    #[error("price {0} has more than {} decimal places", PRICE_DECIMAL_PLACES)]
    TooManyDecimalPlaces(Decimal),

    /// Integer part does not fit in the digits left after the fraction
    #[error("price {0} has more than {} digits before the decimal point", PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES)]
    TooManyWholeDigits(Decimal),
}

/// Checks that `price` fits a `decimal(6, 2)` column and returns it with
/// exactly two decimal places.
///
/// Trailing zeros do not count against the decimal places, so `19.990` is
/// accepted and stored as `19.99`. Negative values are allowed.
#[instrument(level = "debug")]
pub fn validate_price(price: Decimal) -> Result<Decimal, PriceError> {
    let normalized = price.normalize();

    if normalized.scale() > PRICE_DECIMAL_PLACES {
        debug!(%price, "rejecting price with too many decimal places");
        return Err(PriceError::TooManyDecimalPlaces(price));
    }

    let whole_limit = Decimal::from(10_i64.pow(PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES));
    if normalized.trunc().abs() >= whole_limit {
        debug!(%price, "rejecting price with too many whole digits");
        return Err(PriceError::TooManyWholeDigits(price));
    }

    let mut stored = normalized;
    stored.rescale(PRICE_DECIMAL_PLACES);
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_integer_price_gets_two_decimal_places() {
        let stored = validate_price(Decimal::from(12)).unwrap();
        assert_eq!(stored, dec("12"));
        assert_eq!(stored.scale(), 2);
        assert_eq!(stored.to_string(), "12.00");
    }

    #[test]
    fn test_exact_price_is_kept() {
        assert_eq!(validate_price(dec("19.99")).unwrap().to_string(), "19.99");
        assert_eq!(validate_price(dec("19.9")).unwrap().to_string(), "19.90");
    }

    #[test]
    fn test_trailing_zeros_are_ignored() {
        assert_eq!(validate_price(dec("19.990")).unwrap().to_string(), "19.99");
        assert_eq!(validate_price(dec("0.000")).unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_largest_price_fits() {
        assert_eq!(validate_price(dec("9999.99")).unwrap().to_string(), "9999.99");
        assert_eq!(validate_price(dec("-9999.99")).unwrap().to_string(), "-9999.99");
    }

    #[test]
    fn test_too_many_decimal_places() {
        assert_eq!(
            validate_price(dec("1.234")),
            Err(PriceError::TooManyDecimalPlaces(dec("1.234")))
        );
    }

    #[test]
    fn test_too_many_whole_digits() {
        assert_eq!(
            validate_price(dec("10000")),
            Err(PriceError::TooManyWholeDigits(dec("10000")))
        );
        assert_eq!(
            validate_price(dec("-10000.5")),
            Err(PriceError::TooManyWholeDigits(dec("-10000.5")))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = validate_price(dec("1.234")).unwrap_err();
        assert_eq!(err.to_string(), "price 1.234 has more than 2 decimal places");

        let err = validate_price(dec("12345")).unwrap_err();
        assert_eq!(err.to_string(), "price 12345 has more than 4 digits before the decimal point");
    }
}

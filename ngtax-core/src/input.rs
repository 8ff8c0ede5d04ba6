//! Turning user-entered text and host floats into validated amounts.

use rust_decimal::Decimal;

use crate::error::InvalidInput;

/// Trims whitespace and drops the Naira sign and thousands separators.
fn normalize_amount_input(s: &str) -> String {
    s.trim()
        .trim_start_matches('₦')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

/// Parses a text amount such as `"₦1,500,000"` or `" 2500.50 "`.
///
/// Only the shape of the number is checked here; sign and range rules belong
/// to the calculator that receives it.
///
/// # Errors
///
/// [`InvalidInput::Missing`] for empty input and [`InvalidInput::NotANumber`]
/// when the text is not a decimal number.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::input::parse_amount;
///
/// assert_eq!(parse_amount("turnover", "₦1,500,000").unwrap(), dec!(1500000));
/// assert!(parse_amount("turnover", "  ").is_err());
/// ```
pub fn parse_amount(
    field: &'static str,
    s: &str,
) -> Result<Decimal, InvalidInput> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        tracing::warn!(field, "amount left empty");
        return Err(InvalidInput::Missing { field });
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(field, input = %s, "invalid amount: {}", e);
        InvalidInput::NotANumber {
            field,
            input: s.to_string(),
        }
    })
}

/// Like [`parse_amount`], but empty input yields `None`.
///
/// # Errors
///
/// [`InvalidInput::NotANumber`] when non-empty text is not a number.
pub fn parse_optional_amount(
    field: &'static str,
    s: &str,
) -> Result<Option<Decimal>, InvalidInput> {
    match parse_amount(field, s) {
        Ok(value) => Ok(Some(value)),
        Err(InvalidInput::Missing { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Converts a host float, rejecting `NaN` and infinities.
///
/// # Errors
///
/// [`InvalidInput::NonFinite`] for `NaN`/`±∞`, [`InvalidInput::NotANumber`]
/// when the value is outside the decimal range.
pub fn amount_from_f64(
    field: &'static str,
    value: f64,
) -> Result<Decimal, InvalidInput> {
    if !value.is_finite() {
        tracing::warn!(field, "rejecting non-finite amount");
        return Err(InvalidInput::NonFinite { field });
    }
    Decimal::try_from(value).map_err(|_| InvalidInput::NotANumber {
        field,
        input: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_amount tests
    // =========================================================================

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("amount", "1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("amount", "1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_amount_strips_naira_sign_and_whitespace() {
        assert_eq!(parse_amount("amount", "  ₦ 5,000,000 ").unwrap(), dec!(5000000));
        assert_eq!(parse_amount("amount", "₦0.15").unwrap(), dec!(0.15));
    }

    #[test]
    fn parse_amount_keeps_sign_for_calculator_to_judge() {
        assert_eq!(parse_amount("amount", "-250").unwrap(), dec!(-250));
    }

    #[test]
    fn parse_amount_empty_is_missing() {
        assert_eq!(
            parse_amount("gross income", "   "),
            Err(InvalidInput::Missing {
                field: "gross income"
            })
        );
    }

    #[test]
    fn parse_amount_rejects_text() {
        assert_eq!(
            parse_amount("turnover", "lots"),
            Err(InvalidInput::NotANumber {
                field: "turnover",
                input: "lots".to_string(),
            })
        );
    }

    #[test]
    fn parse_optional_amount_maps_empty_to_none() {
        assert_eq!(parse_optional_amount("relief", ""), Ok(None));
        assert_eq!(parse_optional_amount("relief", "1,000"), Ok(Some(dec!(1000))));
        assert!(parse_optional_amount("relief", "x").is_err());
    }

    // =========================================================================
    // amount_from_f64 tests
    // =========================================================================

    #[test]
    fn amount_from_f64_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                amount_from_f64("sale price", value),
                Err(InvalidInput::NonFinite { field: "sale price" })
            );
        }
    }

    #[test]
    fn amount_from_f64_converts_finite_values() {
        assert_eq!(amount_from_f64("amount", 1500.5).unwrap(), dec!(1500.5));
    }
}

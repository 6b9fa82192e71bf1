//! Exact decimal parsing for fixed-width amount fields.
//!
//! All monetary values use `rust_decimal` so that the declared-total
//! cross-checks compare exactly; floating point would make equal sums
//! compare unequal.

use crate::error::{ProcessError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a blank-padded amount using a comma as the decimal separator,
/// e.g. `"  0000000010,00"` becomes `10.00`.
///
/// `offset` is the field's start column, reported if the parse fails. The
/// syntax pass guarantees the field matches `\s*\d+(,\d+)?`, so a failure here
/// indicates a value outside the representable decimal range.
pub(crate) fn parse_comma_decimal(field: &str, offset: usize) -> Result<Decimal> {
    Decimal::from_str(&field.trim().replace(',', ".")).map_err(|_| ProcessError::Semantic {
        offset,
        message: format!("amount could not be parsed: {}", field.trim()),
    })
}

/// Parses a digits-only amount expressed in minor units (hundredths),
/// e.g. `"00000000000000001000"` becomes `10.00`.
pub(crate) fn parse_minor_units(field: &str, offset: usize) -> Result<Decimal> {
    let semantic = |_| ProcessError::Semantic {
        offset,
        message: format!("amount could not be parsed: {}", field.trim()),
    };

    let mut amount = Decimal::from_str(field.trim()).map_err(semantic)?;
    amount.set_scale(2).map_err(semantic)?;
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(parse_comma_decimal("0000000030,00", 16).unwrap(), dec("30.00"));
        assert_eq!(parse_comma_decimal("  1200", 16).unwrap(), dec("1200"));
        assert_eq!(parse_comma_decimal(" 0000000010,5", 1).unwrap(), dec("10.5"));
    }

    #[test]
    fn test_comma_decimal_compares_exactly_across_scales() {
        // 30 == 30,00: declared totals may carry fewer decimals than the sum
        assert_eq!(parse_comma_decimal("30", 16).unwrap(), dec("30.00"));
    }

    #[test]
    fn test_minor_units_scaled_by_hundred() {
        assert_eq!(parse_minor_units("00000000000000001000", 2).unwrap(), dec("10.00"));
        assert_eq!(parse_minor_units("00000000000000000001", 2).unwrap(), dec("0.01"));
        assert_eq!(parse_minor_units("0", 2).unwrap(), dec("0.00"));
    }

    #[test]
    fn test_minor_units_full_field_width() {
        // 20 digits, the widest the closing post allows
        let amount = parse_minor_units("99999999999999999999", 2).unwrap();
        assert_eq!(amount, dec("999999999999999999.99"));
    }

    #[test]
    fn test_parse_failure_reports_field_offset() {
        let err = parse_comma_decimal("", 16).expect_err("empty field");
        match err {
            ProcessError::Semantic { offset, .. } => assert_eq!(offset, 16),
            other => panic!("expected semantic error, got {other:?}"),
        }
    }
}

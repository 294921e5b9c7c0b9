//! Non-negative monetary amount backed by `rust_decimal`.
//!
//! Arithmetic stays in base-10 fixed point so tax results never pick up
//! binary floating-point drift.

use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A monetary amount that is never negative.
///
/// The scale of a product is the sum of its factors' scales, so
/// `2507 * 0.30` displays as `752.10` and `0.00 * 0.23` as `0.0000`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_mediator::Amount;
///
/// let amount = Amount::from_str(" 10.5 ").unwrap();
/// assert_eq!(amount.to_string(), "10.5");
/// assert!(Amount::from_str("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Wraps a decimal, rejecting negative values.
    pub fn new(mut value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(BankError::NegativeAmount(value));
        }
        value.set_sign_positive(true);
        Ok(Amount(value))
    }

    /// Creates an amount from a whole number of currency units.
    pub fn from_units(units: u64) -> Self {
        Amount(Decimal::from(units))
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the underlying decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Multiplies by a non-negative rate. The product of two non-negative
    /// decimals is non-negative, so the invariant holds without a check.
    pub(crate) fn scaled_by(self, rate: Decimal) -> Self {
        debug_assert!(!rate.is_sign_negative());
        let mut product = self.0 * rate;
        // rust_decimal returns a bare zero for zero products
        if product.is_zero() {
            product.rescale(self.0.scale() + rate.scale());
        }
        Amount(product)
    }
}

impl FromStr for Amount {
    type Err = BankError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed).map_err(|source| BankError::InvalidAmount {
            input: trimmed.to_string(),
            source,
        })?;
        Amount::new(decimal)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_trims_and_keeps_scale() {
        let a = Amount::from_str("  2507  ").unwrap();
        assert_eq!(a.to_string(), "2507");

        let a = Amount::from_str("12.50").unwrap();
        assert_eq!(a.to_string(), "12.50");
    }

    #[test]
    fn test_rejects_negative() {
        let err = Amount::from_str("-0.01").unwrap_err();
        assert!(matches!(err, BankError::NegativeAmount(_)));

        let err = Amount::new(Decimal::new(-5, 0)).unwrap_err();
        assert!(matches!(err, BankError::NegativeAmount(_)));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let a = Amount::from_str("-0").unwrap();
        assert!(a.is_zero());

        let a = Amount::from_str("-0.00").unwrap();
        assert_eq!(a.to_string(), "0.00");
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = Amount::from_str("abc").unwrap_err();
        match err {
            BankError::InvalidAmount { input, .. } => assert_eq!(input, "abc"),
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_constant() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::from_units(0), Amount::ZERO);
    }

    #[test]
    fn test_scaled_by_is_exact() {
        let a = Amount::from_units(2507);
        assert_eq!(a.scaled_by(Decimal::new(30, 2)).to_string(), "752.10");

        let zero = Amount::from_str("0.0").unwrap();
        assert_eq!(zero.scaled_by(Decimal::new(19, 2)).to_string(), "0.000");
    }
}

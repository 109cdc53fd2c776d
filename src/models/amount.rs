//! Amount type for representing currency quantities
//!
//! Amounts are plain floating-point values. Nothing here rounds; two decimal
//! places are only applied when formatting for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Amount;
    /// let amount = Amount::new(10.5);
    /// assert_eq!(amount.value(), 10.5);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is finite and strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Check if the amount may be used as a budget limit (finite, >= 0)
    pub fn is_valid_limit(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // The sign is only accepted once, in front of the currency symbol.
        if rest.starts_with(&['-', '+'][..]) {
            return Err(AmountParseError::InvalidFormat(trimmed.to_string()));
        }

        let value: f64 = rest
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(trimmed.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            Self::NotFinite(s) => write!(f, "Amount must be a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Amount::new(10.5)), "$10.50");
        assert_eq!(format!("{}", Amount::zero()), "$0.00");
        assert_eq!(format!("{}", Amount::new(-10.5)), "-$10.50");
        assert_eq!(Amount::new(3.0).format_with_symbol("€"), "€3.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("$10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("-10.50").unwrap().value(), -10.5);
        assert_eq!(Amount::parse(" 10 ").unwrap().value(), 10.0);
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("").is_err());
        assert!(matches!(
            Amount::parse("inf"),
            Err(AmountParseError::NotFinite(_))
        ));
        assert!(Amount::parse("NaN").is_err());
    }

    #[test]
    fn test_parse_rejects_repeated_sign() {
        for input in ["--5", "-$-5", "$-$5", "$-5", "+5", "-+5"] {
            assert!(
                matches!(Amount::parse(input), Err(AmountParseError::InvalidFormat(_))),
                "{} should not parse",
                input
            );
        }
        assert_eq!(Amount::parse("-$5").unwrap().value(), -5.0);
    }

    #[test]
    fn test_is_checks() {
        assert!(Amount::new(0.01).is_positive());
        assert!(!Amount::zero().is_positive());
        assert!(!Amount::new(f64::INFINITY).is_positive());
        assert!(!Amount::new(f64::NAN).is_positive());
        assert!(Amount::zero().is_valid_limit());
        assert!(!Amount::new(-1.0).is_valid_limit());
    }

    #[test]
    fn test_arithmetic_does_not_round() {
        let mut total = Amount::zero();
        total += Amount::new(0.1);
        total += Amount::new(0.2);
        assert_eq!(total.value(), 0.1 + 0.2);
        assert_eq!((Amount::new(5.0) - Amount::new(7.5)).value(), -2.5);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [1.0, 2.0, 3.5].into_iter().map(Amount::new).sum();
        assert_eq!(total.value(), 6.5);
    }
}

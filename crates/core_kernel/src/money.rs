//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors,
//! plus the grouped number formatting used by every report page.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    BDT,
    USD,
    EUR,
    GBP,
    INR,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BDT => "৳",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::INR => "₹",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BDT => "BDT",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BDT" => Ok(Currency::BDT),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "INR" => Ok(Currency::INR),
            other => Err(MoneyError::UnknownCurrency(other.to_string())),
        }
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places internally; display and
/// formatting round to the currency's two places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    ///
    /// The amount is rounded to 4 places, so anything smaller than 0.0001
    /// becomes zero. Keep the raw `Decimal` where that matters.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Formats the amount with the currency symbol and digit grouping
    pub fn formatted(&self, grouping: NumberGrouping) -> String {
        format!("{} {}", self.currency.symbol(), format_grouped(self.amount, grouping))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

/// Represents a percentage rate (e.g., a discount or tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to an amount
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount * self.value
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}

/// Digit grouping convention for formatted amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberGrouping {
    /// Groups of three (1,234,567.00)
    #[default]
    Standard,
    /// Lakh/crore grouping (12,34,567.00)
    Indian,
}

impl FromStr for NumberGrouping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "en-us" => Ok(NumberGrouping::Standard),
            "indian" | "en-in" | "bn-bd" => Ok(NumberGrouping::Indian),
            other => Err(format!("unknown number grouping: {}", other)),
        }
    }
}

/// Formats an amount with two fractional digits and digit grouping
///
/// Midpoints round away from zero. Negative values carry a leading `-`.
pub fn format_grouped(amount: Decimal, grouping: NumberGrouping) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let grouped = group_digits(integer, grouping);
    if negative {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

fn group_digits(digits: &str, grouping: NumberGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let width = match grouping {
        NumberGrouping::Standard => 3,
        NumberGrouping::Indian => 2,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Parses user-entered numeric input, defaulting to zero
///
/// Grouping commas and surrounding whitespace are ignored. Anything that
/// still fails to parse yields zero rather than an error.
pub fn parse_amount(input: &str) -> Decimal {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50), Currency::BDT);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::BDT);
    }

    #[test]
    fn test_currency_mismatch() {
        let bdt = Money::new(dec!(100.00), Currency::BDT);
        let usd = Money::new(dec!(100.00), Currency::USD);

        let result = bdt.checked_add(&usd);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_format_standard_grouping() {
        assert_eq!(format_grouped(dec!(1234567.891), NumberGrouping::Standard), "1,234,567.89");
        assert_eq!(format_grouped(dec!(999), NumberGrouping::Standard), "999.00");
        assert_eq!(format_grouped(dec!(0), NumberGrouping::Standard), "0.00");
    }

    #[test]
    fn test_format_indian_grouping() {
        assert_eq!(format_grouped(dec!(12345678), NumberGrouping::Indian), "1,23,45,678.00");
        assert_eq!(format_grouped(dec!(1000), NumberGrouping::Indian), "1,000.00");
    }

    #[test]
    fn test_format_negative_and_midpoint() {
        assert_eq!(format_grouped(dec!(-2500.005), NumberGrouping::Standard), "-2,500.01");
        assert_eq!(format_grouped(dec!(-0.001), NumberGrouping::Standard), "0.00");
    }

    #[test]
    fn test_parse_amount_defaults_to_zero() {
        assert_eq!(parse_amount("1,250.75"), dec!(1250.75));
        assert_eq!(parse_amount("  42 "), dec!(42));
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(15));
        assert_eq!(rate.of(dec!(200)), dec!(30));
        assert_eq!(rate.to_string(), "15%");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grouped_output_parses_back(minor in -1_000_000_000_000i64..1_000_000_000_000i64) {
            let amount = Decimal::new(minor, 2);
            for grouping in [NumberGrouping::Standard, NumberGrouping::Indian] {
                let text = format_grouped(amount, grouping);
                prop_assert_eq!(parse_amount(&text), amount);
            }
        }
    }
}

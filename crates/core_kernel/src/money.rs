//! Money and rate types with precise decimal arithmetic
//!
//! Amounts are carried at full `rust_decimal` precision. Nothing is rounded
//! internally so chained calculations (price -> grams -> loan value) do not
//! compound rounding error; round with [`Money::round_to_currency`] only when
//! presenting a value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InvalidInputError;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    INR,
    USD,
    AED,
    SGD,
    GBP,
    EUR,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::AED => "AED",
            Currency::SGD => "S$",
            Currency::GBP => "£",
            Currency::EUR => "€",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::AED => "AED",
            Currency::SGD => "SGD",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value at full precision
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates an Indian rupee amount
    pub fn inr(amount: Decimal) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
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
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Rounds to the currency's standard decimal places (display only)
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp(self.currency.decimal_places()),
            currency: self.currency,
        }
    }

    /// Fails with `NegativeAmount` if the amount is below zero
    pub fn ensure_non_negative(self, field: &'static str) -> Result<Self, InvalidInputError> {
        if self.is_negative() {
            return Err(InvalidInputError::negative_amount(field, self.amount));
        }
        Ok(self)
    }

    /// Fails with `NonPositiveAmount` unless the amount is above zero
    pub fn ensure_positive(self, field: &'static str) -> Result<Self, InvalidInputError> {
        if !self.is_positive() {
            return Err(InvalidInputError::non_positive_amount(field, self.amount));
        }
        Ok(self)
    }

    /// Fails with `CurrencyMismatch` unless both amounts share a currency
    pub fn ensure_same_currency(&self, other: &Money) -> Result<(), InvalidInputError> {
        if self.currency != other.currency {
            return Err(InvalidInputError::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            });
        }
        Ok(())
    }

    /// Checked addition that fails on currency mismatch or overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, InvalidInputError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(InvalidInputError::overflow("money addition"))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Checked subtraction that fails on currency mismatch or overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, InvalidInputError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(InvalidInputError::overflow("money subtraction"))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Result<Money, InvalidInputError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(InvalidInputError::overflow("money multiplication"))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Money, InvalidInputError> {
        if divisor.is_zero() {
            return Err(InvalidInputError::ZeroDenominator { field: "divisor" });
        }
        let amount = self
            .amount
            .checked_div(divisor)
            .ok_or(InvalidInputError::overflow("money division"))?;
        Ok(Self::new(amount, self.currency))
    }

    /// Returns the larger of this amount and zero
    pub fn clamp_to_zero(&self) -> Self {
        Self {
            amount: self.amount.max(Decimal::ZERO),
            currency: self.currency,
        }
    }

    /// Sums amounts that must all be in `currency`
    pub fn sum<'a>(
        amounts: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, InvalidInputError> {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount.round_dp(dp),
            dp = dp as usize
        )
    }
}

/// A percentage rate (interest, return, tax, LTV)
///
/// Rates are annual unless derived with [`Rate::monthly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.095 for 9.5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 9.5 for 9.5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// A zero rate
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
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

    /// Derives the monthly rate, `annual / 12`
    pub fn monthly(&self) -> Rate {
        Self {
            value: self.value / dec!(12),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value < Decimal::ZERO
    }

    /// Fails with `NegativeRate` if the rate is below zero
    pub fn ensure_non_negative(self, field: &'static str) -> Result<Self, InvalidInputError> {
        if self.is_negative() {
            return Err(InvalidInputError::negative_rate(field, self.as_percentage()));
        }
        Ok(self)
    }

    /// Fails with `RateOutOfRange` unless the percentage lies in `[min, max]`
    pub fn ensure_within(
        self,
        field: &'static str,
        min: Decimal,
        max: Decimal,
    ) -> Result<Self, InvalidInputError> {
        let pct = self.as_percentage();
        if pct < min || pct > max {
            return Err(InvalidInputError::RateOutOfRange {
                field,
                value: pct,
                min,
                max,
            });
        }
        Ok(self)
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Result<Money, InvalidInputError> {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}
